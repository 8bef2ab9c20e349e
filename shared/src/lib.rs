//! Shared types for the reservation system
//!
//! Domain models and wire envelopes used by both the server and the
//! typed HTTP client. Database derives are behind the `db` feature so
//! the client does not pull in sqlx.

pub mod models;
pub mod request;
pub mod response;
pub mod util;

pub use models::{
    NewReservation, NewTable, Reservation, ReservationData, ReservationStatus, SeatData,
    StatusData, Table, TableData,
};
pub use request::RequestData;
pub use response::{DataResponse, ErrorResponse};
