//! Domain models

pub mod reservation;
pub mod table;

pub use reservation::{NewReservation, Reservation, ReservationData, ReservationStatus, StatusData};
pub use table::{NewTable, SeatData, Table, TableData};
