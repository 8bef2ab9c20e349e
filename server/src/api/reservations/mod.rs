//! Reservation API module

mod handler;
pub mod validation;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::read)
                .put(handler::update)
                .delete(handler::remove),
        )
        .route("/{id}/status", put(handler::change_status))
}
