//! Dining Table API module

mod handler;
pub mod validation;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}/seat", put(handler::seat).delete(handler::finish))
}
