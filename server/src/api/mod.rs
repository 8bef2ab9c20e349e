//! API route modules
//!
//! - [`reservations`] - reservation CRUD and status changes
//! - [`tables`] - dining tables, seating, finishing
//! - [`health`] - liveness check

pub mod health;
pub mod reservations;
pub mod tables;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(reservations::router())
        .merge(tables::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
///
/// Used by the HTTP server and by router-level tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - the dashboard is served from a different origin
        .layer(CorsLayer::permissive())
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
