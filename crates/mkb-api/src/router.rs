//! Route definitions for the MKB Pilot HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with all routes, without outer layers.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(access_routes()).merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Access endpoints: resolve, list, check
fn access_routes() -> Router<AppState> {
    Router::new()
        .route("/access", get(handlers::access::get_access))
        .route("/access/poles", get(handlers::access::list_poles))
        .route("/access/check", get(handlers::access::check))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
