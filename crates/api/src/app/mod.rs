//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the account store shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs, boundary validation and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router with fresh in-memory state (used by `main.rs`).
pub fn build_app() -> Router {
    build_router(Arc::new(services::build_services()))
}

/// Build the router over existing services.
pub fn build_router(services: Arc<AppServices>) -> Router {
    // Account-scoped routes: the `cpf` header must resolve to an account.
    let scoped = routes::router().layer(axum::middleware::from_fn_with_state(
        Arc::clone(&services),
        middleware::resolve_account,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/account", post(routes::account::create_account))
        .merge(scoped)
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
