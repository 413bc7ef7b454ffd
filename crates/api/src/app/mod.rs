//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared state (catalog, cart, checkout services)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, extract::DefaultBodyLimit, routing::get};

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(AppServices::from_config(config));
    build_app_with_services(services, config.max_upload_bytes)
}

/// Build the router around already-constructed services (tests inject
/// in-memory catalogs this way).
pub fn build_app_with_services(services: Arc<AppServices>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router(DefaultBodyLimit::max(max_upload_bytes)))
        .layer(Extension(services))
}
