//! GranHotel billing and availability engine.
//!
//! Hosts the pricing and availability cores behind JSON routes and talks to
//! the hotel REST backend on behalf of the management front-end. The
//! caller's bearer credential is forwarded on every backend call.

pub mod availability;
pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use backend::BackendClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/pricing", pricing::routes::router())
        .nest("/api/availability", availability::routes::router())
        .nest("/api/reservations", availability::routes::reservations_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
