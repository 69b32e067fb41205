//! Eurovision catalog API
//!
//! A JSON REST service over a PostgreSQL catalog of Eurovision Song Contest
//! participants, countries, entries, events and performances.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers, request validation and envelopes
//! - **Services**: duplicate policy, reference checks and response assembly
//! - **Repositories**: Database access and rollup queries
//! - **Models**: Row types and column sets

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{http::HeaderValue, middleware as axum_middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::constants::MAX_REQUEST_BODY_BYTES;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the full application router with its layers
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().server.cors_allow_origin);

    Router::new()
        .merge(handlers::routes())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origin == "*" {
        return layer.allow_origin(Any);
    }

    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(AllowOrigin::exact(value)),
        Err(_) => {
            tracing::warn!(origin, "Ignoring unparseable CORS origin, allowing any");
            layer.allow_origin(Any)
        }
    }
}
