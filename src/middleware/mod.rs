//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::ApiKey;
pub use logging::logging_middleware;
