//! HTTP Request Handlers
//!
//! One module per collection, each exposing its own router.

pub mod countries;
pub mod entries;
pub mod envelope;
pub mod events;
pub mod extract;
pub mod health;
pub mod participants;
pub mod performances;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/participants", participants::routes())
        .nest("/countries", countries::routes())
        .nest("/entries", entries::routes())
        .nest("/events", events::routes())
        .nest("/performances", performances::routes())
}
