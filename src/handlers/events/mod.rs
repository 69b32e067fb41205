//! Event handlers

mod handler;
pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Event routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_events).post(handler::create_event))
        .route(
            "/{id}",
            get(handler::get_event)
                .patch(handler::update_event)
                .put(handler::update_event)
                .delete(handler::delete_event),
        )
}
