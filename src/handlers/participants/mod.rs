//! Participant handlers

mod handler;
pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Participant routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_participants).post(handler::create_participant))
        .route(
            "/{id}",
            get(handler::get_participant)
                .patch(handler::update_participant)
                .put(handler::update_participant)
                .delete(handler::delete_participant),
        )
}
