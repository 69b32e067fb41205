//! Performance handlers

mod handler;
pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Performance routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_performances).post(handler::create_performance))
        .route(
            "/{id}",
            get(handler::get_performance)
                .patch(handler::update_performance)
                .put(handler::update_performance)
                .delete(handler::delete_performance),
        )
}
