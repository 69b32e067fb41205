//! Entry handlers

mod handler;
pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Entry routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_entries).post(handler::create_entry))
        .route(
            "/{id}",
            get(handler::get_entry)
                .patch(handler::update_entry)
                .put(handler::update_entry)
                .delete(handler::delete_entry),
        )
}
