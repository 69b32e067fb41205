//! Country handlers

mod handler;
pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Country routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_countries).post(handler::create_country))
        .route(
            "/{id}",
            get(handler::get_country)
                .patch(handler::update_country)
                .put(handler::update_country)
                .delete(handler::delete_country),
        )
}
