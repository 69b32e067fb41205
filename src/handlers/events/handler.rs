//! Event handler implementations

use axum::extract::{Path, State};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{
        envelope::{Found, Listing, Outcome, Removal},
        extract::JsonBody,
    },
    middleware::ApiKey,
    services::EventService,
    state::AppState,
};

use super::{request::EventRequest, response::EventResponse};

fn already_exists(_: &EventResponse) -> String {
    "An event with this name, type, and year already exists in the database.".to_string()
}

/// List all events, latest first
pub async fn list_events(State(state): State<AppState>) -> AppResult<Listing<EventResponse>> {
    let events = EventService::list(state.db()).await?;
    Ok(Listing(events))
}

/// Create an event
pub async fn create_event(
    State(state): State<AppState>,
    _key: ApiKey,
    JsonBody(payload): JsonBody<EventRequest>,
) -> AppResult<Outcome<EventResponse>> {
    let payload = payload.normalized();
    payload.validate()?;

    let mutation = EventService::create(state.db(), payload.into_fields()?).await?;

    Ok(Outcome::created(
        mutation,
        |e| format!("{} added to events.", e.event),
        already_exists,
    ))
}

/// Get a specific event
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Found<EventResponse>> {
    let event = EventService::get(state.db(), &id).await?;
    Ok(Found(event))
}

/// Overwrite an event (PATCH and PUT alike)
pub async fn update_event(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<EventRequest>,
) -> AppResult<Outcome<EventResponse>> {
    let payload = payload.normalized();
    payload.validate()?;

    let mutation = EventService::update(state.db(), &id, payload.into_fields()?).await?;

    Ok(Outcome::updated(
        mutation,
        |e| format!("{} updated.", e.event),
        already_exists,
    ))
}

/// Delete an event
pub async fn delete_event(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
) -> AppResult<Removal> {
    let deletion = EventService::delete(state.db(), &id).await?;
    Ok(Removal::new(deletion, "Event", &id))
}
