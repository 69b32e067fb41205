//! Entry handler implementations

use axum::extract::{Path, State};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{
        envelope::{Found, Listing, Outcome, Removal},
        extract::JsonBody,
    },
    middleware::ApiKey,
    services::EntryService,
    state::AppState,
};

use super::{request::EntryRequest, response::EntryResponse};

fn already_exists(_: &EntryResponse) -> String {
    "An entry for this year and country already exists in the database.".to_string()
}

/// List all entries
pub async fn list_entries(State(state): State<AppState>) -> AppResult<Listing<EntryResponse>> {
    let entries = EntryService::list(state.db()).await?;
    Ok(Listing(entries))
}

/// Create an entry
pub async fn create_entry(
    State(state): State<AppState>,
    _key: ApiKey,
    JsonBody(payload): JsonBody<EntryRequest>,
) -> AppResult<Outcome<EntryResponse>> {
    let payload = payload.normalized();
    payload.validate()?;

    let mutation = EntryService::create(state.db(), payload.into_fields()).await?;

    Ok(Outcome::created(
        mutation,
        |e| format!("{} added to entries.", e.title),
        already_exists,
    ))
}

/// Get a specific entry
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Found<EntryResponse>> {
    let entry = EntryService::get(state.db(), &id).await?;
    Ok(Found(entry))
}

/// Overwrite an entry (PATCH and PUT alike)
pub async fn update_entry(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<EntryRequest>,
) -> AppResult<Outcome<EntryResponse>> {
    let payload = payload.normalized();
    payload.validate()?;

    let mutation = EntryService::update(state.db(), &id, payload.into_fields()).await?;

    Ok(Outcome::updated(
        mutation,
        |e| format!("{} updated.", e.title),
        already_exists,
    ))
}

/// Delete an entry
pub async fn delete_entry(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
) -> AppResult<Removal> {
    let deletion = EntryService::delete(state.db(), &id).await?;
    Ok(Removal::new(deletion, "Entry", &id))
}
