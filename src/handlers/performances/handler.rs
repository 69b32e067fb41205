//! Performance handler implementations

use axum::extract::{Path, State};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{
        envelope::{Found, Listing, Outcome, Removal},
        extract::JsonBody,
    },
    middleware::ApiKey,
    services::PerformanceService,
    state::AppState,
};

use super::{request::PerformanceRequest, response::PerformanceResponse};

fn already_exists(_: &PerformanceResponse) -> String {
    "A performance with this entry and event already exists in the database.".to_string()
}

/// List all performances
pub async fn list_performances(
    State(state): State<AppState>,
) -> AppResult<Listing<PerformanceResponse>> {
    let performances = PerformanceService::list(state.db()).await?;
    Ok(Listing(performances))
}

/// Record a performance
pub async fn create_performance(
    State(state): State<AppState>,
    _key: ApiKey,
    JsonBody(payload): JsonBody<PerformanceRequest>,
) -> AppResult<Outcome<PerformanceResponse>> {
    let payload = payload.normalized();
    payload.validate()?;

    let mutation = PerformanceService::create(state.db(), payload.into_fields()).await?;

    Ok(Outcome::created(
        mutation,
        |_| "Performance added to database.".to_string(),
        already_exists,
    ))
}

/// Get a specific performance
pub async fn get_performance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Found<PerformanceResponse>> {
    let performance = PerformanceService::get(state.db(), &id).await?;
    Ok(Found(performance))
}

/// Overwrite a performance (PATCH and PUT alike)
pub async fn update_performance(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<PerformanceRequest>,
) -> AppResult<Outcome<PerformanceResponse>> {
    let payload = payload.normalized();
    payload.validate()?;

    let mutation = PerformanceService::update(state.db(), &id, payload.into_fields()).await?;

    Ok(Outcome::updated(
        mutation,
        |p| format!("{} updated.", p.id),
        already_exists,
    ))
}

/// Delete a performance
pub async fn delete_performance(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
) -> AppResult<Removal> {
    let deletion = PerformanceService::delete(state.db(), &id).await?;
    Ok(Removal::new(deletion, "Performance", &id))
}
