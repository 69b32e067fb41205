//! Country handler implementations

use axum::extract::{Path, State};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{
        envelope::{Found, Listing, Outcome, Removal},
        extract::JsonBody,
    },
    middleware::ApiKey,
    models::normalize_country_id,
    services::{CountryService, Mutation},
    state::AppState,
};

use super::{
    request::{CreateCountryRequest, UpdateCountryRequest},
    response::CountryResponse,
};

/// List all countries
pub async fn list_countries(State(state): State<AppState>) -> AppResult<Listing<CountryResponse>> {
    let countries = CountryService::list(state.db()).await?;
    Ok(Listing(countries))
}

/// Register a country
pub async fn create_country(
    State(state): State<AppState>,
    _key: ApiKey,
    JsonBody(payload): JsonBody<CreateCountryRequest>,
) -> AppResult<Outcome<CountryResponse>> {
    let payload = payload.normalized();
    payload.validate()?;

    let (id, fields) = payload.into_parts();
    let mutation = CountryService::create(state.db(), &id, fields).await?;

    Ok(Outcome::created(
        mutation,
        |c| format!("{} added to countries.", c.country),
        |c| format!("{} already exists in the database as {}.", c.id, c.country),
    ))
}

/// Get a specific country
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Found<CountryResponse>> {
    let country = CountryService::get(state.db(), &id).await?;
    Ok(Found(country))
}

/// Overwrite a country (PATCH and PUT alike)
pub async fn update_country(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateCountryRequest>,
) -> AppResult<Outcome<CountryResponse>> {
    let payload = payload.normalized();
    payload.validate()?;

    let country = CountryService::update(state.db(), &id, payload.into_fields()).await?;

    // Country names carry no uniqueness rule, so an update never collides
    Ok(Outcome::updated(
        Mutation::Applied(country),
        |c| format!("{} updated.", c.country),
        |c| format!("{} already exists in the database as {}.", c.id, c.country),
    ))
}

/// Delete a country with its entries and hosted events
pub async fn delete_country(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
) -> AppResult<Removal> {
    let id = normalize_country_id(&id);
    let deletion = CountryService::delete(state.db(), &id).await?;

    Ok(Removal::new(deletion, "Country", &id))
}
