//! Country service

use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    db::repositories::CountryRepository,
    error::{AppError, AppResult},
    handlers::countries::response::CountryResponse,
    models::{normalize_country_id, Country, CountryFields},
};

use super::{not_found, render_listing, Deletion, Mutation};

const RESOURCE: &str = "country";

/// Country service for business logic
pub struct CountryService;

impl CountryService {
    /// Create a country unless the code is already taken
    pub async fn create(
        pool: &PgPool,
        id: &str,
        fields: CountryFields,
    ) -> AppResult<Mutation<CountryResponse>> {
        let id = normalize_country_id(id);

        if let Some(existing) = CountryRepository::find_by_id(pool, &id).await? {
            debug!(country_id = %existing.id, "Country code already registered");
            return Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?));
        }

        match CountryRepository::create(pool, &id, &fields).await {
            Ok(country) => {
                info!(country_id = %country.id, country = %country.country, "Country created");
                Ok(Mutation::Applied(Self::to_response(pool, country).await?))
            }
            Err(AppError::AlreadyExists(constraint)) => {
                match CountryRepository::find_by_id(pool, &id).await? {
                    Some(existing) => Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?)),
                    None => Err(AppError::AlreadyExists(constraint)),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Get country by code (case-insensitive)
    pub async fn get(pool: &PgPool, id: &str) -> AppResult<CountryResponse> {
        let id = normalize_country_id(id);
        let country = CountryRepository::find_by_id(pool, &id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, &id))?;

        Self::to_response(pool, country).await
    }

    /// List all countries ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<CountryResponse>> {
        let countries = CountryRepository::list(pool).await?;

        render_listing(countries, |c| Self::to_response(pool, c)).await
    }

    /// Overwrite name and flag; the code never changes so no duplicate can arise
    pub async fn update(
        pool: &PgPool,
        id: &str,
        fields: CountryFields,
    ) -> AppResult<CountryResponse> {
        let id = normalize_country_id(id);

        CountryRepository::find_by_id(pool, &id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, &id))?;

        let country = CountryRepository::update(pool, &id, &fields).await?;
        info!(country_id = %country.id, "Country updated");

        Self::to_response(pool, country).await
    }

    /// Delete a country; its entries and hosted events (and their performances) cascade
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<Deletion> {
        let id = normalize_country_id(id);

        CountryRepository::find_by_id(pool, &id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, &id))?;

        Deletion::from_result(RESOURCE, &id, CountryRepository::delete(pool, &id).await)
    }

    async fn to_response(pool: &PgPool, country: Country) -> AppResult<CountryResponse> {
        let links = CountryRepository::links(pool, &country.id).await?;

        Ok(CountryResponse {
            id: country.id,
            country: country.country,
            flag_image_url: country.flag_image_url,
            entries: links.entries,
            events: links.events,
            participants: links.participants,
            performances: links.performances,
        })
    }
}
