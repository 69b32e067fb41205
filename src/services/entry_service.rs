//! Entry service

use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    constants::GENERATED_ID_LENGTH,
    db::repositories::{CountryRepository, EntryRepository, ParticipantRepository},
    error::{AppError, AppResult},
    handlers::entries::response::EntryResponse,
    models::{Entry, EntryFields},
    utils::allocate_unique_id,
};

use super::{not_found, render_listing, Deletion, Mutation, ReferenceCheck};

const RESOURCE: &str = "entry";

/// Entry service for business logic
pub struct EntryService;

impl EntryService {
    /// Create an entry unless the country already has one for that year
    pub async fn create(pool: &PgPool, fields: EntryFields) -> AppResult<Mutation<EntryResponse>> {
        Self::check_references(pool, &fields).await?;

        if let Some(existing) =
            EntryRepository::find_by_country_and_year(pool, &fields.country_id, fields.year).await?
        {
            debug!(entry_id = %existing.id, country_id = %fields.country_id, year = fields.year, "Entry already registered");
            return Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?));
        }

        let id = allocate_unique_id(GENERATED_ID_LENGTH, |candidate| async move {
            EntryRepository::exists(pool, &candidate).await
        })
        .await?;

        match EntryRepository::create(pool, &id, &fields).await {
            Ok(entry) => {
                info!(entry_id = %entry.id, title = %entry.title, year = entry.year, "Entry created");
                Ok(Mutation::Applied(Self::to_response(pool, entry).await?))
            }
            Err(AppError::AlreadyExists(constraint)) => {
                Self::resolve_conflict(pool, &fields, None, constraint).await
            }
            Err(e) => Err(e),
        }
    }

    /// Get entry by ID
    pub async fn get(pool: &PgPool, id: &str) -> AppResult<EntryResponse> {
        let entry = EntryRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Self::to_response(pool, entry).await
    }

    /// List all entries ordered by title
    pub async fn list(pool: &PgPool) -> AppResult<Vec<EntryResponse>> {
        let entries = EntryRepository::list(pool).await?;

        render_listing(entries, |e| Self::to_response(pool, e)).await
    }

    /// Overwrite an entry unless another entry owns the new (country, year)
    pub async fn update(
        pool: &PgPool,
        id: &str,
        fields: EntryFields,
    ) -> AppResult<Mutation<EntryResponse>> {
        EntryRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Self::check_references(pool, &fields).await?;

        if let Some(existing) =
            EntryRepository::find_by_country_and_year(pool, &fields.country_id, fields.year)
                .await?
                .filter(|e| e.id != id)
        {
            debug!(entry_id = %id, existing_id = %existing.id, "Entry update collides");
            return Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?));
        }

        match EntryRepository::update(pool, id, &fields).await {
            Ok(entry) => {
                info!(entry_id = %entry.id, "Entry updated");
                Ok(Mutation::Applied(Self::to_response(pool, entry).await?))
            }
            Err(AppError::AlreadyExists(constraint)) => {
                Self::resolve_conflict(pool, &fields, Some(id), constraint).await
            }
            Err(e) => Err(e),
        }
    }

    /// Delete an entry and, by cascade, its performances
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<Deletion> {
        EntryRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Deletion::from_result(RESOURCE, id, EntryRepository::delete(pool, id).await)
    }

    async fn check_references(pool: &PgPool, fields: &EntryFields) -> AppResult<()> {
        let participant_exists = ParticipantRepository::exists(pool, &fields.participant_id).await?;
        let country_exists = CountryRepository::exists(pool, &fields.country_id).await?;

        ReferenceCheck::new()
            .require("participant_id", participant_exists)
            .require("country_id", country_exists)
            .finish()
    }

    async fn resolve_conflict(
        pool: &PgPool,
        fields: &EntryFields,
        own_id: Option<&str>,
        constraint: String,
    ) -> AppResult<Mutation<EntryResponse>> {
        match EntryRepository::find_by_country_and_year(pool, &fields.country_id, fields.year).await? {
            Some(existing) if Some(existing.id.as_str()) != own_id => {
                debug!(entry_id = %existing.id, "Concurrent entry write resolved as duplicate");
                Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?))
            }
            _ => Err(AppError::AlreadyExists(constraint)),
        }
    }

    async fn to_response(pool: &PgPool, entry: Entry) -> AppResult<EntryResponse> {
        let links = EntryRepository::links(pool, &entry.id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, &entry.id))?;

        Ok(EntryResponse {
            id: entry.id,
            participant_id: entry.participant_id,
            participant: links.participant,
            country_id: entry.country_id,
            country: links.country,
            title: entry.title,
            year: entry.year,
            eurovision_resource_url: entry.eurovision_resource_url,
            eurovision_video_url: entry.eurovision_video_url,
            music_video_url: entry.music_video_url,
            spotify_url: entry.spotify_url,
            written_by: entry.written_by,
            composed_by: entry.composed_by,
            broadcaster: entry.broadcaster,
            lyrics: entry.lyrics,
            lyrics_language: entry.lyrics_language,
            lyrics_english: entry.lyrics_english,
            performances: links.performances,
            events: links.events,
        })
    }
}
