//! Event service

use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    constants::GENERATED_ID_LENGTH,
    db::repositories::{CountryRepository, EventRepository},
    error::{AppError, AppResult},
    handlers::events::response::EventResponse,
    models::{Event, EventFields},
    utils::{allocate_unique_id, format_date, format_time},
};

use super::{not_found, render_listing, Deletion, Mutation, ReferenceCheck};

const RESOURCE: &str = "event";

/// Event service for business logic
pub struct EventService;

impl EventService {
    /// Create an event unless one with the same name, type and year exists
    pub async fn create(pool: &PgPool, fields: EventFields) -> AppResult<Mutation<EventResponse>> {
        Self::check_references(pool, &fields).await?;

        if let Some(existing) = Self::find_natural(pool, &fields).await? {
            debug!(event_id = %existing.id, "Event already registered");
            return Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?));
        }

        let id = allocate_unique_id(GENERATED_ID_LENGTH, |candidate| async move {
            EventRepository::exists(pool, &candidate).await
        })
        .await?;

        match EventRepository::create(pool, &id, &fields).await {
            Ok(event) => {
                info!(event_id = %event.id, event = %event.event, year = event.year, "Event created");
                Ok(Mutation::Applied(Self::to_response(pool, event).await?))
            }
            Err(AppError::AlreadyExists(constraint)) => {
                Self::resolve_conflict(pool, &fields, None, constraint).await
            }
            Err(e) => Err(e),
        }
    }

    /// Get event by ID
    pub async fn get(pool: &PgPool, id: &str) -> AppResult<EventResponse> {
        let event = EventRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Self::to_response(pool, event).await
    }

    /// List all events, latest first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<EventResponse>> {
        let events = EventRepository::list(pool).await?;

        render_listing(events, |e| Self::to_response(pool, e)).await
    }

    /// Overwrite an event unless another event owns the new (name, type, year)
    pub async fn update(
        pool: &PgPool,
        id: &str,
        fields: EventFields,
    ) -> AppResult<Mutation<EventResponse>> {
        EventRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Self::check_references(pool, &fields).await?;

        if let Some(existing) = Self::find_natural(pool, &fields).await?.filter(|e| e.id != id) {
            debug!(event_id = %id, existing_id = %existing.id, "Event update collides");
            return Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?));
        }

        match EventRepository::update(pool, id, &fields).await {
            Ok(event) => {
                info!(event_id = %event.id, "Event updated");
                Ok(Mutation::Applied(Self::to_response(pool, event).await?))
            }
            Err(AppError::AlreadyExists(constraint)) => {
                Self::resolve_conflict(pool, &fields, Some(id), constraint).await
            }
            Err(e) => Err(e),
        }
    }

    /// Delete an event and, by cascade, its performances
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<Deletion> {
        EventRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Deletion::from_result(RESOURCE, id, EventRepository::delete(pool, id).await)
    }

    async fn find_natural(pool: &PgPool, fields: &EventFields) -> AppResult<Option<Event>> {
        EventRepository::find_by_name_type_year(
            pool,
            &fields.event,
            fields.event_type.as_str(),
            fields.year,
        )
        .await
    }

    async fn check_references(pool: &PgPool, fields: &EventFields) -> AppResult<()> {
        let host_exists = CountryRepository::exists(pool, &fields.host_country_id).await?;

        ReferenceCheck::new()
            .require("host_country_id", host_exists)
            .finish()
    }

    async fn resolve_conflict(
        pool: &PgPool,
        fields: &EventFields,
        own_id: Option<&str>,
        constraint: String,
    ) -> AppResult<Mutation<EventResponse>> {
        match Self::find_natural(pool, fields).await? {
            Some(existing) if Some(existing.id.as_str()) != own_id => {
                debug!(event_id = %existing.id, "Concurrent event write resolved as duplicate");
                Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?))
            }
            _ => Err(AppError::AlreadyExists(constraint)),
        }
    }

    async fn to_response(pool: &PgPool, event: Event) -> AppResult<EventResponse> {
        let links = EventRepository::links(pool, &event.id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, &event.id))?;

        Ok(EventResponse {
            id: event.id,
            event: event.event,
            event_type: event.event_type,
            year: event.year,
            date: format_date(event.date),
            start_time: format_time(event.start_time),
            end_time: format_time(event.end_time),
            eurovision_resource_url: event.eurovision_resource_url,
            recap_video_url: event.recap_video_url,
            video_playlist_url: event.video_playlist_url,
            spotify_playlist_url: event.spotify_playlist_url,
            host_city: event.host_city,
            host_country_id: event.host_country_id,
            host_country: links.host_country,
            performances: links.performances,
            entries: links.entries,
            participating_countries: links.participating_countries,
        })
    }
}
