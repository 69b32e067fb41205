//! Performance service

use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    constants::GENERATED_ID_LENGTH,
    db::repositories::{EntryRepository, EventRepository, PerformanceRepository},
    error::{AppError, AppResult},
    handlers::performances::response::PerformanceResponse,
    models::{Performance, PerformanceFields},
    utils::allocate_unique_id,
};

use super::{not_found, render_listing, Deletion, Mutation, ReferenceCheck};

const RESOURCE: &str = "performance";

/// Performance service for business logic
pub struct PerformanceService;

impl PerformanceService {
    /// Record an entry's performance at an event unless it is already recorded
    pub async fn create(
        pool: &PgPool,
        fields: PerformanceFields,
    ) -> AppResult<Mutation<PerformanceResponse>> {
        Self::check_references(pool, &fields).await?;

        if let Some(existing) =
            PerformanceRepository::find_by_event_and_entry(pool, &fields.event_id, &fields.entry_id)
                .await?
        {
            debug!(performance_id = %existing.id, "Performance already registered");
            return Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?));
        }

        let id = allocate_unique_id(GENERATED_ID_LENGTH, |candidate| async move {
            PerformanceRepository::exists(pool, &candidate).await
        })
        .await?;

        match PerformanceRepository::create(pool, &id, &fields).await {
            Ok(performance) => {
                info!(
                    performance_id = %performance.id,
                    event_id = %performance.event_id,
                    entry_id = %performance.entry_id,
                    "Performance created"
                );
                Ok(Mutation::Applied(Self::to_response(pool, performance).await?))
            }
            Err(AppError::AlreadyExists(constraint)) => {
                Self::resolve_conflict(pool, &fields, None, constraint).await
            }
            Err(e) => Err(e),
        }
    }

    /// Get performance by ID
    pub async fn get(pool: &PgPool, id: &str) -> AppResult<PerformanceResponse> {
        let performance = PerformanceRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Self::to_response(pool, performance).await
    }

    /// List all performances
    pub async fn list(pool: &PgPool) -> AppResult<Vec<PerformanceResponse>> {
        let performances = PerformanceRepository::list(pool).await?;

        render_listing(performances, |p| Self::to_response(pool, p)).await
    }

    /// Overwrite a performance unless another one links the same event and entry
    pub async fn update(
        pool: &PgPool,
        id: &str,
        fields: PerformanceFields,
    ) -> AppResult<Mutation<PerformanceResponse>> {
        PerformanceRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Self::check_references(pool, &fields).await?;

        if let Some(existing) =
            PerformanceRepository::find_by_event_and_entry(pool, &fields.event_id, &fields.entry_id)
                .await?
                .filter(|p| p.id != id)
        {
            debug!(performance_id = %id, existing_id = %existing.id, "Performance update collides");
            return Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?));
        }

        match PerformanceRepository::update(pool, id, &fields).await {
            Ok(performance) => {
                info!(performance_id = %performance.id, "Performance updated");
                Ok(Mutation::Applied(Self::to_response(pool, performance).await?))
            }
            Err(AppError::AlreadyExists(constraint)) => {
                Self::resolve_conflict(pool, &fields, Some(id), constraint).await
            }
            Err(e) => Err(e),
        }
    }

    /// Delete a performance
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<Deletion> {
        PerformanceRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Deletion::from_result(RESOURCE, id, PerformanceRepository::delete(pool, id).await)
    }

    async fn check_references(pool: &PgPool, fields: &PerformanceFields) -> AppResult<()> {
        let event_exists = EventRepository::exists(pool, &fields.event_id).await?;
        let entry_exists = EntryRepository::exists(pool, &fields.entry_id).await?;

        ReferenceCheck::new()
            .require("event_id", event_exists)
            .require("entry_id", entry_exists)
            .finish()
    }

    async fn resolve_conflict(
        pool: &PgPool,
        fields: &PerformanceFields,
        own_id: Option<&str>,
        constraint: String,
    ) -> AppResult<Mutation<PerformanceResponse>> {
        match PerformanceRepository::find_by_event_and_entry(pool, &fields.event_id, &fields.entry_id)
            .await?
        {
            Some(existing) if Some(existing.id.as_str()) != own_id => {
                debug!(performance_id = %existing.id, "Concurrent performance write resolved as duplicate");
                Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?))
            }
            _ => Err(AppError::AlreadyExists(constraint)),
        }
    }

    async fn to_response(pool: &PgPool, performance: Performance) -> AppResult<PerformanceResponse> {
        let links = PerformanceRepository::links(pool, &performance.id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, &performance.id))?;

        Ok(PerformanceResponse {
            id: performance.id,
            entry_id: performance.entry_id,
            entry: links.entry,
            event_id: performance.event_id,
            event: links.event,
            points: performance.points,
            place: performance.place,
            qualified: performance.qualified,
            running_order: performance.running_order,
            participant_id: links.participant_id,
            participant: links.participant,
            country_id: links.country_id,
            country: links.country,
        })
    }
}
