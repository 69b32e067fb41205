//! Participant service

use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    constants::GENERATED_ID_LENGTH,
    db::repositories::ParticipantRepository,
    error::{AppError, AppResult},
    handlers::participants::response::ParticipantResponse,
    models::{Participant, ParticipantFields},
    utils::allocate_unique_id,
};

use super::{not_found, render_listing, Deletion, Mutation};

const RESOURCE: &str = "participant";

/// Participant service for business logic
pub struct ParticipantService;

impl ParticipantService {
    /// Create a participant unless the name is already taken
    pub async fn create(
        pool: &PgPool,
        fields: ParticipantFields,
    ) -> AppResult<Mutation<ParticipantResponse>> {
        if let Some(existing) = ParticipantRepository::find_by_name(pool, &fields.name).await? {
            debug!(participant_id = %existing.id, "Participant name already registered");
            return Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?));
        }

        let id = allocate_unique_id(GENERATED_ID_LENGTH, |candidate| async move {
            ParticipantRepository::exists(pool, &candidate).await
        })
        .await?;

        match ParticipantRepository::create(pool, &id, &fields).await {
            Ok(participant) => {
                info!(participant_id = %participant.id, name = %participant.name, "Participant created");
                Ok(Mutation::Applied(Self::to_response(pool, participant).await?))
            }
            Err(AppError::AlreadyExists(constraint)) => {
                Self::resolve_conflict(pool, &fields.name, None, constraint).await
            }
            Err(e) => Err(e),
        }
    }

    /// Get participant by ID
    pub async fn get(pool: &PgPool, id: &str) -> AppResult<ParticipantResponse> {
        let participant = ParticipantRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Self::to_response(pool, participant).await
    }

    /// List all participants ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<ParticipantResponse>> {
        let participants = ParticipantRepository::list(pool).await?;

        render_listing(participants, |p| Self::to_response(pool, p)).await
    }

    /// Overwrite a participant unless another one already has the new name
    pub async fn update(
        pool: &PgPool,
        id: &str,
        fields: ParticipantFields,
    ) -> AppResult<Mutation<ParticipantResponse>> {
        ParticipantRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        if let Some(existing) = ParticipantRepository::find_by_name(pool, &fields.name)
            .await?
            .filter(|p| p.id != id)
        {
            debug!(participant_id = %id, existing_id = %existing.id, "Participant rename collides");
            return Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?));
        }

        match ParticipantRepository::update(pool, id, &fields).await {
            Ok(participant) => {
                info!(participant_id = %participant.id, "Participant updated");
                Ok(Mutation::Applied(Self::to_response(pool, participant).await?))
            }
            Err(AppError::AlreadyExists(constraint)) => {
                Self::resolve_conflict(pool, &fields.name, Some(id), constraint).await
            }
            Err(e) => Err(e),
        }
    }

    /// Delete a participant and, by cascade, its entries and their performances
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<Deletion> {
        ParticipantRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))?;

        Deletion::from_result(RESOURCE, id, ParticipantRepository::delete(pool, id).await)
    }

    /// The store rejected a write on the name constraint; answer with the winner
    async fn resolve_conflict(
        pool: &PgPool,
        name: &str,
        own_id: Option<&str>,
        constraint: String,
    ) -> AppResult<Mutation<ParticipantResponse>> {
        match ParticipantRepository::find_by_name(pool, name).await? {
            Some(existing) if Some(existing.id.as_str()) != own_id => {
                debug!(participant_id = %existing.id, "Concurrent participant write resolved as duplicate");
                Ok(Mutation::Duplicate(Self::to_response(pool, existing).await?))
            }
            _ => Err(AppError::AlreadyExists(constraint)),
        }
    }

    async fn to_response(pool: &PgPool, participant: Participant) -> AppResult<ParticipantResponse> {
        let links = ParticipantRepository::links(pool, &participant.id).await?;

        Ok(ParticipantResponse {
            id: participant.id,
            name: participant.name,
            image_url: participant.image_url,
            description: participant.description,
            entries: links.entries,
            countries_represented: links.countries_represented,
            performances: links.performances,
            events: links.events,
        })
    }
}
