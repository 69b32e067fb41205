//! Participant handler implementations

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{
        envelope::{Found, Listing, Outcome, Removal},
        extract::decode_body,
    },
    middleware::auth::{authorize_participant_create, authorize_participant_mutation, body_key},
    services::ParticipantService,
    state::AppState,
};

use super::{request::ParticipantRequest, response::ParticipantResponse};

fn already_exists(p: &ParticipantResponse) -> String {
    format!("{} already exists in the database with ID {}.", p.name, p.id)
}

/// List all participants
pub async fn list_participants(
    State(state): State<AppState>,
) -> AppResult<Listing<ParticipantResponse>> {
    let participants = ParticipantService::list(state.db()).await?;
    Ok(Listing(participants))
}

/// Create a participant
///
/// The key may travel in the body, so the body is read raw and only
/// decoded once the caller is authorized.
pub async fn create_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Outcome<ParticipantResponse>> {
    authorize_participant_create(&state.config().auth, &headers, body_key(&body).as_deref())?;

    let payload = decode_body::<ParticipantRequest>(&body)?.normalized();
    payload.validate()?;

    let mutation = ParticipantService::create(state.db(), payload.into_fields()).await?;

    Ok(Outcome::created(
        mutation,
        |p| format!("{} added to participants.", p.name),
        already_exists,
    ))
}

/// Get a specific participant
pub async fn get_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Found<ParticipantResponse>> {
    let participant = ParticipantService::get(state.db(), &id).await?;
    Ok(Found(participant))
}

/// Overwrite a participant (PATCH and PUT alike)
pub async fn update_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Outcome<ParticipantResponse>> {
    authorize_participant_mutation(&state.config().auth, &headers, body_key(&body).as_deref())?;

    let payload = decode_body::<ParticipantRequest>(&body)?.normalized();
    payload.validate()?;

    let mutation = ParticipantService::update(state.db(), &id, payload.into_fields()).await?;

    Ok(Outcome::updated(
        mutation,
        |p| format!("{} updated.", p.name),
        already_exists,
    ))
}

/// Delete a participant
///
/// The body is optional and only consulted for `api_key`.
pub async fn delete_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Removal> {
    let key = body_key(&body);
    authorize_participant_mutation(&state.config().auth, &headers, key.as_deref())?;

    let deletion = ParticipantService::delete(state.db(), &id).await?;

    Ok(Removal::new(deletion, "Participant", &id))
}
