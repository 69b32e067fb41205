//! API key authentication
//!
//! Mutations carry the shared secret in the `API-Key` header. Participant
//! updates and deletes read it from the channel selected by
//! `PARTICIPANT_KEY_CHANNEL`, which defaults to the `api_key` body field.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::{AuthConfig, CredentialChannel},
    constants::API_KEY_HEADER,
    error::{AppError, AppResult},
    state::AppState,
};

/// Proof that the request carried a valid `API-Key` header
#[derive(Debug, Clone, Copy)]
pub struct ApiKey;

impl FromRequestParts<AppState> for ApiKey {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let supplied = header_key(&parts.headers);

        if let Err(e) = check_api_key(&state.config().auth, supplied) {
            debug!(
                method = %parts.method,
                path = %parts.uri.path(),
                key_present = supplied.is_some(),
                "Auth failed: missing or wrong API key header"
            );
            return Err(e);
        }

        Ok(ApiKey)
    }
}

fn header_key(headers: &HeaderMap) -> Option<&str> {
    headers.get(API_KEY_HEADER).and_then(|h| h.to_str().ok())
}

/// Compare a supplied key with the configured secret
///
/// With no secret configured nothing is accepted.
pub fn check_api_key(auth: &AuthConfig, supplied: Option<&str>) -> AppResult<()> {
    match (auth.api_key.as_deref(), supplied) {
        (Some(expected), Some(given)) if expected == given => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

/// Authorize a participant update or delete on the configured channel
pub fn authorize_participant_mutation(
    auth: &AuthConfig,
    headers: &HeaderMap,
    body_key: Option<&str>,
) -> AppResult<()> {
    let supplied = match auth.participant_key_channel {
        CredentialChannel::Header => header_key(headers),
        CredentialChannel::Body => body_key,
    };

    check_api_key(auth, supplied).inspect_err(|_| {
        debug!(
            channel = ?auth.participant_key_channel,
            key_present = supplied.is_some(),
            "Auth failed: participant mutation without valid API key"
        );
    })
}

/// Authorize a participant create
///
/// The header is always honoured; under the body channel the `api_key`
/// field is accepted as well.
pub fn authorize_participant_create(
    auth: &AuthConfig,
    headers: &HeaderMap,
    body_key: Option<&str>,
) -> AppResult<()> {
    check_api_key(auth, header_key(headers))
        .or_else(|_| authorize_participant_mutation(auth, headers, body_key))
}

#[derive(Debug, Default, Deserialize)]
struct KeyOnly {
    api_key: Option<String>,
}

/// Pull `api_key` out of a raw body that may be empty or not JSON at all
pub fn body_key(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<KeyOnly>(body)
        .ok()
        .and_then(|b| b.api_key)
}
