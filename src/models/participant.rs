//! Participant model

use serde::Serialize;
use sqlx::FromRow;

/// Participant database model
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Mutable participant columns
#[derive(Debug, Clone, Default)]
pub struct ParticipantFields {
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Related ids derived for a participant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantLinks {
    /// Entries, ordered by year
    pub entries: Vec<String>,
    /// Country of each entry, same order as `entries`
    pub countries_represented: Vec<String>,
    /// Performances of the participant's entries, ordered by entry year
    pub performances: Vec<String>,
    /// Event of each performance, same order as `performances`
    pub events: Vec<String>,
}
