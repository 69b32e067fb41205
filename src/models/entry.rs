//! Entry model

use serde::Serialize;
use sqlx::FromRow;

/// Entry database model: one song sent by a country in a given year
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub participant_id: String,
    pub country_id: String,
    pub title: String,
    pub year: i32,
    pub eurovision_resource_url: Option<String>,
    pub eurovision_video_url: Option<String>,
    pub music_video_url: Option<String>,
    pub spotify_url: Option<String>,
    pub written_by: Option<String>,
    pub composed_by: Option<String>,
    pub broadcaster: Option<String>,
    pub lyrics: Option<String>,
    pub lyrics_language: Option<String>,
    pub lyrics_english: Option<String>,
}

/// Mutable entry columns
#[derive(Debug, Clone, Default)]
pub struct EntryFields {
    pub participant_id: String,
    pub country_id: String,
    pub title: String,
    pub year: i32,
    pub eurovision_resource_url: Option<String>,
    pub eurovision_video_url: Option<String>,
    pub music_video_url: Option<String>,
    pub spotify_url: Option<String>,
    pub written_by: Option<String>,
    pub composed_by: Option<String>,
    pub broadcaster: Option<String>,
    pub lyrics: Option<String>,
    pub lyrics_language: Option<String>,
    pub lyrics_english: Option<String>,
}

/// Display names and related ids derived for an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct EntryLinks {
    pub participant: String,
    pub country: String,
    #[sqlx(skip)]
    pub performances: Vec<String>,
    /// Events the entry appeared in, ordered by event date
    #[sqlx(skip)]
    pub events: Vec<String>,
}
