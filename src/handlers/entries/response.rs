//! Entry response DTOs

use serde::Serialize;

use crate::handlers::envelope::Resource;

/// Entry with participant and country names and related ids
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    pub id: String,
    pub participant_id: String,
    pub participant: String,
    pub country_id: String,
    pub country: String,
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
    pub performances: Vec<String>,
    pub events: Vec<String>,
}

impl Resource for EntryResponse {
    const SINGULAR: &'static str = "entry";
    const PLURAL: &'static str = "entries";
}
