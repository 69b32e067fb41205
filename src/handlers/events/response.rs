//! Event response DTOs

use serde::Serialize;

use crate::handlers::envelope::Resource;

/// Event with display-formatted date and times
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub event: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub year: i32,
    /// `DD-MM-YYYY`
    pub date: Option<String>,
    /// `HH:MM`
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub eurovision_resource_url: Option<String>,
    pub recap_video_url: Option<String>,
    pub video_playlist_url: Option<String>,
    pub spotify_playlist_url: Option<String>,
    pub host_city: String,
    pub host_country_id: String,
    pub host_country: String,
    pub performances: Vec<String>,
    pub entries: Vec<String>,
    pub participating_countries: Vec<String>,
}

impl Resource for EventResponse {
    const SINGULAR: &'static str = "event";
    const PLURAL: &'static str = "events";
}
