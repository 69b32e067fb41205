//! Event model

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;

use crate::constants::event_types;

/// Event database model: a single show (heat, semi-final or final)
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub event: String,
    #[sqlx(rename = "type")]
    pub event_type: String,
    pub year: i32,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub eurovision_resource_url: Option<String>,
    pub recap_video_url: Option<String>,
    pub video_playlist_url: Option<String>,
    pub spotify_playlist_url: Option<String>,
    pub host_city: String,
    pub host_country_id: String,
}

/// Mutable event columns
#[derive(Debug, Clone)]
pub struct EventFields {
    pub event: String,
    pub event_type: EventType,
    pub year: i32,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub eurovision_resource_url: Option<String>,
    pub recap_video_url: Option<String>,
    pub video_playlist_url: Option<String>,
    pub spotify_playlist_url: Option<String>,
    pub host_city: String,
    pub host_country_id: String,
}

/// Kind of show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Contest,
    SemiFinal,
    Final,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contest => event_types::CONTEST,
            Self::SemiFinal => event_types::SEMI_FINAL,
            Self::Final => event_types::FINAL,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            event_types::CONTEST => Some(Self::Contest),
            event_types::SEMI_FINAL => Some(Self::SemiFinal),
            event_types::FINAL => Some(Self::Final),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display names and related ids derived for an event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLinks {
    pub host_country: String,
    pub performances: Vec<String>,
    /// Entries performed at the event, ordered by country id
    pub entries: Vec<String>,
    /// Country of each entry, same order as `entries`
    pub participating_countries: Vec<String>,
}
