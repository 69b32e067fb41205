//! Event request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::messages,
    error::{AppError, AppResult},
    models::{normalize_country_id, EventFields, EventType},
    utils::{
        blank_int_to_none, blank_to_none, parse_date, parse_time, FlexibleInt,
        validation::{
            validate_contest_year, validate_date, validate_event_type, validate_time,
            validate_web_url,
        },
    },
};

/// Create or overwrite an event
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EventRequest {
    #[validate(required(message = "This field is required."))]
    pub event: Option<String>,

    /// `contest`, `semi-final` or `final`
    #[serde(rename = "type")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_event_type")
    )]
    pub event_type: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_contest_year")
    )]
    pub year: Option<FlexibleInt>,

    /// `YYYY-MM-DD`
    #[validate(custom(function = "validate_date"))]
    pub date: Option<String>,

    /// `HH:MM`
    #[validate(custom(function = "validate_time"))]
    pub start_time: Option<String>,

    #[validate(custom(function = "validate_time"))]
    pub end_time: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub eurovision_resource_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub recap_video_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub video_playlist_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub spotify_playlist_url: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub host_city: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub host_country_id: Option<String>,
}

impl EventRequest {
    pub fn normalized(self) -> Self {
        Self {
            event: blank_to_none(self.event),
            event_type: blank_to_none(self.event_type),
            year: blank_int_to_none(self.year),
            date: blank_to_none(self.date),
            start_time: blank_to_none(self.start_time),
            end_time: blank_to_none(self.end_time),
            eurovision_resource_url: blank_to_none(self.eurovision_resource_url),
            recap_video_url: blank_to_none(self.recap_video_url),
            video_playlist_url: blank_to_none(self.video_playlist_url),
            spotify_playlist_url: blank_to_none(self.spotify_playlist_url),
            host_city: blank_to_none(self.host_city),
            host_country_id: blank_to_none(self.host_country_id)
                .map(|id| normalize_country_id(&id)),
        }
    }

    /// Typed columns; call after `validate()` has passed
    pub fn into_fields(self) -> AppResult<EventFields> {
        let event_type = self
            .event_type
            .as_deref()
            .and_then(EventType::from_str)
            .ok_or_else(|| AppError::field("type", messages::INVALID_CHOICE))?;

        Ok(EventFields {
            event: self.event.unwrap_or_default(),
            event_type,
            year: self.year.as_ref().and_then(FlexibleInt::as_i32).unwrap_or_default(),
            date: self.date.as_deref().and_then(parse_date),
            start_time: self.start_time.as_deref().and_then(parse_time),
            end_time: self.end_time.as_deref().and_then(parse_time),
            eurovision_resource_url: self.eurovision_resource_url,
            recap_video_url: self.recap_video_url,
            video_playlist_url: self.video_playlist_url,
            spotify_playlist_url: self.spotify_playlist_url,
            host_city: self.host_city.unwrap_or_default(),
            host_country_id: self.host_country_id.unwrap_or_default(),
        })
    }
}
