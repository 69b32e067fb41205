//! Entry request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    models::{normalize_country_id, EntryFields},
    utils::{
        blank_int_to_none, blank_to_none,
        validation::{validate_contest_year, validate_web_url},
        FlexibleInt,
    },
};

/// Create or overwrite an entry
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EntryRequest {
    #[validate(required(message = "This field is required."))]
    pub participant_id: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub country_id: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub title: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_contest_year")
    )]
    pub year: Option<FlexibleInt>,

    #[validate(custom(function = "validate_web_url"))]
    pub eurovision_resource_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub eurovision_video_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub music_video_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub spotify_url: Option<String>,

    pub written_by: Option<String>,
    pub composed_by: Option<String>,
    pub broadcaster: Option<String>,
    pub lyrics: Option<String>,
    pub lyrics_language: Option<String>,
    pub lyrics_english: Option<String>,
}

impl EntryRequest {
    pub fn normalized(self) -> Self {
        Self {
            participant_id: blank_to_none(self.participant_id),
            country_id: blank_to_none(self.country_id).map(|id| normalize_country_id(&id)),
            title: blank_to_none(self.title),
            year: blank_int_to_none(self.year),
            eurovision_resource_url: blank_to_none(self.eurovision_resource_url),
            eurovision_video_url: blank_to_none(self.eurovision_video_url),
            music_video_url: blank_to_none(self.music_video_url),
            spotify_url: blank_to_none(self.spotify_url),
            written_by: blank_to_none(self.written_by),
            composed_by: blank_to_none(self.composed_by),
            broadcaster: blank_to_none(self.broadcaster),
            // Lyrics keep their line breaks; only all-blank input is dropped
            lyrics: self.lyrics.filter(|s| !s.trim().is_empty()),
            lyrics_language: blank_to_none(self.lyrics_language),
            lyrics_english: self.lyrics_english.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Call after `validate()` has passed
    pub fn into_fields(self) -> EntryFields {
        EntryFields {
            participant_id: self.participant_id.unwrap_or_default(),
            country_id: self.country_id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            year: self.year.as_ref().and_then(FlexibleInt::as_i32).unwrap_or_default(),
            eurovision_resource_url: self.eurovision_resource_url,
            eurovision_video_url: self.eurovision_video_url,
            music_video_url: self.music_video_url,
            spotify_url: self.spotify_url,
            written_by: self.written_by,
            composed_by: self.composed_by,
            broadcaster: self.broadcaster,
            lyrics: self.lyrics,
            lyrics_language: self.lyrics_language,
            lyrics_english: self.lyrics_english,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> EntryRequest {
        EntryRequest {
            participant_id: Some("abba000001".to_string()),
            country_id: Some("swe".to_string()),
            title: Some("Waterloo".to_string()),
            year: Some(1974.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_entry() {
        let request = valid().normalized();
        assert!(request.validate().is_ok());

        let fields = request.into_fields();
        assert_eq!(fields.country_id, "SWE");
        assert_eq!(fields.year, 1974);
    }

    #[test]
    fn test_year_floor() {
        let request = EntryRequest {
            year: Some(1955.into()),
            ..valid()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["year"][0].message.as_deref(),
            Some("Must be at least 1956.")
        );
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = EntryRequest::default().validate().unwrap_err();
        let fields = errors.field_errors();

        for field in ["participant_id", "country_id", "title", "year"] {
            assert!(fields.contains_key(field), "{field} should be required");
        }
    }

    #[test]
    fn test_year_text() {
        let numeric = EntryRequest {
            year: Some(FlexibleInt::Text("1974".to_string())),
            ..valid()
        };
        assert_eq!(numeric.normalized().into_fields().year, 1974);

        let blank = EntryRequest {
            year: Some(FlexibleInt::Text("  ".to_string())),
            ..valid()
        };
        let errors = blank.normalized().validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["year"][0].message.as_deref(),
            Some("This field is required.")
        );
    }

    #[test]
    fn test_rejects_non_http_links() {
        let request = EntryRequest {
            spotify_url: Some("spotify:track:1".to_string()),
            ..valid()
        };

        let errors = request.normalized().validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["spotify_url"][0].message.as_deref(),
            Some("Must be a valid URL.")
        );
    }
}
