//! Participant request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    models::ParticipantFields,
    utils::{blank_to_none, validation::validate_web_url},
};

/// Create or overwrite a participant
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ParticipantRequest {
    #[validate(required(message = "This field is required."))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub image_url: Option<String>,

    pub description: Option<String>,
}

impl ParticipantRequest {
    pub fn normalized(self) -> Self {
        Self {
            name: blank_to_none(self.name),
            image_url: blank_to_none(self.image_url),
            description: blank_to_none(self.description),
        }
    }

    /// Call after `validate()` has passed
    pub fn into_fields(self) -> ParticipantFields {
        ParticipantFields {
            name: self.name.unwrap_or_default(),
            image_url: self.image_url,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_required() {
        let request = ParticipantRequest {
            name: Some("   ".to_string()),
            ..Default::default()
        }
        .normalized();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_image_url_must_be_url() {
        let request = ParticipantRequest {
            name: Some("Loreen".to_string()),
            image_url: Some("loreen.jpg".to_string()),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["image_url"][0].message.as_deref(),
            Some("Must be a valid URL.")
        );
    }
}
