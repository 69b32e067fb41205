//! Country request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    models::{normalize_country_id, CountryFields},
    utils::{blank_to_none, validation::{validate_country_code, validate_web_url}},
};

/// Register a country under a caller-chosen code
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateCountryRequest {
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_country_code")
    )]
    pub id: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub country: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub flag_image_url: Option<String>,
}

impl CreateCountryRequest {
    pub fn normalized(self) -> Self {
        Self {
            id: blank_to_none(self.id),
            country: blank_to_none(self.country),
            flag_image_url: blank_to_none(self.flag_image_url),
        }
    }

    /// Upper-cased code plus the mutable columns; call after `validate()`
    pub fn into_parts(self) -> (String, CountryFields) {
        let id = normalize_country_id(self.id.as_deref().unwrap_or_default());
        let fields = CountryFields {
            country: self.country.unwrap_or_default(),
            flag_image_url: self.flag_image_url,
        };
        (id, fields)
    }
}

/// Overwrite a country; the code itself is immutable
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCountryRequest {
    #[validate(required(message = "This field is required."))]
    pub country: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub flag_image_url: Option<String>,
}

impl UpdateCountryRequest {
    pub fn normalized(self) -> Self {
        Self {
            country: blank_to_none(self.country),
            flag_image_url: blank_to_none(self.flag_image_url),
        }
    }

    pub fn into_fields(self) -> CountryFields {
        CountryFields {
            country: self.country.unwrap_or_default(),
            flag_image_url: self.flag_image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_length() {
        let request = CreateCountryRequest {
            id: Some("SWED".to_string()),
            country: Some("Sweden".to_string()),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["id"][0].message.as_deref(),
            Some("Country ID must be exactly 3 letters.")
        );
    }

    #[test]
    fn test_code_is_upper_cased() {
        let request = CreateCountryRequest {
            id: Some(" swe ".to_string()),
            country: Some("Sweden".to_string()),
            ..Default::default()
        }
        .normalized();

        assert!(request.validate().is_ok());
        let (id, fields) = request.into_parts();
        assert_eq!(id, "SWE");
        assert_eq!(fields.country, "Sweden");
    }
}
