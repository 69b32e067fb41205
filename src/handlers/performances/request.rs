//! Performance request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    models::PerformanceFields,
    utils::{
        blank_int_to_none, blank_to_none,
        validation::{validate_flexible_bool, validate_non_negative},
        FlexibleBool, FlexibleInt,
    },
};

/// Create or overwrite a performance of an entry at an event
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PerformanceRequest {
    #[validate(required(message = "This field is required."))]
    pub event_id: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub entry_id: Option<String>,

    #[validate(custom(function = "validate_non_negative"))]
    pub points: Option<FlexibleInt>,

    #[validate(custom(function = "validate_non_negative"))]
    pub place: Option<FlexibleInt>,

    /// `true`, `false`, `"true"`, `"false"` or absent
    #[validate(custom(function = "validate_flexible_bool"))]
    pub qualified: Option<FlexibleBool>,

    #[validate(custom(function = "validate_non_negative"))]
    pub running_order: Option<FlexibleInt>,
}

impl PerformanceRequest {
    pub fn normalized(self) -> Self {
        let qualified = match self.qualified {
            Some(FlexibleBool::Text(text)) if text.trim().is_empty() => None,
            other => other,
        };

        Self {
            event_id: blank_to_none(self.event_id),
            entry_id: blank_to_none(self.entry_id),
            points: blank_int_to_none(self.points),
            place: blank_int_to_none(self.place),
            qualified,
            running_order: blank_int_to_none(self.running_order),
        }
    }

    /// Call after `validate()` has passed
    pub fn into_fields(self) -> PerformanceFields {
        PerformanceFields {
            event_id: self.event_id.unwrap_or_default(),
            entry_id: self.entry_id.unwrap_or_default(),
            points: self.points.as_ref().and_then(FlexibleInt::as_i32),
            place: self.place.as_ref().and_then(FlexibleInt::as_i32),
            qualified: self.qualified.as_ref().and_then(FlexibleBool::as_bool),
            running_order: self.running_order.as_ref().and_then(FlexibleInt::as_i32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> PerformanceRequest {
        serde_json::from_value::<PerformanceRequest>(value)
            .unwrap()
            .normalized()
    }

    #[test]
    fn test_qualified_accepts_bool_and_text() {
        let flag = parse(serde_json::json!({"event_id": "e", "entry_id": "n", "qualified": true}));
        let text = parse(serde_json::json!({"event_id": "e", "entry_id": "n", "qualified": "false"}));
        let unset = parse(serde_json::json!({"event_id": "e", "entry_id": "n", "qualified": ""}));

        assert!(flag.validate().is_ok());
        assert!(text.validate().is_ok());
        assert!(unset.validate().is_ok());
        assert_eq!(flag.into_fields().qualified, Some(true));
        assert_eq!(text.into_fields().qualified, Some(false));
        assert_eq!(unset.into_fields().qualified, None);
    }

    #[test]
    fn test_rejects_negative_scores_and_bad_flag() {
        let request = parse(serde_json::json!({
            "event_id": "e",
            "entry_id": "n",
            "points": -1,
            "qualified": "maybe"
        }));

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["points"][0].message.as_deref(), Some("Must be at least 0."));
        assert_eq!(fields["qualified"][0].message.as_deref(), Some("Not a valid choice."));
    }

    #[test]
    fn test_scores_accept_numeric_text() {
        let request = parse(serde_json::json!({
            "event_id": "e",
            "entry_id": "n",
            "points": "12",
            "place": 1,
            "running_order": ""
        }));

        assert!(request.validate().is_ok());
        let fields = request.into_fields();
        assert_eq!(fields.points, Some(12));
        assert_eq!(fields.place, Some(1));
        assert_eq!(fields.running_order, None);
    }

    #[test]
    fn test_non_integer_scores_are_field_errors() {
        let request = parse(serde_json::json!({
            "event_id": "e",
            "entry_id": "n",
            "points": "twelve",
            "place": true
        }));

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["points"][0].message.as_deref(), Some("Not a valid integer value."));
        assert_eq!(fields["place"][0].message.as_deref(), Some("Not a valid integer value."));
    }
}
