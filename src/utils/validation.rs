//! Input validation utilities
//!
//! Custom validators used by the request DTOs through
//! `#[validate(custom(function = ...))]`, plus small input normalizers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::{
    constants::{event_types, messages, COUNTRY_CODE_LENGTH, MIN_CONTEST_YEAR},
    utils::time::{parse_date, parse_time},
};

static COUNTRY_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[A-Za-z]{{{COUNTRY_CODE_LENGTH}}}$")).expect("valid country code pattern")
});

/// Scheme, a dotted host ending in an alphabetic TLD, optional port, then anything
static WEB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)https?://([^\s/?#:@.]+\.)+[a-z]{2,}(:\d{1,5})?([/?#]\S*)?$")
        .expect("valid web url pattern")
});

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Country codes are exactly three letters (any case; stored upper-case)
pub fn validate_country_code(value: &str) -> Result<(), ValidationError> {
    if COUNTRY_CODE.is_match(value) {
        Ok(())
    } else {
        Err(error("country_code", messages::COUNTRY_CODE))
    }
}

/// Event type must be one of the known kinds of show
pub fn validate_event_type(value: &str) -> Result<(), ValidationError> {
    if event_types::ALL.contains(&value) {
        Ok(())
    } else {
        Err(error("choice", messages::INVALID_CHOICE))
    }
}

/// Dates arrive as `YYYY-MM-DD`
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    parse_date(value)
        .map(|_| ())
        .ok_or_else(|| error("date", messages::INVALID_DATE))
}

/// Times arrive as `HH:MM`
pub fn validate_time(value: &str) -> Result<(), ValidationError> {
    parse_time(value)
        .map(|_| ())
        .ok_or_else(|| error("time", messages::INVALID_TIME))
}

/// Links must be `http` or `https` with a real host name
pub fn validate_web_url(value: &str) -> Result<(), ValidationError> {
    if WEB_URL.is_match(value) {
        Ok(())
    } else {
        Err(error("url", messages::INVALID_URL))
    }
}

/// Tri-state flag accepted either as a JSON boolean or as `"true"`/`"false"`
///
/// Any other JSON value is kept so validation can report it on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleBool {
    Flag(bool),
    Text(String),
    Other(serde_json::Value),
}

impl FlexibleBool {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Self::Other(_) => None,
        }
    }
}

pub fn validate_flexible_bool(value: &FlexibleBool) -> Result<(), ValidationError> {
    value
        .as_bool()
        .map(|_| ())
        .ok_or_else(|| error("choice", messages::INVALID_CHOICE))
}

/// Integer accepted either as a JSON number or as numeric text such as `"1974"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleInt {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl FlexibleInt {
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Other(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    fn at_least(&self, min: i32, message: &'static str) -> Result<(), ValidationError> {
        match self.as_i32() {
            None => Err(error("integer", messages::INVALID_INTEGER)),
            Some(v) if v < min => Err(error("range", message)),
            Some(_) => Ok(()),
        }
    }
}

impl From<i32> for FlexibleInt {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

pub fn validate_non_negative(value: &FlexibleInt) -> Result<(), ValidationError> {
    value.at_least(0, messages::NON_NEGATIVE)
}

pub fn validate_contest_year(value: &FlexibleInt) -> Result<(), ValidationError> {
    value.at_least(MIN_CONTEST_YEAR, messages::MIN_YEAR)
}

/// Blank numeric text counts as absent
pub fn blank_int_to_none(value: Option<FlexibleInt>) -> Option<FlexibleInt> {
    value.filter(|v| !v.is_blank())
}

/// Trim a text field and treat blank input as absent
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_country_code() {
        assert!(validate_country_code("SWE").is_ok());
        assert!(validate_country_code("swe").is_ok());
        assert!(validate_country_code("SW").is_err());
        assert!(validate_country_code("SWED").is_err());
        assert!(validate_country_code("S3E").is_err());
    }

    #[test]
    fn test_validate_event_type() {
        assert!(validate_event_type("contest").is_ok());
        assert!(validate_event_type("semi-final").is_ok());
        assert!(validate_event_type("final").is_ok());

        let err = validate_event_type("heat").unwrap_err();
        assert_eq!(err.message.as_deref(), Some(messages::INVALID_CHOICE));
    }

    #[test]
    fn test_validate_date_and_time() {
        assert!(validate_date("2023-05-13").is_ok());
        assert!(validate_date("13-05-2023").is_err());
        assert!(validate_time("21:00").is_ok());
        assert!(validate_time("9pm").is_err());
    }

    #[test]
    fn test_flexible_bool() {
        let flag: FlexibleBool = serde_json::from_str("true").unwrap();
        let text: FlexibleBool = serde_json::from_str("\"false\"").unwrap();
        let junk: FlexibleBool = serde_json::from_str("\"maybe\"").unwrap();

        assert_eq!(flag.as_bool(), Some(true));
        assert_eq!(text.as_bool(), Some(false));
        assert_eq!(junk.as_bool(), None);
        assert!(validate_flexible_bool(&junk).is_err());

        let number: FlexibleBool = serde_json::from_str("1").unwrap();
        assert_eq!(number, FlexibleBool::Other(serde_json::json!(1)));
        assert!(validate_flexible_bool(&number).is_err());
    }

    #[test]
    fn test_flexible_int() {
        let number: FlexibleInt = serde_json::from_str("12").unwrap();
        let text: FlexibleInt = serde_json::from_str("\" 1974 \"").unwrap();
        let fraction: FlexibleInt = serde_json::from_str("12.5").unwrap();
        let word: FlexibleInt = serde_json::from_str("\"twelve\"").unwrap();
        let list: FlexibleInt = serde_json::from_str("[1]").unwrap();

        assert_eq!(number.as_i32(), Some(12));
        assert_eq!(text.as_i32(), Some(1974));
        assert_eq!(fraction.as_i32(), None);
        assert_eq!(word.as_i32(), None);
        assert_eq!(list.as_i32(), None);
        assert_eq!(FlexibleInt::from(i32::MAX).as_i32(), Some(i32::MAX));
    }

    #[test]
    fn test_integer_rules() {
        assert!(validate_non_negative(&FlexibleInt::from(0)).is_ok());
        assert!(validate_contest_year(&FlexibleInt::Text("1956".to_string())).is_ok());

        let negative = validate_non_negative(&FlexibleInt::from(-1)).unwrap_err();
        assert_eq!(negative.message.as_deref(), Some(messages::NON_NEGATIVE));

        let early = validate_contest_year(&FlexibleInt::from(1955)).unwrap_err();
        assert_eq!(early.message.as_deref(), Some(messages::MIN_YEAR));

        let word = validate_non_negative(&FlexibleInt::Text("twelve".to_string())).unwrap_err();
        assert_eq!(word.message.as_deref(), Some(messages::INVALID_INTEGER));
    }

    #[test]
    fn test_blank_int_to_none() {
        assert_eq!(blank_int_to_none(Some(FlexibleInt::Text(" ".to_string()))), None);
        assert_eq!(blank_int_to_none(Some(FlexibleInt::from(3))), Some(FlexibleInt::from(3)));
    }

    #[test]
    fn test_validate_web_url() {
        assert!(validate_web_url("https://eurovision.tv/participant/abba").is_ok());
        assert!(validate_web_url("http://open.spotify.com:443/track/1?si=x").is_ok());

        for bad in ["mailto:x", "foo:bar", "ftp://example.com", "https://localhost", "eurovision.tv"] {
            let err = validate_web_url(bad).unwrap_err();
            assert_eq!(err.message.as_deref(), Some(messages::INVALID_URL), "{bad}");
        }
    }

    #[test]
    fn test_blank_to_none() {
        assert_eq!(blank_to_none(Some("  ".to_string())), None);
        assert_eq!(blank_to_none(Some(" ABBA ".to_string())), Some("ABBA".to_string()));
        assert_eq!(blank_to_none(None), None);
    }
}
