//! Country model

use serde::Serialize;
use sqlx::FromRow;

/// Country database model
///
/// The id is the caller-supplied three letter code, always stored upper-case.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Country {
    pub id: String,
    pub country: String,
    pub flag_image_url: Option<String>,
}

/// Mutable country columns
#[derive(Debug, Clone, Default)]
pub struct CountryFields {
    pub country: String,
    pub flag_image_url: Option<String>,
}

/// Related ids derived for a country
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryLinks {
    /// Entries, ordered by year
    pub entries: Vec<String>,
    /// Hosted events, ordered by year
    pub events: Vec<String>,
    /// Participant of each entry, same order as `entries`
    pub participants: Vec<String>,
    /// Performances of the country's entries, ordered by event year
    pub performances: Vec<String>,
}

/// Normalize a country code for storage and lookup
pub fn normalize_country_id(id: &str) -> String {
    id.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_country_id() {
        assert_eq!(normalize_country_id("swe"), "SWE");
        assert_eq!(normalize_country_id(" Nor "), "NOR");
        assert_eq!(normalize_country_id("GBR"), "GBR");
    }
}
