//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default allowed CORS origin
pub const DEFAULT_CORS_ALLOW_ORIGIN: &str = "*";

/// Largest accepted request body (lyrics can be long)
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Request header carrying the API key
pub const API_KEY_HEADER: &str = "API-Key";

/// Default credential channel for participant updates and deletes
pub const DEFAULT_PARTICIPANT_KEY_CHANNEL: &str = "body";

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Length of generated resource identifiers
pub const GENERATED_ID_LENGTH: usize = 10;

/// Alphabet generated identifiers are drawn from
pub const GENERATED_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Attempts before identifier allocation gives up
pub const MAX_ID_ATTEMPTS: usize = 32;

/// Length of a country code
pub const COUNTRY_CODE_LENGTH: usize = 3;

// =============================================================================
// DOMAIN RULES
// =============================================================================

/// First contest year
pub const MIN_CONTEST_YEAR: i32 = 1956;

/// Event types
pub mod event_types {
    pub const CONTEST: &str = "contest";
    pub const SEMI_FINAL: &str = "semi-final";
    pub const FINAL: &str = "final";

    pub const ALL: &[&str] = &[CONTEST, SEMI_FINAL, FINAL];
}

/// Date and time formats used on the wire
pub mod formats {
    /// Accepted on input
    pub const INPUT_DATE: &str = "%Y-%m-%d";
    /// Returned in responses
    pub const DISPLAY_DATE: &str = "%d-%m-%Y";
    /// Accepted on input and returned in responses
    pub const TIME: &str = "%H:%M";
}

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub mod messages {
    pub const INVALID_API_KEY: &str = "Must provide valid API key.";
    pub const REQUIRED: &str = "This field is required.";
    pub const INVALID_URL: &str = "Must be a valid URL.";
    pub const INVALID_CHOICE: &str = "Not a valid choice.";
    pub const MIN_YEAR: &str = "Must be at least 1956.";
    pub const NON_NEGATIVE: &str = "Must be at least 0.";
    pub const INVALID_INTEGER: &str = "Not a valid integer value.";
    pub const COUNTRY_CODE: &str = "Country ID must be exactly 3 letters.";
    pub const INVALID_DATE: &str = "Not a valid date value.";
    pub const INVALID_TIME: &str = "Not a valid time value.";
    pub const CONFLICT: &str = "A conflicting record was written at the same time; retry the request.";
}

/// Response status strings
pub mod status {
    pub const SUCCESS: &str = "success";
    pub const DUPLICATE: &str = "duplicate";
    pub const NOT_FOUND: &str = "not found";
    pub const FAIL: &str = "fail";
    pub const ERROR: &str = "error";
}
