//! Request extractors

use axum::extract::FromRequest;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// `Json` whose rejection renders as a `{"errors": {"body": [...]}}` 400
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Decode a raw body already consulted for credentials
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::InvalidBody(format!("Failed to deserialize the JSON body into the target type: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: Option<String>,
    }

    #[test]
    fn test_decode_body() {
        let named: Named = decode_body(br#"{"name":"ABBA"}"#).unwrap();
        assert_eq!(named.name.as_deref(), Some("ABBA"));

        assert!(matches!(decode_body::<Named>(b"{"), Err(AppError::InvalidBody(_))));
        assert!(matches!(
            decode_body::<Named>(br#"{"name":5}"#),
            Err(AppError::InvalidBody(_))
        ));
    }
}
