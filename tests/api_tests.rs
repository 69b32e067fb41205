//! Router tests for the paths that answer before reaching the store

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{lazy_app, send, TEST_API_KEY};
use eurovision_api::config::CredentialChannel;

#[tokio::test]
async fn test_health() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_mutation_without_key_is_unauthorized() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, body) = send(
        &app,
        Method::POST,
        "/countries",
        None,
        Some(json!({"id": "swe", "country": "Sweden"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"status": "fail", "message": "Must provide valid API key."}));
}

#[tokio::test]
async fn test_wrong_key_is_unauthorized() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, _) = send(&app, Method::DELETE, "/entries/abc", Some("guess"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_event_patch_ignores_body_key() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/events/abc",
        None,
        Some(json!({"api_key": TEST_API_KEY, "event": "Final"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn test_unset_api_key_rejects_every_mutation() {
    let app = lazy_app(None, CredentialChannel::Header);

    for (method, uri) in [
        (Method::POST, "/participants"),
        (Method::POST, "/countries"),
        (Method::PUT, "/entries/abc"),
        (Method::DELETE, "/performances/abc"),
    ] {
        let (status, _) = send(&app, method, uri, Some(""), Some(json!({}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn test_participant_update_reads_key_from_body_by_default() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    // Header alone is not enough on the body channel
    let (status, _) = send(
        &app,
        Method::PATCH,
        "/participants/abc",
        Some(TEST_API_KEY),
        Some(json!({"name": "ABBA"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Body key passes auth and validation then runs
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/participants/abc",
        None,
        Some(json!({"api_key": TEST_API_KEY, "image_url": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["name"], json!(["This field is required."]));
    assert_eq!(body["errors"]["image_url"], json!(["Must be a valid URL."]));
}

#[tokio::test]
async fn test_participant_update_on_header_channel() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Header);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/participants/abc",
        None,
        Some(json!({"api_key": TEST_API_KEY, "name": "ABBA"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/participants/abc",
        Some(TEST_API_KEY),
        Some(json!({"name": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["name"], json!(["This field is required."]));
}

#[tokio::test]
async fn test_participant_delete_without_body_key() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, _) = send(&app, Method::DELETE, "/participants/abc", Some(TEST_API_KEY), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_entry_validation_errors() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, body) = send(
        &app,
        Method::POST,
        "/entries",
        Some(TEST_API_KEY),
        Some(json!({"year": 1950, "spotify_url": "spotify"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = &body["errors"];
    assert_eq!(errors["participant_id"], json!(["This field is required."]));
    assert_eq!(errors["country_id"], json!(["This field is required."]));
    assert_eq!(errors["title"], json!(["This field is required."]));
    assert_eq!(errors["year"], json!(["Must be at least 1956."]));
    assert_eq!(errors["spotify_url"], json!(["Must be a valid URL."]));
}

#[tokio::test]
async fn test_country_code_validation() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, body) = send(
        &app,
        Method::POST,
        "/countries",
        Some(TEST_API_KEY),
        Some(json!({"id": "SWED", "country": "Sweden"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["id"], json!(["Country ID must be exactly 3 letters."]));
}

#[tokio::test]
async fn test_performance_validation_errors() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, body) = send(
        &app,
        Method::POST,
        "/performances",
        Some(TEST_API_KEY),
        Some(json!({"event_id": "e", "entry_id": "n", "place": -3, "qualified": "perhaps"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["place"], json!(["Must be at least 0."]));
    assert_eq!(body["errors"]["qualified"], json!(["Not a valid choice."]));
}

#[tokio::test]
async fn test_performance_scores_of_wrong_type() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, body) = send(
        &app,
        Method::POST,
        "/performances",
        Some(TEST_API_KEY),
        Some(json!({
            "event_id": "e",
            "entry_id": "n",
            "points": "twelve",
            "running_order": [3],
            "qualified": "maybe"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = &body["errors"];
    assert_eq!(errors["points"], json!(["Not a valid integer value."]));
    assert_eq!(errors["running_order"], json!(["Not a valid integer value."]));
    assert_eq!(errors["qualified"], json!(["Not a valid choice."]));
    assert!(errors.get("body").is_none());
}

#[tokio::test]
async fn test_event_year_as_text_reaches_year_rule() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let (status, body) = send(
        &app,
        Method::POST,
        "/events",
        Some(TEST_API_KEY),
        Some(json!({"event": "Eurovision Song Contest", "type": "final", "year": "1950"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["year"], json!(["Must be at least 1956."]));
    assert_eq!(body["errors"]["host_city"], json!(["This field is required."]));
}

#[tokio::test]
async fn test_participant_auth_precedes_body_parsing() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    for (method, uri) in [
        (Method::PATCH, "/participants/abc"),
        (Method::PUT, "/participants/abc"),
        (Method::POST, "/participants"),
    ] {
        let (status, body) = send(&app, method, uri, None, Some(json!({"name": 5}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["status"], "fail");
    }

    // Once authorized the same body is a 400
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/participants/abc",
        None,
        Some(json!({"api_key": TEST_API_KEY, "name": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["body"].is_array());
}

#[tokio::test]
async fn test_non_web_links_are_rejected() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Header);

    let (status, body) = send(
        &app,
        Method::POST,
        "/participants",
        Some(TEST_API_KEY),
        Some(json!({"name": "ABBA", "image_url": "mailto:abba@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["image_url"], json!(["Must be a valid URL."]));
}

#[tokio::test]
async fn test_malformed_body() {
    let app = lazy_app(Some(TEST_API_KEY), CredentialChannel::Body);

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/countries")
        .header("API-Key", TEST_API_KEY)
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"id\": "))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["errors"]["body"].is_array());
}
