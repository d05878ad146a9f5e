//! API Integration Tests for wishbox
//!
//! Drives the full router through axum-test against in-memory SQLite.

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use common::{build_test_app, form_fields, TEST_PASSWORD};
use serde_json::{json, Value};

fn session_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-admin-session"),
        HeaderValue::from_str(token).unwrap(),
    )
}

async fn open_session(server: &axum_test::TestServer) -> String {
    let response = server
        .post("/api/admin/session")
        .json(&json!({ "password": TEST_PASSWORD }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["token"].as_str().unwrap().to_string()
}

// ============================================================================
// Health Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_returns_healthy() {
    let (server, _state) = build_test_app(None).await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_liveness_check_returns_ok() {
    let (server, _state) = build_test_app(None).await;

    server.get("/health/live").await.assert_status_ok();
}

#[tokio::test]
async fn test_readiness_reports_missing_password_as_degraded() {
    let (server, _state) = build_test_app(None).await;

    let response = server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"][0]["name"], "database");
    assert_eq!(body["checks"][0]["status"], "healthy");
    assert_eq!(body["checks"][1]["status"], "degraded");
}

#[tokio::test]
async fn test_readiness_fails_when_database_closed() {
    let (server, state) = build_test_app(Some(TEST_PASSWORD)).await;
    state.close().await;

    let response = server.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["ready"], false);
}

// ============================================================================
// JSON Wish API Tests
// ============================================================================

#[tokio::test]
async fn test_create_wish_via_json() {
    let (server, _state) = build_test_app(Some(TEST_PASSWORD)).await;

    let response = server
        .post("/api/wishes")
        .json(&json!({
            "name": "Ala",
            "class": "2B",
            "age": "8",
            "giftWish": "lego",
            "giftLink": ""
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["name"], "Ala");
    assert_eq!(body["class"], "2B");
    assert_eq!(body["age"], 8);
    assert_eq!(body["giftWish"], "lego");
    assert!(body["giftLink"].is_null());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_wish_rejects_bad_age() {
    let (server, state) = build_test_app(Some(TEST_PASSWORD)).await;

    let response = server
        .post("/api/wishes")
        .json(&json!({ "name": "Ala", "class": "2B", "age": "osiem", "giftWish": "lego" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(state.wishes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_requires_session() {
    let (server, _state) = build_test_app(Some(TEST_PASSWORD)).await;

    server.get("/api/wishes").await.assert_status_unauthorized();
    server
        .get("/api/wishes")
        .add_query_param("s", "made-up.token")
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn test_list_without_configured_password() {
    let (server, _state) = build_test_app(None).await;

    let response = server.get("/api/wishes").add_query_param("s", "anything").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "SERVER_MISCONFIGURED");
    assert_eq!(body["error"]["message"], "Brak hasła w konfiguracji serwera");
}

#[tokio::test]
async fn test_session_with_wrong_password() {
    let (server, _state) = build_test_app(Some(TEST_PASSWORD)).await;

    let response = server
        .post("/api/admin/session")
        .json(&json!({ "password": "zle" }))
        .await;

    response.assert_status_unauthorized();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_PASSWORD");
}

#[tokio::test]
async fn test_list_grouped_by_class() {
    let (server, _state) = build_test_app(Some(TEST_PASSWORD)).await;

    for (name, class) in [("Zosia", "3A"), ("Tomek", "1B"), ("Adam", "1B")] {
        server
            .post("/api/wishes")
            .json(&json!({ "name": name, "class": class, "age": 9, "giftWish": "lego" }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let token = open_session(&server).await;
    let (name, value) = session_header(&token);
    let response = server.get("/api/wishes").add_header(name, value).await;

    response.assert_status_ok();
    let raw = response.text();
    let first = raw.find("\"1B\":").unwrap();
    let second = raw.find("\"3A\":").unwrap();
    assert!(first < second, "classes out of order: {}", raw);

    let body: Value = response.json();
    assert_eq!(body.as_object().unwrap().len(), 2);

    let names: Vec<&str> = body["1B"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Adam", "Tomek"]);

    let page = server.get("/admin").add_query_param("s", &token).await;
    page.assert_status_ok();
    let html = page.text();
    assert!(html.contains("Łącznie życzeń: <strong>3</strong>"));
    let first = html.find("Klasa 1B").unwrap();
    let second = html.find("Klasa 3A").unwrap();
    assert!(first < second);
    assert!(html.find("Adam").unwrap() < html.find("Tomek").unwrap());
}

#[tokio::test]
async fn test_list_empty_with_query_token() {
    let (server, _state) = build_test_app(Some(TEST_PASSWORD)).await;
    let token = open_session(&server).await;

    let response = server.get("/api/wishes").add_query_param("s", &token).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({}));
}

// ============================================================================
// Page Tests
// ============================================================================

#[tokio::test]
async fn test_form_page_renders() {
    let (server, _state) = build_test_app(None).await;

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("name=\"giftWish\""));
    assert!(html.contains("action=\"/\""));
}

#[tokio::test]
async fn test_form_submission_stores_wish() {
    let (server, state) = build_test_app(None).await;

    let response = server.post("/").form(&form_fields("Ala", "2B", "8")).await;

    response.assert_status_ok();
    assert!(response.text().contains("Dziękujemy, Ala!"));

    let grouped = state.wishes.list_grouped_by_class().await.unwrap();
    let wish = &grouped["2B"][0];
    assert_eq!(wish.age, 8);
    assert!(wish.gift_link.is_none());
}

#[tokio::test]
async fn test_form_submission_with_bad_age_shows_error() {
    let (server, state) = build_test_app(None).await;

    let response = server.post("/").form(&form_fields("Ala", "2B", "osiem")).await;

    response.assert_status_bad_request();
    let html = response.text();
    assert!(html.contains("Wiek musi być liczbą całkowitą"));
    assert!(html.contains("value=\"Ala\""));
    assert_eq!(state.wishes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_admin_without_session_shows_login() {
    let (server, _state) = build_test_app(Some(TEST_PASSWORD)).await;

    let response = server.get("/admin").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Wprowadź hasło"));
    assert!(!html.contains("Brak hasła w konfiguracji serwera"));
}

#[tokio::test]
async fn test_admin_without_password_configured_shows_notice() {
    let (server, _state) = build_test_app(None).await;

    let response = server.get("/admin").await;

    assert!(response.text().contains("Brak hasła w konfiguracji serwera"));
}

#[tokio::test]
async fn test_admin_wrong_password() {
    let (server, _state) = build_test_app(Some(TEST_PASSWORD)).await;

    let response = server.get("/admin").add_query_param("password", "zle").await;

    response.assert_status_unauthorized();
    assert!(response.text().contains("Nieprawidłowe hasło"));
}

#[tokio::test]
async fn test_admin_login_redirects_with_session() {
    let (server, state) = build_test_app(Some(TEST_PASSWORD)).await;
    server.post("/").form(&form_fields("Ala", "2B", "8")).await.assert_status_ok();

    let response = server
        .get("/admin")
        .add_query_param("password", TEST_PASSWORD)
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let token = location.strip_prefix("/admin?s=").unwrap();
    assert!(state.gate.validate_session_token(token));

    let page = server.get("/admin").add_query_param("s", token).await;
    page.assert_status_ok();
    let html = page.text();
    assert!(html.contains("Klasa 2B"));
    assert!(html.contains("Łącznie życzeń: <strong>1</strong>"));
    assert!(html.contains("1 uczeń"));
    assert!(html.contains("8 lat"));
    assert!(html.contains("Brak"));
}

#[tokio::test]
async fn test_admin_forged_session_shows_login() {
    let (server, _state) = build_test_app(Some(TEST_PASSWORD)).await;

    let response = server.get("/admin").add_query_param("s", "abcdefghijklmno").await;

    response.assert_status_ok();
    assert!(response.text().contains("Wprowadź hasło"));
}

#[tokio::test]
async fn test_admin_empty_store() {
    let (server, state) = build_test_app(Some(TEST_PASSWORD)).await;
    let token = state.gate.issue_session_token().unwrap();

    let response = server.get("/admin").add_query_param("s", &token).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Jeszcze nie ma żadnych życzeń"));
    assert!(html.contains("Łącznie życzeń: <strong>0</strong>"));
}

#[tokio::test]
async fn test_admin_list_failure_shows_localized_error() {
    let (server, state) = build_test_app(Some(TEST_PASSWORD)).await;
    sqlx::query("DROP TABLE gift_wishes")
        .execute(&state.db)
        .await
        .unwrap();
    let token = state.gate.issue_session_token().unwrap();

    let response = server.get("/admin").add_query_param("s", &token).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Nie udało się pobrać życzeń"));
}
