mod common;

use axum::http::{StatusCode, header};
use serde_json::json;
use std::sync::Arc;
use url_alias::domain::repositories::UrlGetter;
use url_alias::infrastructure::persistence::InMemoryUrlRegistry;

#[tokio::test]
async fn test_save_with_alias() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://example.com", "alias": "docs"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "OK", "alias": "docs"}));

    assert_eq!(registry.get("docs").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_save_generates_alias_when_missing() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://example.com"}))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "OK");
    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(
        alias
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    );

    assert_eq!(registry.get(alias).await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_save_generates_alias_for_empty_and_null() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    for body in [
        json!({"url": "https://a.example.com", "alias": ""}),
        json!({"url": "https://b.example.com", "alias": null}),
    ] {
        let response = server
            .post("/url")
            .add_header(header::AUTHORIZATION, common::valid_auth())
            .json(&body)
            .await;

        response.assert_status_ok();
        let alias = response.json::<serde_json::Value>()["alias"]
            .as_str()
            .unwrap()
            .to_string();
        assert_eq!(alias.len(), 6);
    }

    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn test_save_invalid_url() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "not-a-url", "alias": "docs"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"status": "Error", "error": "field URL is not a valid URL"}));
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_save_missing_url() {
    let (state, _registry) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"alias": "docs"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"status": "Error", "error": "field URL is not a valid URL"}));
}

#[tokio::test]
async fn test_save_alias_too_short_or_long() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    for alias in ["a".to_string(), "a".repeat(25)] {
        let response = server
            .post("/url")
            .add_header(header::AUTHORIZATION, common::valid_auth())
            .json(&json!({"url": "https://example.com", "alias": alias}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "status": "Error",
            "error": "alias length must be between 3 and 20 characters"
        }));
    }

    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_save_duplicate_alias() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://example.com", "alias": "dup"}))
        .await
        .assert_status_ok();

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://other.com", "alias": "dup"}))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({"status": "Error", "error": "alias already exists"}));

    assert_eq!(registry.get("dup").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_save_duplicate_url_rejected_when_enabled() {
    let registry = Arc::new(InMemoryUrlRegistry::new().with_duplicate_url_rejection(true));
    let state = common::create_test_state_with(
        registry.clone(),
        Arc::new(url_alias::utils::alias_generator::RandomAliasGenerator::new()),
    );
    let server = common::test_server(state);

    server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://example.com", "alias": "first"}))
        .await
        .assert_status_ok();

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://example.com", "alias": "second"}))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({"status": "Error", "error": "url already exists"}));
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn test_save_duplicate_url_allowed_by_default() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    for alias in ["first", "second"] {
        server
            .post("/url")
            .add_header(header::AUTHORIZATION, common::valid_auth())
            .json(&json!({"url": "https://example.com", "alias": alias}))
            .await
            .assert_status_ok();
    }

    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn test_save_retries_generated_collision() {
    let registry = Arc::new(InMemoryUrlRegistry::new());
    let generator = Arc::new(common::ScriptedGenerator::new(&["taken1", "free01"]));
    let state = common::create_test_state_with(registry.clone(), generator);
    let server = common::test_server(state);

    server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://first.com", "alias": "taken1"}))
        .await
        .assert_status_ok();

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://second.com"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "OK", "alias": "free01"}));
}

#[tokio::test]
async fn test_save_exhausted_generation_is_internal_error() {
    let registry = Arc::new(InMemoryUrlRegistry::new());
    let generator = Arc::new(common::ScriptedGenerator::new(&["always"]));
    let state = common::create_test_state_with(registry.clone(), generator);
    let server = common::test_server(state);

    server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://first.com", "alias": "always"}))
        .await
        .assert_status_ok();

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .json(&json!({"url": "https://second.com"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({"status": "Error", "error": "failed to add url"}));
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn test_save_malformed_body() {
    let (state, _registry) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::valid_auth())
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"status": "Error", "error": "failed to decode request"}));
}

#[tokio::test]
async fn test_save_requires_auth() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .json(&json!({"url": "https://example.com", "alias": "docs"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.header(header::WWW_AUTHENTICATE),
        "Basic realm=\"url-alias\""
    );
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_save_wrong_password() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .add_header(header::AUTHORIZATION, common::basic_auth("myuser", "wrong"))
        .json(&json!({"url": "https://example.com", "alias": "docs"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({"status": "Error", "error": "Unauthorized"}));
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_save_reserved_aliases_rejected() {
    let (state, registry) = common::create_test_state();
    let server = common::test_server(state);

    for alias in ["health", "url"] {
        let response = server
            .post("/url")
            .add_header(header::AUTHORIZATION, common::valid_auth())
            .json(&json!({"url": "https://example.com", "alias": alias}))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        response.assert_json(&json!({"status": "Error", "error": "alias already exists"}));
    }

    assert!(registry.is_empty());
    server.get("/health").await.assert_status_ok();
}
