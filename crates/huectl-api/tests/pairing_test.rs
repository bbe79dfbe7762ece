#![allow(clippy::unwrap_used)]
// Integration tests for pairing and cloud discovery using wiremock.

use secrecy::ExposeSecret;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use huectl_api::Error;
use huectl_api::discovery::discover_with_client;
use huectl_api::pairing::pair_with_client;

async fn setup() -> (MockServer, reqwest::Client, Url) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    (server, reqwest::Client::new(), base_url)
}

// ── Pairing ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_pair_success_yields_application_key() {
    let (server, http, base_url) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .and(body_partial_json(json!({
            "devicetype": "huectl#workstation",
            "generateclientkey": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "success": { "username": "wkKd0...generated...key", "clientkey": "AABB" } }
        ])))
        .mount(&server)
        .await;

    let key = pair_with_client(&http, &base_url, "huectl", "workstation")
        .await
        .unwrap();

    assert_eq!(key.expose_secret(), "wkKd0...generated...key");
}

#[tokio::test]
async fn test_pair_link_button_not_pressed() {
    let (server, http, base_url) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "error": { "type": 101, "address": "", "description": "link button not pressed" } }
        ])))
        .mount(&server)
        .await;

    let result = pair_with_client(&http, &base_url, "huectl", "workstation").await;

    match result {
        Err(ref e @ Error::LinkButtonNotPressed) => assert!(e.is_retryable_by_user()),
        other => panic!("expected LinkButtonNotPressed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_pair_other_error_surfaces_verbatim() {
    let (server, http, base_url) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "error": { "type": 7, "address": "/devicetype", "description": "invalid value" } }
        ])))
        .mount(&server)
        .await;

    let result = pair_with_client(&http, &base_url, "huectl", "workstation").await;

    match result {
        Err(Error::Api {
            ref description, ..
        }) => {
            assert_eq!(description, "invalid value");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_pair_empty_array_is_rejected() {
    let (server, http, base_url) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = pair_with_client(&http, &base_url, "huectl", "workstation").await;
    assert!(matches!(result, Err(Error::PairingResponse(_))));
}

// ── Discovery ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_discover_returns_raw_descriptors() {
    let (server, http, base_url) = setup().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "ecb5fafffe8381f2", "internalipaddress": "192.168.0.124", "port": 443 },
            { "id": "001788fffe4f1ab9", "internalipaddress": "10.0.0.5" }
        ])))
        .mount(&server)
        .await;

    let bridges = discover_with_client(&http, base_url).await.unwrap();

    assert_eq!(bridges.len(), 2);
    assert_eq!(bridges[0].internal_ip_address, "192.168.0.124");
    assert_eq!(bridges[0].port, Some(443));
    assert_eq!(bridges[1].port, None);
}
