#![allow(clippy::unwrap_used)]
// Integration tests for `BridgeClient` using wiremock.

use serde_json::json;
use url::Url;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use huectl_api::types::{Dimming, LightPut, OnState};
use huectl_api::{BridgeClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, BridgeClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = BridgeClient::with_client(reqwest::Client::new(), base_url, 10);
    (server, client)
}

fn resource_path(suffix: &str) -> String {
    format!("/clip/v2/resource/{suffix}")
}

const LIGHT_ID: &str = "3a6710fa-4474-4eba-b533-5e6e72968feb";

fn light_body(id: &str, name: &str, on: bool) -> serde_json::Value {
    json!({
        "id": id,
        "owner": { "rid": "0b216218-d811-4c95-8c55-bbcda50f9d50", "rtype": "device" },
        "metadata": { "name": name, "archetype": "sultan_bulb" },
        "on": { "on": on },
        "dimming": { "brightness": 58.66, "min_dim_level": 2.0 },
        "color": { "xy": { "x": 0.4575, "y": 0.4099 }, "gamut_type": "C" },
        "color_temperature": { "mirek": 366, "mirek_valid": true },
        "type": "light"
    })
}

// ── Lights ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_lights() {
    let (server, client) = setup().await;

    let envelope = json!({
        "errors": [],
        "data": [
            light_body(LIGHT_ID, "Desk lamp", true),
            light_body("b7d6a0d5-1f9e-4a40-9d21-23e117cf1dc0", "Hallway", false),
        ]
    });

    Mock::given(method("GET"))
        .and(path(resource_path("light")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let lights = client.list_lights().await.unwrap();

    assert_eq!(lights.len(), 2);
    assert_eq!(lights[0].metadata.name, "Desk lamp");
    assert!(lights[0].on.on);
    assert_eq!(lights[0].dimming.map(|d| d.brightness), Some(58.66));
    assert_eq!(
        lights[0].color_temperature.and_then(|ct| ct.mirek),
        Some(366)
    );
    assert!(!lights[1].on.on);
}

#[tokio::test]
async fn test_get_light() {
    let (server, client) = setup().await;
    let id = Uuid::parse_str(LIGHT_ID).unwrap();

    let envelope = json!({
        "errors": [],
        "data": [light_body(LIGHT_ID, "Desk lamp", true)]
    });

    Mock::given(method("GET"))
        .and(path(resource_path(&format!("light/{id}"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let light = client.get_light(&id).await.unwrap().unwrap();
    assert_eq!(light.id, id);
    assert_eq!(light.metadata.archetype.as_deref(), Some("sultan_bulb"));
}

#[tokio::test]
async fn test_get_light_empty_data_is_none() {
    let (server, client) = setup().await;
    let id = Uuid::parse_str(LIGHT_ID).unwrap();

    let envelope = json!({ "errors": [], "data": [] });

    Mock::given(method("GET"))
        .and(path(resource_path(&format!("light/{id}"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let light = client.get_light(&id).await.unwrap();
    assert!(light.is_none(), "empty data array should map to None");
}

#[tokio::test]
async fn test_update_light_returns_ack_identifiers() {
    let (server, client) = setup().await;
    let id = Uuid::parse_str(LIGHT_ID).unwrap();

    let envelope = json!({
        "errors": [],
        "data": [{ "rid": LIGHT_ID, "rtype": "light" }]
    });

    Mock::given(method("PUT"))
        .and(path(resource_path(&format!("light/{id}"))))
        .and(body_partial_json(json!({
            "on": { "on": true },
            "dimming": { "brightness": 75.0 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let body = LightPut {
        on: Some(OnState { on: true }),
        dimming: Some(Dimming { brightness: 75.0 }),
        ..LightPut::default()
    };
    let acks = client.update_light(&id, &body).await.unwrap();

    assert_eq!(acks.len(), 1);
    assert_eq!(acks[0].rid, id);
    assert_eq!(acks[0].rtype, "light");
}

#[tokio::test]
async fn test_update_omits_unset_fields() {
    let (server, client) = setup().await;
    let id = Uuid::parse_str(LIGHT_ID).unwrap();

    // A body with only `on` set must not serialize dimming/color keys.
    let body = LightPut {
        on: Some(OnState { on: false }),
        ..LightPut::default()
    };
    let serialized = serde_json::to_value(&body).unwrap();
    assert_eq!(serialized, json!({ "on": { "on": false } }));

    let envelope = json!({
        "errors": [],
        "data": [{ "rid": LIGHT_ID, "rtype": "light" }]
    });

    Mock::given(method("PUT"))
        .and(path(resource_path(&format!("light/{id}"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    client.update_light(&id, &body).await.unwrap();
}

// ── Rooms & grouped lights ──────────────────────────────────────────

#[tokio::test]
async fn test_list_rooms_exposes_grouped_light_service() {
    let (server, client) = setup().await;

    let envelope = json!({
        "errors": [],
        "data": [{
            "id": "84b9ca7e-1a4f-4c9c-8f6d-9a41a9e16bd0",
            "metadata": { "name": "Living room", "archetype": "living_room" },
            "children": [
                { "rid": "0b216218-d811-4c95-8c55-bbcda50f9d50", "rtype": "device" }
            ],
            "services": [
                { "rid": "f2a9c2b1-7a55-4e3e-9f6a-1b2c3d4e5f60", "rtype": "grouped_light" }
            ],
            "type": "room"
        }]
    });

    Mock::given(method("GET"))
        .and(path(resource_path("room")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let rooms = client.list_rooms().await.unwrap();

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].metadata.name, "Living room");
    let grouped = rooms[0]
        .services
        .iter()
        .find(|s| s.rtype == "grouped_light")
        .expect("room should expose a grouped_light service");
    assert_eq!(
        grouped.rid,
        Uuid::parse_str("f2a9c2b1-7a55-4e3e-9f6a-1b2c3d4e5f60").unwrap()
    );
}

#[tokio::test]
async fn test_update_grouped_light() {
    let (server, client) = setup().await;
    let id = Uuid::parse_str("f2a9c2b1-7a55-4e3e-9f6a-1b2c3d4e5f60").unwrap();

    let envelope = json!({
        "errors": [],
        "data": [{ "rid": id.to_string(), "rtype": "grouped_light" }]
    });

    Mock::given(method("PUT"))
        .and(path(resource_path(&format!("grouped_light/{id}"))))
        .and(body_partial_json(json!({ "on": { "on": true } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let body = huectl_api::types::GroupedLightPut {
        on: Some(OnState { on: true }),
        ..Default::default()
    };
    let acks = client.update_grouped_light(&id, &body).await.unwrap();
    assert_eq!(acks[0].rtype, "grouped_light");
}

// ── Scenes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_recall_scene_sends_action_and_duration() {
    let (server, client) = setup().await;
    let id = Uuid::parse_str("7f2d3e4a-5b6c-4d7e-8f90-a1b2c3d4e5f6").unwrap();

    let envelope = json!({
        "errors": [],
        "data": [{ "rid": id.to_string(), "rtype": "scene" }]
    });

    Mock::given(method("PUT"))
        .and(path(resource_path(&format!("scene/{id}"))))
        .and(body_partial_json(json!({
            "recall": { "action": "dynamic_palette", "duration": 2000 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let recall = huectl_api::types::SceneRecall {
        action: huectl_api::types::RecallAction::DynamicPalette,
        duration: Some(2000),
    };
    let acks = client.recall_scene(&id, recall).await.unwrap();
    assert_eq!(acks[0].rtype, "scene");
}

// ── Error classification ────────────────────────────────────────────

#[tokio::test]
async fn test_http_error_precedes_body_error_check() {
    let (server, client) = setup().await;
    let id = Uuid::parse_str(LIGHT_ID).unwrap();

    // A 404 whose body *looks* like an API error envelope must still be
    // classified by status first.
    let body = json!({
        "errors": [{ "description": "Not Found" }],
        "data": []
    });

    Mock::given(method("GET"))
        .and(path(resource_path(&format!("light/{id}"))))
        .respond_with(ResponseTemplate::new(404).set_body_json(&body))
        .mount(&server)
        .await;

    let result = client.get_light(&id).await;

    match result {
        Err(Error::Http { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_in_200_body() {
    let (server, client) = setup().await;

    let envelope = json!({
        "errors": [{ "description": "resource not available" }],
        "data": []
    });

    Mock::given(method("GET"))
        .and(path(resource_path("light")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let result = client.list_lights().await;

    match result {
        Err(Error::Api {
            ref description,
            status,
            ref errors,
        }) => {
            assert_eq!(description, "resource not available");
            assert_eq!(status, 200);
            assert_eq!(errors.len(), 1);
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(resource_path("light")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.list_lights().await;

    match result {
        Err(Error::Deserialization { ref message, .. }) => {
            assert!(
                message.contains("body preview"),
                "expected body preview in message, got: {message}"
            );
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure() {
    // Nothing listens on this port.
    let base_url = Url::parse("http://127.0.0.1:1").unwrap();
    let client = BridgeClient::with_client(reqwest::Client::new(), base_url, 10);

    let result = client.list_lights().await;

    match result {
        Err(ref e @ Error::Transport(_)) => assert!(e.is_connection()),
        other => panic!("expected Transport error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_aborts_and_classifies() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path(resource_path("light")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "errors": [], "data": [] }))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(200))
        .build()
        .unwrap();
    let client = BridgeClient::with_client(http, base_url, 0);

    let result = client.list_lights().await;

    match result {
        Err(ref e @ Error::Timeout { .. }) => assert!(e.is_timeout()),
        other => panic!("expected Timeout error, got: {other:?}"),
    }
}
