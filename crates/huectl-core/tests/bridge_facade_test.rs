#![allow(clippy::unwrap_used)]
// Integration tests for the `Bridge` facade using wiremock.
//
// These exercise the composed flows: toggle (re-fetch then write),
// room mutations routed through the grouped-light service, and silent
// input clamping on the way to the wire.

use serde_json::json;
use url::Url;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use huectl_api::BridgeClient;
use huectl_core::{Bridge, CoreError, RecallAction};

async fn setup() -> (MockServer, Bridge) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = BridgeClient::with_client(reqwest::Client::new(), base_url, 10);
    (server, Bridge::with_client(client))
}

fn resource_path(suffix: &str) -> String {
    format!("/clip/v2/resource/{suffix}")
}

#[tokio::test]
async fn toggle_refetches_and_negates() {
    let (server, bridge) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(resource_path(&format!("light/{id}"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "data": [{
                "id": id.to_string(),
                "metadata": { "name": "Desk lamp", "archetype": null },
                "on": { "on": true }
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(resource_path(&format!("light/{id}"))))
        .and(body_partial_json(json!({ "on": { "on": false } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "data": [{ "rid": id.to_string(), "rtype": "light" }]
        })))
        .mount(&server)
        .await;

    let next = bridge.toggle(&id).await.unwrap();
    assert!(!next, "toggling an on light should turn it off");
}

#[tokio::test]
async fn toggle_unknown_light_is_not_found() {
    let (server, bridge) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(resource_path(&format!("light/{id}"))))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "errors": [], "data": [] })),
        )
        .mount(&server)
        .await;

    let result = bridge.toggle(&id).await;
    assert!(matches!(
        result,
        Err(CoreError::NotFound {
            entity_type: "light",
            ..
        })
    ));
}

#[tokio::test]
async fn set_brightness_clamps_before_transmission() {
    let (server, bridge) = setup().await;
    let id = Uuid::new_v4();

    // 150% must reach the wire as exactly 100.
    Mock::given(method("PUT"))
        .and(path(resource_path(&format!("light/{id}"))))
        .and(body_partial_json(json!({ "dimming": { "brightness": 100.0 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "data": [{ "rid": id.to_string(), "rtype": "light" }]
        })))
        .mount(&server)
        .await;

    let handles = bridge.set_brightness(&id, 150.0).await.unwrap();
    assert_eq!(handles.len(), 1);
    assert_eq!(handles[0].id, id);
}

#[tokio::test]
async fn room_brightness_routes_through_grouped_light() {
    let (server, bridge) = setup().await;
    let room_id = Uuid::new_v4();
    let grouped_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(resource_path(&format!("room/{room_id}"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "data": [{
                "id": room_id.to_string(),
                "metadata": { "name": "Living room", "archetype": "living_room" },
                "children": [],
                "services": [
                    { "rid": grouped_id.to_string(), "rtype": "grouped_light" }
                ]
            }]
        })))
        .mount(&server)
        .await;

    // 0% clamps up to the 1% floor (0 is "off", not a brightness).
    Mock::given(method("PUT"))
        .and(path(resource_path(&format!("grouped_light/{grouped_id}"))))
        .and(body_partial_json(json!({ "dimming": { "brightness": 1.0 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "data": [{ "rid": grouped_id.to_string(), "rtype": "grouped_light" }]
        })))
        .mount(&server)
        .await;

    let handles = bridge.set_room_brightness(&room_id, 0.0).await.unwrap();
    assert_eq!(handles[0].id, grouped_id);
}

#[tokio::test]
async fn room_without_grouped_light_is_uncontrollable() {
    let (server, bridge) = setup().await;
    let room_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(resource_path(&format!("room/{room_id}"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "data": [{
                "id": room_id.to_string(),
                "metadata": { "name": "Closet", "archetype": null },
                "children": [],
                "services": []
            }]
        })))
        .mount(&server)
        .await;

    let result = bridge.set_room_power(&room_id, true).await;
    match result {
        Err(CoreError::RoomUncontrollable { name }) => assert_eq!(name, "Closet"),
        other => panic!("expected RoomUncontrollable, got: {other:?}"),
    }
}

#[tokio::test]
async fn activate_scene_sends_recall() {
    let (server, bridge) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(resource_path(&format!("scene/{id}"))))
        .and(body_partial_json(json!({ "recall": { "action": "active" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "data": [{ "rid": id.to_string(), "rtype": "scene" }]
        })))
        .mount(&server)
        .await;

    let handles = bridge
        .activate_scene(&id, RecallAction::Active, None)
        .await
        .unwrap();
    assert_eq!(handles.len(), 1);
}

#[tokio::test]
async fn mutation_acks_drop_unmodeled_kinds() {
    let (server, bridge) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(resource_path(&format!("light/{id}"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "data": [
                { "rid": id.to_string(), "rtype": "light" },
                { "rid": Uuid::new_v4().to_string(), "rtype": "taurus_7455" }
            ]
        })))
        .mount(&server)
        .await;

    let handles = bridge.set_power(&id, true).await.unwrap();
    assert_eq!(handles.len(), 1, "unknown rtypes are filtered out");
}
