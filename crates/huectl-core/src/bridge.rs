// ── Bridge facade ──
//
// The main entry point for consumers. A `Bridge` is an immutable handle
// over one `BridgeClient`: the HTTP client, TLS mode, timeout, and auth
// header are fixed at construction and reused for the process lifetime.
// There is no cache and no background work -- every operation is a
// single awaited request against the bridge, and callers re-fetch when
// they need fresh state.

use secrecy::SecretString;
use tracing::debug;
use uuid::Uuid;

use huectl_api::types::{
    ColorState, ColorTemperature, Dimming, GroupedLightPut, LightPut, OnState, RecallAction,
    SceneRecall, XyColor,
};
use huectl_api::{BridgeClient, TransportConfig};

use crate::color;
use crate::config::BridgeConfig;
use crate::convert::handles_from_acks;
use crate::error::CoreError;
use crate::model::{GroupedLight, Light, ResourceHandle, Room, Scene};

pub struct Bridge {
    client: BridgeClient,
}

impl Bridge {
    /// Build a handle from resolved configuration. Performs no I/O --
    /// the first request happens on the first accessor call.
    pub fn connect(config: &BridgeConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: config.tls.into(),
            timeout: config.timeout,
        };
        let client = BridgeClient::new(&config.host, &config.application_key, &transport)?;
        debug!(host = %config.host, "bridge handle constructed");
        Ok(Self { client })
    }

    /// Wrap an existing API client (tests).
    pub fn with_client(client: BridgeClient) -> Self {
        Self { client }
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub async fn lights(&self) -> Result<Vec<Light>, CoreError> {
        let raw = self.client.list_lights().await?;
        Ok(raw.into_iter().map(Light::from).collect())
    }

    /// `Ok(None)` when the bridge knows no such light -- absence is a
    /// valid outcome, not a fault.
    pub async fn light(&self, id: &Uuid) -> Result<Option<Light>, CoreError> {
        Ok(self.client.get_light(id).await?.map(Light::from))
    }

    pub async fn rooms(&self) -> Result<Vec<Room>, CoreError> {
        let raw = self.client.list_rooms().await?;
        Ok(raw.into_iter().map(Room::from).collect())
    }

    pub async fn room(&self, id: &Uuid) -> Result<Option<Room>, CoreError> {
        Ok(self.client.get_room(id).await?.map(Room::from))
    }

    pub async fn grouped_light(&self, id: &Uuid) -> Result<Option<GroupedLight>, CoreError> {
        Ok(self
            .client
            .get_grouped_light(id)
            .await?
            .map(GroupedLight::from))
    }

    pub async fn scenes(&self) -> Result<Vec<Scene>, CoreError> {
        let raw = self.client.list_scenes().await?;
        Ok(raw.into_iter().map(Scene::from).collect())
    }

    pub async fn scene(&self, id: &Uuid) -> Result<Option<Scene>, CoreError> {
        Ok(self.client.get_scene(id).await?.map(Scene::from))
    }

    // ── Light mutations ──────────────────────────────────────────────

    pub async fn set_power(&self, id: &Uuid, on: bool) -> Result<Vec<ResourceHandle>, CoreError> {
        let body = LightPut {
            on: Some(OnState { on }),
            ..LightPut::default()
        };
        Ok(handles_from_acks(self.client.update_light(id, &body).await?))
    }

    /// Flip a light's power state. Re-fetches first (no client-side
    /// cache to consult), then writes the negation. Returns the new state.
    pub async fn toggle(&self, id: &Uuid) -> Result<bool, CoreError> {
        let light = self
            .client
            .get_light(id)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "light",
                identifier: id.to_string(),
            })?;

        let next = !light.on.on;
        self.set_power(id, next).await?;
        Ok(next)
    }

    /// Set brightness percent, silently clamped to `[1, 100]` -- 0 is
    /// "off", which is what [`set_power`](Self::set_power) is for.
    pub async fn set_brightness(
        &self,
        id: &Uuid,
        pct: f64,
    ) -> Result<Vec<ResourceHandle>, CoreError> {
        let body = LightPut {
            dimming: Some(Dimming {
                brightness: color::clamp_brightness(pct),
            }),
            ..LightPut::default()
        };
        Ok(handles_from_acks(self.client.update_light(id, &body).await?))
    }

    /// Set a light's color from a `#rrggbb` display color. The hex value
    /// carries both chromaticity and brightness through the conversion.
    pub async fn set_color(&self, id: &Uuid, hex: &str) -> Result<Vec<ResourceHandle>, CoreError> {
        let (x, y, brightness) =
            color::hex_to_xy(hex).map_err(|e| CoreError::InvalidInput {
                field: "color",
                reason: e.to_string(),
            })?;

        let body = LightPut {
            color: Some(ColorState {
                xy: XyColor { x, y },
            }),
            dimming: Some(Dimming {
                brightness: color::clamp_brightness(brightness),
            }),
            ..LightPut::default()
        };
        Ok(handles_from_acks(self.client.update_light(id, &body).await?))
    }

    /// Set color temperature in mirek, silently clamped to `[153, 500]`.
    pub async fn set_color_temperature(
        &self,
        id: &Uuid,
        mirek: u16,
    ) -> Result<Vec<ResourceHandle>, CoreError> {
        let body = LightPut {
            color_temperature: Some(ColorTemperature {
                mirek: Some(color::clamp_mirek(mirek)),
            }),
            ..LightPut::default()
        };
        Ok(handles_from_acks(self.client.update_light(id, &body).await?))
    }

    // ── Room mutations (via the grouped-light surface) ───────────────

    pub async fn set_room_power(
        &self,
        room_id: &Uuid,
        on: bool,
    ) -> Result<Vec<ResourceHandle>, CoreError> {
        let grouped = self.room_grouped_light(room_id).await?;
        let body = GroupedLightPut {
            on: Some(OnState { on }),
            ..GroupedLightPut::default()
        };
        Ok(handles_from_acks(
            self.client.update_grouped_light(&grouped, &body).await?,
        ))
    }

    pub async fn set_room_brightness(
        &self,
        room_id: &Uuid,
        pct: f64,
    ) -> Result<Vec<ResourceHandle>, CoreError> {
        let grouped = self.room_grouped_light(room_id).await?;
        let body = GroupedLightPut {
            dimming: Some(Dimming {
                brightness: color::clamp_brightness(pct),
            }),
            ..GroupedLightPut::default()
        };
        Ok(handles_from_acks(
            self.client.update_grouped_light(&grouped, &body).await?,
        ))
    }

    /// Resolve a room's grouped-light id, re-fetching the room.
    async fn room_grouped_light(&self, room_id: &Uuid) -> Result<Uuid, CoreError> {
        let room: Room = self
            .client
            .get_room(room_id)
            .await?
            .map(Room::from)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "room",
                identifier: room_id.to_string(),
            })?;

        room.grouped_light
            .ok_or(CoreError::RoomUncontrollable { name: room.name })
    }

    // ── Scenes ───────────────────────────────────────────────────────

    /// Recall a scene onto its member lights. `action` defaults to
    /// [`RecallAction::Active`] at the CLI layer; `duration_ms` is the
    /// optional transition time.
    pub async fn activate_scene(
        &self,
        id: &Uuid,
        action: RecallAction,
        duration_ms: Option<u32>,
    ) -> Result<Vec<ResourceHandle>, CoreError> {
        let recall = SceneRecall {
            action,
            duration: duration_ms,
        };
        Ok(handles_from_acks(self.client.recall_scene(id, recall).await?))
    }
}

// ── Discovery & pairing (thin wrappers over huectl-api) ──────────────

pub use huectl_api::DiscoveredBridge;

/// Query the public discovery endpoint for bridges on this network.
pub async fn discover_bridges() -> Result<Vec<DiscoveredBridge>, CoreError> {
    Ok(huectl_api::discover().await?)
}

/// Run the link-button pairing handshake against `host`.
///
/// Returns [`CoreError::PairingRejected`] until the button is pressed;
/// callers own the prompt-and-retry loop.
pub async fn pair_bridge(
    host: &str,
    app_name: &str,
    instance_name: &str,
) -> Result<SecretString, CoreError> {
    let transport = TransportConfig::default();
    Ok(huectl_api::pair(host, app_name, instance_name, &transport).await?)
}
