//! CLIP v2 wire types for the Hue bridge REST API.
//!
//! All types match the JSON payloads under `/clip/v2/resource/`.
//! GET shapes carry the full resource; PUT shapes are partial bodies
//! with `Option` fields so only the changed attributes serialize.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ── Envelope ─────────────────────────────────────────────────────────

/// Every CLIP v2 response wraps its payload in `{ errors, data }`.
/// A non-empty `errors` array means payload-level failure even when
/// the HTTP status is 200.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// A single bridge-reported error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub description: String,
}

/// Acknowledgment returned by a successful mutation: the id and type of
/// the touched resource, never the updated resource itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    pub rid: Uuid,
    pub rtype: String,
}

/// Reference to another resource (room children, scene group, services).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub rid: Uuid,
    pub rtype: String,
}

// ── Shared sub-objects ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnState {
    pub on: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimming {
    /// Brightness percentage. The bridge reports fractional percent;
    /// 0 is not a valid target (that is `on: false`).
    pub brightness: f64,
}

/// CIE 1931 xy chromaticity, both coordinates in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XyColor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorState {
    pub xy: XyColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTemperature {
    /// Reciprocal color temperature (1,000,000 / K), bridge range 153-500.
    /// `None` when the light is currently in xy color mode.
    pub mirek: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub archetype: Option<String>,
}

// ── Lights ───────────────────────────────────────────────────────────

/// Full light resource — from `GET /clip/v2/resource/light[/{id}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightGet {
    pub id: Uuid,
    pub owner: Option<ResourceRef>,
    pub metadata: Metadata,
    pub on: OnState,
    pub dimming: Option<Dimming>,
    pub color: Option<ColorState>,
    pub color_temperature: Option<ColorTemperature>,
    /// Catch-all for attributes not modeled above (effects, gradient, ...).
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Partial light update — body of `PUT /clip/v2/resource/light/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LightPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<OnState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimming: Option<Dimming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<ColorTemperature>,
}

// ── Rooms & grouped lights ───────────────────────────────────────────

/// Room resource — from `GET /clip/v2/resource/room[/{id}]`.
///
/// The aggregate on/off/brightness control surface is the `services`
/// entry with `rtype == "grouped_light"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomGet {
    pub id: Uuid,
    pub metadata: Metadata,
    #[serde(default)]
    pub children: Vec<ResourceRef>,
    #[serde(default)]
    pub services: Vec<ResourceRef>,
}

/// Grouped-light resource — from `GET /clip/v2/resource/grouped_light[/{id}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedLightGet {
    pub id: Uuid,
    pub owner: Option<ResourceRef>,
    pub on: OnState,
    pub dimming: Option<Dimming>,
}

/// Partial grouped-light update — body of `PUT /clip/v2/resource/grouped_light/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedLightPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<OnState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimming: Option<Dimming>,
}

// ── Scenes ───────────────────────────────────────────────────────────

/// Scene resource — from `GET /clip/v2/resource/scene[/{id}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGet {
    pub id: Uuid,
    pub metadata: Metadata,
    /// The room (or zone) this scene belongs to.
    pub group: Option<ResourceRef>,
    /// Per-light actions applied on recall — kept opaque.
    #[serde(default)]
    pub actions: Vec<Value>,
}

/// Recall action for scene activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecallAction {
    #[default]
    Active,
    DynamicPalette,
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SceneRecall {
    pub action: RecallAction,
    /// Transition duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Partial scene update — body of `PUT /clip/v2/resource/scene/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScenePut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall: Option<SceneRecall>,
}

impl Default for SceneRecall {
    fn default() -> Self {
        Self {
            action: RecallAction::Active,
            duration: None,
        }
    }
}
