use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color;

/// Current color state of a light, in the bridge's native space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightColor {
    /// CIE 1931 xy chromaticity, both in `[0, 1]`.
    pub x: f64,
    pub y: f64,
}

/// A single light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub id: Uuid,
    pub name: String,
    pub archetype: Option<String>,
    pub on: bool,
    /// Brightness percent, absent on non-dimmable lights.
    pub brightness: Option<f64>,
    pub color: Option<LightColor>,
    /// Mirek color temperature, absent when in xy color mode.
    pub color_temperature_mirek: Option<u16>,
    /// The device that owns this light service.
    pub owner_device: Option<Uuid>,
}

impl Light {
    /// Display color as `#rrggbb`, when the light reports xy color.
    pub fn display_hex(&self) -> Option<String> {
        self.color
            .map(|c| color::xy_to_hex(c.x, c.y, self.brightness.unwrap_or(100.0)))
    }
}
