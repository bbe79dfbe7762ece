// ── Wire -> domain conversion ──
//
// CLIP v2 payload shapes stay in huectl-api; everything consumers touch
// is a domain type from `crate::model`. Conversions are lossy on
// purpose: attributes this tool does not control (effects, gradients,
// gamut metadata) are dropped here.

use huectl_api::types::{GroupedLightGet, LightGet, ResourceIdentifier, RoomGet, SceneGet};

use crate::model::{GroupedLight, Light, LightColor, ResourceHandle, Room, Scene};

impl From<LightGet> for Light {
    fn from(raw: LightGet) -> Self {
        Self {
            id: raw.id,
            name: raw.metadata.name,
            archetype: raw.metadata.archetype,
            on: raw.on.on,
            brightness: raw.dimming.map(|d| d.brightness),
            color: raw.color.map(|c| LightColor {
                x: c.xy.x,
                y: c.xy.y,
            }),
            color_temperature_mirek: raw.color_temperature.and_then(|ct| ct.mirek),
            owner_device: raw.owner.map(|o| o.rid),
        }
    }
}

impl From<RoomGet> for Room {
    fn from(raw: RoomGet) -> Self {
        // The aggregate control surface is the first grouped_light
        // service; the bridge lists at most one per room.
        let grouped_light = raw
            .services
            .iter()
            .find(|s| s.rtype == "grouped_light")
            .map(|s| s.rid);

        Self {
            id: raw.id,
            name: raw.metadata.name,
            archetype: raw.metadata.archetype,
            grouped_light,
            devices: raw
                .children
                .into_iter()
                .filter(|c| c.rtype == "device")
                .map(|c| c.rid)
                .collect(),
        }
    }
}

impl From<GroupedLightGet> for GroupedLight {
    fn from(raw: GroupedLightGet) -> Self {
        Self {
            id: raw.id,
            on: raw.on.on,
            brightness: raw.dimming.map(|d| d.brightness),
        }
    }
}

impl From<SceneGet> for Scene {
    fn from(raw: SceneGet) -> Self {
        Self {
            id: raw.id,
            name: raw.metadata.name,
            room: raw
                .group
                .as_ref()
                .filter(|g| g.rtype == "room")
                .map(|g| g.rid),
        }
    }
}

/// Convert mutation acks, dropping identifiers of kinds this tool does
/// not model.
pub fn handles_from_acks(acks: Vec<ResourceIdentifier>) -> Vec<ResourceHandle> {
    acks.into_iter()
        .filter_map(|ack| ResourceHandle::from_wire(ack.rid, &ack.rtype))
        .collect()
}
