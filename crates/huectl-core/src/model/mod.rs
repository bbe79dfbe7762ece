// ── Domain model ──
//
// Bridge-owned resources mirrored locally as plain read/write records.
// This process holds no authoritative state: every accessor call
// re-fetches, and mutations return acknowledgment ids, not resources.

mod light;
mod room;
mod scene;

pub use light::{Light, LightColor};
pub use room::{GroupedLight, Room};
pub use scene::Scene;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// The resource kinds this tool speaks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Light,
    Room,
    GroupedLight,
    Scene,
    Device,
}

/// Acknowledgment for a successful mutation: which resource was touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHandle {
    pub id: Uuid,
    pub kind: ResourceKind,
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

impl ResourceHandle {
    /// Build from a wire `rid`/`rtype` pair. Unknown kinds return `None`
    /// (the bridge exposes many service types this tool does not model).
    pub fn from_wire(rid: Uuid, rtype: &str) -> Option<Self> {
        ResourceKind::from_str(rtype)
            .ok()
            .map(|kind| Self { id: rid, kind })
    }
}
