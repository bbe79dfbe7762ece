use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A room grouping of devices, with one grouped-light control surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub archetype: Option<String>,
    /// The room's aggregate on/off/brightness surface, when present.
    pub grouped_light: Option<Uuid>,
    /// Devices assigned to this room.
    pub devices: Vec<Uuid>,
}

/// Aggregate state of a room's lights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedLight {
    pub id: Uuid,
    pub on: bool,
    pub brightness: Option<f64>,
}
