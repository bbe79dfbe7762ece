use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored scene, recallable onto its room's lights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: Uuid,
    pub name: String,
    /// The room this scene belongs to. Scenes without a resolvable room
    /// land in the synthetic "unassigned" bucket when grouping.
    pub room: Option<Uuid>,
}
