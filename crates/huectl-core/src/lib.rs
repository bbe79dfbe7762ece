//! Domain model and bridge facade for huectl.
//!
//! Sits between the wire-level `huectl-api` crate and the CLI: domain
//! types, wire conversion, the `Bridge` facade with clamped convenience
//! setters, the color codec, and the room-grouping helper. Consumers
//! of this crate never touch CLIP v2 payload shapes.

pub mod bridge;
pub mod color;
pub mod config;
pub mod convert;
pub mod error;
pub mod grouping;
pub mod model;

pub use bridge::{Bridge, DiscoveredBridge, discover_bridges, pair_bridge};
pub use config::{BridgeConfig, TlsVerification};
pub use error::CoreError;
pub use grouping::{RoomBucket, group_by_room};
pub use model::{GroupedLight, Light, LightColor, ResourceHandle, ResourceKind, Room, Scene};

// The CLI selects a recall action; re-exported so consumers stay off
// the wire crate.
pub use huectl_api::types::RecallAction;
