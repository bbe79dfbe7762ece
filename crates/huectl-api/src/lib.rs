// huectl-api: Async Rust client for the Hue bridge CLIP v2 API

pub mod client;
pub mod discovery;
pub mod error;
pub mod pairing;
pub mod transport;
pub mod types;

mod groups;
mod lights;
mod scenes;

pub use client::BridgeClient;
pub use discovery::{DiscoveredBridge, discover};
pub use error::Error;
pub use pairing::pair;
pub use transport::{PAIRING_TIMEOUT, REQUEST_TIMEOUT, TlsMode, TransportConfig};
