// ── Core error types ──
//
// User-facing errors from huectl-core. Consumers never see raw reqwest
// errors directly -- the `From<huectl_api::Error>` impl translates
// transport-layer failures into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("No bridge configured")]
    NotConfigured,

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to bridge at {host}: {reason}")]
    ConnectionFailed { host: String, reason: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The room exists but exposes no grouped-light control surface.
    #[error("Room '{name}' has no grouped light to control")]
    RoomUncontrollable { name: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("Bridge error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Pairing ──────────────────────────────────────────────────────
    #[error("Pairing rejected: press the bridge's link button and retry")]
    PairingRejected,

    // ── Input ────────────────────────────────────────────────────────
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Returns `true` if pairing can succeed after the user presses
    /// the bridge's link button.
    pub fn is_retryable_by_user(&self) -> bool {
        matches!(self, Self::PairingRejected)
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<huectl_api::Error> for CoreError {
    fn from(err: huectl_api::Error) -> Self {
        match err {
            huectl_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        host: e
                            .url()
                            .and_then(|u| u.host_str().map(String::from))
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            huectl_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            huectl_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                host: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            huectl_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            huectl_api::Error::Http { status: 404, body } => CoreError::NotFound {
                entity_type: "resource",
                identifier: body,
            },
            huectl_api::Error::Http { status, body } => CoreError::Api {
                message: format!("HTTP {status}: {body}"),
                status: Some(status),
            },
            huectl_api::Error::Api {
                description,
                status,
                errors: _,
            } => CoreError::Api {
                message: description,
                status: Some(status),
            },
            huectl_api::Error::LinkButtonNotPressed => CoreError::PairingRejected,
            huectl_api::Error::PairingResponse(msg) => {
                CoreError::Internal(format!("unexpected pairing response: {msg}"))
            }
            huectl_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
