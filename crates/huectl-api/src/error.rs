use thiserror::Error;

use crate::types::ApiErrorDetail;

/// Top-level error type for the `huectl-api` crate.
///
/// Covers every failure mode of the CLIP v2 surface: transport, HTTP,
/// payload parsing, bridge-reported API errors, and pairing.
/// `huectl-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, TLS handshake).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request exceeded its deadline. The in-flight connection is aborted.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS setup or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── HTTP / payload ──────────────────────────────────────────────
    /// HTTP status >= 400. Checked before any attempt to interpret the
    /// body as a success payload with embedded errors.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Bridge API ──────────────────────────────────────────────────
    /// Well-formed payload carrying a non-empty `errors` array.
    /// `description` is the first error's description; `errors` holds
    /// the full list as reported by the bridge.
    #[error("Bridge API error (HTTP {status}): {description}")]
    Api {
        description: String,
        status: u16,
        errors: Vec<ApiErrorDetail>,
    },

    // ── Pairing ─────────────────────────────────────────────────────
    /// Pairing was rejected because the bridge's link button has not
    /// been pressed (error type 101). Retryable by user action.
    #[error("Link button not pressed -- press the button on the bridge and retry")]
    LinkButtonNotPressed,

    /// Pairing response did not contain a success or error element.
    #[error("Unexpected pairing response: {0}")]
    PairingResponse(String),
}

impl Error {
    /// Returns `true` for failures at the connection level
    /// (DNS, socket, TLS handshake).
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect(),
            Self::Tls(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if pairing can succeed after the user presses
    /// the bridge's link button.
    pub fn is_retryable_by_user(&self) -> bool {
        matches!(self, Self::LinkButtonNotPressed)
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
