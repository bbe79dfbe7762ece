//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text. This is the single place where propagated failures become
//! something a user reads.

use miette::Diagnostic;
use thiserror::Error;

use huectl_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_CONFIGURED: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PAIRING: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("No bridge configured")]
    #[diagnostic(
        code(huectl::not_configured),
        help(
            "Find your bridge and pair with it:\n  \
             huectl bridge discover\n  \
             huectl bridge pair <host>\n\
             Or pass --bridge and --key / set HUE_BRIDGE and HUE_KEY."
        )
    )]
    NotConfigured,

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(huectl::validation))]
    Validation { field: String, reason: String },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to bridge at {host}")]
    #[diagnostic(
        code(huectl::connection_failed),
        help(
            "Check that the bridge is powered and reachable on your LAN.\n\
             Reported cause: {reason}"
        )
    )]
    ConnectionFailed { host: String, reason: String },

    #[error("Request timed out after {timeout_secs}s")]
    #[diagnostic(
        code(huectl::timeout),
        help("The bridge did not answer in time. Raise --timeout or check the network.")
    )]
    Timeout { timeout_secs: u64 },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{entity_type} '{identifier}' not found")]
    #[diagnostic(
        code(huectl::not_found),
        help("List known ids with the matching `list` subcommand.")
    )]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("Room '{name}' has no grouped light to control")]
    #[diagnostic(
        code(huectl::room_uncontrollable),
        help("Assign at least one light to the room in the Hue app first.")
    )]
    RoomUncontrollable { name: String },

    // ── Pairing ──────────────────────────────────────────────────────
    #[error("Pairing rejected: the bridge's link button has not been pressed")]
    #[diagnostic(
        code(huectl::pairing_rejected),
        help("Press the round button on top of the bridge, then run the command again.")
    )]
    PairingRejected,

    // ── Bridge API ───────────────────────────────────────────────────
    #[error("Bridge error: {message}")]
    #[diagnostic(code(huectl::api))]
    Api {
        message: String,
        status: Option<u16>,
    },

    // ── Local IO ─────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    #[diagnostic(code(huectl::config))]
    Config(String),

    #[error("{0}")]
    #[diagnostic(code(huectl::internal))]
    Internal(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => exit_code::USAGE,
            Self::NotConfigured => exit_code::NOT_CONFIGURED,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::PairingRejected => exit_code::PAIRING,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotConfigured => Self::NotConfigured,
            CoreError::Config { message } => Self::Config(message),
            CoreError::ConnectionFailed { host, reason } => Self::ConnectionFailed { host, reason },
            CoreError::Timeout { timeout_secs } => Self::Timeout { timeout_secs },
            CoreError::NotFound {
                entity_type,
                identifier,
            } => Self::NotFound {
                entity_type: entity_type.to_owned(),
                identifier,
            },
            CoreError::RoomUncontrollable { name } => Self::RoomUncontrollable { name },
            CoreError::Api { message, status } => Self::Api { message, status },
            CoreError::PairingRejected => Self::PairingRejected,
            CoreError::InvalidInput { field, reason } => Self::Validation {
                field: field.to_owned(),
                reason,
            },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

impl From<huectl_config::ConfigError> for CliError {
    fn from(err: huectl_config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
