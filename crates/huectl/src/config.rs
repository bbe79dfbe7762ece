//! CLI configuration — thin wrapper around `huectl_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--bridge, --key, --verify-tls).

use std::time::Duration;

use secrecy::SecretString;

use huectl_core::{BridgeConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use huectl_config::{
    Credentials, config_path, fallback_path, load_settings_or_default, save_settings,
};

// ── CLI-specific resolution ─────────────────────────────────────────

/// Resolve the bridge identity: CLI flags first (both must be present
/// to count as a pair), then the layered configuration sources. A
/// missing identity is the NotConfigured error, which routes the user
/// to the setup flow.
pub fn resolve_credentials(global: &GlobalOpts) -> Result<Credentials, CliError> {
    if let (Some(bridge), Some(key)) = (&global.bridge, &global.key) {
        return Ok(Credentials {
            bridge: bridge.clone(),
            key: SecretString::from(key.clone()),
        });
    }

    huectl_config::resolve_credentials().ok_or(CliError::NotConfigured)
}

/// Translate resolved credentials + global flags into a `BridgeConfig`.
pub fn bridge_config(global: &GlobalOpts) -> Result<BridgeConfig, CliError> {
    let creds = resolve_credentials(global)?;

    let tls = if global.verify_tls {
        TlsVerification::SystemDefaults
    } else {
        TlsVerification::DangerAcceptInvalid
    };

    Ok(BridgeConfig {
        host: creds.bridge,
        application_key: creds.key,
        tls,
        timeout: Duration::from_secs(global.timeout),
    })
}

/// The host to pair against: explicit argument, then --bridge / env,
/// then whatever the configuration already knows.
pub fn pairing_host(explicit: Option<String>, global: &GlobalOpts) -> Result<String, CliError> {
    explicit
        .or_else(|| global.bridge.clone())
        .or_else(|| huectl_config::resolve_credentials().map(|c| c.bridge))
        .or_else(|| load_settings_or_default().bridge)
        .ok_or(CliError::NotConfigured)
}
