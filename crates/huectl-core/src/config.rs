// ── Runtime connection configuration ──
//
// These types describe *how* to reach a bridge. They carry credential
// data and connection tuning, but never touch disk. The CLI constructs
// a `BridgeConfig` from resolved credentials and hands it in.

use std::time::Duration;

use secrecy::SecretString;

use huectl_api::{REQUEST_TIMEOUT, TlsMode};

/// TLS verification strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Skip verification. Default for bridges: they ship self-signed
    /// certificates, so local traffic is trust-on-first-use.
    #[default]
    DangerAcceptInvalid,
}

impl From<TlsVerification> for TlsMode {
    fn from(tls: TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => Self::System,
            TlsVerification::DangerAcceptInvalid => Self::DangerAcceptInvalid,
        }
    }
}

/// Configuration for connecting to a single bridge.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Bridge host or IP (e.g. `192.168.0.124`). HTTPS on 443 implied.
    pub host: String,
    /// Application key issued during pairing.
    pub application_key: SecretString,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout for general calls.
    pub timeout: Duration,
}

impl BridgeConfig {
    /// Config with default TLS and timeout for the given identity.
    pub fn new(host: impl Into<String>, application_key: SecretString) -> Self {
        Self {
            host: host.into(),
            application_key,
            tls: TlsVerification::default(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}
