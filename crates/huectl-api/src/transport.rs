// Shared transport configuration for building reqwest::Client instances.
//
// The authenticated BridgeClient and the unauthenticated pairing flow
// share TLS and timeout settings through this module.

use std::time::Duration;

/// Default deadline for authenticated CLIP v2 calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for the pairing POST. Longer than the general ceiling --
/// some pairing flows block on a physical button press.
pub const PAIRING_TIMEOUT: Duration = Duration::from_secs(30);

/// TLS verification mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Accept any certificate. Hue bridges ship self-signed certificates,
    /// so local traffic is trust-on-first-use, not a verified channel.
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::DangerAcceptInvalid,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// A config suitable for the pairing handshake (longer deadline).
    pub fn for_pairing(mut self) -> Self {
        self.timeout = PAIRING_TIMEOUT;
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        self.builder()
            .build()
            .map_err(|e| crate::error::Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Build a `reqwest::Client` with additional default headers.
    ///
    /// Used by [`BridgeClient`](crate::BridgeClient) to inject the
    /// `hue-application-key` header on every request.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, crate::error::Error> {
        self.builder()
            .default_headers(headers)
            .build()
            .map_err(|e| crate::error::Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    fn builder(&self) -> reqwest::ClientBuilder {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("huectl/", env!("CARGO_PKG_VERSION")));

        if self.tls == TlsMode::DangerAcceptInvalid {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder
    }
}
