// Cloud bridge discovery.
//
// One-shot GET against the public Hue discovery endpoint. The endpoint
// has a real certificate, so this uses system TLS regardless of the
// self-signed tolerance applied to bridge traffic. Descriptors are
// returned verbatim -- reachability checks are the caller's problem.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::{TlsMode, TransportConfig};

/// The fixed public discovery endpoint.
pub const DISCOVERY_URL: &str = "https://discovery.meethue.com/";

/// A bridge advertised by the discovery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredBridge {
    /// Bridge identifier (derived from its MAC).
    pub id: String,
    /// LAN address the bridge registered with the cloud.
    #[serde(rename = "internalipaddress")]
    pub internal_ip_address: String,
    #[serde(default)]
    pub port: Option<u16>,
}

/// Query the cloud discovery service for bridges on this network.
pub async fn discover() -> Result<Vec<DiscoveredBridge>, Error> {
    let transport = TransportConfig {
        tls: TlsMode::System,
        ..TransportConfig::default()
    };
    let http = transport.build_client()?;
    let url = Url::parse(DISCOVERY_URL)?;
    discover_with_client(&http, url).await
}

/// Discovery against a caller-supplied client and URL (tests).
pub async fn discover_with_client(
    http: &reqwest::Client,
    url: Url,
) -> Result<Vec<DiscoveredBridge>, Error> {
    debug!("GET {url} (discovery)");

    let resp = http.get(url).send().await.map_err(Error::Transport)?;

    let status = resp.status();
    if status.as_u16() >= 400 {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Http {
            status: status.as_u16(),
            body: crate::client::truncate(&body, 200).to_owned(),
        });
    }

    let body = resp.text().await.map_err(Error::Transport)?;
    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: format!(
            "{e} (body preview: {:?})",
            crate::client::truncate(&body, 200)
        ),
        body,
    })
}
