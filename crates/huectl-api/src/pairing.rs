// Link-button pairing handshake.
//
// POST /api is the one unauthenticated endpoint on the bridge: it
// identifies the client and, once the physical link button has been
// pressed, hands back a long-lived application key. The response is a
// bare array (pre-CLIP envelope shape), not `{ errors, data }`.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::client::truncate;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Error type the bridge reports while the link button is unpressed.
const LINK_BUTTON_NOT_PRESSED: u16 = 101;

#[derive(Serialize)]
struct PairRequest {
    devicetype: String,
    generateclientkey: bool,
}

#[derive(Deserialize)]
struct PairElement {
    success: Option<PairSuccess>,
    error: Option<PairError>,
}

#[derive(Deserialize)]
struct PairSuccess {
    username: String,
}

#[derive(Deserialize)]
struct PairError {
    #[serde(rename = "type")]
    error_type: u16,
    description: String,
}

/// Request an application key from the bridge at `host`.
///
/// `app_name` and `instance_name` combine into the `devicetype` the
/// bridge records against the issued key (`app_name#instance_name`).
/// Returns [`Error::LinkButtonNotPressed`] until the user presses the
/// bridge's physical button -- callers should prompt and retry, not
/// treat it as fatal. Any other bridge error surfaces verbatim.
pub async fn pair(
    host: &str,
    app_name: &str,
    instance_name: &str,
    transport: &TransportConfig,
) -> Result<SecretString, Error> {
    let http = transport.clone().for_pairing().build_client()?;
    let base_url = Url::parse(&format!("https://{host}"))?;
    pair_with_client(&http, &base_url, app_name, instance_name).await
}

/// Pairing against a caller-supplied client and base URL (tests).
pub async fn pair_with_client(
    http: &reqwest::Client,
    base_url: &Url,
    app_name: &str,
    instance_name: &str,
) -> Result<SecretString, Error> {
    let url = base_url.join("/api")?;
    debug!("POST {url} (pairing)");

    let body = PairRequest {
        devicetype: format!("{app_name}#{instance_name}"),
        generateclientkey: true,
    };

    let resp = http.post(url).json(&body).send().await.map_err(|e| {
        if e.is_timeout() {
            Error::Timeout {
                timeout_secs: crate::transport::PAIRING_TIMEOUT.as_secs(),
            }
        } else {
            Error::Transport(e)
        }
    })?;

    let status = resp.status();
    if status.as_u16() >= 400 {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Http {
            status: status.as_u16(),
            body: truncate(&body, 200).to_owned(),
        });
    }

    let body = resp.text().await.map_err(Error::Transport)?;
    let elements: Vec<PairElement> =
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", truncate(&body, 200)),
            body: body.clone(),
        })?;

    let Some(first) = elements.into_iter().next() else {
        return Err(Error::PairingResponse("empty response array".into()));
    };

    if let Some(success) = first.success {
        return Ok(SecretString::from(success.username));
    }

    match first.error {
        Some(err) if err.error_type == LINK_BUTTON_NOT_PRESSED => Err(Error::LinkButtonNotPressed),
        Some(err) => Err(Error::Api {
            description: err.description.clone(),
            status: status.as_u16(),
            errors: vec![crate::types::ApiErrorDetail {
                description: err.description,
            }],
        }),
        None => Err(Error::PairingResponse(
            "element carries neither success nor error".into(),
        )),
    }
}
