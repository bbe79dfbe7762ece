// CLIP v2 HTTP client
//
// Wraps `reqwest::Client` with Hue-specific URL construction and
// `{ errors, data }` envelope unwrapping. Endpoint modules (lights,
// groups, scenes) are implemented as inherent methods via separate
// files to keep this module focused on transport mechanics.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{Envelope, ResourceIdentifier};

/// Authenticated client for a Hue bridge's CLIP v2 API.
///
/// Holds one `reqwest::Client` built at construction (connection pool,
/// TLS mode, timeout, and the `hue-application-key` header are all fixed
/// from then on) and the bridge base URL. Immutable after construction;
/// cheap to share by reference.
pub struct BridgeClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl BridgeClient {
    /// Build a client for `https://{host}` that sends the application
    /// key on every request.
    pub fn new(
        host: &str,
        application_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value = HeaderValue::from_str(application_key.expose_secret())
            .map_err(|e| Error::Tls(format!("invalid application key header value: {e}")))?;
        key_value.set_sensitive(true);
        headers.insert("hue-application-key", key_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Url::parse(&format!("https://{host}"))?;

        Ok(Self {
            http,
            base_url,
            timeout_secs: transport.timeout.as_secs(),
        })
    }

    /// Wrap an existing `reqwest::Client` and base URL (caller manages
    /// auth headers). Used by tests to point at a mock server.
    pub fn with_client(http: reqwest::Client, base_url: Url, timeout_secs: u64) -> Self {
        Self {
            http,
            base_url,
            timeout_secs,
        }
    }

    /// The bridge base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a resource URL: `{base}/clip/v2/resource/{path}`.
    pub(crate) fn resource_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/clip/v2/resource/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET and unwrap the envelope into the `data` array.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        let url = self.resource_url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(|e| self.classify_send(e))?;
        self.parse_envelope(resp).await
    }

    /// Send a PUT with a partial-resource JSON body and return the
    /// bridge's acknowledgment identifiers.
    pub(crate) async fn put<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<ResourceIdentifier>, Error> {
        let url = self.resource_url(path)?;
        debug!("PUT {url}");

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify_send(e))?;
        self.parse_envelope(resp).await
    }

    // ── Response classification ──────────────────────────────────────

    /// Distinguish a timeout from other transport-level send failures.
    fn classify_send(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(e)
        }
    }

    /// Classify a response in fixed priority order:
    /// HTTP status >= 400, then JSON parse failure, then a non-empty
    /// `errors` array, then success. The status check comes first --
    /// a 404 with a JSON error body is an HTTP error, never an API error.
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Vec<T>, Error> {
        let status = resp.status();

        if status.as_u16() >= 400 {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                body: truncate(&body, 200).to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            Error::Deserialization {
                message: format!("{e} (body preview: {:?})", truncate(&body, 200)),
                body: body.clone(),
            }
        })?;

        if let Some(first) = envelope.errors.first() {
            return Err(Error::Api {
                description: first.description.clone(),
                status: status.as_u16(),
                errors: envelope.errors,
            });
        }

        Ok(envelope.data)
    }
}

/// Clip a body preview to at most `max` bytes on a char boundary.
pub(crate) fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
