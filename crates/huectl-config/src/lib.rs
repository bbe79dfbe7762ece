//! Shared configuration for the huectl CLI.
//!
//! Two layered credential sources with a fixed precedence: the tool's
//! own settings store (TOML + `HUE_*` environment), then a per-user
//! YAML credentials file. Resolution is best-effort by contract --
//! an unreadable or malformed source falls through silently, and a
//! missing pair is reported as "not configured", never as an error.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

// ── Error ───────────────────────────────────────────────────────────

/// Errors from settings persistence. Note that credential *resolution*
/// never returns these -- only explicit load/save operations do.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings store ──────────────────────────────────────────────────

/// The tool's own settings: bridge identity plus CLI defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Bridge host or IP.
    pub bridge: Option<String>,

    /// Application key issued during pairing.
    pub key: Option<String>,

    /// CLI defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    10
}

// ── Paths ───────────────────────────────────────────────────────────

/// Resolve the settings file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "huectl", "huectl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("huectl");
    p
}

/// Fixed per-user path of the fallback YAML credentials file.
pub fn fallback_path() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".hue-credentials.yaml");
    p
}

// ── Settings loading / saving ───────────────────────────────────────

/// Load settings from file + environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("HUE_"));

    Ok(figment.extract()?)
}

/// Load settings, returning defaults if loading fails.
pub fn load_settings_or_default() -> Settings {
    load_settings().unwrap_or_default()
}

/// Serialize settings to TOML and write to the canonical config path.
pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(settings)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// A complete bridge identity: where to connect and how to authenticate.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub bridge: String,
    pub key: SecretString,
}

/// Shape of the fallback YAML file: optional `bridge` and `key` fields.
#[derive(Debug, Deserialize)]
struct FallbackFile {
    bridge: Option<String>,
    key: Option<String>,
}

/// Resolve credentials from the default sources.
///
/// `None` means "not configured" -- callers route the user to setup
/// (discovery + pairing), they never see an error from this path.
pub fn resolve_credentials() -> Option<Credentials> {
    resolve_from(&load_settings_or_default(), &fallback_path())
}

/// Resolution against explicit inputs (tests inject paths here).
///
/// Precedence: the settings store wins when it carries a complete pair;
/// the YAML file is consulted only otherwise. A source with only one of
/// the two fields is incomplete and skipped entirely.
pub fn resolve_from(settings: &Settings, fallback: &Path) -> Option<Credentials> {
    if let Some(creds) = complete_pair(settings.bridge.as_deref(), settings.key.as_deref()) {
        return Some(creds);
    }

    read_fallback_file(fallback)
}

fn complete_pair(bridge: Option<&str>, key: Option<&str>) -> Option<Credentials> {
    match (bridge, key) {
        (Some(bridge), Some(key)) if !bridge.is_empty() && !key.is_empty() => Some(Credentials {
            bridge: bridge.to_owned(),
            key: SecretString::from(key.to_owned()),
        }),
        _ => None,
    }
}

/// Best-effort read of the fallback YAML file. Absent, unreadable, and
/// malformed all collapse to `None`.
fn read_fallback_file(path: &Path) -> Option<Credentials> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "fallback credentials file not readable");
            return None;
        }
    };

    let parsed: FallbackFile = match serde_yaml::from_str(&text) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "fallback credentials file not valid YAML");
            return None;
        }
    };

    complete_pair(parsed.bridge.as_deref(), parsed.key.as_deref())
}

// ── Tests ───────────────────────────────────────────────────────────
