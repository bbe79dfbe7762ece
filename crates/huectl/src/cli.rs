//! Clap derive structures for the `huectl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This file is also included by build.rs for man-page generation, so
//! it must depend on nothing beyond clap + clap_complete. Resource ids
//! stay `String` here; handlers parse them into UUIDs.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// huectl -- control Philips Hue lights from the command line
#[derive(Debug, Parser)]
#[command(
    name = "huectl",
    version,
    about = "Control Philips Hue lights, rooms, and scenes from the command line",
    long_about = "A CLI for the Philips Hue bridge's local CLIP v2 API.\n\n\
        Talks HTTPS directly to the bridge on your LAN. Start with\n\
        `huectl bridge discover` and `huectl bridge pair` to set up.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Bridge host or IP (overrides configuration)
    #[arg(long, short = 'b', env = "HUE_BRIDGE", global = true)]
    pub bridge: Option<String>,

    /// Application key (overrides configuration)
    #[arg(long, env = "HUE_KEY", global = true, hide_env = true)]
    pub key: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HUE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Verify the bridge's TLS certificate against the system store
    /// (bridges ship self-signed certificates, so this usually fails)
    #[arg(long, env = "HUE_VERIFY_TLS", global = true)]
    pub verify_tls: bool,

    /// Request timeout in seconds
    #[arg(long, env = "HUE_TIMEOUT", default_value = "10", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect and control individual lights
    #[command(alias = "light", alias = "l")]
    Lights(LightsArgs),

    /// Inspect and control rooms (grouped lights)
    #[command(alias = "room", alias = "r")]
    Rooms(RoomsArgs),

    /// List and recall scenes
    #[command(alias = "scene", alias = "s")]
    Scenes(ScenesArgs),

    /// Discover and pair with bridges
    Bridge(BridgeArgs),

    /// Inspect and edit huectl configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Lights ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LightsArgs {
    #[command(subcommand)]
    pub command: LightsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LightsCommand {
    /// List all lights
    #[command(alias = "ls")]
    List,

    /// Show one light
    Get { id: String },

    /// Turn a light on
    On { id: String },

    /// Turn a light off
    Off { id: String },

    /// Flip a light's power state
    Toggle { id: String },

    /// Set brightness percent (clamped to 1-100)
    #[command(alias = "bri")]
    Brightness { id: String, percent: f64 },

    /// Set color from a hex value like '#ff8800'
    Color { id: String, hex: String },

    /// Set color temperature in mirek (clamped to 153-500)
    #[command(alias = "ct")]
    Temperature { id: String, mirek: u16 },
}

// ── Rooms ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List all rooms
    #[command(alias = "ls")]
    List,

    /// Show one room
    Get { id: String },

    /// Turn every light in a room on
    On { id: String },

    /// Turn every light in a room off
    Off { id: String },

    /// Set the room's aggregate brightness percent (clamped to 1-100)
    #[command(alias = "bri")]
    Brightness { id: String, percent: f64 },
}

// ── Scenes ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ScenesArgs {
    #[command(subcommand)]
    pub command: ScenesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScenesCommand {
    /// List all scenes
    #[command(alias = "ls")]
    List {
        /// Group scenes under their room
        #[arg(long)]
        by_room: bool,
    },

    /// Show one scene
    Get { id: String },

    /// Recall a scene onto its room's lights
    #[command(alias = "recall")]
    Activate {
        id: String,

        /// Recall mode
        #[arg(long, value_enum, default_value = "active")]
        action: RecallActionArg,

        /// Transition duration in milliseconds
        #[arg(long)]
        duration_ms: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecallActionArg {
    /// Apply the scene's stored light states
    Active,
    /// Start the scene's dynamic palette
    DynamicPalette,
    /// Apply without starting dynamics
    Static,
}

// ── Bridge ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BridgeArgs {
    #[command(subcommand)]
    pub command: BridgeCommand,
}

#[derive(Debug, Subcommand)]
pub enum BridgeCommand {
    /// Find bridges on this network via the cloud discovery service
    Discover,

    /// Pair with a bridge (press its link button when prompted)
    Pair {
        /// Bridge host or IP. Defaults to the configured/--bridge value.
        host: Option<String>,

        /// Do not write the issued key into huectl's settings
        #[arg(long)]
        no_save: bool,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the configuration file paths
    Path,

    /// Show the effective settings (key redacted)
    Show,

    /// Write bridge identity into the settings store
    Set {
        #[arg(long)]
        bridge: Option<String>,

        #[arg(long)]
        key: Option<String>,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
