//! Bridge discovery and pairing handlers.
//!
//! Pairing is the one flow with a user-driven retry: the bridge refuses
//! until its physical link button is pressed, so we prompt and ask
//! again instead of backing off automatically.

use std::time::Duration;

use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use secrecy::ExposeSecret;
use tabled::Tabled;

use huectl_core::{CoreError, DiscoveredBridge, discover_bridges, pair_bridge};

use crate::cli::{BridgeArgs, BridgeCommand, GlobalOpts, OutputFormat};
use crate::config::{load_settings_or_default, pairing_host, save_settings};
use crate::error::CliError;
use crate::output;

const APP_NAME: &str = "huectl";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BridgeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Port")]
    port: String,
}

impl From<&DiscoveredBridge> for BridgeRow {
    fn from(b: &DiscoveredBridge) -> Self {
        Self {
            id: b.id.clone(),
            address: b.internal_ip_address.clone(),
            port: b.port.map(|p| p.to_string()).unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: BridgeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        BridgeCommand::Discover => discover(global).await,
        BridgeCommand::Pair { host, no_save } => pair(host, no_save, global).await,
    }
}

async fn discover(global: &GlobalOpts) -> Result<(), CliError> {
    let spinner = maybe_spinner(global, "Querying discovery service...");
    let result = discover_bridges().await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    let bridges = result.map_err(CliError::from)?;
    if bridges.is_empty() {
        output::print_output(
            "No bridges found. Is this network the bridge's network?",
            global.quiet,
        );
        return Ok(());
    }

    let out = output::render_list(&global.output, &bridges, |b| BridgeRow::from(b), |b| {
        b.internal_ip_address.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

async fn pair(host: Option<String>, no_save: bool, global: &GlobalOpts) -> Result<(), CliError> {
    let host = pairing_host(host, global)?;
    let instance = hostname();

    output::print_output(
        &format!("Pairing with bridge at {host} as {APP_NAME}#{instance}"),
        global.quiet,
    );

    let key = loop {
        let spinner = maybe_spinner(global, "Requesting application key...");
        let attempt = pair_bridge(&host, APP_NAME, &instance).await;
        if let Some(s) = spinner {
            s.finish_and_clear();
        }

        match attempt {
            Ok(key) => break key,
            Err(err @ CoreError::PairingRejected) => {
                // Retry is user-driven: press the button, confirm, go again.
                let retry = interactive(global)
                    && Confirm::new()
                        .with_prompt("Link button not pressed. Press it now and retry?")
                        .default(true)
                        .interact()
                        .unwrap_or(false);
                if !retry {
                    return Err(err.into());
                }
            }
            Err(err) => return Err(err.into()),
        }
    };

    if no_save {
        // The caller owns the key; print it even in quiet mode.
        println!("{}", key.expose_secret());
        return Ok(());
    }

    let mut settings = load_settings_or_default();
    settings.bridge = Some(host.clone());
    settings.key = Some(key.expose_secret().to_owned());
    save_settings(&settings)?;

    output::print_output(
        &format!("Paired. Credentials for {host} written to settings."),
        global.quiet,
    );
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────

fn interactive(global: &GlobalOpts) -> bool {
    use std::io::IsTerminal;
    !global.quiet && std::io::stderr().is_terminal()
}

fn maybe_spinner(global: &GlobalOpts, message: &str) -> Option<ProgressBar> {
    if !matches!(global.output, OutputFormat::Table) || !interactive(global) {
        return None;
    }
    let spinner = ProgressBar::new_spinner().with_message(message.to_owned());
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

fn hostname() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "cli".into())
}
