//! Configuration inspection and editing.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{config_path, fallback_path, load_settings_or_default, save_settings};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            let out = format!(
                "settings: {}\nfallback: {}",
                config_path().display(),
                fallback_path().display()
            );
            output::print_output(&out, global.quiet);
        }

        ConfigCommand::Show => {
            let settings = load_settings_or_default();
            let key = match settings.key.as_deref() {
                Some(_) => "(set, redacted)",
                None => "(unset)",
            };
            let out = format!(
                "bridge:  {}\nkey:     {key}\noutput:  {}\ncolor:   {}\ntimeout: {}s",
                settings.bridge.as_deref().unwrap_or("(unset)"),
                settings.defaults.output,
                settings.defaults.color,
                settings.defaults.timeout,
            );
            output::print_output(&out, global.quiet);
        }

        ConfigCommand::Set { bridge, key } => {
            if bridge.is_none() && key.is_none() {
                return Err(CliError::Validation {
                    field: "set".into(),
                    reason: "pass at least one of --bridge / --key".into(),
                });
            }

            let mut settings = load_settings_or_default();
            if let Some(bridge) = bridge {
                settings.bridge = Some(bridge);
            }
            if let Some(key) = key {
                settings.key = Some(key);
            }
            save_settings(&settings)?;
            output::print_output("Settings updated.", global.quiet);
        }
    }

    Ok(())
}
