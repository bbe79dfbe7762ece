//! Light command handlers.

use tabled::Tabled;

use huectl_core::{Bridge, Light};

use crate::cli::{GlobalOpts, LightsArgs, LightsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct LightRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Brightness")]
    brightness: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Mirek")]
    mirek: String,
}

impl From<&Light> for LightRow {
    fn from(l: &Light) -> Self {
        Self {
            id: l.id.to_string(),
            name: l.name.clone(),
            state: if l.on { "on".into() } else { "off".into() },
            brightness: l
                .brightness
                .map(|b| format!("{b:.0}%"))
                .unwrap_or_default(),
            color: l.display_hex().unwrap_or_default(),
            mirek: l
                .color_temperature_mirek
                .map(|m| m.to_string())
                .unwrap_or_default(),
        }
    }
}

fn detail(l: &Light) -> String {
    let mut lines = vec![
        format!("ID:         {}", l.id),
        format!("Name:       {}", l.name),
        format!("Archetype:  {}", l.archetype.as_deref().unwrap_or("-")),
        format!("State:      {}", if l.on { "on" } else { "off" }),
    ];
    if let Some(b) = l.brightness {
        lines.push(format!("Brightness: {b:.1}%"));
    }
    if let Some(c) = l.color {
        lines.push(format!("Color xy:   ({:.4}, {:.4})", c.x, c.y));
    }
    if let Some(hex) = l.display_hex() {
        lines.push(format!("Color hex:  {hex}"));
    }
    if let Some(m) = l.color_temperature_mirek {
        lines.push(format!("Mirek:      {m}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(bridge: &Bridge, args: LightsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        LightsCommand::List => {
            let lights = bridge.lights().await?;
            let out = output::render_list(
                &global.output,
                &lights,
                |l| LightRow::from(l),
                |l| l.id.to_string(),
            );
            output::print_output(&out, global.quiet);
        }

        LightsCommand::Get { id } => {
            let id = util::parse_id(&id)?;
            let light = bridge.light(&id).await?.ok_or_else(|| CliError::NotFound {
                entity_type: "light".into(),
                identifier: id.to_string(),
            })?;
            let out = output::render_single(&global.output, &light, detail, |l| l.id.to_string());
            output::print_output(&out, global.quiet);
        }

        LightsCommand::On { id } => {
            let id = util::parse_id(&id)?;
            let handles = bridge.set_power(&id, true).await?;
            output::print_output(&util::ack_line(&handles), global.quiet);
        }

        LightsCommand::Off { id } => {
            let id = util::parse_id(&id)?;
            let handles = bridge.set_power(&id, false).await?;
            output::print_output(&util::ack_line(&handles), global.quiet);
        }

        LightsCommand::Toggle { id } => {
            let id = util::parse_id(&id)?;
            let now_on = bridge.toggle(&id).await?;
            output::print_output(if now_on { "on" } else { "off" }, global.quiet);
        }

        LightsCommand::Brightness { id, percent } => {
            let id = util::parse_id(&id)?;
            let handles = bridge.set_brightness(&id, percent).await?;
            output::print_output(&util::ack_line(&handles), global.quiet);
        }

        LightsCommand::Color { id, hex } => {
            let id = util::parse_id(&id)?;
            let handles = bridge.set_color(&id, &hex).await?;
            output::print_output(&util::ack_line(&handles), global.quiet);
        }

        LightsCommand::Temperature { id, mirek } => {
            let id = util::parse_id(&id)?;
            let handles = bridge.set_color_temperature(&id, mirek).await?;
            output::print_output(&util::ack_line(&handles), global.quiet);
        }
    }

    Ok(())
}
