//! Room command handlers. Room mutations go through the room's
//! grouped-light surface; the facade resolves that indirection.

use tabled::Tabled;

use huectl_core::{Bridge, Room};

use crate::cli::{GlobalOpts, RoomsArgs, RoomsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Archetype")]
    archetype: String,
    #[tabled(rename = "Devices")]
    devices: String,
    #[tabled(rename = "Controllable")]
    controllable: String,
}

impl From<&Room> for RoomRow {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name.clone(),
            archetype: r.archetype.clone().unwrap_or_default(),
            devices: r.devices.len().to_string(),
            controllable: if r.grouped_light.is_some() {
                "yes".into()
            } else {
                "no".into()
            },
        }
    }
}

fn detail(r: &Room) -> String {
    let mut lines = vec![
        format!("ID:            {}", r.id),
        format!("Name:          {}", r.name),
        format!("Archetype:     {}", r.archetype.as_deref().unwrap_or("-")),
        format!("Devices:       {}", r.devices.len()),
    ];
    match r.grouped_light {
        Some(id) => lines.push(format!("Grouped light: {id}")),
        None => lines.push("Grouped light: - (room not controllable)".into()),
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(bridge: &Bridge, args: RoomsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        RoomsCommand::List => {
            let rooms = bridge.rooms().await?;
            let out =
                output::render_list(&global.output, &rooms, |r| RoomRow::from(r), |r| r.id.to_string());
            output::print_output(&out, global.quiet);
        }

        RoomsCommand::Get { id } => {
            let id = util::parse_id(&id)?;
            let room = bridge.room(&id).await?.ok_or_else(|| CliError::NotFound {
                entity_type: "room".into(),
                identifier: id.to_string(),
            })?;
            let out = output::render_single(&global.output, &room, detail, |r| r.id.to_string());
            output::print_output(&out, global.quiet);
        }

        RoomsCommand::On { id } => {
            let id = util::parse_id(&id)?;
            let handles = bridge.set_room_power(&id, true).await?;
            output::print_output(&util::ack_line(&handles), global.quiet);
        }

        RoomsCommand::Off { id } => {
            let id = util::parse_id(&id)?;
            let handles = bridge.set_room_power(&id, false).await?;
            output::print_output(&util::ack_line(&handles), global.quiet);
        }

        RoomsCommand::Brightness { id, percent } => {
            let id = util::parse_id(&id)?;
            let handles = bridge.set_room_brightness(&id, percent).await?;
            output::print_output(&util::ack_line(&handles), global.quiet);
        }
    }

    Ok(())
}
