//! Scene command handlers.

use std::collections::HashMap;

use owo_colors::OwoColorize;
use tabled::Tabled;
use uuid::Uuid;

use huectl_core::{Bridge, RecallAction, Scene, group_by_room};

use crate::cli::{GlobalOpts, RecallActionArg, ScenesArgs, ScenesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SceneRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Room")]
    room: String,
}

fn scene_row(s: &Scene, room_names: &HashMap<Uuid, String>) -> SceneRow {
    SceneRow {
        id: s.id.to_string(),
        name: s.name.clone(),
        room: s
            .room
            .and_then(|id| room_names.get(&id).cloned())
            .unwrap_or_default(),
    }
}

fn detail(s: &Scene) -> String {
    [
        format!("ID:   {}", s.id),
        format!("Name: {}", s.name),
        format!(
            "Room: {}",
            s.room.map_or_else(|| "-".into(), |id| id.to_string())
        ),
    ]
    .join("\n")
}

fn recall_action(arg: RecallActionArg) -> RecallAction {
    match arg {
        RecallActionArg::Active => RecallAction::Active,
        RecallActionArg::DynamicPalette => RecallAction::DynamicPalette,
        RecallActionArg::Static => RecallAction::Static,
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(bridge: &Bridge, args: ScenesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ScenesCommand::List { by_room } => {
            let scenes = bridge.scenes().await?;
            let rooms = bridge.rooms().await?;
            let room_names: HashMap<Uuid, String> =
                rooms.into_iter().map(|r| (r.id, r.name)).collect();

            if by_room {
                let out = render_grouped(&scenes, &room_names, global);
                output::print_output(&out, global.quiet);
            } else {
                let out = output::render_list(
                    &global.output,
                    &scenes,
                    |s| scene_row(s, &room_names),
                    |s| s.id.to_string(),
                );
                output::print_output(&out, global.quiet);
            }
        }

        ScenesCommand::Get { id } => {
            let id = util::parse_id(&id)?;
            let scene = bridge.scene(&id).await?.ok_or_else(|| CliError::NotFound {
                entity_type: "scene".into(),
                identifier: id.to_string(),
            })?;
            let out = output::render_single(&global.output, &scene, detail, |s| s.id.to_string());
            output::print_output(&out, global.quiet);
        }

        ScenesCommand::Activate {
            id,
            action,
            duration_ms,
        } => {
            let id = util::parse_id(&id)?;
            let handles = bridge
                .activate_scene(&id, recall_action(action), duration_ms)
                .await?;
            output::print_output(&util::ack_line(&handles), global.quiet);
        }
    }

    Ok(())
}

/// Render scenes grouped under room headings, unassigned last.
fn render_grouped(
    scenes: &[Scene],
    room_names: &HashMap<Uuid, String>,
    global: &GlobalOpts,
) -> String {
    // A room reference that doesn't resolve to a known room counts as
    // unassigned, so all orphans share one bucket.
    let buckets = group_by_room(scenes.iter().cloned(), |s| {
        s.room.filter(|id| room_names.contains_key(id))
    });
    let colored = output::should_color(&global.color);

    let mut sections = Vec::new();
    for bucket in buckets {
        let heading = bucket
            .room
            .and_then(|id| room_names.get(&id).cloned())
            .unwrap_or_else(|| "Unassigned".into());
        let heading = if colored {
            heading.bold().to_string()
        } else {
            heading
        };

        let body = bucket
            .items
            .iter()
            .map(|s| format!("  {}  {}", s.id, s.name))
            .collect::<Vec<_>>()
            .join("\n");

        sections.push(format!("{heading}\n{body}"));
    }

    sections.join("\n\n")
}
