//! Command dispatch: bridges CLI args -> Bridge facade calls -> output.

pub mod bridge_cmd;
pub mod config_cmd;
pub mod lights;
pub mod rooms;
pub mod scenes;
pub mod util;

use huectl_core::Bridge;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a bridge-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, bridge: &Bridge, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Lights(args) => lights::handle(bridge, args, global).await,
        Command::Rooms(args) => rooms::handle(bridge, args, global).await,
        Command::Scenes(args) => scenes::handle(bridge, args, global).await,
        // Config, Bridge, and Completions are handled before dispatch
        Command::Config(_) | Command::Bridge(_) | Command::Completions(_) => unreachable!(),
    }
}
