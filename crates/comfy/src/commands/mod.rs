//! Command dispatch: bridges CLI args to controller operations and output.

pub mod config_cmd;
pub mod devices;

use comfy_core::{ClimateSession, Controller};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a session-bound command to the appropriate handler.
pub async fn dispatch<S: ClimateSession>(
    cmd: Command,
    controller: &Controller<S>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::List => devices::list(controller).await,
        Command::Get { device } => devices::get(controller, device, global).await,
        Command::Set(args) => devices::set(controller, args, global).await,
        Command::Dump { device } => devices::dump(controller, device, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
