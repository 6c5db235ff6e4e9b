//! Command dispatch: bridges CLI args -> desk operations -> output formatting.

pub mod alarms;
pub mod audit;
pub mod config_cmd;
pub mod dashboard;
pub mod notifications;
pub mod operators;
pub mod replay;
pub mod stats;
pub mod util;

use alarmdesk_core::Desk;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a desk-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, desk: &Desk, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Alarms(args) => alarms::handle(desk, args, global).await,
        Command::Operators(args) => operators::handle(desk, args, global),
        Command::Stats(args) => stats::handle(desk, &args, global),
        Command::Dashboard => dashboard::handle(desk, global),
        Command::Audit => audit::handle(desk, global),
        Command::Notifications(args) => notifications::handle(desk, args, global),
        Command::Replay(args) => replay::handle(desk, &args, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions do not run against a desk".into(),
        )),
    }
}
