//! Shared helpers for command handlers.

use std::io::Read;
use std::path::Path;

use alarmdesk_core::{Alarm, Cso, Desk, EntityId};

use crate::error::CliError;

/// Look up an alarm, mapping a miss to a not-found error with a list hint.
pub fn require_alarm(desk: &Desk, identifier: &str) -> Result<std::sync::Arc<Alarm>, CliError> {
    Ok(desk.alarm(&EntityId::from(identifier))?)
}

/// Look up an operator, mapping a miss to a not-found error with a list hint.
pub fn require_cso(desk: &Desk, identifier: &str) -> Result<std::sync::Arc<Cso>, CliError> {
    Ok(desk.cso(&EntityId::from(identifier))?)
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal on stdin the prompt cannot be answered, so the caller
/// gets an error asking for `--yes` instead.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Render an optional value, or a dash.
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".into(), |v| v.to_string())
}
