//! Audit command handler.

use tabled::Tabled;

use alarmdesk_core::{AuditFinding, Desk};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Finding")]
    finding: String,
}

fn kind(f: &AuditFinding) -> &'static str {
    match f {
        AuditFinding::UnknownOperator { .. } => "unknown_operator",
        AuditFinding::MissingFromRoster { .. } => "missing_from_roster",
        AuditFinding::UnknownAlarm { .. } => "unknown_alarm",
        AuditFinding::StaleRosterEntry { .. } => "stale_roster_entry",
    }
}

pub fn handle(desk: &Desk, global: &GlobalOpts) -> Result<(), CliError> {
    let report = desk.store().audit();
    if report.is_consistent() && !global.quiet {
        eprintln!("Assignments and rosters agree");
    }
    let out = output::render_list(
        global.format(),
        &report.findings,
        |f| FindingRow {
            kind: kind(f),
            finding: f.to_string(),
        },
        ToString::to_string,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
