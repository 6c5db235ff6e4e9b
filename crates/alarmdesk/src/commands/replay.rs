//! Replay a JSON command script against the seeded desk.

use std::fmt::Write;

use serde::Serialize;
use tabled::Tabled;

use alarmdesk_core::{
    AlarmBreakdown, AuditReport, CommandOutcome, CoreError, Desk, SystemStats,
};

use crate::cli::{GlobalOpts, ReplayArgs};
use crate::error::CliError;
use crate::output;

use super::{stats, util};

#[derive(Serialize)]
struct ReplayReport {
    steps: Vec<CommandOutcome>,
    stats: SystemStats,
    breakdown: AlarmBreakdown,
    audit: AuditReport,
}

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Command")]
    command: &'static str,
    #[tabled(rename = "Result")]
    result: &'static str,
}

fn detail(r: &ReplayReport) -> String {
    let rows: Vec<StepRow> = r
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| StepRow {
            index: i + 1,
            command: step.command.name(),
            result: step.result.as_str(),
        })
        .collect();

    let b = &r.breakdown;
    let mut out = String::new();
    let _ = writeln!(out, "{}", output::render_table(&rows));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Alarms: {} total | {} new | {} in progress | {} resolved | {} critical",
        b.total, b.new, b.in_progress, b.resolved, b.critical
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", stats::detail(&r.stats));
    let _ = writeln!(out);
    if r.audit.is_consistent() {
        let _ = write!(out, "Audit: assignments and rosters agree");
    } else {
        let _ = write!(out, "Audit: {} finding(s)", r.audit.findings.len());
        for finding in &r.audit.findings {
            let _ = write!(out, "\n  - {finding}");
        }
    }
    out
}

pub fn handle(desk: &Desk, args: &ReplayArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let script = util::read_input(&args.file)?;
    let commands = Desk::parse_script(&script).map_err(|err| match err {
        CoreError::Script { message } => CliError::Script {
            path: args.file.display().to_string(),
            message,
        },
        other => other.into(),
    })?;

    tracing::info!(steps = commands.len(), "replaying command script");
    let steps = desk.replay(commands);

    let report = ReplayReport {
        steps,
        stats: desk.store().stats(),
        breakdown: desk.store().breakdown(),
        audit: desk.store().audit(),
    };
    let out = output::render_single(global.format(), &report, detail, |r| {
        r.steps
            .iter()
            .map(|s| format!("{} {}", s.command.name(), s.result.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

