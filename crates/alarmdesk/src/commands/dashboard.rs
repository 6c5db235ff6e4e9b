//! Dashboard command handler.

use std::fmt::Write;

use alarmdesk_core::{Dashboard, Desk};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::alarms::AlarmRow;
use super::stats;

fn detail(d: &Dashboard, color: bool) -> String {
    let b = &d.breakdown;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Alarms: {} total | {} new | {} in progress | {} resolved | {} critical",
        b.total, b.new, b.in_progress, b.resolved, b.critical
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", stats::detail(&d.stats));
    let _ = writeln!(out);
    let _ = writeln!(out, "Recent alarms:");
    let rows: Vec<AlarmRow> = d.recent_alarms.iter().map(|a| AlarmRow::new(a, color)).collect();
    let _ = write!(out, "{}", output::render_table(&rows));
    out
}

pub fn handle(desk: &Desk, global: &GlobalOpts) -> Result<(), CliError> {
    let dashboard = desk.dashboard();
    let color = output::should_color(global.color_mode());
    let out = output::render_single(
        global.format(),
        &dashboard,
        |d| detail(d, color),
        |d| {
            d.recent_alarms
                .iter()
                .map(|a| a.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        },
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
