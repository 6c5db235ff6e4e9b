//! Operator (CSO) command handlers.

use std::fmt::Write;
use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use alarmdesk_core::{Alarm, Cso, CsoFilter, Desk, PerformanceGrade, RosterSummary};

use crate::cli::{GlobalOpts, OperatorsArgs, OperatorsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CsoRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Alarms")]
    alarms: usize,
    #[tabled(rename = "Avg Response")]
    response: String,
    #[tabled(rename = "Accuracy")]
    accuracy: String,
    #[tabled(rename = "AI Assist")]
    assistance: String,
}

impl CsoRow {
    fn new(c: &Cso, color: bool) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            status: output::paint_cso_status(c.status, color),
            alarms: c.current_alarms.len(),
            response: format!("{}s", c.performance.average_response_time),
            accuracy: format!("{}% ({})", c.performance.accuracy, c.grade()),
            assistance: c.ai_assistance_level.to_string(),
        }
    }
}

// ── Detail view ─────────────────────────────────────────────────────

/// An operator with their grade and the alarms that point at them.
#[derive(Serialize)]
struct CsoDetail {
    #[serde(flatten)]
    cso: Arc<Cso>,
    grade: PerformanceGrade,
    assigned_alarms: Vec<Arc<Alarm>>,
}

fn detail(d: &CsoDetail) -> String {
    let c = &d.cso;
    let mut out = String::new();
    let _ = writeln!(out, "ID:          {}", c.id);
    let _ = writeln!(out, "Name:        {}", c.name);
    let _ = writeln!(out, "Email:       {}", c.email);
    let _ = writeln!(out, "Status:      {}", c.status);
    let _ = writeln!(out, "AI assist:   {}", c.ai_assistance_level);
    let _ = writeln!(
        out,
        "Performance: {}% accuracy ({}), {}s avg response, {} handled",
        c.performance.accuracy,
        d.grade,
        c.performance.average_response_time,
        c.performance.alarms_handled
    );
    let roster: Vec<String> = c.current_alarms.iter().map(ToString::to_string).collect();
    let _ = writeln!(
        out,
        "Roster:      {}",
        if roster.is_empty() { "-".into() } else { roster.join(", ") }
    );
    let _ = write!(out, "Assigned:    ");
    if d.assigned_alarms.is_empty() {
        let _ = write!(out, "-");
    }
    for alarm in &d.assigned_alarms {
        let _ = write!(
            out,
            "\n  {} {} {} - {}",
            alarm.id, alarm.priority, alarm.status, alarm.location.address
        );
    }
    out
}

fn summary_detail(s: &RosterSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Operators:      {}", s.total);
    let _ = writeln!(out, "Available:      {}", s.available);
    let _ = writeln!(out, "Busy:           {}", s.busy);
    let _ = writeln!(out, "Avg accuracy:   {}%", s.average_accuracy);
    let _ = write!(out, "Alarms handled: {}", s.total_alarms_handled);
    out
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(desk: &Desk, args: OperatorsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        OperatorsCommand::List { available } => {
            let filter = if available {
                CsoFilter::Available
            } else {
                CsoFilter::All
            };
            let csos = desk.store().csos_matching(&filter);
            let color = output::should_color(global.color_mode());
            let out = output::render_list(
                global.format(),
                &csos,
                |c| CsoRow::new(c, color),
                |c| c.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OperatorsCommand::Get { id } => {
            let cso = util::require_cso(desk, &id)?;
            let detail_view = CsoDetail {
                grade: cso.grade(),
                assigned_alarms: desk.store().alarms_for_cso(&cso.id),
                cso,
            };
            let out = output::render_single(global.format(), &detail_view, detail, |d| {
                d.cso.id.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OperatorsCommand::Summary => {
            let summary = desk.store().roster_summary();
            let out = output::render_single(global.format(), &summary, summary_detail, |s| {
                s.total.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
