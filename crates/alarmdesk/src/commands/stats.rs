//! Stats command handler.

use std::fmt::Write;

use alarmdesk_core::{Desk, SystemStats};

use crate::cli::{GlobalOpts, StatsArgs};
use crate::error::CliError;
use crate::output;

pub(super) fn detail(s: &SystemStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Active alarms:      {}", s.active_alarms);
    let _ = writeln!(out, "Alarms today:       {}", s.total_alarms_today);
    let _ = writeln!(out, "Avg response time:  {}s", s.average_response_time);
    let _ = writeln!(out, "False alarm rate:   {}%", s.false_alarm_rate);
    let _ = writeln!(out, "AI accuracy:        {}%", s.ai_accuracy);
    let _ = write!(out, "CSO utilization:    {}%", s.cso_utilization);
    out
}

pub fn handle(desk: &Desk, args: &StatsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let stats = if args.recompute {
        desk.store().recompute_stats()
    } else {
        desk.store().stats()
    };
    let out = output::render_single(global.format(), &stats, detail, |s| {
        s.active_alarms.to_string()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
