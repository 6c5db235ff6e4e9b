//! Alarm command handlers.

use std::fmt::Write;
use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Tabled;

use alarmdesk_core::{
    AiRecommendation, Alarm, AlarmQuery, AlarmStatus, Command as DeskCommand, CommandResult, Desk,
    EntityId, QuickFilter, time_ago,
};

use crate::cli::{AlarmFilterArg, AlarmStatusArg, AlarmsArgs, AlarmsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<AlarmStatusArg> for AlarmStatus {
    fn from(arg: AlarmStatusArg) -> Self {
        match arg {
            AlarmStatusArg::New => Self::New,
            AlarmStatusArg::Acknowledged => Self::Acknowledged,
            AlarmStatusArg::InProgress => Self::InProgress,
            AlarmStatusArg::Dispatched => Self::Dispatched,
            AlarmStatusArg::Resolved => Self::Resolved,
            AlarmStatusArg::FalseAlarm => Self::FalseAlarm,
        }
    }
}

impl From<AlarmFilterArg> for QuickFilter {
    fn from(arg: AlarmFilterArg) -> Self {
        match arg {
            AlarmFilterArg::All => Self::All,
            AlarmFilterArg::New => Self::New,
            AlarmFilterArg::Critical => Self::Critical,
        }
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(super) struct AlarmRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Received")]
    received: String,
    #[tabled(rename = "Type")]
    alarm_type: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "CSO")]
    assigned: String,
}

impl AlarmRow {
    pub(super) fn new(a: &Alarm, color: bool) -> Self {
        Self {
            id: a.id.to_string(),
            received: time_ago(a.timestamp, Utc::now()),
            alarm_type: a.alarm_type.to_string(),
            priority: output::paint_priority(a.priority, color),
            status: output::paint_status(a.status, color),
            customer: a.customer.name.clone(),
            location: a.location.address.clone(),
            assigned: util::or_dash(a.assigned_cso.as_ref()),
        }
    }
}

// ── Detail views ────────────────────────────────────────────────────

fn detail(a: &Alarm) -> String {
    let now = Utc::now();
    let mut out = String::new();
    let _ = writeln!(out, "ID:         {}", a.id);
    let _ = writeln!(
        out,
        "Received:   {} ({})",
        a.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        time_ago(a.timestamp, now)
    );
    let _ = writeln!(out, "Type:       {}", a.alarm_type);
    let _ = writeln!(out, "Priority:   {}", a.priority);
    let _ = writeln!(out, "Status:     {}", a.status);
    let _ = writeln!(out, "Assigned:   {}", util::or_dash(a.assigned_cso.as_ref()));
    let _ = writeln!(out, "Response:   {}", util::or_dash(a.response_time.map(|s| format!("{s}s"))));
    let _ = writeln!(out, "Location:   {}", a.location.address);
    if let Some(zone) = &a.location.zone {
        let _ = writeln!(out, "Zone:       {zone}");
    }
    let _ = writeln!(out, "Customer:   {} ({})", a.customer.name, a.customer.phone);
    if let Some(contact) = &a.customer.contact_person {
        let _ = writeln!(out, "Contact:    {contact}");
    }
    if let Some(device) = &a.device {
        let _ = writeln!(out, "Device:     {} - {}", device.device_type, device.description);
    }

    if let Some(ai) = &a.ai_analysis {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "AI analysis: {} (risk {}, confidence {}%)",
            ai.recommendation, ai.risk_score, ai.confidence
        );
        let _ = writeln!(out, "  {}", ai.reasoning);
        let _ = writeln!(out, "  Predicted: {}", ai.predicted_outcome);
        for action in &ai.suggested_actions {
            let _ = writeln!(out, "  - {action}");
        }
    }

    let _ = writeln!(out);
    let _ = write!(out, "Notes ({}):", a.notes.len());
    for note in &a.notes {
        let _ = write!(
            out,
            "\n  [{}] {} ({}): {}",
            time_ago(note.timestamp, now),
            note.author,
            note.note_type,
            note.content
        );
    }
    out
}

fn recommendation_detail(rec: &AiRecommendation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Alarm:       {}", rec.alarm_id);
    let _ = writeln!(out, "Agent:       {}", rec.agent_type);
    let _ = writeln!(out, "Confidence:  {}%", rec.confidence);
    let _ = writeln!(out, "Verdict:     {}", rec.recommendation);
    let _ = writeln!(out, "\nReasoning:");
    for line in &rec.reasoning {
        let _ = writeln!(out, "  - {line}");
    }
    let _ = write!(out, "\nSuggested actions:");
    for action in &rec.suggested_actions {
        let _ = write!(out, "\n  - {action}");
    }
    out
}

fn print_alarm(desk: &Desk, id: &EntityId, global: &GlobalOpts) -> Result<(), CliError> {
    let alarm = desk.alarm(id)?;
    let out = output::render_single(global.format(), &*alarm, detail, |a| a.id.to_string())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(desk: &Desk, args: AlarmsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        AlarmsCommand::List { filter, search } => {
            let query =
                AlarmQuery::new(QuickFilter::from(filter)).search(search.unwrap_or_default());
            let alarms = desk.store().alarms_matching(&query);
            let color = output::should_color(global.color_mode());
            let out = output::render_list(
                global.format(),
                &alarms,
                |a| AlarmRow::new(a, color),
                |a| a.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AlarmsCommand::Get { id } => {
            let alarm = util::require_alarm(desk, &id)?;
            print_alarm(desk, &alarm.id, global)
        }

        AlarmsCommand::Status { id, status } => {
            let alarm = util::require_alarm(desk, &id)?;
            let status = AlarmStatus::from(status);
            desk.execute(DeskCommand::UpdateAlarmStatus {
                alarm_id: alarm.id.clone(),
                status,
            });
            if !global.quiet {
                eprintln!("Alarm {} is now {status}", alarm.id);
            }
            print_alarm(desk, &alarm.id, global)
        }

        AlarmsCommand::Assign { id, cso } => {
            let alarm = util::require_alarm(desk, &id)?;
            let cso = util::require_cso(desk, &cso)?;
            desk.execute(DeskCommand::AssignAlarm {
                alarm_id: alarm.id.clone(),
                cso_id: cso.id.clone(),
            });
            if !global.quiet {
                eprintln!("Alarm {} assigned to {} ({})", alarm.id, cso.name, cso.id);
            }
            print_alarm(desk, &alarm.id, global)
        }

        AlarmsCommand::Note {
            id,
            content,
            author,
        } => {
            let alarm = util::require_alarm(desk, &id)?;
            let result = desk.execute(DeskCommand::AddAlarmNote {
                alarm_id: alarm.id.clone(),
                content,
                author,
            });
            if result == CommandResult::Ignored {
                return Err(CliError::Validation {
                    field: "content".into(),
                    reason: "note text must not be blank".into(),
                });
            }
            if !global.quiet {
                eprintln!("Note added to alarm {}", alarm.id);
            }
            print_alarm(desk, &alarm.id, global)
        }

        AlarmsCommand::Recommend { id } => {
            let alarm_id = EntityId::from(id);
            let spinner = if global.quiet {
                ProgressBar::hidden()
            } else {
                ProgressBar::new_spinner()
            };
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message(format!("Asking the triage agent about {alarm_id}"));
            spinner.enable_steady_tick(Duration::from_millis(80));

            let rec = desk.recommend(&alarm_id).await;
            spinner.finish_and_clear();

            let out = output::render_single(global.format(), &rec, recommendation_detail, |r| {
                r.recommendation.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
