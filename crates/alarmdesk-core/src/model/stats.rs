// ── Derived statistics ──
//
// Everything here is computed from full alarm/operator snapshots on demand.
// Nothing is maintained incrementally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alarm::{Alarm, AlarmPriority, AlarmStatus};
use super::cso::{Cso, CsoStatus};

/// Headline numbers for the monitoring desk.
///
/// Percentages are whole numbers in `0..=100`. The store keeps one of these
/// as a snapshot that is only refreshed by `recompute_stats`, so it can lag
/// behind the lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStats {
    pub active_alarms: u32,
    pub total_alarms_today: u32,
    /// Seconds.
    pub average_response_time: u32,
    pub false_alarm_rate: u32,
    pub ai_accuracy: u32,
    pub cso_utilization: u32,
}

impl SystemStats {
    pub fn derive<A, C>(alarms: &[A], csos: &[C], now: DateTime<Utc>) -> Self
    where
        A: AsRef<Alarm>,
        C: AsRef<Cso>,
    {
        let alarms: Vec<&Alarm> = alarms.iter().map(AsRef::as_ref).collect();
        let csos: Vec<&Cso> = csos.iter().map(AsRef::as_ref).collect();

        let today = now.date_naive();
        let response_times: Vec<u64> = alarms
            .iter()
            .filter_map(|a| a.response_time.map(u64::from))
            .collect();
        let confidences: Vec<u64> = alarms
            .iter()
            .filter_map(|a| a.ai_analysis.as_ref().map(|ai| u64::from(ai.confidence)))
            .collect();
        let staffed = csos.iter().filter(|c| c.status != CsoStatus::Offline).count();
        let busy = csos.iter().filter(|c| c.status == CsoStatus::Busy).count();

        Self {
            active_alarms: count(alarms.iter().filter(|a| a.is_active()).count()),
            total_alarms_today: count(
                alarms
                    .iter()
                    .filter(|a| a.timestamp.date_naive() == today)
                    .count(),
            ),
            average_response_time: rounded_mean(&response_times),
            false_alarm_rate: percent(
                alarms
                    .iter()
                    .filter(|a| a.status == AlarmStatus::FalseAlarm)
                    .count(),
                alarms.len(),
            ),
            ai_accuracy: rounded_mean(&confidences),
            cso_utilization: percent(busy, staffed),
        }
    }
}

/// Alarm counters shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmBreakdown {
    pub total: u32,
    pub new: u32,
    pub in_progress: u32,
    pub resolved: u32,
    pub critical: u32,
}

impl AlarmBreakdown {
    pub fn from_alarms<A: AsRef<Alarm>>(alarms: &[A]) -> Self {
        let mut breakdown = Self {
            total: count(alarms.len()),
            ..Self::default()
        };
        for alarm in alarms.iter().map(AsRef::as_ref) {
            match alarm.status {
                AlarmStatus::New => breakdown.new += 1,
                AlarmStatus::Resolved => breakdown.resolved += 1,
                s if s.is_in_progress() => breakdown.in_progress += 1,
                _ => {}
            }
            if alarm.priority == AlarmPriority::Critical {
                breakdown.critical += 1;
            }
        }
        breakdown
    }
}

/// Operator roster counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub total: u32,
    pub available: u32,
    pub busy: u32,
    /// Rounded mean accuracy; 0 for an empty roster.
    pub average_accuracy: u32,
    pub total_alarms_handled: u32,
}

impl RosterSummary {
    pub fn from_csos<C: AsRef<Cso>>(csos: &[C]) -> Self {
        let csos: Vec<&Cso> = csos.iter().map(AsRef::as_ref).collect();
        let accuracies: Vec<u64> = csos
            .iter()
            .map(|c| u64::from(c.performance.accuracy))
            .collect();

        Self {
            total: count(csos.len()),
            available: count(csos.iter().filter(|c| c.is_available()).count()),
            busy: count(csos.iter().filter(|c| c.status == CsoStatus::Busy).count()),
            average_accuracy: rounded_mean(&accuracies),
            total_alarms_handled: csos
                .iter()
                .map(|c| c.performance.alarms_handled)
                .fold(0u32, u32::saturating_add),
        }
    }
}

// ── Integer helpers ─────────────────────────────────────────────────

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Mean rounded half-up, 0 for an empty slice.
fn rounded_mean(values: &[u64]) -> u32 {
    let n = values.len() as u64;
    if n == 0 {
        return 0;
    }
    let sum: u64 = values.iter().sum();
    u32::try_from((sum + n / 2) / n).unwrap_or(u32::MAX)
}

/// `part / whole` as a whole-number percentage rounded half-up, 0 when
/// `whole` is 0.
fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (part as u64, whole as u64);
    u32::try_from((part * 100 + whole / 2) / whole).unwrap_or(u32::MAX)
}
