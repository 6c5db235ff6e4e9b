// ── Read-side queries ──
//
// Everything here reads snapshots and never mutates the store.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::DataStore;
use crate::model::{Alarm, AlarmBreakdown, Cso, EntityId, RosterSummary, SystemStats};
use crate::stream::{AlarmFilter, AlarmQuery, CsoFilter};

impl DataStore {
    /// Alarms matching `query`, in store order.
    pub fn alarms_matching(&self, query: &AlarmQuery) -> Vec<Arc<Alarm>> {
        self.alarms_snapshot()
            .iter()
            .filter(|a| query.matches(a))
            .cloned()
            .collect()
    }

    pub fn csos_matching(&self, filter: &CsoFilter) -> Vec<Arc<Cso>> {
        self.csos_snapshot()
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect()
    }

    /// Alarms whose `assigned_cso` is `cso_id`. Reads the alarm side, so a
    /// stale roster entry on the operator does not show up here.
    pub fn alarms_for_cso(&self, cso_id: &EntityId) -> Vec<Arc<Alarm>> {
        self.alarms_matching(&AlarmQuery::new(AlarmFilter::AssignedTo(cso_id.clone())))
    }

    /// Operators that may take `alarm`: everyone available, plus whoever
    /// holds it now.
    pub fn eligible_operators(&self, alarm: &Alarm) -> Vec<Arc<Cso>> {
        self.csos_snapshot()
            .iter()
            .filter(|c| c.is_available() || alarm.assigned_cso.as_ref() == Some(&c.id))
            .cloned()
            .collect()
    }

    /// Up to `limit` alarms, newest first.
    pub fn recent_alarms(&self, limit: usize) -> Vec<Arc<Alarm>> {
        let mut alarms: Vec<Arc<Alarm>> = self.alarms_snapshot().iter().cloned().collect();
        alarms.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        alarms.truncate(limit);
        alarms
    }

    pub fn breakdown(&self) -> AlarmBreakdown {
        AlarmBreakdown::from_alarms(self.alarms_snapshot().as_slice())
    }

    pub fn roster_summary(&self) -> RosterSummary {
        RosterSummary::from_csos(self.csos_snapshot().as_slice())
    }

    /// Stats derived from the current lists, without touching the stored
    /// snapshot.
    pub fn derive_stats(&self, now: DateTime<Utc>) -> SystemStats {
        SystemStats::derive(
            self.alarms_snapshot().as_slice(),
            self.csos_snapshot().as_slice(),
            now,
        )
    }
}
