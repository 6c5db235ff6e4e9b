// ── Filter predicates for entity snapshots ──
//
// Used by the CLI to narrow snapshots without touching the store.

use serde::{Deserialize, Serialize};

use crate::model::{Alarm, AlarmPriority, AlarmStatus, Cso, CsoStatus, EntityId};

/// Filter predicate for alarm collections.
pub enum AlarmFilter {
    All,
    /// Status `new`.
    New,
    /// Priority `critical`.
    Critical,
    ByStatus(AlarmStatus),
    ByPriority(AlarmPriority),
    AssignedTo(EntityId),
    Custom(Box<dyn Fn(&Alarm) -> bool + Send + Sync>),
}

impl AlarmFilter {
    pub fn matches(&self, alarm: &Alarm) -> bool {
        match self {
            Self::All => true,
            Self::New => alarm.status == AlarmStatus::New,
            Self::Critical => alarm.priority == AlarmPriority::Critical,
            Self::ByStatus(s) => alarm.status == *s,
            Self::ByPriority(p) => alarm.priority == *p,
            Self::AssignedTo(cso) => alarm.assigned_cso.as_ref() == Some(cso),
            Self::Custom(f) => f(alarm),
        }
    }
}

/// The three quick filters offered on the alarm list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickFilter {
    #[default]
    All,
    New,
    Critical,
}

impl From<QuickFilter> for AlarmFilter {
    fn from(quick: QuickFilter) -> Self {
        match quick {
            QuickFilter::All => Self::All,
            QuickFilter::New => Self::New,
            QuickFilter::Critical => Self::Critical,
        }
    }
}

/// A filter combined with a free-text search term.
pub struct AlarmQuery {
    pub filter: AlarmFilter,
    pub search: String,
}

impl AlarmQuery {
    pub fn new(filter: impl Into<AlarmFilter>) -> Self {
        Self {
            filter: filter.into(),
            search: String::new(),
        }
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn matches(&self, alarm: &Alarm) -> bool {
        self.filter.matches(alarm) && alarm.matches_search(&self.search)
    }
}

impl Default for AlarmQuery {
    fn default() -> Self {
        Self::new(AlarmFilter::All)
    }
}

/// Filter predicate for operator collections.
pub enum CsoFilter {
    All,
    Available,
    ByStatus(CsoStatus),
    Custom(Box<dyn Fn(&Cso) -> bool + Send + Sync>),
}

impl CsoFilter {
    pub fn matches(&self, cso: &Cso) -> bool {
        match self {
            Self::All => true,
            Self::Available => cso.is_available(),
            Self::ByStatus(s) => cso.status == *s,
            Self::Custom(f) => f(cso),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::seed;

    fn ids(alarms: &[Alarm], query: &AlarmQuery) -> Vec<String> {
        alarms
            .iter()
            .filter(|a| query.matches(a))
            .map(|a| a.id.to_string())
            .collect()
    }

    #[test]
    fn quick_filters() {
        let data = seed::mock_dataset(Utc::now());
        assert_eq!(ids(&data.alarms, &AlarmQuery::new(QuickFilter::All)).len(), 3);
        assert_eq!(
            ids(&data.alarms, &AlarmQuery::new(QuickFilter::New)),
            ["alarm-001"]
        );
        assert_eq!(
            ids(&data.alarms, &AlarmQuery::new(QuickFilter::Critical)),
            ["alarm-001", "alarm-003"]
        );
    }

    #[test]
    fn search_matches_address_customer_and_type() {
        let data = seed::mock_dataset(Utc::now());
        let by = |term: &str| ids(&data.alarms, &AlarmQuery::default().search(term));

        assert_eq!(by("oak avenue"), ["alarm-002"]);
        assert_eq!(by("SUNSET"), ["alarm-003"]);
        assert_eq!(by("fire"), ["alarm-001"]);
        assert_eq!(by("   ").len(), 3);
        assert!(by("warehouse").is_empty());
    }

    #[test]
    fn filter_and_search_combine() {
        let data = seed::mock_dataset(Utc::now());
        let query = AlarmQuery::new(QuickFilter::Critical).search("senior");
        assert_eq!(ids(&data.alarms, &query), ["alarm-003"]);
    }

    #[test]
    fn assigned_to_reads_alarm_side() {
        let data = seed::mock_dataset(Utc::now());
        let query = AlarmQuery::new(AlarmFilter::AssignedTo(EntityId::from("cso-002")));
        assert_eq!(ids(&data.alarms, &query), ["alarm-003"]);
    }

    #[test]
    fn cso_filters() {
        let data = seed::mock_dataset(Utc::now());
        let available: Vec<_> = data
            .csos
            .iter()
            .filter(|c| CsoFilter::Available.matches(c))
            .collect();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "Emily Johnson");

        let custom = CsoFilter::Custom(Box::new(|c| c.performance.accuracy >= 94));
        assert_eq!(data.csos.iter().filter(|c| custom.matches(c)).count(), 2);
    }
}
