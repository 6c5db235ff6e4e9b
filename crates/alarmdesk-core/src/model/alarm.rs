// ── Alarm domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::entity_id::EntityId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AlarmType {
    Fire,
    Intrusion,
    Medical,
    Panic,
    Technical,
}

/// Alarm priority, ordered from least to most urgent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AlarmPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Lifecycle status. Transitions are unconstrained: any status may follow any
/// other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AlarmStatus {
    New,
    Acknowledged,
    InProgress,
    Dispatched,
    Resolved,
    FalseAlarm,
}

impl AlarmStatus {
    /// `resolved` and `false_alarm` close an alarm; everything else is active.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Resolved | Self::FalseAlarm)
    }

    /// Someone has picked the alarm up but it is not closed yet.
    pub fn is_in_progress(self) -> bool {
        matches!(self, Self::Acknowledged | Self::InProgress | Self::Dispatched)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub zone: Option<String>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub contact_person: Option<String>,
}

/// The sensor or panel that raised the alarm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmDevice {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub device_type: String,
    pub description: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Recommendation {
    Dispatch,
    Verify,
    Monitor,
    FalseAlarm,
}

/// Pre-computed analysis attached to an alarm when it is raised.
///
/// `risk_score` and `confidence` are percentages in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub risk_score: u8,
    pub confidence: u8,
    pub recommendation: Recommendation,
    pub reasoning: String,
    pub contextual_info: Vec<String>,
    pub predicted_outcome: String,
    pub suggested_actions: Vec<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NoteType {
    System,
    #[serde(rename = "cso", alias = "operator")]
    #[strum(to_string = "cso", serialize = "operator")]
    Operator,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmNote {
    pub id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub content: String,
    #[serde(rename = "type")]
    pub note_type: NoteType,
}

/// A reported security or safety event awaiting triage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: EntityId,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub alarm_type: AlarmType,
    pub priority: AlarmPriority,
    pub status: AlarmStatus,
    pub location: Location,
    pub customer: Customer,
    pub device: Option<AlarmDevice>,
    pub ai_analysis: Option<AiAnalysis>,
    /// Operator currently handling the alarm. Not guaranteed to exist in the
    /// roster; see `DataStore::audit`.
    pub assigned_cso: Option<EntityId>,
    #[serde(default)]
    pub notes: Vec<AlarmNote>,
    /// Seconds from raise to first response.
    pub response_time: Option<u32>,
}

impl AsRef<Alarm> for Alarm {
    fn as_ref(&self) -> &Alarm {
        self
    }
}

impl Alarm {
    pub fn is_active(&self) -> bool {
        !self.status.is_closed()
    }

    /// Case-insensitive match of `term` against address, customer name, and
    /// alarm type. An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.location.address.to_lowercase().contains(&needle)
            || self.customer.name.to_lowercase().contains(&needle)
            || self.alarm_type.as_ref().contains(&needle)
    }
}
