// ── Operator (CSO) domain types ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::entity_id::EntityId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CsoStatus {
    Available,
    Busy,
    Break,
    Offline,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AiAssistanceLevel {
    Minimal,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsoPerformance {
    /// Mean seconds to first response.
    pub average_response_time: u32,
    pub alarms_handled: u32,
    /// Percentage in `0..=100`.
    pub accuracy: u8,
}

/// Letter grade shown next to an operator's accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
pub enum PerformanceGrade {
    #[strum(to_string = "C")]
    C,
    #[strum(to_string = "B")]
    B,
    #[strum(to_string = "B+")]
    BPlus,
    #[strum(to_string = "A")]
    A,
    #[strum(to_string = "A+")]
    APlus,
}

impl PerformanceGrade {
    pub fn from_accuracy(accuracy: u8) -> Self {
        match accuracy {
            95.. => Self::APlus,
            90..=94 => Self::A,
            85..=89 => Self::BPlus,
            80..=84 => Self::B,
            _ => Self::C,
        }
    }
}

/// Central Station Operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cso {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub status: CsoStatus,
    /// Alarms this operator believes they hold. May drift from the alarm
    /// side after reassignment.
    #[serde(default)]
    pub current_alarms: Vec<EntityId>,
    pub performance: CsoPerformance,
    pub ai_assistance_level: AiAssistanceLevel,
}

impl AsRef<Cso> for Cso {
    fn as_ref(&self) -> &Cso {
        self
    }
}

impl Cso {
    pub fn is_available(&self) -> bool {
        self.status == CsoStatus::Available
    }

    pub fn grade(&self) -> PerformanceGrade {
        PerformanceGrade::from_accuracy(self.performance.accuracy)
    }
}
