// ── Simulated triage advisor ──
//
// Stands in for a real AI agent: two canned verdicts, picked at random, with
// a confidence between 80 and 99. Never reads or writes the store.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::EntityId;

pub const TRIAGE_AGENT: &str = "triage";

/// Inclusive confidence bounds for a canned recommendation.
pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<u8> = 80..=99;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiRecommendation {
    pub alarm_id: EntityId,
    pub agent_type: String,
    pub timestamp: DateTime<Utc>,
    /// Percentage in [`CONFIDENCE_RANGE`].
    pub confidence: u8,
    pub recommendation: String,
    pub reasoning: Vec<String>,
    pub suggested_actions: Vec<String>,
}

struct CannedResponse {
    recommendation: &'static str,
    reasoning: [&'static str; 3],
    suggested_actions: [&'static str; 3],
}

const RESPONSES: [CannedResponse; 2] = [
    CannedResponse {
        recommendation: "High probability genuine alarm - recommend immediate dispatch",
        reasoning: [
            "Sensor pattern matches historical fire events",
            "No recent maintenance activity",
            "Customer has reliable alarm history",
        ],
        suggested_actions: [
            "Contact fire department",
            "Notify customer",
            "Monitor for updates",
        ],
    },
    CannedResponse {
        recommendation: "Possible false alarm - verify before dispatch",
        reasoning: [
            "Similar pattern detected in recent false alarms",
            "Maintenance scheduled today",
            "Weather conditions may affect sensors",
        ],
        suggested_actions: [
            "Contact customer first",
            "Check maintenance logs",
            "Monitor for 2 minutes before escalating",
        ],
    },
];

/// Every verdict the advisor can return.
pub fn canned_verdicts() -> impl Iterator<Item = &'static str> {
    RESPONSES.iter().map(|r| r.recommendation)
}

/// Build a recommendation for `alarm_id` using `rng` for the verdict and
/// confidence. The alarm is not looked up.
pub fn recommend_with<R: Rng + ?Sized>(
    alarm_id: EntityId,
    now: DateTime<Utc>,
    rng: &mut R,
) -> AiRecommendation {
    let response = &RESPONSES[rng.gen_range(0..RESPONSES.len())];
    let confidence = rng.gen_range(CONFIDENCE_RANGE);

    AiRecommendation {
        alarm_id,
        agent_type: TRIAGE_AGENT.into(),
        timestamp: now,
        confidence,
        recommendation: response.recommendation.into(),
        reasoning: response.reasoning.iter().map(|s| (*s).to_owned()).collect(),
        suggested_actions: response
            .suggested_actions
            .iter()
            .map(|s| (*s).to_owned())
            .collect(),
    }
}
