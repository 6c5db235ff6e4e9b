// ── Runtime desk configuration ──
//
// Plain values handed in by the CLI. Core never reads config files.

use std::time::Duration;

/// Operator name used for notes when the caller does not supply one.
pub const DEFAULT_OPERATOR_NAME: &str = "Current CSO";
pub const DEFAULT_RECENT_LIMIT: usize = 5;
pub const DEFAULT_ADVISOR_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Author recorded on notes added through the desk.
    pub operator_name: String,
    /// How many alarms the dashboard's "recent" list shows.
    pub recent_limit: usize,
    /// Simulated latency of the AI advisor.
    pub advisor_delay: Duration,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            operator_name: DEFAULT_OPERATOR_NAME.into(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            advisor_delay: DEFAULT_ADVISOR_DELAY,
        }
    }
}
