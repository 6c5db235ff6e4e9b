// ── Desk facade ──
//
// Owns the store and the desk configuration. Consumers (the CLI, a replay
// script) go through here for command routing and the simulated advisor.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::advisor::{self, AiRecommendation};
use crate::command::{Command, CommandResult};
use crate::config::DeskConfig;
use crate::error::CoreError;
use crate::model::{Alarm, AlarmBreakdown, Cso, EntityId, SystemStats};
use crate::store::DataStore;

/// What the dashboard view shows in one read.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub breakdown: AlarmBreakdown,
    pub stats: SystemStats,
    pub recent_alarms: Vec<Arc<Alarm>>,
}

/// One step of a replayed script.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutcome {
    pub command: Command,
    pub result: CommandResult,
}

/// Cheaply cloneable handle to a store plus its configuration.
#[derive(Clone)]
pub struct Desk {
    store: Arc<DataStore>,
    config: Arc<DeskConfig>,
}

impl Desk {
    /// A desk over an empty store.
    pub fn new(config: DeskConfig) -> Self {
        Self {
            store: Arc::new(DataStore::new()),
            config: Arc::new(config),
        }
    }

    /// A desk whose store already holds the demonstration dataset.
    pub fn with_mock_data(config: DeskConfig) -> Self {
        let desk = Self::new(config);
        desk.store.initialize_mock_data();
        desk
    }

    pub fn store(&self) -> &Arc<DataStore> {
        &self.store
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    // ── Command routing ──────────────────────────────────────────────

    /// Apply one command to the store.
    pub fn execute(&self, command: Command) -> CommandResult {
        let name = command.name();
        let result = match command {
            Command::SelectAlarm { alarm_id: None } => {
                self.store.set_selected_alarm(None);
                CommandResult::Applied
            }
            Command::SelectAlarm {
                alarm_id: Some(alarm_id),
            } => match self.store.alarm_by_id(&alarm_id) {
                Some(alarm) => {
                    self.store.set_selected_alarm(Some((*alarm).clone()));
                    CommandResult::Applied
                }
                None => CommandResult::Ignored,
            },
            Command::UpdateAlarmStatus { alarm_id, status } => {
                self.store.update_alarm_status(&alarm_id, status).into()
            }
            Command::AssignAlarm { alarm_id, cso_id } => {
                self.store.assign_alarm_to_cso(&alarm_id, &cso_id).into()
            }
            Command::AddAlarmNote {
                alarm_id,
                content,
                author,
            } => {
                let author = author.as_deref().unwrap_or(&self.config.operator_name);
                self.store
                    .add_alarm_note(&alarm_id, &content, author)
                    .is_some()
                    .into()
            }
            Command::InitializeMockData => {
                self.store.initialize_mock_data();
                CommandResult::Applied
            }
            Command::RecomputeStats => {
                self.store.recompute_stats();
                CommandResult::Applied
            }
            Command::AddNotification {
                level,
                title,
                message,
            } => {
                self.store.add_notification(level, title, message);
                CommandResult::Applied
            }
            Command::MarkNotificationRead { id } => self.store.mark_notification_read(&id).into(),
        };
        debug!(command = name, ?result, "executed command");
        result
    }

    /// Apply `commands` in order. A command that is ignored does not stop
    /// the ones after it.
    pub fn replay(&self, commands: impl IntoIterator<Item = Command>) -> Vec<CommandOutcome> {
        commands
            .into_iter()
            .map(|command| {
                let result = self.execute(command.clone());
                CommandOutcome { command, result }
            })
            .collect()
    }

    /// Parse a JSON command script. Nothing is applied.
    pub fn parse_script(json: &str) -> Result<Vec<Command>, CoreError> {
        Ok(Command::parse_script(json)?)
    }

    // ── Read helpers ─────────────────────────────────────────────────

    /// Strict alarm lookup.
    pub fn alarm(&self, id: &EntityId) -> Result<Arc<Alarm>, CoreError> {
        self.store
            .alarm_by_id(id)
            .ok_or_else(|| CoreError::alarm_not_found(id))
    }

    /// Strict operator lookup.
    pub fn cso(&self, id: &EntityId) -> Result<Arc<Cso>, CoreError> {
        self.store
            .cso_by_id(id)
            .ok_or_else(|| CoreError::cso_not_found(id))
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            breakdown: self.store.breakdown(),
            stats: self.store.stats(),
            recent_alarms: self.store.recent_alarms(self.config.recent_limit),
        }
    }

    // ── Advisor ──────────────────────────────────────────────────────

    /// Ask the simulated triage agent about an alarm.
    ///
    /// Resolves after the configured advisor delay. The alarm id is not
    /// checked and the store is not touched.
    pub async fn recommend(&self, alarm_id: &EntityId) -> AiRecommendation {
        debug!(%alarm_id, delay = ?self.config.advisor_delay, "requesting recommendation");
        tokio::time::sleep(self.config.advisor_delay).await;

        let rec = advisor::recommend_with(alarm_id.clone(), Utc::now(), &mut rand::thread_rng());
        info!(
            %alarm_id,
            confidence = rec.confidence,
            recommendation = %rec.recommendation,
            "recommendation ready"
        );
        rec
    }
}

impl Default for Desk {
    fn default() -> Self {
        Self::new(DeskConfig::default())
    }
}
