// ── Command API ──
//
// Every store mutation is also a serializable `Command`, so a session can be
// written down as JSON and replayed. `Desk::execute` routes each variant to
// the matching store action.

use serde::{Deserialize, Serialize};

use crate::model::{AlarmStatus, EntityId, NotificationLevel};

/// All write operations against the desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    // ── Alarm operations ─────────────────────────────────────────────
    /// Select an alarm by id, or clear the selection with `null`.
    SelectAlarm {
        alarm_id: Option<EntityId>,
    },
    UpdateAlarmStatus {
        alarm_id: EntityId,
        status: AlarmStatus,
    },
    AssignAlarm {
        alarm_id: EntityId,
        cso_id: EntityId,
    },
    AddAlarmNote {
        alarm_id: EntityId,
        content: String,
        /// Defaults to the desk's configured operator name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },

    // ── Desk operations ──────────────────────────────────────────────
    InitializeMockData,
    RecomputeStats,
    AddNotification {
        level: NotificationLevel,
        title: String,
        message: String,
    },
    MarkNotificationRead {
        id: EntityId,
    },
}

impl Command {
    /// Parse a JSON array of commands.
    pub fn parse_script(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The `command` tag this variant serializes with.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectAlarm { .. } => "select_alarm",
            Self::UpdateAlarmStatus { .. } => "update_alarm_status",
            Self::AssignAlarm { .. } => "assign_alarm",
            Self::AddAlarmNote { .. } => "add_alarm_note",
            Self::InitializeMockData => "initialize_mock_data",
            Self::RecomputeStats => "recompute_stats",
            Self::AddNotification { .. } => "add_notification",
            Self::MarkNotificationRead { .. } => "mark_notification_read",
        }
    }
}

/// Outcome of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandResult {
    /// The store changed.
    Applied,
    /// The store was left as it was (unknown id, blank note, repeat read).
    Ignored,
}

impl CommandResult {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Ignored => "ignored",
        }
    }
}

impl From<bool> for CommandResult {
    fn from(applied: bool) -> Self {
        if applied { Self::Applied } else { Self::Ignored }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn script_parses_tagged_commands() {
        let script = r#"[
            {"command": "update_alarm_status", "alarm_id": "alarm-001", "status": "in_progress"},
            {"command": "assign_alarm", "alarm_id": "alarm-001", "cso_id": "cso-003"},
            {"command": "add_alarm_note", "alarm_id": "alarm-001", "content": "On it"},
            {"command": "select_alarm", "alarm_id": null},
            {"command": "recompute_stats"}
        ]"#;

        let commands = Command::parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::UpdateAlarmStatus {
                    alarm_id: EntityId::from("alarm-001"),
                    status: AlarmStatus::InProgress,
                },
                Command::AssignAlarm {
                    alarm_id: EntityId::from("alarm-001"),
                    cso_id: EntityId::from("cso-003"),
                },
                Command::AddAlarmNote {
                    alarm_id: EntityId::from("alarm-001"),
                    content: "On it".into(),
                    author: None,
                },
                Command::SelectAlarm { alarm_id: None },
                Command::RecomputeStats,
            ]
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = Command::parse_script(r#"[{"command": "delete_everything"}]"#).unwrap_err();
        assert!(err.to_string().contains("delete_everything"));
    }

    #[test]
    fn name_matches_serialized_tag() {
        let cmd = Command::MarkNotificationRead {
            id: EntityId::from("notif-001"),
        };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["command"], cmd.name());
    }
}
