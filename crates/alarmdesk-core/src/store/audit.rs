// ── Assignment consistency audit ──
//
// The store never enforces that an alarm's `assigned_cso` and the operator's
// `current_alarms` agree. This module reports where they drift apart; it
// repairs nothing.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::DataStore;
use crate::model::EntityId;

/// One disagreement between the alarm list and the operator roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditFinding {
    /// The alarm points at an operator that does not exist.
    UnknownOperator { alarm: EntityId, cso: EntityId },
    /// The alarm points at an operator whose roster does not list it.
    MissingFromRoster { alarm: EntityId, cso: EntityId },
    /// A roster lists an alarm that does not exist.
    UnknownAlarm { cso: EntityId, alarm: EntityId },
    /// A roster lists an alarm that is assigned elsewhere, or to nobody.
    StaleRosterEntry {
        cso: EntityId,
        alarm: EntityId,
        assigned_to: Option<EntityId>,
    },
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOperator { alarm, cso } => {
                write!(f, "{alarm} is assigned to unknown operator {cso}")
            }
            Self::MissingFromRoster { alarm, cso } => {
                write!(f, "{alarm} is assigned to {cso} but missing from their roster")
            }
            Self::UnknownAlarm { cso, alarm } => {
                write!(f, "{cso} lists unknown alarm {alarm}")
            }
            Self::StaleRosterEntry {
                cso,
                alarm,
                assigned_to: Some(holder),
            } => write!(f, "{cso} lists {alarm}, which is assigned to {holder}"),
            Self::StaleRosterEntry {
                cso,
                alarm,
                assigned_to: None,
            } => write!(f, "{cso} lists {alarm}, which is unassigned"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub findings: Vec<AuditFinding>,
}

impl AuditReport {
    pub fn is_consistent(&self) -> bool {
        self.findings.is_empty()
    }
}

impl DataStore {
    /// Compare both sides of every assignment.
    ///
    /// Alarm-side findings come first (in alarm order), then roster-side
    /// findings (in operator order).
    pub fn audit(&self) -> AuditReport {
        let alarms = self.alarms_snapshot();
        let csos = self.csos_snapshot();

        let assignments: HashMap<&EntityId, Option<&EntityId>> = alarms
            .iter()
            .map(|a| (&a.id, a.assigned_cso.as_ref()))
            .collect();
        let rosters: HashMap<&EntityId, &Vec<EntityId>> =
            csos.iter().map(|c| (&c.id, &c.current_alarms)).collect();

        let mut findings = Vec::new();

        for alarm in alarms.iter() {
            let Some(cso) = alarm.assigned_cso.as_ref() else {
                continue;
            };
            match rosters.get(cso) {
                None => findings.push(AuditFinding::UnknownOperator {
                    alarm: alarm.id.clone(),
                    cso: cso.clone(),
                }),
                Some(roster) if !roster.contains(&alarm.id) => {
                    findings.push(AuditFinding::MissingFromRoster {
                        alarm: alarm.id.clone(),
                        cso: cso.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        for cso in csos.iter() {
            for alarm_id in &cso.current_alarms {
                match assignments.get(alarm_id) {
                    None => findings.push(AuditFinding::UnknownAlarm {
                        cso: cso.id.clone(),
                        alarm: alarm_id.clone(),
                    }),
                    Some(holder) if *holder != Some(&cso.id) => {
                        findings.push(AuditFinding::StaleRosterEntry {
                            cso: cso.id.clone(),
                            alarm: alarm_id.clone(),
                            assigned_to: holder.cloned(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        AuditReport { findings }
    }
}
