// ── Fixed demonstration dataset ──
//
// Stands in for a monitoring backend. Timestamps are relative to the `now`
// passed in; every other field is constant, so reseeding always yields the
// same records.

use chrono::{DateTime, Duration, Utc};

use crate::model::{
    AiAnalysis, AiAssistanceLevel, Alarm, AlarmDevice, AlarmNote, AlarmPriority, AlarmStatus,
    AlarmType, Coordinates, Cso, CsoPerformance, CsoStatus, Customer, EntityId, Location, NoteType,
    Notification, NotificationLevel, Recommendation, SystemStats,
};

/// Number of alarms in the dataset.
pub const MOCK_ALARM_COUNT: usize = 3;
/// Number of operators in the dataset.
pub const MOCK_CSO_COUNT: usize = 3;

/// Everything `DataStore::initialize_mock_data` installs.
#[derive(Debug, Clone)]
pub struct MockDataset {
    pub alarms: Vec<Alarm>,
    pub csos: Vec<Cso>,
    pub stats: SystemStats,
    pub notifications: Vec<Notification>,
}

pub fn mock_dataset(now: DateTime<Utc>) -> MockDataset {
    MockDataset {
        alarms: mock_alarms(now),
        csos: mock_csos(),
        stats: SystemStats {
            active_alarms: 3,
            total_alarms_today: 47,
            average_response_time: 31,
            false_alarm_rate: 12,
            ai_accuracy: 89,
            cso_utilization: 67,
        },
        notifications: vec![Notification {
            id: EntityId::from("notif-001"),
            level: NotificationLevel::Info,
            title: "AI Agent Update".into(),
            message: "Triage agent performance improved by 5%".into(),
            timestamp: now - Duration::minutes(2),
            read: false,
        }],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn ai_note(id: &str, at: DateTime<Utc>, content: &str) -> AlarmNote {
    AlarmNote {
        id: EntityId::from(id),
        timestamp: at,
        author: "AI Agent".into(),
        content: content.into(),
        note_type: NoteType::Ai,
    }
}

fn operator_note(id: &str, at: DateTime<Utc>, author: &str, content: &str) -> AlarmNote {
    AlarmNote {
        id: EntityId::from(id),
        timestamp: at,
        author: author.into(),
        content: content.into(),
        note_type: NoteType::Operator,
    }
}

#[allow(clippy::too_many_lines)]
fn mock_alarms(now: DateTime<Utc>) -> Vec<Alarm> {
    vec![
        Alarm {
            id: EntityId::from("alarm-001"),
            timestamp: now - Duration::minutes(5),
            alarm_type: AlarmType::Fire,
            priority: AlarmPriority::Critical,
            status: AlarmStatus::New,
            location: Location {
                address: "123 Main St, Downtown".into(),
                zone: Some("Zone A-1".into()),
                coordinates: Some(Coordinates {
                    lat: 40.7128,
                    lng: -74.0060,
                }),
            },
            customer: Customer {
                id: EntityId::from("cust-001"),
                name: "Downtown Office Complex".into(),
                phone: "+1-555-0123".into(),
                contact_person: Some("John Smith".into()),
            },
            device: Some(AlarmDevice {
                id: EntityId::from("dev-fire-001"),
                device_type: "Smoke Detector".into(),
                description: "Main lobby smoke detector".into(),
            }),
            ai_analysis: Some(AiAnalysis {
                risk_score: 95,
                confidence: 88,
                recommendation: Recommendation::Dispatch,
                reasoning: "High-confidence fire alarm with multiple sensor triggers in \
                            commercial building during business hours."
                    .into(),
                contextual_info: strings(&[
                    "Multiple smoke detectors activated",
                    "Building occupancy: High (business hours)",
                    "No recent maintenance records",
                    "Weather: Clear, no environmental factors",
                ]),
                predicted_outcome: "Likely genuine fire emergency requiring immediate response"
                    .into(),
                suggested_actions: strings(&[
                    "Dispatch fire department immediately",
                    "Contact building security",
                    "Initiate evacuation procedures",
                    "Monitor additional sensors",
                ]),
            }),
            assigned_cso: None,
            notes: vec![ai_note(
                "note-001",
                now - Duration::minutes(4),
                "Initial analysis complete. High-priority fire alarm detected.",
            )],
            response_time: None,
        },
        Alarm {
            id: EntityId::from("alarm-002"),
            timestamp: now - Duration::minutes(10),
            alarm_type: AlarmType::Intrusion,
            priority: AlarmPriority::High,
            status: AlarmStatus::Acknowledged,
            location: Location {
                address: "456 Oak Avenue, Residential".into(),
                zone: Some("Zone B-3".into()),
                coordinates: None,
            },
            customer: Customer {
                id: EntityId::from("cust-002"),
                name: "Johnson Residence".into(),
                phone: "+1-555-0456".into(),
                contact_person: None,
            },
            device: Some(AlarmDevice {
                id: EntityId::from("dev-motion-002"),
                device_type: "Motion Sensor".into(),
                description: "Front entrance motion detector".into(),
            }),
            ai_analysis: Some(AiAnalysis {
                risk_score: 72,
                confidence: 65,
                recommendation: Recommendation::Verify,
                reasoning: "Motion detected at residential property during typical away hours. \
                            Moderate confidence due to single sensor activation."
                    .into(),
                contextual_info: strings(&[
                    "Single motion sensor triggered",
                    "Homeowner typically away during this time",
                    "No recent false alarms",
                    "Neighborhood crime rate: Low",
                ]),
                predicted_outcome: "Possible intrusion, verification recommended before dispatch"
                    .into(),
                suggested_actions: strings(&[
                    "Contact homeowner for verification",
                    "Check additional sensors",
                    "Review camera footage if available",
                    "Monitor for additional triggers",
                ]),
            }),
            assigned_cso: Some(EntityId::from("cso-001")),
            notes: vec![
                ai_note(
                    "note-002",
                    now - Duration::minutes(8),
                    "Motion detected at front entrance. Attempting customer contact.",
                ),
                operator_note(
                    "note-003",
                    now - Duration::minutes(7),
                    "Sarah Chen",
                    "Acknowledged alarm. Attempting to contact homeowner.",
                ),
            ],
            response_time: None,
        },
        Alarm {
            id: EntityId::from("alarm-003"),
            timestamp: now - Duration::minutes(15),
            alarm_type: AlarmType::Medical,
            priority: AlarmPriority::Critical,
            status: AlarmStatus::Dispatched,
            location: Location {
                address: "789 Senior Living Way, Healthcare District".into(),
                zone: Some("Zone C-2".into()),
                coordinates: None,
            },
            customer: Customer {
                id: EntityId::from("cust-003"),
                name: "Sunset Senior Living".into(),
                phone: "+1-555-0789".into(),
                contact_person: Some("Nurse Station".into()),
            },
            device: Some(AlarmDevice {
                id: EntityId::from("dev-medical-003"),
                device_type: "Medical Alert Button".into(),
                description: "Room 204 emergency button".into(),
            }),
            ai_analysis: Some(AiAnalysis {
                risk_score: 98,
                confidence: 92,
                recommendation: Recommendation::Dispatch,
                reasoning: "Medical emergency button activated in senior living facility. \
                            High confidence due to device type and location."
                    .into(),
                contextual_info: strings(&[
                    "Medical alert button pressed",
                    "Senior living facility",
                    "Patient history: Cardiac issues",
                    "Response time critical",
                ]),
                predicted_outcome: "Genuine medical emergency requiring immediate response".into(),
                suggested_actions: strings(&[
                    "Dispatch EMS immediately",
                    "Contact facility medical staff",
                    "Prepare for potential cardiac emergency",
                    "Monitor patient status",
                ]),
            }),
            assigned_cso: Some(EntityId::from("cso-002")),
            notes: vec![
                ai_note(
                    "note-004",
                    now - Duration::minutes(14),
                    "Medical emergency detected. High priority dispatch recommended.",
                ),
                operator_note(
                    "note-005",
                    now - Duration::minutes(13),
                    "Mike Rodriguez",
                    "EMS dispatched. ETA 3 minutes. Contacted facility nurse station.",
                ),
            ],
            response_time: Some(45),
        },
    ]
}

fn mock_csos() -> Vec<Cso> {
    vec![
        Cso {
            id: EntityId::from("cso-001"),
            name: "Sarah Chen".into(),
            email: "sarah.chen@becklar.com".into(),
            status: CsoStatus::Busy,
            current_alarms: vec![EntityId::from("alarm-002")],
            performance: CsoPerformance {
                average_response_time: 32,
                alarms_handled: 156,
                accuracy: 94,
            },
            ai_assistance_level: AiAssistanceLevel::High,
        },
        Cso {
            id: EntityId::from("cso-002"),
            name: "Mike Rodriguez".into(),
            email: "mike.rodriguez@becklar.com".into(),
            status: CsoStatus::Busy,
            current_alarms: vec![EntityId::from("alarm-003")],
            performance: CsoPerformance {
                average_response_time: 28,
                alarms_handled: 203,
                accuracy: 97,
            },
            ai_assistance_level: AiAssistanceLevel::Moderate,
        },
        Cso {
            id: EntityId::from("cso-003"),
            name: "Emily Johnson".into(),
            email: "emily.johnson@becklar.com".into(),
            status: CsoStatus::Available,
            current_alarms: Vec::new(),
            performance: CsoPerformance {
                average_response_time: 35,
                alarms_handled: 134,
                accuracy: 92,
            },
            ai_assistance_level: AiAssistanceLevel::High,
        },
    ]
}
