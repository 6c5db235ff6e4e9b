// ── Unified domain model ──
//
// Canonical alarm-desk types. The store, the advisor, and the CLI all speak
// in these.

pub mod alarm;
pub mod cso;
pub mod entity_id;
pub mod notification;
pub mod stats;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use alarmdesk_core::model::*` gives you everything.

pub use entity_id::EntityId;

pub use alarm::{
    AiAnalysis, Alarm, AlarmDevice, AlarmNote, AlarmPriority, AlarmStatus, AlarmType, Coordinates,
    Customer, Location, NoteType, Recommendation,
};

pub use cso::{AiAssistanceLevel, Cso, CsoPerformance, CsoStatus, PerformanceGrade};

pub use notification::{Notification, NotificationLevel};

pub use stats::{AlarmBreakdown, RosterSummary, SystemStats};
