// alarmdesk-core: Reactive alarm/operator store between the seed data and consumers (CLI).

pub mod advisor;
pub mod command;
pub mod config;
pub mod desk;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod stream;
pub mod time;

// ── Primary re-exports ──────────────────────────────────────────────
pub use advisor::AiRecommendation;
pub use command::{Command, CommandResult};
pub use config::DeskConfig;
pub use desk::{CommandOutcome, Dashboard, Desk};
pub use error::CoreError;
pub use store::{AuditFinding, AuditReport, DataStore};
pub use stream::{AlarmFilter, AlarmQuery, CsoFilter, EntityStream, QuickFilter};
pub use time::time_ago;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Alarms
    AiAnalysis, Alarm, AlarmDevice, AlarmNote, AlarmPriority, AlarmStatus, AlarmType, Customer,
    Location, NoteType, Recommendation,
    // Operators
    AiAssistanceLevel, Cso, CsoPerformance, CsoStatus, PerformanceGrade,
    // Desk-wide
    AlarmBreakdown, EntityId, Notification, NotificationLevel, RosterSummary, SystemStats,
};
