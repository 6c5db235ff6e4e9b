// ── Reactive data store ──
//
// Concurrent entity storage with push-based change notification, plus the
// read-side queries and consistency audit built on its snapshots.

mod audit;
mod collection;
mod data_store;
mod query;

pub use audit::{AuditFinding, AuditReport};
pub use data_store::DataStore;
