// ── Central reactive data store ──
//
// Thread-safe storage for alarms, operators, and notifications. Mutations
// are broadcast to subscribers via `watch` channels. Every mutation is total:
// unknown ids and blank input are ignored, never rejected.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use super::collection::EntityCollection;
use crate::model::{
    Alarm, AlarmNote, AlarmStatus, Cso, EntityId, NoteType, Notification, NotificationLevel,
    SystemStats,
};
use crate::seed::{self, MockDataset};
use crate::stream::EntityStream;

/// Central reactive store for the monitoring desk.
///
/// Single-writer: each mutation runs to completion synchronously,
/// but a mutation that touches two collections (assignment) is not atomic
/// with respect to a concurrent reader.
pub struct DataStore {
    pub(crate) alarms: EntityCollection<Alarm>,
    pub(crate) csos: EntityCollection<Cso>,
    pub(crate) notifications: EntityCollection<Notification>,
    stats: watch::Sender<SystemStats>,
    selected: ArcSwapOption<Alarm>,
    last_initialized: watch::Sender<Option<DateTime<Utc>>>,
}

impl DataStore {
    /// An empty store. Call [`initialize_mock_data`](Self::initialize_mock_data)
    /// to populate it.
    pub fn new() -> Self {
        let (stats, _) = watch::channel(SystemStats::default());
        let (last_initialized, _) = watch::channel(None);

        Self {
            alarms: EntityCollection::new(),
            csos: EntityCollection::new(),
            notifications: EntityCollection::new(),
            stats,
            selected: ArcSwapOption::empty(),
            last_initialized,
        }
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Replace all state with the fixed demonstration dataset.
    ///
    /// Idempotent by full overwrite: alarms, operators, stats, notifications
    /// and the selection are all reset.
    pub fn initialize_mock_data(&self) {
        let now = Utc::now();
        self.load_dataset(seed::mock_dataset(now));
        self.last_initialized.send_replace(Some(now));
    }

    /// Replace all state with `dataset`.
    pub fn load_dataset(&self, dataset: MockDataset) {
        let MockDataset {
            alarms,
            csos,
            stats,
            notifications,
        } = dataset;

        info!(
            alarms = alarms.len(),
            csos = csos.len(),
            "loading desk dataset"
        );

        self.alarms
            .replace_all(alarms.into_iter().map(|a| (a.id.clone(), a)).collect());
        self.csos
            .replace_all(csos.into_iter().map(|c| (c.id.clone(), c)).collect());
        self.notifications.replace_all(
            notifications
                .into_iter()
                .map(|n| (n.id.clone(), n))
                .collect(),
        );
        self.stats.send_replace(stats);
        self.selected.store(None);
    }

    /// Set the alarm currently being inspected. No validation: the alarm
    /// need not be in the store.
    pub fn set_selected_alarm(&self, alarm: Option<Alarm>) {
        debug!(alarm_id = ?alarm.as_ref().map(|a| &a.id), "selecting alarm");
        self.selected.store(alarm.map(Arc::new));
    }

    /// Replace the status of one alarm. Returns `false` if the id is unknown.
    ///
    /// Any status may follow any other.
    pub fn update_alarm_status(&self, alarm_id: &EntityId, status: AlarmStatus) -> bool {
        let applied = self.alarms.update(alarm_id, |alarm| {
            alarm.status = status;
            true
        });
        debug!(%alarm_id, %status, applied, "update alarm status");
        applied
    }

    /// Point an alarm at an operator and add it to that operator's roster.
    ///
    /// The two sides are applied independently, so an unknown alarm still
    /// lands on a known operator's roster and vice versa. The roster always
    /// gets a new entry, even when it already lists the alarm, and the alarm
    /// is not removed from a previous operator's roster. Returns `true` if
    /// either side changed.
    pub fn assign_alarm_to_cso(&self, alarm_id: &EntityId, cso_id: &EntityId) -> bool {
        let alarm_side = self.alarms.update(alarm_id, |alarm| {
            alarm.assigned_cso = Some(cso_id.clone());
            true
        });
        let roster_side = self.csos.update(cso_id, |cso| {
            cso.current_alarms.push(alarm_id.clone());
            true
        });
        debug!(%alarm_id, %cso_id, alarm_side, roster_side, "assign alarm");
        alarm_side || roster_side
    }

    /// Append an operator note to an alarm.
    ///
    /// Content is trimmed; blank content and unknown alarms are ignored.
    /// Returns the stored note when one was added.
    pub fn add_alarm_note(
        &self,
        alarm_id: &EntityId,
        content: &str,
        author: &str,
    ) -> Option<AlarmNote> {
        let content = content.trim();
        if content.is_empty() {
            debug!(%alarm_id, "ignoring blank note");
            return None;
        }

        let note = AlarmNote {
            id: EntityId::generate(),
            timestamp: Utc::now(),
            author: author.to_owned(),
            content: content.to_owned(),
            note_type: NoteType::Operator,
        };
        let added = self.alarms.update(alarm_id, |alarm| {
            alarm.notes.push(note.clone());
            true
        });
        debug!(%alarm_id, note_id = %note.id, added, "add alarm note");
        added.then_some(note)
    }

    /// Replace the stored stats snapshot with one derived from the current
    /// lists.
    pub fn recompute_stats(&self) -> SystemStats {
        let stats = self.derive_stats(Utc::now());
        debug!(?stats, "recomputed stats");
        self.stats.send_replace(stats);
        stats
    }

    /// Prepend an unread notification to the feed and return its id.
    pub fn add_notification(
        &self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> EntityId {
        let notification = Notification {
            id: EntityId::generate(),
            level,
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
        };
        let id = notification.id.clone();
        debug!(notification_id = %id, %level, "add notification");
        self.notifications.upsert(id.clone(), notification);
        id
    }

    /// Mark one notification read. Returns `false` for unknown ids and for
    /// notifications that were already read.
    pub fn mark_notification_read(&self, id: &EntityId) -> bool {
        let applied = self
            .notifications
            .update(id, |n| !std::mem::replace(&mut n.read, true));
        debug!(notification_id = %id, applied, "mark notification read");
        applied
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn alarms_snapshot(&self) -> Arc<Vec<Arc<Alarm>>> {
        self.alarms.snapshot()
    }

    pub fn csos_snapshot(&self) -> Arc<Vec<Arc<Cso>>> {
        self.csos.snapshot()
    }

    /// Notifications, newest first.
    pub fn notifications(&self) -> Vec<Arc<Notification>> {
        self.notifications.snapshot().iter().rev().cloned().collect()
    }

    /// The stored stats snapshot. Only [`recompute_stats`](Self::recompute_stats)
    /// and dataset loads change it.
    pub fn stats(&self) -> SystemStats {
        *self.stats.borrow()
    }

    pub fn selected_alarm(&self) -> Option<Arc<Alarm>> {
        self.selected.load_full()
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn alarm_by_id(&self, id: &EntityId) -> Option<Arc<Alarm>> {
        self.alarms.get(id)
    }

    pub fn cso_by_id(&self, id: &EntityId) -> Option<Arc<Cso>> {
        self.csos.get(id)
    }

    // ── Count accessors ──────────────────────────────────────────────

    pub fn alarm_count(&self) -> usize {
        self.alarms.len()
    }

    pub fn cso_count(&self) -> usize {
        self.csos.len()
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications
            .snapshot()
            .iter()
            .filter(|n| !n.read)
            .count()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_alarms(&self) -> EntityStream<Alarm> {
        EntityStream::new(self.alarms.subscribe())
    }

    pub fn subscribe_csos(&self) -> EntityStream<Cso> {
        EntityStream::new(self.csos.subscribe())
    }

    pub fn subscribe_notifications(&self) -> EntityStream<Notification> {
        EntityStream::new(self.notifications.subscribe())
    }

    pub fn subscribe_stats(&self) -> watch::Receiver<SystemStats> {
        self.stats.subscribe()
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn last_initialized(&self) -> Option<DateTime<Utc>> {
        *self.last_initialized.borrow()
    }

    /// Versions of the alarm and operator collections, bumped on every
    /// mutation. Handy for cheap "did anything change" checks.
    pub fn versions(&self) -> (u64, u64) {
        (self.alarms.version(), self.csos.version())
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed::{MOCK_ALARM_COUNT, MOCK_CSO_COUNT};
    use pretty_assertions::assert_eq;

    fn seeded() -> DataStore {
        let store = DataStore::new();
        store.initialize_mock_data();
        store
    }

    fn id(s: &str) -> EntityId {
        EntityId::from(s)
    }

    #[test]
    fn new_store_is_empty() {
        let store = DataStore::new();
        assert_eq!(store.alarm_count(), 0);
        assert_eq!(store.cso_count(), 0);
        assert_eq!(store.stats(), SystemStats::default());
        assert!(store.last_initialized().is_none());
    }

    #[test]
    fn initialize_yields_fixed_counts_every_time() {
        let store = seeded();
        assert_eq!(store.alarm_count(), MOCK_ALARM_COUNT);
        assert_eq!(store.cso_count(), MOCK_CSO_COUNT);

        store.update_alarm_status(&id("alarm-001"), AlarmStatus::Resolved);
        store.add_notification(NotificationLevel::Warning, "t", "m");
        store.initialize_mock_data();

        assert_eq!(store.alarm_count(), MOCK_ALARM_COUNT);
        assert_eq!(store.cso_count(), MOCK_CSO_COUNT);
        assert_eq!(store.notifications().len(), 1);
        assert_eq!(
            store.alarm_by_id(&id("alarm-001")).unwrap().status,
            AlarmStatus::New
        );
        assert_eq!(store.stats().total_alarms_today, 47);
        assert!(store.last_initialized().is_some());
    }

    #[test]
    fn initialize_clears_selection() {
        let store = seeded();
        let alarm = (*store.alarm_by_id(&id("alarm-001")).unwrap()).clone();
        store.set_selected_alarm(Some(alarm));
        store.initialize_mock_data();
        assert!(store.selected_alarm().is_none());
    }

    #[test]
    fn update_status_touches_only_target_status() {
        let store = seeded();
        let before = store.alarms_snapshot();

        assert!(store.update_alarm_status(&id("alarm-002"), AlarmStatus::Resolved));

        let after = store.alarms_snapshot();
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == id("alarm-002") {
                let mut expected = (**old).clone();
                expected.status = AlarmStatus::Resolved;
                assert_eq!(**new, expected);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn update_status_allows_any_transition() {
        let store = seeded();
        let alarm_id = id("alarm-003");
        store.update_alarm_status(&alarm_id, AlarmStatus::Resolved);
        store.update_alarm_status(&alarm_id, AlarmStatus::New);
        assert_eq!(store.alarm_by_id(&alarm_id).unwrap().status, AlarmStatus::New);
    }

    #[test]
    fn update_status_unknown_id_is_noop() {
        let store = seeded();
        let before = store.alarms_snapshot();
        assert!(!store.update_alarm_status(&id("alarm-999"), AlarmStatus::Resolved));
        assert_eq!(store.alarms_snapshot(), before);
    }

    #[test]
    fn assign_sets_alarm_and_roster() {
        let store = seeded();
        assert!(store.assign_alarm_to_cso(&id("alarm-001"), &id("cso-003")));

        let alarm = store.alarm_by_id(&id("alarm-001")).unwrap();
        assert_eq!(alarm.assigned_cso, Some(id("cso-003")));
        let cso = store.cso_by_id(&id("cso-003")).unwrap();
        assert_eq!(cso.current_alarms, vec![id("alarm-001")]);
    }

    #[test]
    fn reassign_leaves_previous_roster_untouched() {
        let store = seeded();
        store.assign_alarm_to_cso(&id("alarm-002"), &id("cso-003"));

        let previous = store.cso_by_id(&id("cso-001")).unwrap();
        assert!(previous.current_alarms.contains(&id("alarm-002")));
        let alarm = store.alarm_by_id(&id("alarm-002")).unwrap();
        assert_eq!(alarm.assigned_cso, Some(id("cso-003")));
    }

    #[test]
    fn assign_twice_appends_roster_entry_twice() {
        let store = seeded();
        assert!(store.assign_alarm_to_cso(&id("alarm-001"), &id("cso-003")));
        let version = store.versions().1;
        assert!(store.assign_alarm_to_cso(&id("alarm-001"), &id("cso-003")));

        let cso = store.cso_by_id(&id("cso-003")).unwrap();
        assert_eq!(cso.current_alarms, vec![id("alarm-001"), id("alarm-001")]);
        assert_eq!(store.versions().1, version + 1);
    }

    #[test]
    fn assign_to_unknown_operator_still_sets_alarm() {
        let store = seeded();
        assert!(store.assign_alarm_to_cso(&id("alarm-001"), &id("cso-404")));
        let alarm = store.alarm_by_id(&id("alarm-001")).unwrap();
        assert_eq!(alarm.assigned_cso, Some(id("cso-404")));
    }

    #[test]
    fn add_note_appends_exactly_one() {
        let store = seeded();
        let before = store.alarm_by_id(&id("alarm-002")).unwrap().notes.clone();

        let note = store
            .add_alarm_note(&id("alarm-002"), "  Called keyholder  ", "Current CSO")
            .unwrap();

        let after = store.alarm_by_id(&id("alarm-002")).unwrap().notes.clone();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last().unwrap(), &note);
        assert_eq!(note.content, "Called keyholder");
        assert_eq!(note.author, "Current CSO");
        assert_eq!(note.note_type, NoteType::Operator);
    }

    #[test]
    fn blank_note_is_ignored() {
        let store = seeded();
        let before = store.alarm_by_id(&id("alarm-001")).unwrap().notes.clone();
        assert!(store.add_alarm_note(&id("alarm-001"), " \t\n ", "x").is_none());
        assert!(store.add_alarm_note(&id("alarm-001"), "", "x").is_none());
        assert_eq!(store.alarm_by_id(&id("alarm-001")).unwrap().notes, before);
    }

    #[test]
    fn note_on_unknown_alarm_is_ignored() {
        let store = seeded();
        assert!(store.add_alarm_note(&id("alarm-999"), "hello", "x").is_none());
    }

    #[test]
    fn stats_snapshot_lags_until_recomputed() {
        let store = seeded();
        store.update_alarm_status(&id("alarm-001"), AlarmStatus::FalseAlarm);
        assert_eq!(store.stats().false_alarm_rate, 12);

        let stats = store.recompute_stats();
        assert_eq!(stats.false_alarm_rate, 33);
        assert_eq!(store.stats(), stats);
    }

    #[test]
    fn stats_subscribers_observe_recompute() {
        let store = seeded();
        let mut rx = store.subscribe_stats();
        store.recompute_stats();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().active_alarms, 3);
    }

    #[test]
    fn selection_accepts_alarms_outside_the_store() {
        let store = DataStore::new();
        let data = seed::mock_dataset(Utc::now());
        store.set_selected_alarm(Some(data.alarms[0].clone()));
        assert_eq!(store.selected_alarm().unwrap().id, id("alarm-001"));
        store.set_selected_alarm(None);
        assert!(store.selected_alarm().is_none());
    }

    #[test]
    fn notifications_are_newest_first() {
        let store = seeded();
        let added = store.add_notification(NotificationLevel::Warning, "Panel offline", "Zone C");
        let feed = store.notifications();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].id, added);
        assert_eq!(store.unread_notifications(), 2);
    }

    #[test]
    fn mark_read_is_idempotent() {
        let store = seeded();
        let first = id("notif-001");
        assert!(store.mark_notification_read(&first));
        assert!(!store.mark_notification_read(&first));
        assert!(!store.mark_notification_read(&id("notif-404")));
        assert_eq!(store.unread_notifications(), 0);
    }
}
