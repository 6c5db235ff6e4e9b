// ── Generic reactive entity collection ──
//
// Concurrent storage with O(1) lookups and push-based change notification
// via `watch` channels. Snapshots preserve insertion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tokio::sync::watch;

use crate::model::EntityId;

struct Slot<T> {
    /// Insertion sequence; an in-place update keeps the original position.
    seq: u64,
    value: Arc<T>,
}

/// A reactive collection for a single entity type.
///
/// Uses `DashMap` for O(1) concurrent lookups and `watch` channels for
/// push-based change notification. Every mutation bumps a version counter
/// and rebuilds the ordered snapshot that subscribers receive.
pub(crate) struct EntityCollection<T: Clone + Send + Sync + 'static> {
    by_id: DashMap<EntityId, Slot<T>>,

    next_seq: AtomicU64,

    /// Version counter, bumped on every mutation.
    version: watch::Sender<u64>,

    /// Full snapshot in insertion order, rebuilt on mutation.
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> EntityCollection<T> {
    pub(crate) fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));

        Self {
            by_id: DashMap::new(),
            next_seq: AtomicU64::new(0),
            version,
            snapshot,
        }
    }

    /// Insert or replace an entity. Returns `true` if the id was new.
    ///
    /// Replacing keeps the entity's original position in snapshots.
    pub(crate) fn upsert(&self, id: EntityId, entity: T) -> bool {
        let is_new = self.insert_slot(id, entity);
        self.publish();
        is_new
    }

    /// Apply `f` to a copy of the entity and store the result.
    ///
    /// Returns `false` (and publishes nothing) when the id is unknown or `f`
    /// reports that it left the entity unchanged.
    pub(crate) fn update(&self, id: &EntityId, f: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = {
            let Some(mut slot) = self.by_id.get_mut(id) else {
                return false;
            };
            let mut next = (*slot.value).clone();
            let changed = f(&mut next);
            if changed {
                slot.value = Arc::new(next);
            }
            changed
        };
        if changed {
            self.publish();
        }
        changed
    }

    /// Replace the whole collection with `items`, in order, publishing once.
    pub(crate) fn replace_all(&self, items: Vec<(EntityId, T)>) {
        self.by_id.clear();
        for (id, entity) in items {
            self.insert_slot(id, entity);
        }
        self.publish();
    }

    pub(crate) fn get(&self, id: &EntityId) -> Option<Arc<T>> {
        self.by_id.get(id).map(|slot| Arc::clone(&slot.value))
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn version(&self) -> u64 {
        *self.version.borrow()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn insert_slot(&self, id: EntityId, entity: T) -> bool {
        let value = Arc::new(entity);
        if let Some(mut slot) = self.by_id.get_mut(&id) {
            slot.value = value;
            return false;
        }
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.by_id.insert(id, Slot { seq, value });
        true
    }

    /// Rebuild the ordered snapshot, broadcast it, and bump the version.
    fn publish(&self) {
        let mut entries: Vec<(u64, Arc<T>)> = self
            .by_id
            .iter()
            .map(|r| (r.value().seq, Arc::clone(&r.value().value)))
            .collect();
        entries.sort_unstable_by_key(|(seq, _)| *seq);
        let values: Vec<Arc<T>> = entries.into_iter().map(|(_, v)| v).collect();

        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
        self.version.send_modify(|v| *v += 1);
    }
}
