// ── Subscriptions and view filters ──
//
// `EntityStream` wraps a collection's `watch` channel so a dashboard can hold
// one snapshot, redraw on change, or drive a `Stream` pipeline.

mod filter;

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

pub use filter::{AlarmFilter, AlarmQuery, CsoFilter, QuickFilter};

/// Ordered, shared snapshot of one collection.
pub type Snapshot<T> = Arc<Vec<Arc<T>>>;

/// A live view of one store collection (alarms, operators or notifications).
pub struct EntityStream<T: Clone + Send + Sync + 'static> {
    current: Snapshot<T>,
    receiver: watch::Receiver<Snapshot<T>>,
}

impl<T: Clone + Send + Sync + 'static> EntityStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Snapshot<T>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot this view last observed.
    pub fn current(&self) -> &Snapshot<T> {
        &self.current
    }

    /// Whatever the store holds right now, without marking it seen.
    pub fn latest(&self) -> Snapshot<T> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next mutation. `None` once the store is dropped.
    pub async fn changed(&mut self) -> Option<Snapshot<T>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Yields the current snapshot first, then one per mutation.
    pub fn into_stream(self) -> EntityWatchStream<T> {
        EntityWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

pub struct EntityWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<Snapshot<T>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for EntityWatchStream<T> {
    type Item = Snapshot<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream<Arc<_>> is Unpin.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
