//! Store<S> - the upstream source of immutable snapshots
//!
//! `Store<S>` keeps the current snapshot and pushes every committed snapshot
//! to each live subscriber, in commit order. Unlike a poll-based value cell,
//! intermediate snapshots are never coalesced: each subscriber owns an
//! unbounded queue. Selectors decide what to drop via distinct-value
//! suppression, the store does not.
//!
//! A subscription ends when the consumer drops its stream (the sender is
//! pruned on the next commit) or when the store is closed or dropped.

use std::sync::Arc;

use futures::channel::mpsc::{self, UnboundedSender};
use futures::stream::{self, StreamExt};
use parking_lot::Mutex;

use super::stream::StateStream;
use crate::errors::StoreError;

struct Shared<S> {
    state: S,
    version: u64,
    closed: bool,
    subscribers: Vec<UnboundedSender<S>>,
}

/// A cloneable handle to a snapshot store.
///
/// Clones share the same state and subscriber list. When the last handle is
/// dropped every open subscription completes.
pub struct Store<S> {
    shared: Arc<Mutex<Shared<S>>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<S: Clone + Send + 'static> Store<S> {
    /// Create a store holding `initial` at version 0.
    pub fn new(initial: S) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: initial,
                version: 0,
                closed: false,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> S {
        self.shared.lock().state.clone()
    }

    /// Number of committed transitions so far.
    pub fn version(&self) -> u64 {
        self.shared.lock().version
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.shared.lock().closed
    }

    /// Subscribe to snapshots.
    ///
    /// The stream yields the current snapshot first, then every later commit.
    /// Registration happens under the store lock, so no commit can slip in
    /// between the initial snapshot and the first queued update. On a closed
    /// store the stream yields the final snapshot and completes.
    pub fn subscribe(&self) -> StateStream<S> {
        let mut shared = self.shared.lock();
        if shared.closed {
            return stream::iter(Some(shared.state.clone())).boxed();
        }

        let (tx, rx) = mpsc::unbounded();
        // The receiver is still in hand, so this send cannot fail.
        let _ = tx.unbounded_send(shared.state.clone());
        shared.subscribers.push(tx);
        tracing::trace!(
            subscribers = shared.subscribers.len(),
            version = shared.version,
            "store subscription opened"
        );
        rx.boxed()
    }

    /// Publish `state` as the next snapshot. Returns the new version.
    pub fn commit(&self, state: S) -> Result<u64, StoreError> {
        self.update(move |_| state)
    }

    /// Derive and publish the next snapshot from the current one.
    ///
    /// `f` runs under the store lock, so concurrent updates are serialized
    /// and never observe a half-applied transition. The lock is not
    /// reentrant: calling [`snapshot`](Self::snapshot), [`commit`](Self::commit),
    /// `update` or [`subscribe`](Self::subscribe) on this store (or a clone of
    /// it) from inside `f` deadlocks. Read the current value from the `&S`
    /// argument instead.
    pub fn update<F>(&self, f: F) -> Result<u64, StoreError>
    where
        F: FnOnce(&S) -> S,
    {
        let mut shared = self.shared.lock();
        if shared.closed {
            return Err(StoreError::Closed {
                version: shared.version,
            });
        }

        let next = f(&shared.state);
        shared.version += 1;
        shared
            .subscribers
            .retain(|tx| tx.unbounded_send(next.clone()).is_ok());
        shared.state = next;

        tracing::trace!(
            version = shared.version,
            subscribers = shared.subscribers.len(),
            "snapshot committed"
        );
        Ok(shared.version)
    }

    /// Complete every open subscription and reject further commits.
    pub fn close(&self) {
        let mut shared = self.shared.lock();
        if shared.closed {
            return;
        }
        shared.closed = true;
        let dropped = shared.subscribers.len();
        shared.subscribers.clear();
        tracing::debug!(
            version = shared.version,
            subscribers = dropped,
            "store closed"
        );
    }

    /// Number of subscriptions whose consumer is still alive.
    pub fn subscriber_count(&self) -> usize {
        let mut shared = self.shared.lock();
        shared.subscribers.retain(|tx| !tx.is_closed());
        shared.subscribers.len()
    }
}

impl<S: Clone + Send + Default + 'static> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Clone + Send + std::fmt::Debug + 'static> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shared = self.shared.lock();
        f.debug_struct("Store")
            .field("state", &shared.state)
            .field("version", &shared.version)
            .field("closed", &shared.closed)
            .field("subscribers", &shared.subscribers.len())
            .finish()
    }
}
