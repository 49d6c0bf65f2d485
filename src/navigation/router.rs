//! Authoritative navigation path for one flow.
//!
//! A [`Router`] is a cheap-to-clone handle: the owning coordinator, the
//! navigation delegates it hands to screens and the reconciliation bridge all
//! point at the same path. Only the router mutates the path.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use parking_lot::Mutex;

use super::destination::{Destination, IdentityTag};

/// What happened to the path when a [`PathChange`] was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Push,
    Pop,
    ResetToRoot,
    /// Truncation requested by the bridge after a host-driven pop.
    ReplacePrefix,
}

/// Notification delivered to every subscriber after an effective mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathChange {
    pub revision: u64,
    pub kind: ChangeKind,
    /// Path length after the mutation.
    pub len: usize,
}

/// Whether the first path entry is protected from `pop` and `reset_to_root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootPolicy {
    #[default]
    Mandatory,
    Optional,
}

#[derive(Clone)]
pub struct Router<D: Destination> {
    inner: Arc<Mutex<RouterInner<D>>>,
}

struct RouterInner<D> {
    path: Vec<D>,
    policy: RootPolicy,
    revision: u64,
    observers: Vec<Sender<PathChange>>,
}

impl<D: Destination> RouterInner<D> {
    fn notify(&mut self, kind: ChangeKind) {
        self.revision += 1;
        let change = PathChange {
            revision: self.revision,
            kind,
            len: self.path.len(),
        };
        tracing::debug!(
            revision = change.revision,
            kind = ?change.kind,
            len = change.len,
            "Path changed"
        );
        self.observers.retain(|tx| tx.send(change).is_ok());
    }

    fn floor(&self) -> usize {
        match self.policy {
            RootPolicy::Mandatory => 1,
            RootPolicy::Optional => 0,
        }
    }
}

impl<D: Destination> Default for Router<D> {
    fn default() -> Self {
        Self::new(RootPolicy::default())
    }
}

impl<D: Destination> Router<D> {
    /// Create a router with an empty path.
    pub fn new(policy: RootPolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RouterInner {
                path: Vec::new(),
                policy,
                revision: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Receive a [`PathChange`] for every future mutation, in order.
    pub fn subscribe(&self) -> Receiver<PathChange> {
        let (tx, rx) = mpsc::channel();
        self.inner.lock().observers.push(tx);
        rx
    }

    /// Append a destination. Always succeeds.
    pub fn push(&self, destination: D) {
        let mut inner = self.inner.lock();
        tracing::debug!(destination = ?destination, "Router push");
        inner.path.push(destination);
        inner.notify(ChangeKind::Push);
    }

    /// Remove the last destination.
    ///
    /// Popping at the floor is a no-op, which absorbs races between a user
    /// gesture and a programmatic pop.
    pub fn pop(&self) {
        let mut inner = self.inner.lock();
        if inner.path.len() <= inner.floor() {
            tracing::trace!(len = inner.path.len(), "Router pop ignored at floor");
            return;
        }
        inner.path.pop();
        inner.notify(ChangeKind::Pop);
    }

    /// Truncate to the root, or to nothing when the root is optional.
    pub fn reset_to_root(&self) {
        let mut inner = self.inner.lock();
        let keep = inner.floor();
        if inner.path.len() <= keep {
            return;
        }
        inner.path.truncate(keep);
        inner.notify(ChangeKind::ResetToRoot);
    }

    /// Truncate to the first `n` entries, ignoring the root policy.
    ///
    /// Reserved for reconciliation: the host has already removed the units,
    /// so the path must follow even when that empties it.
    pub(crate) fn replace_prefix(&self, n: usize) {
        let mut inner = self.inner.lock();
        if n >= inner.path.len() {
            return;
        }
        inner.path.truncate(n);
        inner.notify(ChangeKind::ReplacePrefix);
    }

    /// Snapshot of the current path, root first.
    pub fn path(&self) -> Vec<D> {
        self.inner.lock().path.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().path.is_empty()
    }

    /// The currently visible destination.
    pub fn top(&self) -> Option<D> {
        self.inner.lock().path.last().cloned()
    }

    pub fn tags(&self) -> Vec<IdentityTag> {
        self.inner
            .lock()
            .path
            .iter()
            .map(Destination::identity_tag)
            .collect()
    }

    /// Index of the deepest entry carrying `tag`.
    pub fn last_index_of(&self, tag: IdentityTag) -> Option<usize> {
        self.inner
            .lock()
            .path
            .iter()
            .rposition(|destination| destination.identity_tag() == tag)
    }

    /// Number of effective mutations so far.
    pub fn revision(&self) -> u64 {
        self.inner.lock().revision
    }
}
