//! Two-source synchronization between a [`Router`] and a [`NavigationHost`].
//!
//! Router notifications are applied first (rule 1): growth or a diverged
//! prefix rebuilds the host from the full path, a pure shrink truncates it.
//! Host completion events are applied second (rule 2): when the host shows
//! fewer units than the path holds, the user popped out of band and the path
//! is trimmed to the deepest entry matching the reported top tag, never
//! longer than the visible stack.

use std::sync::mpsc::Receiver;

use super::destination::{Destination, IdentityTag};
use super::host::{HostEvent, HostedUnit, NavigationHost};
use super::router::{PathChange, Router};

/// Builds the content rendered for a destination.
///
/// Must be total over the flow's destinations; an exhaustive `match` in the
/// implementation makes that a compile-time property.
pub trait ContentBuilder<D> {
    type Content;

    fn build(&self, destination: &D) -> Self::Content;
}

impl<D, C, F> ContentBuilder<D> for F
where
    F: Fn(&D) -> C,
{
    type Content = C;

    fn build(&self, destination: &D) -> C {
        self(destination)
    }
}

/// Relationship between path length (P) and visible-stack length (V).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// P == V and every tag matches index for index.
    Converged,
    /// P > V, or the router holds destinations the host has not rendered.
    PendingPush,
    /// P < V.
    PendingPop,
}

/// Upper bound on drain rounds per `sync`; each round strictly shrinks or
/// settles the stacks, so this is never reached in practice.
const MAX_SYNC_ROUNDS: usize = 16;

pub struct ReconciliationBridge<D: Destination, B: ContentBuilder<D>> {
    router: Router<D>,
    changes: Receiver<PathChange>,
    host: NavigationHost<B::Content>,
    builder: B,
}

impl<D: Destination, B: ContentBuilder<D>> ReconciliationBridge<D, B> {
    /// Bind a fresh host to `router`. If the router already holds a path the
    /// host is built from it immediately.
    pub fn new(router: Router<D>, builder: B) -> Self {
        let changes = router.subscribe();
        let mut bridge = Self {
            router,
            changes,
            host: NavigationHost::new(),
            builder,
        };
        if !bridge.router.is_empty() {
            bridge.apply_path();
        }
        bridge
    }

    pub fn router(&self) -> &Router<D> {
        &self.router
    }

    pub fn host(&self) -> &NavigationHost<B::Content> {
        &self.host
    }

    /// Mutable host access for gesture input.
    pub fn host_mut(&mut self) -> &mut NavigationHost<B::Content> {
        &mut self.host
    }

    pub fn state(&self) -> SyncState {
        classify(&self.router.tags(), &self.host.tags())
    }

    /// Drain both event sources until neither has anything left.
    ///
    /// Router notifications always go first so a path that grew in the same
    /// tick is never trimmed by a stale pop event.
    pub fn sync(&mut self) {
        for _ in 0..MAX_SYNC_ROUNDS {
            let mut progressed = false;

            while let Ok(change) = self.changes.try_recv() {
                tracing::trace!(revision = change.revision, kind = ?change.kind, "Router notification");
                self.apply_path();
                progressed = true;
            }

            for event in self.host.take_events() {
                self.handle_host_event(event);
                progressed = true;
            }

            if !progressed {
                return;
            }
        }
        tracing::warn!(
            path = self.router.len(),
            visible = self.host.len(),
            "Reconciliation did not settle"
        );
    }

    /// Rule 1: project the router path onto the host.
    fn apply_path(&mut self) {
        let path = self.router.path();
        let path_tags: Vec<IdentityTag> = path.iter().map(Destination::identity_tag).collect();
        let visible_tags = self.host.tags();

        let common = path_tags.len().min(visible_tags.len());
        let prefix_diverged = path_tags[..common] != visible_tags[..common];

        if path_tags.len() > visible_tags.len() || prefix_diverged {
            tracing::debug!(
                path = path.len(),
                visible = visible_tags.len(),
                prefix_diverged,
                "Rebuilding host stack"
            );
            let units = path
                .iter()
                .zip(path_tags)
                .map(|(destination, tag)| HostedUnit::new(tag, self.builder.build(destination)))
                .collect();
            self.host.set_units(units);
        } else if path_tags.len() < visible_tags.len() {
            tracing::debug!(
                path = path.len(),
                visible = visible_tags.len(),
                "Truncating host stack"
            );
            self.host.truncate(path_tags.len());
        }
    }

    /// Rule 2: the host is authoritative for what the user is looking at,
    /// so the path is trimmed after the host popped on its own.
    ///
    /// `sync` feeds this every event the owned host queued. Hosts that
    /// report completion out of band call it directly.
    pub fn handle_host_event(&mut self, event: HostEvent) {
        let HostEvent::DidShow { top, depth } = event;
        let visible = self.host.len();
        let path_len = self.router.len();

        if visible >= path_len {
            tracing::trace!(?top, depth, "Host event already reconciled");
            return;
        }

        let keep = match top {
            None => 0,
            Some(tag) => match self.router.last_index_of(tag) {
                Some(index) => (index + 1).min(visible),
                None => {
                    tracing::warn!(%tag, visible, path_len, "Host top not found in path");
                    visible
                }
            },
        };

        tracing::debug!(?top, depth, visible, path_len, keep, "Trimming path after host pop");
        self.router.replace_prefix(keep);
    }
}

fn classify(path: &[IdentityTag], visible: &[IdentityTag]) -> SyncState {
    if path.len() < visible.len() {
        SyncState::PendingPop
    } else if path == visible {
        SyncState::Converged
    } else {
        SyncState::PendingPush
    }
}
