//! Process-wide authentication state with a single writer.

use tokio::sync::watch;

/// High-level flow the application is in. Ordered so a change can be
/// classified as moving forward or backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AppState {
    #[default]
    Unauthorized,
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionDirection {
    #[default]
    Forward,
    Backward,
}

/// Current state plus the direction of the change that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppStateSnapshot {
    pub state: AppState,
    pub direction: TransitionDirection,
}

/// Owner of [`AppState`]. `set_state` is the only way to change it.
pub struct AppStateManager {
    tx: watch::Sender<AppStateSnapshot>,
}

impl AppStateManager {
    pub fn new(initial: AppState) -> Self {
        let (tx, _rx) = watch::channel(AppStateSnapshot {
            state: initial,
            direction: TransitionDirection::Forward,
        });
        Self { tx }
    }

    pub fn current(&self) -> AppStateSnapshot {
        *self.tx.borrow()
    }

    /// Move to `new_state`, recording whether it ranks above the old one.
    ///
    /// Setting the current state again publishes nothing.
    pub fn set_state(&self, new_state: AppState) {
        self.tx.send_if_modified(|snapshot| {
            if snapshot.state == new_state {
                return false;
            }
            let direction = if new_state > snapshot.state {
                TransitionDirection::Forward
            } else {
                TransitionDirection::Backward
            };
            tracing::info!(
                from = ?snapshot.state,
                to = ?new_state,
                ?direction,
                "App state changed"
            );
            *snapshot = AppStateSnapshot {
                state: new_state,
                direction,
            };
            true
        });
    }

    /// Read-only handle for observers.
    pub fn subscribe(&self) -> AppStateObserver {
        AppStateObserver {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for AppStateManager {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

/// Current value plus change notification, without write access.
#[derive(Clone)]
pub struct AppStateObserver {
    rx: watch::Receiver<AppStateSnapshot>,
}

impl AppStateObserver {
    pub fn current(&self) -> AppStateSnapshot {
        *self.rx.borrow()
    }

    /// Returns the new snapshot once per published change.
    pub fn poll_change(&mut self) -> Option<AppStateSnapshot> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            Ok(false) | Err(_) => None,
        }
    }
}
