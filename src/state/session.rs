//! Cross-flow capability: leaf flows ask, the app coordinator decides.

use std::sync::mpsc::{self, Receiver, Sender};

/// Requests a leaf flow may make about the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRequest {
    Authenticate,
    Logout,
}

/// Capability handed to coordinators that need to end or begin a session.
///
/// Holders cannot read or write [`AppState`](super::AppState) directly; the
/// owner of the state applies the request on its next sync.
pub trait SessionDelegate {
    fn did_authenticate(&self);
    fn did_request_logout(&self);
}

/// Channel-backed [`SessionDelegate`].
#[derive(Clone)]
pub struct SessionHandle {
    tx: Sender<SessionRequest>,
}

impl SessionHandle {
    /// Create a handle and the receiver the state owner drains.
    pub fn channel() -> (Self, Receiver<SessionRequest>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    fn request(&self, request: SessionRequest) {
        if self.tx.send(request).is_err() {
            tracing::warn!(?request, "Session request dropped: owner is gone");
        }
    }
}

impl SessionDelegate for SessionHandle {
    fn did_authenticate(&self) {
        self.request(SessionRequest::Authenticate);
    }

    fn did_request_logout(&self) {
        self.request(SessionRequest::Logout);
    }
}
