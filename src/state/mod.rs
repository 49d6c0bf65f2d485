//! Application-level state shared across flows.

mod app_state;
mod session;

pub use app_state::{
    AppState, AppStateManager, AppStateObserver, AppStateSnapshot, TransitionDirection,
};
pub use session::{SessionDelegate, SessionHandle, SessionRequest};
