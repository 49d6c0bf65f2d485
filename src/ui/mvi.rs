//! Model-View-Intent primitives for screen view-models.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Screen::render
//!    ↑                                  │
//!    └──── key press / async result ────┘
//! ```
//!
//! Screens keep their view-model as a [`UiState`] value and only change it
//! by dispatching an [`Intent`] through their [`Reducer`]. Navigation never
//! flows through here: screens report navigation through their delegate.

/// Marker trait for view-model state.
///
/// States are plain values: cloned to derive a new state, compared to detect
/// changes, and defaulted to the "nothing loaded yet" state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for user actions and completed async loads.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over the state stored in `slot`.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
