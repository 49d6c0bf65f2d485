//! Imperative, gesture-capable navigation surface.
//!
//! The host renders one [`HostedUnit`] per destination. Its stack is changed
//! from two sides: the reconciliation bridge replaces or truncates it, and
//! user gestures pop units without asking the router first. After every
//! completed transition the host queues a [`HostEvent::DidShow`].

use std::collections::VecDeque;

use super::destination::IdentityTag;

/// One rendered unit, tagged with the identity of the destination it shows.
pub struct HostedUnit<C> {
    tag: IdentityTag,
    content: C,
}

impl<C> HostedUnit<C> {
    pub fn new(tag: IdentityTag, content: C) -> Self {
        Self { tag, content }
    }

    pub fn tag(&self) -> IdentityTag {
        self.tag
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }
}

/// Completion event, emitted after programmatic and user-driven transitions
/// alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    DidShow {
        /// Tag of the topmost unit, `None` when the stack is empty.
        top: Option<IdentityTag>,
        depth: usize,
    },
}

/// Which side last changed the visible stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Programmatic,
    User,
}

pub struct NavigationHost<C> {
    units: Vec<HostedUnit<C>>,
    /// Set while a swipe-back gesture is in flight. The top unit stays
    /// visible until the gesture finishes or is cancelled.
    interactive_pop: bool,
    events: VecDeque<HostEvent>,
}

impl<C> Default for NavigationHost<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> NavigationHost<C> {
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            interactive_pop: false,
            events: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn tags(&self) -> Vec<IdentityTag> {
        self.units.iter().map(HostedUnit::tag).collect()
    }

    fn top_tag(&self) -> Option<IdentityTag> {
        self.units.last().map(HostedUnit::tag)
    }

    pub fn top(&self) -> Option<&C> {
        self.units.last().map(HostedUnit::content)
    }

    pub fn top_mut(&mut self) -> Option<&mut C> {
        self.units.last_mut().map(HostedUnit::content_mut)
    }

    pub fn units(&self) -> &[HostedUnit<C>] {
        &self.units
    }

    pub fn units_mut(&mut self) -> impl Iterator<Item = &mut HostedUnit<C>> {
        self.units.iter_mut()
    }

    pub fn is_transitioning(&self) -> bool {
        self.interactive_pop
    }

    /// Replace the whole stack.
    pub fn set_units(&mut self, units: Vec<HostedUnit<C>>) {
        self.cancel_gesture_for_programmatic_change();
        self.units = units;
        self.did_show(Origin::Programmatic);
    }

    /// Drop every unit above the first `n`.
    pub fn truncate(&mut self, n: usize) {
        if n >= self.units.len() {
            return;
        }
        self.cancel_gesture_for_programmatic_change();
        self.units.truncate(n);
        self.did_show(Origin::Programmatic);
    }

    /// Back button. The root unit cannot be popped this way.
    pub fn pop_unit(&mut self) -> bool {
        if self.units.len() <= 1 || self.interactive_pop {
            return false;
        }
        self.units.pop();
        self.did_show(Origin::User);
        true
    }

    /// Start a swipe-back gesture on the top unit.
    pub fn begin_interactive_pop(&mut self) -> bool {
        if self.units.len() <= 1 || self.interactive_pop {
            return false;
        }
        tracing::trace!(depth = self.units.len(), "Interactive pop started");
        self.interactive_pop = true;
        true
    }

    /// The gesture crossed its threshold and the animation completed.
    pub fn finish_interactive_pop(&mut self) -> bool {
        if !self.interactive_pop {
            return false;
        }
        self.interactive_pop = false;
        self.units.pop();
        self.did_show(Origin::User);
        true
    }

    /// The user released the gesture early; the top unit settles back.
    pub fn cancel_interactive_pop(&mut self) -> bool {
        if !self.interactive_pop {
            return false;
        }
        self.interactive_pop = false;
        self.did_show(Origin::User);
        true
    }

    /// Swipe-to-dismiss the whole stack.
    pub fn dismiss_all(&mut self) -> bool {
        if self.units.is_empty() {
            return false;
        }
        self.interactive_pop = false;
        self.units.clear();
        self.did_show(Origin::User);
        true
    }

    /// Drain completion events in the order the transitions finished.
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        self.events.drain(..).collect()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn cancel_gesture_for_programmatic_change(&mut self) {
        if self.interactive_pop {
            tracing::debug!("Programmatic change cancels in-flight interactive pop");
            self.interactive_pop = false;
        }
    }

    fn did_show(&mut self, origin: Origin) {
        let event = HostEvent::DidShow {
            top: self.top_tag(),
            depth: self.units.len(),
        };
        tracing::trace!(?origin, ?event, "Host transition completed");
        self.events.push_back(event);
    }
}
