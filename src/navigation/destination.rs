//! Navigable destinations and their identity tags.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable value derived from a destination, used to correlate router path
/// entries with the units a [`NavigationHost`](super::NavigationHost) renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityTag(u64);

impl IdentityTag {
    /// Hash the full value (discriminant and payload).
    ///
    /// `DefaultHasher::new()` uses fixed keys, so equal values always map to
    /// the same tag for the lifetime of the process.
    pub fn of<T: Hash + ?Sized>(value: &T) -> Self {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        Self(hasher.finish())
    }
}

impl fmt::Display for IdentityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:016x}", self.0)
    }
}

/// A screen identifier plus any immutable payload it needs.
///
/// Implemented by one enum per flow. Payloads are owned values, so a
/// destination pushed onto a router never aliases caller state.
pub trait Destination: Clone + Eq + Hash + fmt::Debug + Send + 'static {
    fn identity_tag(&self) -> IdentityTag {
        IdentityTag::of(self)
    }
}
