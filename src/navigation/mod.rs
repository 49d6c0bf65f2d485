//! Declarative navigation path bridged onto an imperative host.
//!
//! # Architecture
//!
//! ```text
//!  Coordinator ── push/pop/reset ──→ Router (path)
//!                                      │ PathChange
//!                                      ▼
//!                          ReconciliationBridge ── set_units/truncate ──→ NavigationHost
//!                                      ▲                                     │
//!                                      └──────── HostEvent::DidShow ─────────┘
//!                                                 (after gestures too)
//! ```
//!
//! - **Router**: sole owner of the path; the source of truth.
//! - **NavigationHost**: visible stack; user gestures mutate it directly.
//! - **ReconciliationBridge**: converges the two after every drain.

mod bridge;
mod destination;
mod host;
mod router;

pub use bridge::{ContentBuilder, ReconciliationBridge, SyncState};
pub use destination::{Destination, IdentityTag};
pub use host::{HostEvent, HostedUnit, NavigationHost};
pub use router::{ChangeKind, PathChange, RootPolicy, Router};
