//! Per-flow coordinators.
//!
//! ```text
//! AppCoordinator (owns AppStateManager)
//! ├── AuthCoordinator        Router<AuthDestination>
//! └── DashboardCoordinator   tab container, no router of its own
//!     ├── HomeCoordinator    Router<HomeDestination>
//!     └── ProfileCoordinator Router<ProfileDestination>
//! ```
//!
//! Every coordinator owns exactly one router (the dashboard owns none and
//! composes its children). Screens reach their coordinator only through the
//! navigation delegate it injects; cross-flow requests leave a coordinator
//! only through its [`SessionDelegate`](crate::state::SessionDelegate).

mod app;
mod auth;
mod dashboard;
mod home;
mod profile;

pub use app::AppCoordinator;
pub use auth::{AuthCoordinator, AuthDestination};
pub use dashboard::DashboardCoordinator;
pub use home::{HomeCoordinator, HomeDestination};
pub use profile::{ProfileCoordinator, ProfileDestination};

use crate::ui::flow::FlowView;

pub trait Coordinator {
    /// Push the flow's root destination and return its renderable root.
    fn start(&mut self) -> Box<dyn FlowView>;
}
