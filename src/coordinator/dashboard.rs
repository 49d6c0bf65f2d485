use std::sync::Arc;

use crate::coordinator::{Coordinator, HomeCoordinator, ProfileCoordinator};
use crate::features::{HomeFactory, ProfileFactory};
use crate::state::SessionDelegate;
use crate::ui::flow::FlowView;
use crate::ui::tab_view::TabView;

/// Flow shown while the session is authenticated: a tab per child flow.
pub struct DashboardCoordinator {
    home: HomeCoordinator,
    profile: ProfileCoordinator,
}

impl DashboardCoordinator {
    pub fn new(
        session: Arc<dyn SessionDelegate>,
        home_factory: Arc<dyn HomeFactory>,
        profile_factory: Arc<dyn ProfileFactory>,
    ) -> Self {
        Self {
            home: HomeCoordinator::new(Arc::clone(&session), home_factory),
            profile: ProfileCoordinator::new(session, profile_factory),
        }
    }

    pub fn home(&self) -> &HomeCoordinator {
        &self.home
    }

    pub fn profile(&self) -> &ProfileCoordinator {
        &self.profile
    }
}

impl Coordinator for DashboardCoordinator {
    fn start(&mut self) -> Box<dyn FlowView> {
        Box::new(TabView::new(
            "Dashboard",
            vec![self.home.start(), self.profile.start()],
        ))
    }
}
