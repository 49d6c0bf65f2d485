use std::sync::Arc;

use crate::coordinator::Coordinator;
use crate::features::{HomeFactory, HomeNavigationDelegate};
use crate::navigation::{Destination, RootPolicy, Router};
use crate::state::SessionDelegate;
use crate::ui::flow::FlowView;
use crate::ui::screen::BoxedScreen;
use crate::ui::stack_view::StackView;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HomeDestination {
    Home,
}

impl Destination for HomeDestination {}

/// Child of the dashboard: the Home tab.
pub struct HomeCoordinator {
    router: Router<HomeDestination>,
    session: Arc<dyn SessionDelegate>,
    factory: Arc<dyn HomeFactory>,
}

impl HomeCoordinator {
    pub fn new(session: Arc<dyn SessionDelegate>, factory: Arc<dyn HomeFactory>) -> Self {
        Self {
            router: Router::new(RootPolicy::Mandatory),
            session,
            factory,
        }
    }

    pub fn router(&self) -> &Router<HomeDestination> {
        &self.router
    }
}

impl Coordinator for HomeCoordinator {
    fn start(&mut self) -> Box<dyn FlowView> {
        if self.router.is_empty() {
            self.router.push(HomeDestination::Home);
        }

        let navigator = Arc::new(HomeNavigator {
            session: Arc::clone(&self.session),
        });
        let factory = Arc::clone(&self.factory);
        let builder = move |destination: &HomeDestination| -> BoxedScreen {
            match destination {
                HomeDestination::Home => factory.make_home_screen(navigator.clone()),
            }
        };

        Box::new(StackView::new(
            "Home",
            self.router.clone(),
            HomeDestination::Home,
            builder,
        ))
    }
}

struct HomeNavigator {
    session: Arc<dyn SessionDelegate>,
}

impl HomeNavigationDelegate for HomeNavigator {
    fn home_did_tap_logout(&self) {
        self.session.did_request_logout();
    }
}
