use std::sync::Arc;

use crate::coordinator::Coordinator;
use crate::features::{ProfileFactory, ProfileNavigationDelegate, SettingsData};
use crate::navigation::{Destination, RootPolicy, Router};
use crate::state::SessionDelegate;
use crate::ui::flow::FlowView;
use crate::ui::screen::BoxedScreen;
use crate::ui::stack_view::StackView;

/// `Settings` carries its own copy of the data it was opened with, so two
/// settings entries with different data are different destinations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileDestination {
    Profile,
    Settings(SettingsData),
}

impl Destination for ProfileDestination {}

/// Child of the dashboard: the Profile tab.
pub struct ProfileCoordinator {
    router: Router<ProfileDestination>,
    session: Arc<dyn SessionDelegate>,
    factory: Arc<dyn ProfileFactory>,
}

impl ProfileCoordinator {
    pub fn new(session: Arc<dyn SessionDelegate>, factory: Arc<dyn ProfileFactory>) -> Self {
        Self {
            router: Router::new(RootPolicy::Mandatory),
            session,
            factory,
        }
    }

    pub fn router(&self) -> &Router<ProfileDestination> {
        &self.router
    }
}

impl Coordinator for ProfileCoordinator {
    fn start(&mut self) -> Box<dyn FlowView> {
        if self.router.is_empty() {
            self.router.push(ProfileDestination::Profile);
        }

        let navigator = Arc::new(ProfileNavigator {
            router: self.router.clone(),
            session: Arc::clone(&self.session),
        });
        let factory = Arc::clone(&self.factory);
        let builder = move |destination: &ProfileDestination| -> BoxedScreen {
            match destination {
                ProfileDestination::Profile => factory.make_profile_screen(navigator.clone()),
                ProfileDestination::Settings(data) => factory.make_settings_screen(data.clone()),
            }
        };

        Box::new(StackView::new(
            "Profile",
            self.router.clone(),
            ProfileDestination::Profile,
            builder,
        ))
    }
}

struct ProfileNavigator {
    router: Router<ProfileDestination>,
    session: Arc<dyn SessionDelegate>,
}

impl ProfileNavigationDelegate for ProfileNavigator {
    fn profile_did_tap_settings(&self, settings: SettingsData) {
        self.router.push(ProfileDestination::Settings(settings));
    }

    fn profile_did_tap_logout(&self) {
        self.session.did_request_logout();
    }
}
