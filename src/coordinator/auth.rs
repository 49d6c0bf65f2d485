use std::sync::Arc;

use crate::coordinator::Coordinator;
use crate::features::{ForgotPasswordNavigationDelegate, LoginFactory, LoginNavigationDelegate};
use crate::navigation::{Destination, RootPolicy, Router};
use crate::state::SessionDelegate;
use crate::ui::flow::FlowView;
use crate::ui::screen::BoxedScreen;
use crate::ui::stack_view::StackView;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthDestination {
    Login,
    ForgotPassword,
}

impl Destination for AuthDestination {}

/// Flow shown while the session is unauthorized.
pub struct AuthCoordinator {
    router: Router<AuthDestination>,
    session: Arc<dyn SessionDelegate>,
    factory: Arc<dyn LoginFactory>,
}

impl AuthCoordinator {
    pub fn new(session: Arc<dyn SessionDelegate>, factory: Arc<dyn LoginFactory>) -> Self {
        Self {
            router: Router::new(RootPolicy::Mandatory),
            session,
            factory,
        }
    }

    pub fn router(&self) -> &Router<AuthDestination> {
        &self.router
    }
}

impl Coordinator for AuthCoordinator {
    fn start(&mut self) -> Box<dyn FlowView> {
        if self.router.is_empty() {
            self.router.push(AuthDestination::Login);
        }

        let navigator = Arc::new(AuthNavigator {
            router: self.router.clone(),
            session: Arc::clone(&self.session),
        });
        let factory = Arc::clone(&self.factory);
        let builder = move |destination: &AuthDestination| -> BoxedScreen {
            match destination {
                AuthDestination::Login => factory.make_login_screen(navigator.clone()),
                AuthDestination::ForgotPassword => {
                    factory.make_forgot_password_screen(navigator.clone())
                }
            }
        };

        Box::new(StackView::new(
            "Sign in",
            self.router.clone(),
            AuthDestination::Login,
            builder,
        ))
    }
}

struct AuthNavigator {
    router: Router<AuthDestination>,
    session: Arc<dyn SessionDelegate>,
}

impl LoginNavigationDelegate for AuthNavigator {
    fn login_did_succeed(&self) {
        self.session.did_authenticate();
    }

    fn login_did_tap_forgot_password(&self) {
        self.router.push(AuthDestination::ForgotPassword);
    }
}

impl ForgotPasswordNavigationDelegate for AuthNavigator {
    fn forgot_password_did_finish(&self) {
        self.router.pop();
    }
}
