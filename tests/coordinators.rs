mod common;

use common::{
    key, settings, MockHomeFactory, MockLoginFactory, MockProfileFactory, SpySession,
};
use crossterm::event::KeyCode;
use flowstack::coordinator::{
    AppCoordinator, AuthCoordinator, AuthDestination, Coordinator, DashboardCoordinator,
    ProfileDestination,
};
use flowstack::features::FlowFactories;
use flowstack::navigation::Destination;
use flowstack::state::{AppState, AppStateManager, TransitionDirection};
use flowstack::ui::flow::FlowView;
use std::sync::Arc;

struct Mocks {
    login: Arc<MockLoginFactory>,
    home: Arc<MockHomeFactory>,
    profile: Arc<MockProfileFactory>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            login: Arc::new(MockLoginFactory::default()),
            home: Arc::new(MockHomeFactory::default()),
            profile: Arc::new(MockProfileFactory::default()),
        }
    }

    fn factories(&self) -> FlowFactories {
        FlowFactories {
            login: self.login.clone(),
            home: self.home.clone(),
            profile: self.profile.clone(),
        }
    }
}

// --- AuthCoordinator ---

#[test]
fn auth_start_pushes_login() {
    let session = Arc::new(SpySession::default());
    let factory = Arc::new(MockLoginFactory::default());
    let mut coordinator = AuthCoordinator::new(session, factory.clone());

    let view = coordinator.start();

    assert_eq!(coordinator.router().path(), vec![AuthDestination::Login]);
    assert_eq!(view.breadcrumb(), vec!["Login"]);
    assert_eq!(factory.screens_built(), 1);
}

#[test]
fn forgot_password_round_trip() {
    let session = Arc::new(SpySession::default());
    let factory = Arc::new(MockLoginFactory::default());
    let mut coordinator = AuthCoordinator::new(session.clone(), factory.clone());
    let mut view = coordinator.start();

    factory.login_delegate().login_did_tap_forgot_password();
    view.sync();
    assert_eq!(view.breadcrumb(), vec!["Login", "Forgot password"]);

    factory.forgot_delegate().forgot_password_did_finish();
    view.sync();
    assert_eq!(coordinator.router().path(), vec![AuthDestination::Login]);
    assert_eq!(view.breadcrumb(), vec!["Login"]);
    assert_eq!(session.authenticated(), 0);
}

#[test]
fn login_success_goes_through_session_delegate() {
    let session = Arc::new(SpySession::default());
    let factory = Arc::new(MockLoginFactory::default());
    let mut coordinator = AuthCoordinator::new(session.clone(), factory.clone());
    let _view = coordinator.start();

    factory.login_delegate().login_did_succeed();

    assert_eq!(session.authenticated(), 1);
    assert_eq!(coordinator.router().len(), 1);
}

#[test]
fn back_key_pops_router_through_host() {
    let session = Arc::new(SpySession::default());
    let factory = Arc::new(MockLoginFactory::default());
    let mut coordinator = AuthCoordinator::new(session, factory.clone());
    let mut view = coordinator.start();
    factory.login_delegate().login_did_tap_forgot_password();
    view.sync();

    assert!(view.handle_key(key(KeyCode::Backspace)));
    view.sync();

    assert_eq!(coordinator.router().path(), vec![AuthDestination::Login]);
}

#[test]
fn swipe_back_completes_on_tick() {
    let session = Arc::new(SpySession::default());
    let factory = Arc::new(MockLoginFactory::default());
    let mut coordinator = AuthCoordinator::new(session, factory.clone());
    let mut view = coordinator.start();
    factory.login_delegate().login_did_tap_forgot_password();
    view.sync();

    assert!(view.handle_key(key(KeyCode::Left)));
    view.sync();
    assert_eq!(coordinator.router().len(), 2);

    view.tick();
    assert_eq!(coordinator.router().path(), vec![AuthDestination::Login]);
}

#[test]
fn cancelled_swipe_keeps_screen() {
    let session = Arc::new(SpySession::default());
    let factory = Arc::new(MockLoginFactory::default());
    let mut coordinator = AuthCoordinator::new(session, factory.clone());
    let mut view = coordinator.start();
    factory.login_delegate().login_did_tap_forgot_password();
    view.sync();

    view.handle_key(key(KeyCode::Left));
    assert!(view.handle_key(key(KeyCode::Right)));
    view.tick();

    assert_eq!(coordinator.router().len(), 2);
}

#[test]
fn dismiss_restarts_the_flow_at_its_root() {
    let session = Arc::new(SpySession::default());
    let factory = Arc::new(MockLoginFactory::default());
    let mut coordinator = AuthCoordinator::new(session, factory.clone());
    let mut view = coordinator.start();
    factory.login_delegate().login_did_tap_forgot_password();
    view.sync();

    assert!(view.handle_key(key(KeyCode::Char('X'))));
    view.sync();

    assert_eq!(coordinator.router().path(), vec![AuthDestination::Login]);
    assert_eq!(view.breadcrumb(), vec!["Login"]);
    // Login, Forgot password, then a fresh Login.
    assert_eq!(factory.screens_built(), 3);
}

#[test]
fn hidden_tab_is_not_told_it_appeared() {
    let session = Arc::new(SpySession::default());
    let home = Arc::new(MockHomeFactory::default());
    let profile = Arc::new(MockProfileFactory::default());
    let mut dashboard = DashboardCoordinator::new(session, home.clone(), profile.clone());
    let mut view = dashboard.start();

    view.sync();
    view.tick();
    assert!(home.appearances() > 0);
    assert_eq!(profile.appearances(), 0);

    view.handle_key(key(KeyCode::Tab));
    view.sync();
    assert!(profile.appearances() > 0);
}

// --- DashboardCoordinator ---

#[test]
fn dashboard_tabs_have_independent_routers() {
    let session = Arc::new(SpySession::default());
    let home = Arc::new(MockHomeFactory::default());
    let profile = Arc::new(MockProfileFactory::default());
    let mut dashboard = DashboardCoordinator::new(session.clone(), home, profile.clone());
    let mut view = dashboard.start();
    let home_revision = dashboard.home().router().revision();

    profile
        .delegate()
        .profile_did_tap_settings(settings("Light", false));
    view.sync();

    assert_eq!(
        dashboard.profile().router().path(),
        vec![
            ProfileDestination::Profile,
            ProfileDestination::Settings(settings("Light", false))
        ]
    );
    assert_eq!(dashboard.home().router().len(), 1);
    assert_eq!(dashboard.home().router().revision(), home_revision);
    assert_eq!(session.logouts(), 0);
    assert_eq!(session.authenticated(), 0);
}

#[test]
fn settings_screen_receives_its_payload() {
    let session = Arc::new(SpySession::default());
    let profile = Arc::new(MockProfileFactory::default());
    let mut dashboard = DashboardCoordinator::new(
        session,
        Arc::new(MockHomeFactory::default()),
        profile.clone(),
    );
    let mut view = dashboard.start();

    profile
        .delegate()
        .profile_did_tap_settings(settings("Dark", true));
    view.sync();

    assert_eq!(profile.settings_opened(), vec![settings("Dark", true)]);
}

#[test]
fn settings_with_different_payloads_are_different_destinations() {
    assert_ne!(
        ProfileDestination::Settings(settings("Dark", true)).identity_tag(),
        ProfileDestination::Settings(settings("Light", true)).identity_tag()
    );
}

#[test]
fn tab_key_switches_which_router_receives_gestures() {
    let session = Arc::new(SpySession::default());
    let home = Arc::new(MockHomeFactory::default());
    let profile = Arc::new(MockProfileFactory::default());
    let mut dashboard = DashboardCoordinator::new(session, home, profile.clone());
    let mut view = dashboard.start();
    profile
        .delegate()
        .profile_did_tap_settings(settings("Dark", true));
    view.sync();

    // Home is selected: its root refuses the back button.
    assert!(!view.handle_key(key(KeyCode::Backspace)));
    assert!(view.handle_key(key(KeyCode::Tab)));
    assert_eq!(view.breadcrumb(), vec!["Profile", "Settings"]);

    assert!(view.handle_key(key(KeyCode::Backspace)));
    view.sync();
    assert_eq!(
        dashboard.profile().router().path(),
        vec![ProfileDestination::Profile]
    );
}

#[test]
fn logout_from_either_tab_reaches_session() {
    let session = Arc::new(SpySession::default());
    let home = Arc::new(MockHomeFactory::default());
    let profile = Arc::new(MockProfileFactory::default());
    let mut dashboard = DashboardCoordinator::new(session.clone(), home.clone(), profile.clone());
    let _view = dashboard.start();

    home.delegate().home_did_tap_logout();
    profile.delegate().profile_did_tap_logout();

    assert_eq!(session.logouts(), 2);
}

// --- AppCoordinator ---

#[test]
fn app_starts_in_auth_flow() {
    let mocks = Mocks::new();
    let mut app = AppCoordinator::new(AppStateManager::new(AppState::Unauthorized), mocks.factories());

    app.start();

    assert_eq!(app.active_state(), Some(AppState::Unauthorized));
    assert_eq!(app.breadcrumb(), vec!["Login"]);
}

#[test]
fn app_can_start_authenticated() {
    let mocks = Mocks::new();
    let mut app = AppCoordinator::new(
        AppStateManager::new(AppState::Authenticated),
        mocks.factories(),
    );

    app.start();

    assert_eq!(app.active_state(), Some(AppState::Authenticated));
    assert_eq!(app.title(), "Dashboard");
}

#[test]
fn login_then_logout_switches_flows() {
    let mocks = Mocks::new();
    let mut app = AppCoordinator::new(AppStateManager::new(AppState::Unauthorized), mocks.factories());
    app.start();

    mocks.login.login_delegate().login_did_succeed();
    app.sync();

    assert_eq!(app.active_state(), Some(AppState::Authenticated));
    assert_eq!(app.snapshot().direction, TransitionDirection::Forward);
    assert_eq!(app.breadcrumb(), vec!["Home"]);

    mocks.home.delegate().home_did_tap_logout();
    app.sync();

    assert_eq!(app.active_state(), Some(AppState::Unauthorized));
    assert_eq!(app.snapshot().direction, TransitionDirection::Backward);
    assert_eq!(app.breadcrumb(), vec!["Login"]);
}

#[test]
fn auth_flow_is_rebuilt_fresh_after_logout() {
    let mocks = Mocks::new();
    let mut app = AppCoordinator::new(AppStateManager::new(AppState::Unauthorized), mocks.factories());
    app.start();
    mocks.login.login_delegate().login_did_tap_forgot_password();
    app.sync();
    assert_eq!(app.breadcrumb(), vec!["Login", "Forgot password"]);

    mocks.login.login_delegate().login_did_succeed();
    app.sync();
    mocks.profile.delegate().profile_did_tap_logout();
    app.sync();

    assert_eq!(app.breadcrumb(), vec!["Login"]);
}

#[test]
fn observer_sees_each_transition_once() {
    let mocks = Mocks::new();
    let mut app = AppCoordinator::new(AppStateManager::new(AppState::Unauthorized), mocks.factories());
    let mut observer = app.observe();
    app.start();
    assert!(observer.poll_change().is_none());

    mocks.login.login_delegate().login_did_succeed();
    mocks.login.login_delegate().login_did_succeed();
    app.sync();

    let change = observer.poll_change().map(|snapshot| snapshot.state);
    assert_eq!(change, Some(AppState::Authenticated));
    assert!(observer.poll_change().is_none());
}

#[test]
fn repeated_logout_is_a_single_transition() {
    let mocks = Mocks::new();
    let mut app = AppCoordinator::new(
        AppStateManager::new(AppState::Authenticated),
        mocks.factories(),
    );
    app.start();
    let home = mocks.home.delegate();
    let profile = mocks.profile.delegate();

    home.home_did_tap_logout();
    profile.profile_did_tap_logout();
    app.sync();

    assert_eq!(app.active_state(), Some(AppState::Unauthorized));
    assert_eq!(mocks.login.screens_built(), 1);
}

#[test]
fn app_keys_reach_the_active_flow() {
    let mocks = Mocks::new();
    let mut app = AppCoordinator::new(AppStateManager::new(AppState::Unauthorized), mocks.factories());
    app.start();
    mocks.login.login_delegate().login_did_tap_forgot_password();
    app.sync();

    assert!(app.handle_key(key(KeyCode::Backspace)));

    assert_eq!(app.breadcrumb(), vec!["Login"]);
}
