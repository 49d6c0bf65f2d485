//! Shared test utilities: a small destination type, a string content
//! builder, and recording doubles for factories and delegates.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flowstack::features::{
    ForgotPasswordNavigationDelegate, HomeFactory, HomeNavigationDelegate, LoginFactory,
    LoginNavigationDelegate, ProfileFactory, ProfileNavigationDelegate, SettingsData,
};
use flowstack::navigation::{Destination, ReconciliationBridge, RootPolicy, Router};
use flowstack::state::SessionDelegate;
use flowstack::ui::screen::{BoxedScreen, Screen};
use parking_lot::Mutex;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    A,
    B,
    C,
    D,
    Detail(u32),
}

impl Destination for Page {}

pub type TestBridge = ReconciliationBridge<Page, fn(&Page) -> String>;

fn label(page: &Page) -> String {
    format!("{:?}", page)
}

/// Router pre-loaded with `pages`, in order.
pub fn router_with(policy: RootPolicy, pages: &[Page]) -> Router<Page> {
    let router = Router::new(policy);
    for page in pages {
        router.push(page.clone());
    }
    router
}

/// Bridge whose host renders each destination as its debug string.
pub fn bridge(router: &Router<Page>) -> TestBridge {
    ReconciliationBridge::new(router.clone(), label as fn(&Page) -> String)
}

/// Bridge over `pages`, already converged.
pub fn converged(policy: RootPolicy, pages: &[Page]) -> (Router<Page>, TestBridge) {
    let router = router_with(policy, pages);
    let mut bridge = bridge(&router);
    bridge.sync();
    (router, bridge)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// --- Screens ---

/// Screen that renders nothing and consumes no keys. Counts `on_appear`.
pub struct StubScreen {
    title: &'static str,
    appearances: Arc<AtomicUsize>,
}

impl StubScreen {
    pub fn boxed(title: &'static str) -> BoxedScreen {
        Self::counted(title, Arc::new(AtomicUsize::new(0)))
    }

    pub fn counted(title: &'static str, appearances: Arc<AtomicUsize>) -> BoxedScreen {
        Box::new(Self { title, appearances })
    }
}

impl Screen for StubScreen {
    fn title(&self) -> String {
        self.title.to_string()
    }

    fn on_appear(&mut self) {
        self.appearances.fetch_add(1, Ordering::SeqCst);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }

    fn render(&self, _frame: &mut Frame<'_>, _area: Rect) {}
}

// --- Delegates ---

#[derive(Default)]
pub struct SpySession {
    authenticated: AtomicUsize,
    logouts: AtomicUsize,
}

impl SpySession {
    pub fn authenticated(&self) -> usize {
        self.authenticated.load(Ordering::SeqCst)
    }

    pub fn logouts(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }
}

impl SessionDelegate for SpySession {
    fn did_authenticate(&self) {
        self.authenticated.fetch_add(1, Ordering::SeqCst);
    }

    fn did_request_logout(&self) {
        self.logouts.fetch_add(1, Ordering::SeqCst);
    }
}

// --- Factories ---

/// Records the delegates the coordinator injects so tests can drive them.
#[derive(Default)]
pub struct MockLoginFactory {
    login: Mutex<Option<Arc<dyn LoginNavigationDelegate>>>,
    forgot: Mutex<Option<Arc<dyn ForgotPasswordNavigationDelegate>>>,
    built: AtomicUsize,
}

impl MockLoginFactory {
    pub fn login_delegate(&self) -> Arc<dyn LoginNavigationDelegate> {
        self.login.lock().clone().expect("login screen was never built")
    }

    pub fn forgot_delegate(&self) -> Arc<dyn ForgotPasswordNavigationDelegate> {
        self.forgot
            .lock()
            .clone()
            .expect("forgot password screen was never built")
    }

    pub fn screens_built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }
}

impl LoginFactory for MockLoginFactory {
    fn make_login_screen(&self, delegate: Arc<dyn LoginNavigationDelegate>) -> BoxedScreen {
        *self.login.lock() = Some(delegate);
        self.built.fetch_add(1, Ordering::SeqCst);
        StubScreen::boxed("Login")
    }

    fn make_forgot_password_screen(
        &self,
        delegate: Arc<dyn ForgotPasswordNavigationDelegate>,
    ) -> BoxedScreen {
        *self.forgot.lock() = Some(delegate);
        self.built.fetch_add(1, Ordering::SeqCst);
        StubScreen::boxed("Forgot password")
    }
}

#[derive(Default)]
pub struct MockHomeFactory {
    home: Mutex<Option<Arc<dyn HomeNavigationDelegate>>>,
    appearances: Arc<AtomicUsize>,
}

impl MockHomeFactory {
    /// How often any home screen was told it appeared.
    pub fn appearances(&self) -> usize {
        self.appearances.load(Ordering::SeqCst)
    }

    pub fn delegate(&self) -> Arc<dyn HomeNavigationDelegate> {
        self.home.lock().clone().expect("home screen was never built")
    }
}

impl HomeFactory for MockHomeFactory {
    fn make_home_screen(&self, delegate: Arc<dyn HomeNavigationDelegate>) -> BoxedScreen {
        *self.home.lock() = Some(delegate);
        StubScreen::counted("Home", Arc::clone(&self.appearances))
    }
}

#[derive(Default)]
pub struct MockProfileFactory {
    profile: Mutex<Option<Arc<dyn ProfileNavigationDelegate>>>,
    settings_opened: Mutex<Vec<SettingsData>>,
    appearances: Arc<AtomicUsize>,
}

impl MockProfileFactory {
    /// How often any profile screen was told it appeared.
    pub fn appearances(&self) -> usize {
        self.appearances.load(Ordering::SeqCst)
    }

    pub fn delegate(&self) -> Arc<dyn ProfileNavigationDelegate> {
        self.profile
            .lock()
            .clone()
            .expect("profile screen was never built")
    }

    pub fn settings_opened(&self) -> Vec<SettingsData> {
        self.settings_opened.lock().clone()
    }
}

impl ProfileFactory for MockProfileFactory {
    fn make_profile_screen(&self, delegate: Arc<dyn ProfileNavigationDelegate>) -> BoxedScreen {
        *self.profile.lock() = Some(delegate);
        StubScreen::counted("Profile", Arc::clone(&self.appearances))
    }

    fn make_settings_screen(&self, initial: SettingsData) -> BoxedScreen {
        self.settings_opened.lock().push(initial);
        StubScreen::boxed("Settings")
    }
}

pub fn settings(theme: &str, notifications_enabled: bool) -> SettingsData {
    SettingsData {
        notifications_enabled,
        theme: theme.to_string(),
    }
}
