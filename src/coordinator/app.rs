use std::sync::mpsc::Receiver;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::coordinator::{AuthCoordinator, Coordinator, DashboardCoordinator};
use crate::features::FlowFactories;
use crate::state::{
    AppState, AppStateManager, AppStateObserver, AppStateSnapshot, SessionDelegate,
    SessionHandle, SessionRequest,
};
use crate::ui::flow::FlowView;

struct ActiveFlow {
    state: AppState,
    view: Box<dyn FlowView>,
}

/// Root coordinator. Owns the app state and decides which flow is active.
///
/// Leaf flows only hold a [`SessionHandle`]; their requests are applied here
/// on the next sync, and the resulting state change swaps the active flow.
/// Dropping the previous flow drops its routers with it.
pub struct AppCoordinator {
    app_state: AppStateManager,
    observer: AppStateObserver,
    session: SessionHandle,
    requests: Receiver<SessionRequest>,
    factories: FlowFactories,
    active: Option<ActiveFlow>,
}

impl AppCoordinator {
    pub fn new(app_state: AppStateManager, factories: FlowFactories) -> Self {
        let observer = app_state.subscribe();
        let (session, requests) = SessionHandle::channel();
        Self {
            app_state,
            observer,
            session,
            requests,
            factories,
            active: None,
        }
    }

    /// Present the flow for the current state.
    pub fn start(&mut self) {
        let snapshot = self.observer.current();
        self.present(snapshot.state);
    }

    pub fn snapshot(&self) -> AppStateSnapshot {
        self.app_state.current()
    }

    /// Read-only observation handle for anything outside the tree.
    pub fn observe(&self) -> AppStateObserver {
        self.app_state.subscribe()
    }

    /// State the currently presented flow was built for.
    pub fn active_state(&self) -> Option<AppState> {
        self.active.as_ref().map(|flow| flow.state)
    }

    fn present(&mut self, state: AppState) {
        let session: Arc<dyn SessionDelegate> = Arc::new(self.session.clone());
        let mut view = match state {
            AppState::Unauthorized => {
                AuthCoordinator::new(session, Arc::clone(&self.factories.login)).start()
            }
            AppState::Authenticated => DashboardCoordinator::new(
                session,
                Arc::clone(&self.factories.home),
                Arc::clone(&self.factories.profile),
            )
            .start(),
        };
        view.sync();
        tracing::info!(?state, flow = %view.title(), "Presenting flow");
        self.active = Some(ActiveFlow { state, view });
    }

    fn apply_session_requests(&mut self) {
        while let Ok(request) = self.requests.try_recv() {
            tracing::debug!(?request, "Session request");
            match request {
                SessionRequest::Authenticate => self.app_state.set_state(AppState::Authenticated),
                SessionRequest::Logout => self.app_state.set_state(AppState::Unauthorized),
            }
        }
    }
}

impl FlowView for AppCoordinator {
    fn title(&self) -> String {
        self.active
            .as_ref()
            .map(|flow| flow.view.title())
            .unwrap_or_default()
    }

    fn sync(&mut self) {
        self.apply_session_requests();
        if let Some(snapshot) = self.observer.poll_change() {
            self.present(snapshot.state);
        }
        if let Some(flow) = self.active.as_mut() {
            flow.view.sync();
        }
    }

    fn tick(&mut self) {
        if let Some(flow) = self.active.as_mut() {
            flow.view.tick();
        }
        self.sync();
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let consumed = self
            .active
            .as_mut()
            .map(|flow| flow.view.handle_key(key))
            .unwrap_or(false);
        self.sync();
        consumed
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if let Some(flow) = &self.active {
            flow.view.render(frame, area);
        }
    }

    fn breadcrumb(&self) -> Vec<String> {
        self.active
            .as_ref()
            .map(|flow| flow.view.breadcrumb())
            .unwrap_or_default()
    }

    fn hints(&self) -> String {
        self.active
            .as_ref()
            .map(|flow| flow.view.hints())
            .unwrap_or_default()
    }
}
