//! Home tab screen.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::runtime::Handle;

use crate::features::repository::{MockDataRepository, PendingLoad};
use crate::ui::mvi::{dispatch, Intent, Reducer, UiState};
use crate::ui::screen::{BoxedScreen, Screen};
use crate::ui::theme::ACCENT;

pub trait HomeNavigationDelegate {
    fn home_did_tap_logout(&self);
}

pub trait HomeFactory {
    fn make_home_screen(&self, delegate: Arc<dyn HomeNavigationDelegate>) -> BoxedScreen;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HomeState {
    #[default]
    Loading,
    Loaded {
        welcome_message: String,
    },
}

impl UiState for HomeState {}

#[derive(Debug)]
pub enum HomeIntent {
    MessageLoaded { welcome_message: String },
}

impl Intent for HomeIntent {}

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::MessageLoaded { welcome_message } => HomeState::Loaded { welcome_message },
        }
    }
}

pub struct DefaultHomeFactory {
    repository: Arc<MockDataRepository>,
    runtime: Handle,
}

impl DefaultHomeFactory {
    pub fn new(repository: Arc<MockDataRepository>, runtime: Handle) -> Self {
        Self {
            repository,
            runtime,
        }
    }
}

impl HomeFactory for DefaultHomeFactory {
    fn make_home_screen(&self, delegate: Arc<dyn HomeNavigationDelegate>) -> BoxedScreen {
        Box::new(HomeScreen {
            delegate,
            repository: Arc::clone(&self.repository),
            runtime: self.runtime.clone(),
            state: HomeState::default(),
            pending: None,
        })
    }
}

struct HomeScreen {
    delegate: Arc<dyn HomeNavigationDelegate>,
    repository: Arc<MockDataRepository>,
    runtime: Handle,
    state: HomeState,
    pending: Option<PendingLoad<String>>,
}

impl Screen for HomeScreen {
    fn title(&self) -> String {
        "Home".to_string()
    }

    fn hints(&self) -> &'static str {
        "l: Log out"
    }

    fn on_appear(&mut self) {
        if self.state != HomeState::Loading || self.pending.is_some() {
            return;
        }
        let repository = Arc::clone(&self.repository);
        self.pending = Some(PendingLoad::spawn(&self.runtime, async move {
            repository.welcome_message().await
        }));
    }

    fn on_tick(&mut self) {
        let Some(welcome_message) = self.pending.as_mut().and_then(PendingLoad::poll) else {
            return;
        };
        self.pending = None;
        dispatch::<HomeReducer>(&mut self.state, HomeIntent::MessageLoaded { welcome_message });
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code != KeyCode::Char('l') {
            return false;
        }
        self.delegate.home_did_tap_logout();
        true
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let headline = match &self.state {
            HomeState::Loading => "Loading...".to_string(),
            HomeState::Loaded { welcome_message } => welcome_message.clone(),
        };
        let lines = vec![
            Line::styled(
                headline,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from("Press l to log out."),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}
