//! Profile tab screens: the profile itself and its settings page.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::runtime::Handle;

use crate::features::repository::{MockDataRepository, PendingLoad, SettingsData, User};
use crate::ui::mvi::{dispatch, Intent, Reducer, UiState};
use crate::ui::screen::{BoxedScreen, Screen};
use crate::ui::theme::{ACCENT, STATUS_OK};

pub trait ProfileNavigationDelegate {
    /// Open settings with a snapshot of the loaded settings.
    fn profile_did_tap_settings(&self, settings: SettingsData);
    fn profile_did_tap_logout(&self);
}

pub trait ProfileFactory {
    fn make_profile_screen(&self, delegate: Arc<dyn ProfileNavigationDelegate>) -> BoxedScreen;

    fn make_settings_screen(&self, initial: SettingsData) -> BoxedScreen;
}

// --- Profile view-model ---

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    #[default]
    Loading,
    Loaded {
        user: User,
        settings: SettingsData,
    },
}

impl UiState for ProfileState {}

#[derive(Debug)]
pub enum ProfileIntent {
    Loaded { user: User, settings: SettingsData },
}

impl Intent for ProfileIntent {}

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Loaded { user, settings } => ProfileState::Loaded { user, settings },
        }
    }
}

// --- Settings view-model ---

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub data: SettingsData,
    /// True once the user changed anything on this page.
    pub dirty: bool,
}

impl UiState for SettingsState {}

#[derive(Debug)]
pub enum SettingsIntent {
    ToggleNotifications,
    CycleTheme,
}

impl Intent for SettingsIntent {}

const THEMES: [&str; 3] = ["Dark", "Light", "System"];

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let SettingsState { mut data, .. } = state;
        match intent {
            SettingsIntent::ToggleNotifications => {
                data.notifications_enabled = !data.notifications_enabled;
            }
            SettingsIntent::CycleTheme => {
                let next = THEMES
                    .iter()
                    .position(|theme| *theme == data.theme)
                    .map(|index| (index + 1) % THEMES.len())
                    .unwrap_or(0);
                data.theme = THEMES[next].to_string();
            }
        }
        SettingsState { data, dirty: true }
    }
}

// --- Screens ---

pub struct DefaultProfileFactory {
    repository: Arc<MockDataRepository>,
    runtime: Handle,
}

impl DefaultProfileFactory {
    pub fn new(repository: Arc<MockDataRepository>, runtime: Handle) -> Self {
        Self {
            repository,
            runtime,
        }
    }
}

impl ProfileFactory for DefaultProfileFactory {
    fn make_profile_screen(&self, delegate: Arc<dyn ProfileNavigationDelegate>) -> BoxedScreen {
        Box::new(ProfileScreen {
            delegate,
            repository: Arc::clone(&self.repository),
            runtime: self.runtime.clone(),
            state: ProfileState::default(),
            pending: None,
        })
    }

    fn make_settings_screen(&self, initial: SettingsData) -> BoxedScreen {
        Box::new(SettingsScreen {
            state: SettingsState {
                data: initial,
                dirty: false,
            },
        })
    }
}

struct ProfileScreen {
    delegate: Arc<dyn ProfileNavigationDelegate>,
    repository: Arc<MockDataRepository>,
    runtime: Handle,
    state: ProfileState,
    pending: Option<PendingLoad<(User, SettingsData)>>,
}

impl Screen for ProfileScreen {
    fn title(&self) -> String {
        "Profile".to_string()
    }

    fn hints(&self) -> &'static str {
        match self.state {
            ProfileState::Loading => "l: Log out",
            ProfileState::Loaded { .. } => "s: Settings │ l: Log out",
        }
    }

    fn on_appear(&mut self) {
        if self.state != ProfileState::Loading || self.pending.is_some() {
            return;
        }
        let repository = Arc::clone(&self.repository);
        self.pending = Some(PendingLoad::spawn(&self.runtime, async move {
            repository.profile_bundle().await
        }));
    }

    fn on_tick(&mut self) {
        let Some((user, settings)) = self.pending.as_mut().and_then(PendingLoad::poll) else {
            return;
        };
        self.pending = None;
        dispatch::<ProfileReducer>(&mut self.state, ProfileIntent::Loaded { user, settings });
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, &self.state) {
            (KeyCode::Char('s'), ProfileState::Loaded { settings, .. }) => {
                self.delegate.profile_did_tap_settings(settings.clone());
                true
            }
            (KeyCode::Char('l'), _) => {
                self.delegate.profile_did_tap_logout();
                true
            }
            _ => false,
        }
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let lines = match &self.state {
            ProfileState::Loading => vec![Line::from("Loading profile...")],
            ProfileState::Loaded { user, .. } => vec![
                Line::styled(
                    user.name.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Line::from(user.email.clone()),
                Line::from(""),
                Line::from("Press s for settings, l to log out."),
            ],
        };
        frame.render_widget(Paragraph::new(lines), area);
    }
}

struct SettingsScreen {
    state: SettingsState,
}

impl Screen for SettingsScreen {
    fn title(&self) -> String {
        "Settings".to_string()
    }

    fn hints(&self) -> &'static str {
        "n: Toggle notifications │ t: Theme"
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let intent = match key.code {
            KeyCode::Char('n') => SettingsIntent::ToggleNotifications,
            KeyCode::Char('t') => SettingsIntent::CycleTheme,
            _ => return false,
        };
        dispatch::<SettingsReducer>(&mut self.state, intent);
        true
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let data = &self.state.data;
        let toggle = if data.notifications_enabled { "on" } else { "off" };
        let mut lines = vec![
            Line::styled("Preferences", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(format!("Notifications: {}", toggle)),
            Line::from(format!("Current theme: {}", data.theme)),
            Line::from(""),
            Line::from(format!("Version: {}", env!("CARGO_PKG_VERSION"))),
        ];
        if self.state.dirty {
            lines.push(Line::styled("Edited", Style::default().fg(STATUS_OK)));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}
