//! Sign-in screens and the contract they share with the auth flow.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::screen::{BoxedScreen, Screen};
use crate::ui::theme::ACCENT;

pub trait LoginNavigationDelegate {
    fn login_did_succeed(&self);
    fn login_did_tap_forgot_password(&self);
}

pub trait ForgotPasswordNavigationDelegate {
    fn forgot_password_did_finish(&self);
}

pub trait LoginFactory {
    fn make_login_screen(&self, delegate: Arc<dyn LoginNavigationDelegate>) -> BoxedScreen;

    fn make_forgot_password_screen(
        &self,
        delegate: Arc<dyn ForgotPasswordNavigationDelegate>,
    ) -> BoxedScreen;
}

#[derive(Default)]
pub struct DefaultLoginFactory;

impl LoginFactory for DefaultLoginFactory {
    fn make_login_screen(&self, delegate: Arc<dyn LoginNavigationDelegate>) -> BoxedScreen {
        Box::new(LoginScreen { delegate })
    }

    fn make_forgot_password_screen(
        &self,
        delegate: Arc<dyn ForgotPasswordNavigationDelegate>,
    ) -> BoxedScreen {
        Box::new(ForgotPasswordScreen { delegate })
    }
}

struct LoginScreen {
    delegate: Arc<dyn LoginNavigationDelegate>,
}

impl Screen for LoginScreen {
    fn title(&self) -> String {
        "Login".to_string()
    }

    fn hints(&self) -> &'static str {
        "Enter: Log in │ f: Forgot password"
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => self.delegate.login_did_succeed(),
            KeyCode::Char('f') => self.delegate.login_did_tap_forgot_password(),
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::styled(
                "Welcome back",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from("Press Enter to log in."),
            Line::from("Press f if you forgot your password."),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

struct ForgotPasswordScreen {
    delegate: Arc<dyn ForgotPasswordNavigationDelegate>,
}

impl Screen for ForgotPasswordScreen {
    fn title(&self) -> String {
        "Forgot Password".to_string()
    }

    fn hints(&self) -> &'static str {
        "Enter: Send link"
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code != KeyCode::Enter {
            return false;
        }
        self.delegate.forgot_password_did_finish();
        true
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::styled(
                "Reset your password",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from("A reset link will be sent to your email."),
            Line::from("Press Enter to send it and return."),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}
