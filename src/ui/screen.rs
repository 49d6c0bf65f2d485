//! Renderable content hosted by a navigation stack.

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

/// One screen: the content a `ContentBuilder` produces for a destination.
///
/// Screens never touch a router. Navigation requests go through the
/// delegate the coordinator injected when the screen was built.
pub trait Screen {
    fn title(&self) -> String;

    /// Key hints shown in the footer while this screen is on top.
    fn hints(&self) -> &'static str {
        ""
    }

    /// Called after every sync while the screen is on top. Must be
    /// idempotent.
    fn on_appear(&mut self) {}

    /// Called on every tick for every hosted screen, visible or not.
    fn on_tick(&mut self) {}

    /// Returns true when the key was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    fn render(&self, frame: &mut Frame<'_>, area: Rect);
}

pub type BoxedScreen = Box<dyn Screen>;
