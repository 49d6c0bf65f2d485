//! A navigation stack on screen: a bridge whose host renders [`Screen`]s.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::navigation::{ContentBuilder, Destination, ReconciliationBridge, Router, SyncState};
use crate::ui::flow::FlowView;
use crate::ui::layout::split_top_line;
use crate::ui::screen::BoxedScreen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, STATUS_OK, STATUS_PENDING};

const GESTURE_HINTS: &str = "Bksp: Back │ ←: Swipe back │ →: Cancel swipe │ X: Dismiss";

pub struct StackView<D, B>
where
    D: Destination,
    B: ContentBuilder<D, Content = BoxedScreen>,
{
    title: String,
    /// Pushed again when the user dismisses the whole stack.
    root: D,
    bridge: ReconciliationBridge<D, B>,
    visible: bool,
}

impl<D, B> StackView<D, B>
where
    D: Destination,
    B: ContentBuilder<D, Content = BoxedScreen>,
{
    pub fn new(title: impl Into<String>, router: Router<D>, root: D, builder: B) -> Self {
        let mut view = Self {
            title: title.into(),
            root,
            bridge: ReconciliationBridge::new(router, builder),
            visible: true,
        };
        view.reconcile();
        view
    }

    /// Brings the host in line with the router without notifying screens.
    /// A dismissed flow is started again from its root.
    fn reconcile(&mut self) {
        self.bridge.sync();
        let router = self.bridge.router();
        if !router.is_empty() {
            return;
        }
        tracing::info!(flow = %self.title, root = ?self.root, "Flow dismissed, restarting at root");
        router.push(self.root.clone());
        self.bridge.sync();
    }

    fn render_status(&self, frame: &mut Frame<'_>, area: Rect) {
        let host = self.bridge.host();
        let (label, color) = match (self.bridge.state(), host.is_transitioning()) {
            (_, true) => ("swiping back", STATUS_PENDING),
            (SyncState::Converged, false) => ("in sync", STATUS_OK),
            (SyncState::PendingPush, false) => ("pending push", STATUS_PENDING),
            (SyncState::PendingPop, false) => ("pending pop", STATUS_PENDING),
        };
        let line = Line::from(vec![
            Span::styled(
                self.breadcrumb().join(" › "),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(
                format!("{} / {}", host.len(), self.bridge.router().len()),
                Style::default().fg(HEADER_SEPARATOR),
            ),
            Span::styled("  ", Style::default()),
            Span::styled(label, Style::default().fg(color)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl<D, B> FlowView for StackView<D, B>
where
    D: Destination,
    B: ContentBuilder<D, Content = BoxedScreen>,
{
    fn title(&self) -> String {
        self.title.clone()
    }

    fn sync(&mut self) {
        self.reconcile();
        if !self.visible {
            return;
        }
        if let Some(top) = self.bridge.host_mut().top_mut() {
            top.on_appear();
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn tick(&mut self) {
        let host = self.bridge.host_mut();
        host.finish_interactive_pop();
        for unit in host.units_mut() {
            unit.content_mut().on_tick();
        }
        self.sync();
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let host = self.bridge.host_mut();
        if !host.is_transitioning() {
            if let Some(top) = host.top_mut() {
                if top.handle_key(key) {
                    return true;
                }
            }
        }
        match key.code {
            KeyCode::Backspace => host.pop_unit(),
            KeyCode::Left => host.begin_interactive_pop(),
            KeyCode::Right => host.cancel_interactive_pop(),
            KeyCode::Char('X') => host.dismiss_all(),
            _ => false,
        }
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (status, content) = split_top_line(inner);
        self.render_status(frame, status);

        match self.bridge.host().top() {
            Some(screen) => screen.render(frame, content),
            None => frame.render_widget(
                Paragraph::new("Nothing left on this stack.")
                    .style(Style::default().add_modifier(Modifier::DIM)),
                content,
            ),
        }
    }

    fn breadcrumb(&self) -> Vec<String> {
        self.bridge
            .host()
            .units()
            .iter()
            .map(|unit| unit.content().title())
            .collect()
    }

    fn hints(&self) -> String {
        let screen_hints = self
            .bridge
            .host()
            .top()
            .map(|screen| screen.hints())
            .unwrap_or_default();
        if screen_hints.is_empty() {
            GESTURE_HINTS.to_string()
        } else {
            format!("{} │ {}", screen_hints, GESTURE_HINTS)
        }
    }
}
