//! Tab container composing independent flows.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Tabs;
use ratatui::Frame;

use crate::ui::flow::FlowView;
use crate::ui::layout::split_top_line;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR};

/// Each tab keeps its own flow and therefore its own routers. Only the
/// selected tab receives keys and is visible; every tab is synced and ticked.
pub struct TabView {
    title: String,
    tabs: Vec<Box<dyn FlowView>>,
    selected: usize,
}

impl TabView {
    pub fn new(title: impl Into<String>, tabs: Vec<Box<dyn FlowView>>) -> Self {
        let mut view = Self {
            title: title.into(),
            tabs,
            selected: 0,
        };
        view.update_visibility();
        view
    }

    pub fn select_next(&mut self) {
        if !self.tabs.is_empty() {
            self.selected = (self.selected + 1) % self.tabs.len();
            self.update_visibility();
        }
    }

    fn update_visibility(&mut self) {
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            tab.set_visible(index == self.selected);
        }
    }
}

impl FlowView for TabView {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn sync(&mut self) {
        for tab in &mut self.tabs {
            tab.sync();
        }
    }

    fn tick(&mut self) {
        for tab in &mut self.tabs {
            tab.tick();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Tab {
            self.select_next();
            return true;
        }
        match self.tabs.get_mut(self.selected) {
            Some(tab) => tab.handle_key(key),
            None => false,
        }
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let (strip, body) = split_top_line(area);
        let titles: Vec<String> = self.tabs.iter().map(|tab| tab.title()).collect();
        let tabs = Tabs::new(titles)
            .select(self.selected)
            .style(Style::default().fg(HEADER_SEPARATOR))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, strip);

        if let Some(tab) = self.tabs.get(self.selected) {
            tab.render(frame, body);
        }
    }

    fn breadcrumb(&self) -> Vec<String> {
        self.tabs
            .get(self.selected)
            .map(|tab| tab.breadcrumb())
            .unwrap_or_default()
    }

    fn hints(&self) -> String {
        let tab_hints = self
            .tabs
            .get(self.selected)
            .map(|tab| tab.hints())
            .unwrap_or_default();
        format!("Tab: Switch tab │ {}", tab_hints)
    }
}
