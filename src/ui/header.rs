use crate::state::{AppState, AppStateSnapshot, TransitionDirection};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_PENDING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    snapshot: AppStateSnapshot,
    breadcrumb: &'a [String],
}

impl<'a> Header<'a> {
    pub fn new(snapshot: AppStateSnapshot, breadcrumb: &'a [String]) -> Self {
        Self {
            snapshot,
            breadcrumb,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (label, status_style) = match self.snapshot.state {
            AppState::Authenticated => ("Signed in", Style::default().fg(STATUS_OK)),
            AppState::Unauthorized => ("Signed out", Style::default().fg(STATUS_PENDING)),
        };
        let direction = match self.snapshot.direction {
            TransitionDirection::Forward => "→",
            TransitionDirection::Backward => "←",
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", status_style),
            Span::styled("  ", text_style),
            Span::styled(label, text_style.add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}", direction), separator_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.breadcrumb.join(" › "), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
