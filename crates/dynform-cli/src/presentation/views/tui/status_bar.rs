//! Status Bar View Component
//!
//! Renders the bottom status bar with the status message and key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{KeyHint, StatusBarViewModel};

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        let status_line = Line::from(Span::styled(
            self.model.message.as_str(),
            Style::default().fg(color),
        ));
        Paragraph::new(status_line).render(chunks[0], buf);

        Paragraph::new(hint_line(&self.model.hints)).render(chunks[1], buf);
    }
}

pub(crate) fn hint_line(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();
    for hint in hints {
        spans.push(Span::styled(
            format!("[{}]", hint.key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {} ", hint.action)));
    }
    Line::from(spans)
}
