//! Message View Component
//!
//! Full-screen panel for the loading and failure states.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{KeyHint, StatusLevel};

use super::{status_bar::hint_line, status_level_to_color};

pub struct MessageView<'a> {
    title: &'a str,
    message: &'a str,
    level: StatusLevel,
    hints: &'a [KeyHint],
}

impl<'a> MessageView<'a> {
    pub fn new(title: &'a str, message: &'a str, level: StatusLevel, hints: &'a [KeyHint]) -> Self {
        Self {
            title,
            message,
            level,
            hints,
        }
    }
}

impl<'a> Widget for MessageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.level);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));

        let mut lines = vec![
            Line::from(Span::styled(self.message, Style::default().fg(color))),
            Line::default(),
        ];
        if !self.hints.is_empty() {
            lines.push(hint_line(self.hints));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
