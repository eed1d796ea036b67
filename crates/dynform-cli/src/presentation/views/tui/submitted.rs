//! Submitted View Component
//!
//! Success message and a read-only summary of the submitted values.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{KeyHint, SubmittedViewModel};

use super::{HeaderView, status_bar::hint_line};

pub struct SubmittedView<'a> {
    model: &'a SubmittedViewModel,
}

impl<'a> SubmittedView<'a> {
    pub fn new(model: &'a SubmittedViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SubmittedView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let banner = self.model.banner.as_deref();
        let [header_area, body_area] = Layout::vertical([
            Constraint::Length(HeaderView::height(banner)),
            Constraint::Min(5),
        ])
        .areas(area);

        HeaderView::new(&self.model.header, banner).render(header_area, buf);

        let label_width = self
            .model
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![
            Line::from(Span::styled(
                self.model.message.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Submitted at {}", self.model.submitted_at),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];

        for entry in &self.model.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", entry.label, width = label_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(entry.value.as_str()),
            ]));
        }

        lines.push(Line::default());
        lines.push(hint_line(&[KeyHint::new("Enter", "finish")]));

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false })
            .render(body_area, buf);
    }
}
