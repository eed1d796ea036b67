//! Progress View Component
//!
//! One row of numbered steps joined by connectors; completed steps and the
//! connectors after them are green.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::{ProgressViewModel, StepState};

pub struct ProgressView<'a> {
    model: &'a ProgressViewModel,
}

impl<'a> ProgressView<'a> {
    pub fn new(model: &'a ProgressViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProgressView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        let last = self.model.steps.len().saturating_sub(1);

        for (index, step) in self.model.steps.iter().enumerate() {
            let style = match step.state {
                StepState::Completed => Style::default().fg(Color::Green),
                StepState::Current => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                StepState::Upcoming => Style::default().fg(Color::DarkGray),
            };
            spans.push(Span::styled(format!("({}) ", step.marker), style));
            spans.push(Span::styled(step.title.as_str(), style));

            if index < last {
                let connector = if step.state == StepState::Completed {
                    Color::Green
                } else {
                    Color::DarkGray
                };
                spans.push(Span::styled(" ── ", Style::default().fg(connector)));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
