//! Login View Component

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{KeyHint, LoginFocus, LoginScreenViewModel};

use super::status_bar::hint_line;

pub struct LoginView<'a> {
    model: &'a LoginScreenViewModel,
}

impl<'a> LoginView<'a> {
    pub fn new(model: &'a LoginScreenViewModel) -> Self {
        Self { model }
    }

    fn input_line(&self, label: &'a str, value: &'a str, focus: LoginFocus) -> Line<'a> {
        let focused = self.model.focus == focus && !self.model.pending;
        let frame = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled(format!("{:<13}", label), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("[ ", frame),
            Span::raw(value),
            Span::raw(if focused { "▏" } else { "" }),
            Span::styled(" ]", frame),
        ])
    }
}

impl<'a> Widget for LoginView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, panel, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(60),
            Constraint::Fill(1),
        ])
        .areas(middle);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Login ", Style::default().add_modifier(Modifier::BOLD)));
        let inner = block.inner(panel);
        block.render(panel, buf);

        let button_style = if self.model.pending {
            Style::default().fg(Color::Black).bg(Color::DarkGray)
        } else if self.model.focus == LoginFocus::Submit {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        };

        let mut lines = vec![
            self.input_line("Roll Number", &self.model.roll_number, LoginFocus::RollNumber),
            Line::default(),
            self.input_line("Name", &self.model.name, LoginFocus::Name),
            Line::default(),
            Line::from(Span::styled(
                format!(" {} ", self.model.button_label),
                button_style,
            )),
            Line::default(),
        ];

        if let Some(error) = &self.model.error {
            lines.push(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )));
        }

        let hints = [
            KeyHint::new("Tab", "next"),
            KeyHint::new("Enter", "login"),
            KeyHint::new("Esc", "quit"),
        ];
        lines.push(hint_line(&hints));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
