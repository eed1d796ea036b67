//! Header View Component
//!
//! Form title, `Form ID | Version` line and the signed-in banner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::HeaderViewModel;

pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
    banner: Option<&'a str>,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel, banner: Option<&'a str>) -> Self {
        Self { model, banner }
    }

    /// Rows needed including borders
    pub fn height(banner: Option<&str>) -> u16 {
        if banner.is_some() { 5 } else { 4 }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.model.subtitle.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        if let Some(banner) = self.banner {
            lines.push(Line::from(Span::styled(
                banner,
                Style::default().fg(Color::Green),
            )));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
