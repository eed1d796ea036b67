//! Section View Component
//!
//! Draws the active section: title, description, one block per field with
//! its inline error, then the Previous / Next / Submit row. The focused
//! field is kept in view by scrolling.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{
    ChoiceViewModel, FieldControl, FieldViewModel, NavigationViewModel, SectionViewModel,
};

pub struct SectionView<'a> {
    section: &'a SectionViewModel,
    navigation: &'a NavigationViewModel,
}

impl<'a> SectionView<'a> {
    pub fn new(section: &'a SectionViewModel, navigation: &'a NavigationViewModel) -> Self {
        Self {
            section,
            navigation,
        }
    }
}

impl<'a> Widget for SectionView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", self.section.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        if !self.section.description.is_empty() {
            lines.push(Line::from(Span::styled(
                self.section.description.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::default());
        }

        let mut focus_range = None;
        for (index, field) in self.section.fields.iter().enumerate() {
            let focused = self.section.focused == Some(index);
            let start = lines.len();
            lines.extend(field_lines(field, focused));
            if focused {
                focus_range = Some((start, lines.len()));
            }
            lines.push(Line::default());
        }

        if self.section.fields.is_empty() {
            lines.push(Line::from(Span::styled(
                "This section has no fields.",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::default());
        }

        lines.push(navigation_line(self.navigation));

        let height = inner.height as usize;
        let scroll = match focus_range {
            Some((_, end)) if end > height => end - height,
            _ => 0,
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(inner, buf);
    }
}

fn field_lines(field: &FieldViewModel, focused: bool) -> Vec<Line<'static>> {
    let pointer = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = Vec::new();
    if field.show_label {
        lines.push(Line::from(vec![
            Span::raw(pointer),
            Span::styled(field.display_label(), label_style),
        ]));
    }

    let controls = control_lines(field, focused);
    for (row, control) in controls.into_iter().enumerate() {
        // Checkboxes have no label row, so the pointer sits on the box
        let lead = if !field.show_label && row == 0 { pointer } else { "  " };
        let mut spans = vec![Span::raw(lead)];
        spans.extend(control.spans);
        lines.push(Line::from(spans));
    }

    if let Some(note) = &field.note {
        lines.push(Line::from(Span::styled(
            format!("  {}", note),
            Style::default().fg(Color::Yellow),
        )));
    }
    if let Some(error) = &field.error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    lines
}

fn control_lines(field: &FieldViewModel, focused: bool) -> Vec<Line<'static>> {
    let cursor = if focused { "▏" } else { "" };
    let frame = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    match &field.control {
        FieldControl::Input {
            value,
            placeholder,
            max_length,
            ..
        } => {
            let mut spans = vec![Span::styled("[ ", frame)];
            spans.push(text_or_placeholder(value, placeholder.as_deref()));
            spans.push(Span::raw(cursor));
            spans.push(Span::styled(" ]", frame));
            if let Some(max) = max_length {
                spans.push(Span::styled(
                    format!(" {}/{}", value.chars().count(), max),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            vec![Line::from(spans)]
        }
        FieldControl::TextArea {
            value,
            placeholder,
            rows,
            ..
        } => {
            let mut rows_text: Vec<&str> = if value.is_empty() {
                Vec::new()
            } else {
                value.split('\n').collect()
            };
            let empty = rows_text.is_empty();
            let cursor_row = rows_text.len().saturating_sub(1);
            while rows_text.len() < usize::from(*rows) {
                rows_text.push("");
            }

            rows_text
                .into_iter()
                .enumerate()
                .map(|(index, text)| {
                    let mut spans = vec![Span::styled("│ ", frame)];
                    if empty && index == 0 {
                        spans.push(text_or_placeholder("", placeholder.as_deref()));
                    } else {
                        spans.push(Span::raw(text.to_string()));
                    }
                    if index == cursor_row {
                        spans.push(Span::raw(cursor));
                    }
                    Line::from(spans)
                })
                .collect()
        }
        FieldControl::Select {
            prompt,
            options,
            selected,
        } => {
            let label = selected
                .as_ref()
                .and_then(|value| options.iter().find(|o| &o.value == value))
                .map(|o| o.label.clone());
            let text = match label {
                Some(label) => Span::raw(label),
                None => Span::styled(prompt.clone(), Style::default().fg(Color::DarkGray)),
            };
            vec![Line::from(vec![
                Span::styled("◂ ", frame),
                text,
                Span::styled(" ▸", frame),
            ])]
        }
        FieldControl::RadioGroup { options } => vec![radio_line(options, frame)],
        FieldControl::Checkbox { checked, label } => {
            let mark = if *checked { "[x] " } else { "[ ] " };
            let label = if field.required {
                format!("{} *", label)
            } else {
                label.clone()
            };
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            vec![Line::from(vec![
                Span::styled(mark, frame),
                Span::styled(label, style),
            ])]
        }
        FieldControl::Unsupported { type_name } => vec![Line::from(Span::styled(
            FieldControl::unsupported_text(type_name),
            Style::default().fg(Color::Red),
        ))],
    }
}

fn radio_line(options: &[ChoiceViewModel], frame: Style) -> Line<'static> {
    let mut spans = Vec::new();
    for option in options {
        let mark = if option.selected { "(•) " } else { "( ) " };
        spans.push(Span::styled(mark, frame));
        spans.push(Span::raw(format!("{}   ", option.label)));
    }
    Line::from(spans)
}

fn text_or_placeholder(value: &str, placeholder: Option<&str>) -> Span<'static> {
    if value.is_empty() {
        Span::styled(
            placeholder.unwrap_or_default().to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(value.to_string())
    }
}

fn navigation_line(navigation: &NavigationViewModel) -> Line<'static> {
    let button = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    if navigation.show_previous {
        spans.push(Span::styled(
            " Previous ",
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(
        format!(" {} ", navigation.primary.label()),
        button,
    ));
    Line::from(spans)
}
