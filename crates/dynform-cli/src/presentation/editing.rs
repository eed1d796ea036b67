//! Change handler for field controls
//!
//! Turns an abstract edit (typed character, toggle, choice step) into the
//! `(field_id, value)` pair the session stores. Checkboxes always produce
//! `FieldValue::Bool`; dropdowns and radios produce the option value string.

use dynform_types::{Field, FieldKind, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditInput {
    Char(char),
    Backspace,
    Clear,
    /// Line break; only text areas accept it
    Newline,
    Toggle,
    NextChoice,
    PreviousChoice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field_id: String,
    pub value: FieldValue,
}

impl FieldChange {
    fn new(field: &Field, value: impl Into<FieldValue>) -> Self {
        Self {
            field_id: field.field_id.clone(),
            value: value.into(),
        }
    }
}

/// Apply `input` to the current value of `field`.
///
/// Returns `None` when the input means nothing for this kind of control,
/// or when a text input is already at its maximum length.
pub fn apply_edit(field: &Field, current: Option<&FieldValue>, input: EditInput) -> Option<FieldChange> {
    let text = current.and_then(FieldValue::as_text).unwrap_or_default();

    match &field.kind {
        FieldKind::Text | FieldKind::Tel | FieldKind::Email | FieldKind::Date => {
            edit_text(field, text, input, false)
        }
        FieldKind::Textarea => edit_text(field, text, input, true),
        FieldKind::Checkbox => match input {
            EditInput::Toggle | EditInput::Char(' ') => {
                let checked = current.is_some_and(FieldValue::is_checked);
                Some(FieldChange::new(field, !checked))
            }
            _ => None,
        },
        FieldKind::Dropdown => {
            // The prompt row ("") sits before the first option
            let mut values = vec![""];
            values.extend(field.options.iter().map(|o| o.value.as_str()));
            step_choice(field, &values, text, input)
        }
        FieldKind::Radio => {
            let values: Vec<&str> = field.options.iter().map(|o| o.value.as_str()).collect();
            step_choice(field, &values, text, input)
        }
        FieldKind::Unsupported(_) => None,
    }
}

fn edit_text(field: &Field, text: &str, input: EditInput, multiline: bool) -> Option<FieldChange> {
    let mut next = text.to_string();
    match input {
        EditInput::Char(c) => {
            if at_max_length(field, text) {
                return None;
            }
            next.push(c);
        }
        EditInput::Newline if multiline => {
            if at_max_length(field, text) {
                return None;
            }
            next.push('\n');
        }
        EditInput::Backspace => {
            next.pop()?;
        }
        EditInput::Clear => {
            if text.is_empty() {
                return None;
            }
            next.clear();
        }
        _ => return None,
    }
    Some(FieldChange::new(field, next))
}

fn at_max_length(field: &Field, text: &str) -> bool {
    field
        .max_length
        .filter(|max| *max > 0)
        .is_some_and(|max| text.chars().count() >= max)
}

fn step_choice(field: &Field, values: &[&str], current: &str, input: EditInput) -> Option<FieldChange> {
    if values.is_empty() {
        return None;
    }

    let position = values.iter().position(|v| *v == current);
    let last = values.len() - 1;
    let index = match (input, position) {
        (EditInput::NextChoice, Some(i)) => (i + 1).min(last),
        (EditInput::NextChoice, None) => 0,
        (EditInput::PreviousChoice, Some(i)) => i.saturating_sub(1),
        (EditInput::PreviousChoice, None) => last,
        _ => return None,
    };

    if position == Some(index) {
        return None;
    }
    Some(FieldChange::new(field, values[index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynform_types::FieldOption;

    fn dept() -> Field {
        Field::new("dept", FieldKind::Dropdown, "Department").with_options(vec![
            FieldOption::new("cs", "Computer Science"),
            FieldOption::new("ee", "Electrical"),
        ])
    }

    fn text_of(change: Option<FieldChange>) -> Option<String> {
        change.map(|c| c.value.to_string())
    }

    #[test]
    fn test_typing_appends_and_backspace_removes() {
        let field = Field::new("name", FieldKind::Text, "Name");
        let change = apply_edit(&field, None, EditInput::Char('A')).unwrap();
        assert_eq!(change.field_id, "name");
        assert_eq!(change.value, FieldValue::text("A"));

        let value = FieldValue::text("Anné");
        assert_eq!(
            text_of(apply_edit(&field, Some(&value), EditInput::Backspace)),
            Some("Ann".to_string())
        );
        assert_eq!(apply_edit(&field, None, EditInput::Backspace), None);
    }

    #[test]
    fn test_max_length_stops_typing() {
        let field = Field::new("code", FieldKind::Text, "Code").with_length(None, Some(3));
        let full = FieldValue::text("abc");
        assert_eq!(apply_edit(&field, Some(&full), EditInput::Char('d')), None);

        let unlimited = Field::new("code", FieldKind::Text, "Code").with_length(None, Some(0));
        assert!(apply_edit(&unlimited, Some(&full), EditInput::Char('d')).is_some());
    }

    #[test]
    fn test_newline_only_in_textarea() {
        let input = Field::new("name", FieldKind::Text, "Name");
        assert_eq!(apply_edit(&input, None, EditInput::Newline), None);

        let area = Field::new("address", FieldKind::Textarea, "Address");
        let line = FieldValue::text("Main St");
        assert_eq!(
            text_of(apply_edit(&area, Some(&line), EditInput::Newline)),
            Some("Main St\n".to_string())
        );
    }

    #[test]
    fn test_checkbox_toggles_bool() {
        let field = Field::new("terms", FieldKind::Checkbox, "I agree");
        let on = apply_edit(&field, None, EditInput::Toggle).unwrap();
        assert_eq!(on.value, FieldValue::Bool(true));

        let off = apply_edit(&field, Some(&on.value), EditInput::Char(' ')).unwrap();
        assert_eq!(off.value, FieldValue::Bool(false));

        assert_eq!(apply_edit(&field, None, EditInput::Char('x')), None);
    }

    #[test]
    fn test_dropdown_steps_through_prompt_and_options() {
        let field = dept();
        // With no value the prompt row is current
        assert_eq!(apply_edit(&field, None, EditInput::PreviousChoice), None);

        let cs = apply_edit(&field, None, EditInput::NextChoice).unwrap();
        assert_eq!(cs.value, FieldValue::text("cs"));

        let ee = apply_edit(&field, Some(&cs.value), EditInput::NextChoice).unwrap();
        assert_eq!(ee.value, FieldValue::text("ee"));
        assert_eq!(apply_edit(&field, Some(&ee.value), EditInput::NextChoice), None);

        let back = apply_edit(&field, Some(&cs.value), EditInput::PreviousChoice).unwrap();
        assert_eq!(back.value, FieldValue::text(""));
    }

    #[test]
    fn test_radio_has_no_empty_choice() {
        let field = Field::new("gender", FieldKind::Radio, "Gender").with_options(vec![
            FieldOption::new("m", "Male"),
            FieldOption::new("f", "Female"),
        ]);
        let first = apply_edit(&field, None, EditInput::NextChoice).unwrap();
        assert_eq!(first.value, FieldValue::text("m"));
        assert_eq!(apply_edit(&field, Some(&first.value), EditInput::PreviousChoice), None);

        let last = apply_edit(&field, None, EditInput::PreviousChoice).unwrap();
        assert_eq!(last.value, FieldValue::text("f"));
    }

    #[test]
    fn test_choice_without_options_ignores_input() {
        let field = Field::new("gender", FieldKind::Radio, "Gender");
        assert_eq!(apply_edit(&field, None, EditInput::NextChoice), None);
    }

    #[test]
    fn test_unsupported_kind_is_read_only() {
        let field = Field::new("level", FieldKind::from("slider"), "Level");
        assert_eq!(apply_edit(&field, None, EditInput::Char('1')), None);
        assert_eq!(apply_edit(&field, None, EditInput::Toggle), None);
    }
}
