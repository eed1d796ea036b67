//! Field Renderer
//!
//! Maps one schema field plus its current value and error to the control
//! the views draw. Every `FieldKind` has exactly one control; kinds the
//! renderer does not know become `FieldControl::Unsupported` instead of
//! failing the whole form.

use dynform_types::{Field, FieldKind, FieldValue};
use serde::Serialize;

pub const SELECT_PROMPT: &str = "Select an option";
pub const TEXTAREA_ROWS: u16 = 4;
pub const NO_OPTIONS_NOTE: &str = "No options available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceViewModel {
    pub value: String,
    pub label: String,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum FieldControl {
    /// Single-line input for text, tel, email and date
    Input {
        input_type: String,
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    TextArea {
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        rows: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    /// Dropdown; `selected` is `None` while the prompt is showing
    Select {
        prompt: String,
        options: Vec<ChoiceViewModel>,
        selected: Option<String>,
    },
    RadioGroup {
        options: Vec<ChoiceViewModel>,
    },
    Checkbox {
        checked: bool,
        label: String,
    },
    Unsupported {
        type_name: String,
    },
}

impl FieldControl {
    /// Text shown in place of an unsupported control
    pub fn unsupported_text(type_name: &str) -> String {
        format!("Unsupported field type: {}", type_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViewModel {
    pub field_id: String,
    pub label: String,
    pub required: bool,
    /// Checkboxes show their label beside the box instead of above it
    pub show_label: bool,
    pub control: FieldControl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Schema problem visible to the user (e.g. a dropdown without options)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_marker: Option<String>,
}

impl FieldViewModel {
    pub fn build(field: &Field, value: Option<&FieldValue>, error: Option<&str>) -> Self {
        let text = value.and_then(FieldValue::as_text).unwrap_or_default();

        let control = match &field.kind {
            FieldKind::Text | FieldKind::Tel | FieldKind::Email | FieldKind::Date => {
                FieldControl::Input {
                    input_type: field.kind.as_str().to_string(),
                    value: text.to_string(),
                    placeholder: field.placeholder.clone(),
                    min_length: limit(field.min_length),
                    max_length: limit(field.max_length),
                }
            }
            FieldKind::Textarea => FieldControl::TextArea {
                value: text.to_string(),
                placeholder: field.placeholder.clone(),
                rows: TEXTAREA_ROWS,
                min_length: limit(field.min_length),
                max_length: limit(field.max_length),
            },
            FieldKind::Dropdown => FieldControl::Select {
                prompt: SELECT_PROMPT.to_string(),
                options: choices(field, text),
                selected: field.option(text).map(|o| o.value.clone()),
            },
            FieldKind::Radio => FieldControl::RadioGroup {
                options: choices(field, text),
            },
            FieldKind::Checkbox => FieldControl::Checkbox {
                checked: value.is_some_and(FieldValue::is_checked),
                label: field.label.clone(),
            },
            FieldKind::Unsupported(name) => FieldControl::Unsupported {
                type_name: name.clone(),
            },
        };

        let note = (field.kind.is_choice() && field.options.is_empty())
            .then(|| NO_OPTIONS_NOTE.to_string());

        Self {
            field_id: field.field_id.clone(),
            label: field.label.clone(),
            required: field.required,
            show_label: field.kind != FieldKind::Checkbox,
            control,
            error: error.filter(|e| !e.is_empty()).map(str::to_string),
            note,
            test_marker: field.test_marker.clone(),
        }
    }

    /// Label with the required marker appended
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

fn limit(value: Option<usize>) -> Option<usize> {
    value.filter(|n| *n > 0)
}

fn choices(field: &Field, current: &str) -> Vec<ChoiceViewModel> {
    field
        .options
        .iter()
        .map(|option| ChoiceViewModel {
            value: option.value.clone(),
            label: option.label.clone(),
            selected: !current.is_empty() && option.value == current,
            test_marker: option.test_marker.clone(),
        })
        .collect()
}
