use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::Result;

/// Kind of input a field asks for.
///
/// The wire format is a plain string. Strings outside the known set are kept
/// as [`FieldKind::Unsupported`] so a schema from a newer server still loads
/// and the renderer can show a placeholder for that one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Tel,
    Email,
    Date,
    Textarea,
    Dropdown,
    Radio,
    Checkbox,
    Unsupported(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Tel => "tel",
            FieldKind::Email => "email",
            FieldKind::Date => "date",
            FieldKind::Textarea => "textarea",
            FieldKind::Dropdown => "dropdown",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Unsupported(name) => name,
        }
    }

    /// Kinds whose value is free text subject to length limits
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Textarea
        )
    }

    /// Kinds whose value must be one of the field's options
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Dropdown | FieldKind::Radio)
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => FieldKind::Text,
            "tel" => FieldKind::Tel,
            "email" => FieldKind::Email,
            "date" => FieldKind::Date,
            "textarea" => FieldKind::Textarea,
            "dropdown" => FieldKind::Dropdown,
            "radio" => FieldKind::Radio,
            "checkbox" => FieldKind::Checkbox,
            _ => FieldKind::Unsupported(s),
        }
    }
}

impl From<&str> for FieldKind {
    fn from(s: &str) -> Self {
        FieldKind::from(s.to_string())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable choice of a dropdown or radio field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
    #[serde(rename = "dataTestId", default, skip_serializing_if = "Option::is_none")]
    pub test_marker: Option<String>,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            test_marker: None,
        }
    }
}

/// Custom validation settings attached to a field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A single input within a section.
///
/// `field_id` is expected to be unique across the whole form: values are
/// stored in one flat map for every section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub field_id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
    #[serde(rename = "dataTestId", default, skip_serializing_if = "Option::is_none")]
    pub test_marker: Option<String>,
}

impl Field {
    pub fn new(field_id: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            kind,
            label: label.into(),
            placeholder: None,
            required: false,
            min_length: None,
            max_length: None,
            options: Vec::new(),
            validation: None,
            test_marker: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation = Some(ValidationRule {
            message: Some(message.into()),
        });
        self
    }

    /// Custom "required" message, if the schema provides a non-empty one
    pub fn validation_message(&self) -> Option<&str> {
        self.validation
            .as_ref()
            .and_then(|v| v.message.as_deref())
            .filter(|m| !m.is_empty())
    }

    pub fn option(&self, value: &str) -> Option<&FieldOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// A titled group of fields shown together as one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(section_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            title: title.into(),
            description: String::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_id == field_id)
    }
}

/// Complete form schema; section order is navigation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub form_id: String,
    #[serde(default)]
    pub form_title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Form {
    pub fn new(form_id: impl Into<String>, form_title: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            form_title: form_title.into(),
            version: String::new(),
            sections: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// First field with this id in any section
    pub fn find_field(&self, field_id: &str) -> Option<&Field> {
        self.sections.iter().find_map(|s| s.field(field_id))
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }
}

/// Body returned by the get-form endpoint.
///
/// `success` is informational: a 2xx reply carrying a form is loadable
/// whatever the flag says, and a missing key reads as `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub form: Form,
}

fn default_success() -> bool {
    true
}

impl FormResponse {
    pub fn new(form: Form) -> Self {
        Self {
            success: true,
            form,
        }
    }
}

/// Parse a schema document.
///
/// Accepts either the full `{ "success": ..., "form": {...} }` response body
/// or a bare form object, which is treated as a successful response.
pub fn parse_form_document(json: &str) -> Result<FormResponse> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("form").is_some() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(FormResponse::new(serde_json::from_value(value)?))
    }
}

/// Read and parse a schema document from disk
pub fn read_form_document(path: &Path) -> Result<FormResponse> {
    let content = std::fs::read_to_string(path)?;
    parse_form_document(&content)
}
