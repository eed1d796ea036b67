use std::collections::HashSet;
use std::fmt;

use dynform_types::{FieldKind, Form};
use serde::Serialize;

/// Category of schema defect.
///
/// None of these stop a form from loading; they only degrade how the
/// affected field or section renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Field type the renderer has no control for
    UnsupportedFieldType(String),
    /// Dropdown or radio field without any options
    MissingOptions,
    /// Options listed on a field that never shows them
    UnusedOptions,
    /// Field id already used earlier in the form
    DuplicateFieldId,
    /// Section without fields
    EmptySection,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::UnsupportedFieldType(name) => {
                write!(f, "unsupported field type '{}'", name)
            }
            AnomalyKind::MissingOptions => write!(f, "choice field has no options"),
            AnomalyKind::UnusedOptions => write!(f, "options on a non-choice field are ignored"),
            AnomalyKind::DuplicateFieldId => {
                write!(f, "field id reused; values are shared with the earlier field")
            }
            AnomalyKind::EmptySection => write!(f, "section has no fields"),
        }
    }
}

/// One schema defect with its location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaAnomaly {
    pub section_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
    #[serde(flatten)]
    pub kind: AnomalyKind,
}

impl fmt::Display for SchemaAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field_id {
            Some(field_id) => write!(f, "{}/{}: {}", self.section_id, field_id, self.kind),
            None => write!(f, "{}: {}", self.section_id, self.kind),
        }
    }
}

/// Walk a form and report every schema defect, in form order
pub fn inspect_form(form: &Form) -> Vec<SchemaAnomaly> {
    let mut anomalies = Vec::new();
    let mut seen = HashSet::new();

    for section in &form.sections {
        if section.fields.is_empty() {
            anomalies.push(SchemaAnomaly {
                section_id: section.section_id.clone(),
                field_id: None,
                kind: AnomalyKind::EmptySection,
            });
        }

        for field in &section.fields {
            let mut report = |kind| {
                anomalies.push(SchemaAnomaly {
                    section_id: section.section_id.clone(),
                    field_id: Some(field.field_id.clone()),
                    kind,
                })
            };

            if !seen.insert(field.field_id.as_str()) {
                report(AnomalyKind::DuplicateFieldId);
            }

            match &field.kind {
                FieldKind::Unsupported(name) => {
                    report(AnomalyKind::UnsupportedFieldType(name.clone()))
                }
                kind if kind.is_choice() && field.options.is_empty() => {
                    report(AnomalyKind::MissingOptions)
                }
                kind if !kind.is_choice() && !field.options.is_empty() => {
                    report(AnomalyKind::UnusedOptions)
                }
                _ => {}
            }
        }
    }

    anomalies
}
