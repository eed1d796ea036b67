use std::sync::LazyLock;

use dynform_types::{Field, FieldKind, FieldValue, FormState, Section, ValidationErrors};
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,}$").expect("valid phone pattern"));

/// Check one candidate value against its field definition.
///
/// Returns an empty string when the value is acceptable, otherwise the
/// message to show next to the field. Rules run in order and stop at the
/// first failure: required, then length limits, then email/phone format.
/// Dropdown, radio, checkbox, date and unsupported kinds only get the
/// required check.
pub fn validate_field(field: &Field, value: Option<&FieldValue>) -> String {
    if field.required && is_missing(&field.kind, value) {
        return field
            .validation_message()
            .unwrap_or(REQUIRED_MESSAGE)
            .to_string();
    }

    let Some(FieldValue::Text(text)) = value else {
        return String::new();
    };
    if !field.kind.is_text_like() {
        return String::new();
    }

    let length = text.chars().count();

    // A zero limit counts as "no limit"
    if let Some(min) = field.min_length.filter(|m| *m > 0)
        && length < min
    {
        return format!("Minimum length is {} characters.", min);
    }

    if let Some(max) = field.max_length.filter(|m| *m > 0)
        && length > max
    {
        return format!("Maximum length is {} characters.", max);
    }

    if text.is_empty() {
        return String::new();
    }

    match field.kind {
        FieldKind::Email if !EMAIL_PATTERN.is_match(text) => INVALID_EMAIL_MESSAGE.to_string(),
        FieldKind::Tel if !PHONE_PATTERN.is_match(text) => INVALID_PHONE_MESSAGE.to_string(),
        _ => String::new(),
    }
}

/// Validate every field of a section against the current values.
///
/// All fields are checked; only failing fields appear in the result.
pub fn validate_section(section: &Section, values: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in &section.fields {
        let message = validate_field(field, values.get(&field.field_id));
        if !message.is_empty() {
            errors.set(field.field_id.clone(), message);
        }
    }

    errors
}

fn is_missing(kind: &FieldKind, value: Option<&FieldValue>) -> bool {
    match (kind, value) {
        (_, None) => true,
        (FieldKind::Checkbox, Some(v)) => !v.is_checked(),
        (_, Some(FieldValue::Text(s))) => s.is_empty(),
        (_, Some(FieldValue::Bool(_))) => false,
    }
}
