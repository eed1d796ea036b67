//! Sample documents for CLI tests.
//!
//! The registration form has two sections so navigation, blocking and
//! submission can all be exercised from a values file.

use serde_json::{Value, json};

/// Two-section registration form wrapped in a get-form response body
pub fn registration_form() -> Value {
    json!({
        "success": true,
        "form": {
            "formId": "reg-2024",
            "formTitle": "Student Registration",
            "version": "1.0",
            "sections": [
                {
                    "sectionId": "personal",
                    "title": "Personal Information",
                    "description": "About you",
                    "fields": [
                        {
                            "fieldId": "fullName",
                            "type": "text",
                            "label": "Full Name",
                            "required": true,
                            "minLength": 2,
                            "maxLength": 50
                        },
                        {
                            "fieldId": "gender",
                            "type": "radio",
                            "label": "Gender",
                            "options": [
                                { "value": "m", "label": "Male" },
                                { "value": "f", "label": "Female" }
                            ]
                        }
                    ]
                },
                {
                    "sectionId": "contact",
                    "title": "Contact",
                    "fields": [
                        {
                            "fieldId": "email",
                            "type": "email",
                            "label": "Email",
                            "required": true
                        },
                        {
                            "fieldId": "terms",
                            "type": "checkbox",
                            "label": "I accept the terms",
                            "required": true
                        }
                    ]
                }
            ]
        }
    })
}

/// Values that pass every section of `registration_form`
pub fn complete_values() -> Value {
    json!({
        "fullName": "Asha Rao",
        "gender": "f",
        "email": "asha@example.com",
        "terms": true
    })
}

/// Passes the first section, fails the second on email and terms
pub fn invalid_contact_values() -> Value {
    json!({
        "fullName": "Asha Rao",
        "email": "not-an-email",
        "terms": false,
        "nickname": "ash"
    })
}

/// Bare form object (no response envelope) with one of each defect
/// the schema inspector reports
pub fn anomalous_form() -> Value {
    json!({
        "formId": "odd",
        "formTitle": "Odd Form",
        "version": "0.1",
        "sections": [
            {
                "sectionId": "s1",
                "title": "First",
                "fields": [
                    { "fieldId": "mood", "type": "slider", "label": "Mood" },
                    { "fieldId": "city", "type": "dropdown", "label": "City" }
                ]
            },
            {
                "sectionId": "s2",
                "title": "Empty"
            }
        ]
    })
}
