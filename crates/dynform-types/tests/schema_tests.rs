use dynform_types::*;
use std::io::Write;

const WIRE_RESPONSE: &str = r#"{
  "success": true,
  "form": {
    "formId": "student-reg",
    "formTitle": "Student Registration",
    "version": "1.2",
    "sections": [
      {
        "sectionId": "personal",
        "title": "Personal Details",
        "description": "Tell us about yourself",
        "fields": [
          {
            "fieldId": "fullName",
            "type": "text",
            "label": "Full Name",
            "placeholder": "Jane Doe",
            "required": true,
            "minLength": 2,
            "maxLength": 40,
            "dataTestId": "full-name",
            "validation": { "message": "Name is mandatory" }
          },
          {
            "fieldId": "gender",
            "type": "radio",
            "label": "Gender",
            "required": true,
            "options": [
              { "value": "f", "label": "Female", "dataTestId": "gender-f" },
              { "value": "m", "label": "Male" }
            ]
          },
          {
            "fieldId": "avatar",
            "type": "file",
            "label": "Avatar"
          }
        ]
      }
    ]
  }
}"#;

#[test]
fn test_parse_wire_response() {
    let response = parse_form_document(WIRE_RESPONSE).expect("valid document");
    assert!(response.success);

    let form = &response.form;
    assert_eq!(form.form_id, "student-reg");
    assert_eq!(form.version, "1.2");
    assert_eq!(form.section_count(), 1);

    let name = form.find_field("fullName").expect("fullName present");
    assert_eq!(name.kind, FieldKind::Text);
    assert!(name.required);
    assert_eq!(name.min_length, Some(2));
    assert_eq!(name.max_length, Some(40));
    assert_eq!(name.test_marker.as_deref(), Some("full-name"));
    assert_eq!(name.validation_message(), Some("Name is mandatory"));

    let gender = form.find_field("gender").expect("gender present");
    assert!(gender.kind.is_choice());
    assert_eq!(gender.options.len(), 2);
    assert_eq!(gender.options[0].test_marker.as_deref(), Some("gender-f"));
    assert_eq!(gender.option("m").map(|o| o.label.as_str()), Some("Male"));
}

#[test]
fn test_unknown_field_type_is_preserved() {
    let response = parse_form_document(WIRE_RESPONSE).unwrap();
    let avatar = response.form.find_field("avatar").unwrap();

    assert_eq!(avatar.kind, FieldKind::Unsupported("file".to_string()));
    assert!(!avatar.required);

    let json = serde_json::to_value(avatar).unwrap();
    assert_eq!(json["type"], "file");
}

#[test]
fn test_bare_form_document_is_accepted() {
    let bare = r#"{"formId":"f1","formTitle":"Bare","version":"1","sections":[]}"#;
    let response = parse_form_document(bare).unwrap();

    assert!(response.success);
    assert_eq!(response.form.form_title, "Bare");
}

#[test]
fn test_envelope_without_success_key_reads_as_success() {
    let doc = r#"{"form":{"formId":"f1","formTitle":"T","version":"1","sections":[{"sectionId":"s1","title":"S","fields":[]}]}}"#;
    let response = parse_form_document(doc).unwrap();

    assert!(response.success);
    assert_eq!(response.form.section_count(), 1);
}

#[test]
fn test_invalid_document_reports_json_error() {
    let err = parse_form_document("{not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("Invalid form document"));
}

#[test]
fn test_read_form_document_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WIRE_RESPONSE.as_bytes()).unwrap();

    let response = read_form_document(file.path()).unwrap();
    assert_eq!(response.form.form_id, "student-reg");
}

#[test]
fn test_empty_validation_message_is_ignored() {
    let field = Field::new("x", FieldKind::Text, "X").with_validation_message("");
    assert_eq!(field.validation_message(), None);
}

#[test]
fn test_field_value_wire_shape() {
    let state: FormState = [
        ("name", FieldValue::text("Ann")),
        ("agree", FieldValue::Bool(true)),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, r#"{"agree":true,"name":"Ann"}"#);

    let back: FormState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_validation_errors_drop_empty_messages() {
    let mut errors = ValidationErrors::new();
    errors.set("email", "Please enter a valid email address.");
    assert!(errors.contains("email"));

    errors.set("email", "");
    assert!(errors.is_empty());
    assert_eq!(errors.get("email"), None);
}

#[test]
fn test_user_wire_shape() {
    let user = User::new("RA2211", "Ann");
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["rollNumber"], "RA2211");
    assert_eq!(json["name"], "Ann");
    assert_eq!(user.to_string(), "Ann (Roll Number: RA2211)");
}
