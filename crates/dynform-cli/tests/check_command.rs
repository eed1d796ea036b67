//! `dynform check`: drive a form from a values file without the TUI.

use dynform_testing::{TestWorld, assertions, fixtures};
use serde_json::json;

fn world_with_values(values: serde_json::Value) -> TestWorld {
    TestWorld::new()
        .with_document("form.json", &fixtures::registration_form())
        .with_document("values.json", &values)
}

#[test]
fn test_complete_values_submit() {
    let world = world_with_values(fixtures::complete_values()).json();
    let result = world
        .run(&["check", "--file", "form.json", "--values", "values.json"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assertions::assert_badge_level(&json, "success").unwrap();
    assertions::assert_submitted_value(&json, "gender", &json!("f")).unwrap();
    assertions::assert_submitted_value(&json, "terms", &json!(true)).unwrap();
    assert_eq!(json["content"]["sections_passed"], 2);
    assert_eq!(json["content"]["outcome"]["submission"]["formId"], "reg-2024");
}

#[test]
fn test_invalid_contact_blocks_second_section() {
    let world = world_with_values(fixtures::invalid_contact_values()).json();
    let result = world
        .run(&["check", "--file", "form.json", "--values", "values.json"])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Validation failed"));

    let json = result.json().unwrap();
    assertions::assert_badge_level(&json, "error").unwrap();
    assertions::assert_blocked_fields(&json, &["email", "terms"]).unwrap();
    assert_eq!(json["content"]["sections_passed"], 1);
    assert_eq!(json["content"]["outcome"]["section_id"], "contact");
    assert_eq!(
        json["content"]["outcome"]["errors"][0]["message"],
        "Please enter a valid email address."
    );
    assert_eq!(json["content"]["ignored_values"], json!(["nickname"]));
}

#[test]
fn test_string_false_does_not_tick_checkbox() {
    let mut values = fixtures::complete_values();
    values["terms"] = json!("false");
    let world = world_with_values(values).json();
    let result = world
        .run(&["check", "--file", "form.json", "--values", "values.json"])
        .unwrap();

    assert!(!result.success());
    let json = result.json().unwrap();
    assertions::assert_blocked_fields(&json, &["terms"]).unwrap();
}

#[test]
fn test_empty_values_stop_at_first_section() {
    let world = world_with_values(json!({}));
    let result = world
        .run(&["check", "--file", "form.json", "--values", "values.json"])
        .unwrap();

    assert!(!result.success());
    assert!(
        result
            .stdout()
            .contains("Stopped at section 1 of 2: Personal Information (personal)"),
        "stdout: {}",
        result.stdout()
    );
    assert!(result.stdout().contains("This field is required."));
}

#[test]
fn test_values_must_be_an_object() {
    let world = TestWorld::new()
        .with_document("form.json", &fixtures::registration_form())
        .with_file("values.json", "[1, 2, 3]");
    let result = world
        .run(&["check", "--file", "form.json", "--values", "values.json"])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("values.json"));
}

#[test]
fn test_missing_schema_file_is_an_error() {
    let world = TestWorld::new().with_document("values.json", &json!({}));
    let result = world
        .run(&["check", "--file", "missing.json", "--values", "values.json"])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Error:"));
}
