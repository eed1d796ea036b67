use dynform_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_schema_lists_sections_and_fields() {
    let world = TestWorld::new().with_document("form.json", &fixtures::registration_form());
    let result = world.run(&["schema", "--file", "form.json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Schema looks good"));
    assert!(stdout.contains("Form ID: reg-2024 | Version: 1.0"));
    assert!(stdout.contains("[1] Personal Information (personal)"));
    assert!(stdout.contains("[2] Contact (contact)"));
    assert!(stdout.contains("[m=Male, f=Female]"));
    assert!(stdout.contains("(2-50 chars)"));
    assert!(stdout.contains("No schema anomalies found."));
}

#[test]
fn test_schema_reports_anomalies() {
    let world = TestWorld::new()
        .with_document("odd.json", &fixtures::anomalous_form())
        .json();
    let result = world.run(&["schema", "--file", "odd.json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assertions::assert_badge_level(&json, "warning").unwrap();

    let locations: Vec<&str> = json["content"]["anomalies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["location"].as_str().unwrap())
        .collect();
    assert_eq!(locations, vec!["s1/mood", "s1/city", "s2"]);
}

#[test]
fn test_schema_rejects_malformed_document() {
    let world = TestWorld::new().with_file("broken.json", "{ \"formId\": ");
    let result = world.run(&["schema", "--file", "broken.json"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Error:"));
}
