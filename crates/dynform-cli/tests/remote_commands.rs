//! Commands that talk to the form service, against a wiremock server.

use dynform_testing::{TestWorld, assertions, fixtures};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn start_server(runtime: &Runtime) -> MockServer {
    runtime.block_on(MockServer::start())
}

#[test]
fn test_login_registers_user() {
    let runtime = Runtime::new().unwrap();
    let server = start_server(&runtime);
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/create-user"))
            .and(body_json(json!({ "rollNumber": "21CS042", "name": "Asha" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "User created" })))
            .expect(1)
            .mount(&server),
    );

    let world = TestWorld::new();
    let result = world
        .run(&[
            "--base-url",
            &server.uri(),
            "login",
            "--roll-number",
            "21CS042",
            "--name",
            "Asha",
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Logged in as: Asha (Roll Number: 21CS042)"));
    assert!(result.stdout().contains("Server: User created"));
}

#[test]
fn test_login_rejection_exits_with_server_message() {
    let runtime = Runtime::new().unwrap();
    let server = start_server(&runtime);
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/create-user"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({ "message": "Name is too short" })),
            )
            .mount(&server),
    );

    let world = TestWorld::new();
    let result = world
        .run(&[
            "--base-url",
            &server.uri(),
            "login",
            "--roll-number",
            "21CS042",
            "--name",
            "A",
        ])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Error: Name is too short"));
}

#[test]
fn test_check_against_remote_form() {
    let runtime = Runtime::new().unwrap();
    let server = start_server(&runtime);
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/get-form"))
            .and(query_param("rollNumber", "21CS042"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::registration_form()))
            .mount(&server),
    );

    let world = TestWorld::new()
        .with_document("values.json", &fixtures::complete_values())
        .json();
    let result = world
        .run(&[
            "--base-url",
            &server.uri(),
            "check",
            "--roll-number",
            "21CS042",
            "--values",
            "values.json",
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assertions::assert_submitted_value(&json, "fullName", &json!("Asha Rao")).unwrap();
}

#[test]
fn test_schema_fetch_failure_uses_server_message() {
    let runtime = Runtime::new().unwrap();
    let server = start_server(&runtime);
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/get-form"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "No form assigned" })),
            )
            .mount(&server),
    );

    let world = TestWorld::new();
    let result = world
        .run(&["--base-url", &server.uri(), "schema", "--roll-number", "X1"])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Error: No form assigned"));
}
