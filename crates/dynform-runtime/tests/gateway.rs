use dynform_engine::{FormSession, SessionError, Stage};
use dynform_runtime::{load_form, sign_in, Error, FormGateway, HttpFormGateway};
use dynform_types::User;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn form_body() -> serde_json::Value {
    json!({
        "success": true,
        "form": {
            "formId": "f-1",
            "formTitle": "Enrollment",
            "version": "1",
            "sections": [{
                "sectionId": "s1",
                "title": "About you",
                "description": "",
                "fields": [
                    { "fieldId": "name", "type": "text", "label": "Name", "required": true }
                ]
            }]
        }
    })
}

async fn gateway_for(server: &MockServer) -> HttpFormGateway {
    HttpFormGateway::new(&server.uri()).expect("gateway")
}

#[tokio::test]
async fn test_create_user_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-user"))
        .and(body_json(json!({ "rollNumber": "RA42", "name": "Ann" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "User created" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let response = gateway.create_user(&User::new("RA42", "Ann")).await.unwrap();

    assert!(response.success);
    assert_eq!(response.message, "User created");
}

#[tokio::test]
async fn test_existing_user_counts_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-user"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({ "message": "User already exists for this roll number" }),
        ))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let response = gateway.create_user(&User::new("RA42", "Ann")).await.unwrap();

    assert!(response.success);
    assert_eq!(response.message, "User already exists for this roll number");
}

#[tokio::test]
async fn test_create_user_rejection_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-user"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Name is too short" })),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let response = gateway.create_user(&User::new("RA42", "A")).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "Name is too short");

    let err = sign_in(&gateway, &User::new("RA42", "A")).await.unwrap_err();
    assert!(matches!(err, Error::Rejected(ref m) if m == "Name is too short"));
}

#[tokio::test]
async fn test_create_user_rejection_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-user"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let response = gateway.create_user(&User::new("RA42", "Ann")).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "Failed to create user");
}

#[tokio::test]
async fn test_get_form_structure_parses_schema() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-form"))
        .and(query_param("rollNumber", "RA42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(form_body()))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let response = gateway.get_form_structure("RA42").await.unwrap();

    assert!(response.success);
    assert_eq!(response.form.form_title, "Enrollment");
    assert_eq!(response.form.sections[0].fields[0].field_id, "name");
}

#[tokio::test]
async fn test_get_form_failure_uses_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-form"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "User not found" })),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway.get_form_structure("nobody").await.unwrap_err();

    assert!(matches!(err, Error::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn test_get_form_failure_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-form"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway.get_form_structure("RA42").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch form");
}

#[tokio::test]
async fn test_load_form_into_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-form"))
        .respond_with(ResponseTemplate::new(200).set_body_json(form_body()))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let mut session = FormSession::new();
    load_form(&mut session, &gateway, "RA42").await.unwrap();

    assert_eq!(session.stage(), &Stage::Ready);
    assert_eq!(session.form().unwrap().form_id, "f-1");
}

#[tokio::test]
async fn test_load_form_failure_leaves_failed_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-form"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Database down" })),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let mut session = FormSession::new();
    load_form(&mut session, &gateway, "RA42").await.unwrap();

    assert_eq!(session.stage(), &Stage::Failed("Database down".to_string()));
    assert!(session.form().is_none());
}

#[tokio::test]
async fn test_load_form_rejects_overlapping_load() {
    let server = MockServer::start().await;
    let gateway = gateway_for(&server).await;

    let mut session = FormSession::new();
    session.begin_load().unwrap();

    let result = load_form(&mut session, &gateway, "RA42").await;
    assert_eq!(result, Err(SessionError::LoadInProgress));
    assert!(session.is_loading());
}

#[test]
fn test_empty_base_url_is_rejected() {
    let err = HttpFormGateway::new("/").err().expect("empty url must fail");
    assert!(matches!(err, Error::Config(_)));
}
