use actix_web::{http::StatusCode, test, web, App};
use lift_automator::configure_services;
use lift_automator::functions::FunctionRegistry;
use lift_automator::models::AuthenticationResult;
use lift_automator::notifications::{notify_authentication_result, Severity};
use lift_automator::testing::mock::{RecordingToastSink, ScriptedFacebookBackend};
use lift_automator::testing::{
    assert_authentication_failure, assert_error_envelope, assert_result_envelope,
    CallableRequestBuilder, TestFixtures,
};
use lift_automator::validation::validate_authentication_result;
use serde_json::{json, Value};
use std::sync::Arc;

macro_rules! app_with {
    ($registry:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($registry))
                .configure(configure_services),
        )
        .await
    };
}

#[actix_web::test]
async fn test_check_without_identity_is_unauthenticated() {
    let app = app_with!(TestFixtures::registry());

    let req = CallableRequestBuilder::new("checkFacebookAuthentication")
        .build()
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_error_envelope(&body, "UNAUTHENTICATED");
    assert_eq!(body["error"]["message"], "Authentication Required");
}

#[actix_web::test]
async fn test_submit_without_identity_is_unauthenticated() {
    let app = app_with!(TestFixtures::registry());

    let req = CallableRequestBuilder::new("submit2FaCode")
        .with_data(json!({ "code": "123456" }))
        .build()
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_error_envelope(&body, "UNAUTHENTICATED");
}

#[actix_web::test]
async fn test_check_with_identity_requires_2fa() {
    let app = app_with!(TestFixtures::registry());

    let req = CallableRequestBuilder::new("checkFacebookAuthentication")
        .with_id_token(&TestFixtures::id_token())
        .build()
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let result = assert_result_envelope(&body);
    assert_authentication_failure(result, "2FA required");
}

#[actix_web::test]
async fn test_submit_with_identity_fails_for_any_payload() {
    let app = app_with!(TestFixtures::registry());

    for data in [Value::Null, json!({}), json!({ "code": "123456" }), json!("x")] {
        let req = CallableRequestBuilder::new("submit2FaCode")
            .with_id_token(&TestFixtures::id_token())
            .with_data(data)
            .build()
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_authentication_failure(assert_result_envelope(&body), "Authentication failed");
    }
}

#[actix_web::test]
async fn test_results_pass_client_validation() {
    let app = app_with!(TestFixtures::registry());

    for name in ["checkFacebookAuthentication", "submit2FaCode"] {
        let req = CallableRequestBuilder::new(name)
            .with_id_token(&TestFixtures::id_token())
            .build()
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let result = validate_authentication_result(assert_result_envelope(&body)).unwrap();
        assert!(!result.is_success());
    }
}

#[actix_web::test]
async fn test_non_bearer_authorization_is_anonymous() {
    let app = app_with!(TestFixtures::registry());

    let req = CallableRequestBuilder::new("checkFacebookAuthentication")
        .build()
        .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_unknown_callable_is_not_found() {
    let app = app_with!(TestFixtures::registry());

    let req = CallableRequestBuilder::new("scrapeGroups")
        .with_id_token(&TestFixtures::id_token())
        .build()
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_error_envelope(&body, "NOT_FOUND");
}

#[actix_web::test]
async fn test_malformed_envelopes_are_invalid_argument() {
    let app = app_with!(TestFixtures::registry());

    let missing_data = CallableRequestBuilder::new("checkFacebookAuthentication")
        .with_id_token(&TestFixtures::id_token())
        .with_body(json!({ "payload": 1 }))
        .build()
        .to_request();
    let resp = test::call_service(&app, missing_data).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_error_envelope(&body, "INVALID_ARGUMENT");

    let not_json = CallableRequestBuilder::new("submit2FaCode")
        .with_id_token(&TestFixtures::id_token())
        .with_raw_body("{not json")
        .build()
        .to_request();
    let resp = test::call_service(&app, not_json).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_backend_receives_caller_token() {
    let backend = Arc::new(ScriptedFacebookBackend::succeeding());
    let app = app_with!(FunctionRegistry::with_facebook_functions(backend.clone()));

    let token = TestFixtures::id_token_for("someone-else");
    let req = CallableRequestBuilder::new("submit2FaCode")
        .with_id_token(&token)
        .build()
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(assert_result_envelope(&body), &json!({ "success": true }));
    assert_eq!(backend.seen_tokens(), vec![token]);
}

#[actix_web::test]
async fn test_ping() {
    let app = app_with!(TestFixtures::registry());

    let req = test::TestRequest::get().uri("/ping").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_outcome_becomes_error_toast() {
    let app = app_with!(TestFixtures::registry());
    let sink = RecordingToastSink::new();

    let req = CallableRequestBuilder::new("checkFacebookAuthentication")
        .with_id_token(&TestFixtures::id_token())
        .build()
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let result: AuthenticationResult =
        serde_json::from_value(assert_result_envelope(&body).clone()).unwrap();
    notify_authentication_result(&sink, &result);

    let toasts = sink.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "2FA required");
    assert_eq!(toasts[0].severity, Severity::Error);
    assert_eq!(toasts[0].background, "bg-error-500");
    assert!(toasts[0].autohide);
    assert_eq!(toasts[0].classes, "text-white");
}
