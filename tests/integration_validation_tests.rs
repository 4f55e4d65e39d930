use lift_automator::models::{AuthenticationFailure, AuthenticationResult, SocialPost};
use lift_automator::testing::TestFixtures;
use lift_automator::validation::{
    validate_authentication_result, validate_social_post, validate_social_posts,
};
use serde_json::json;

#[test]
fn test_every_failure_reason_is_accepted() {
    for reason in AuthenticationFailure::ALL {
        let value = json!({ "success": false, "error": reason.as_str() });
        assert_eq!(
            validate_authentication_result(&value).unwrap(),
            AuthenticationResult::Failure(reason)
        );
    }
}

#[test]
fn test_authentication_result_shapes_are_rejected() {
    let rejected = [
        json!({ "success": false }),
        json!({ "success": false, "error": "Timeout" }),
        json!({ "success": "false", "error": "Server error" }),
        json!({ "error": "Server error" }),
        json!({ "success": true, "error": "Server error" }),
        json!({ "success": true, "extra": 1 }),
        json!([]),
        json!(null),
    ];
    for value in rejected {
        assert!(
            validate_authentication_result(&value).is_err(),
            "{value} should be rejected"
        );
    }
}

#[test]
fn test_authentication_result_issue_paths() {
    let error = validate_authentication_result(&json!({ "success": false, "error": 3 }))
        .unwrap_err();
    assert!(error.has_issue_at("error"));

    let error = validate_authentication_result(&json!({})).unwrap_err();
    assert!(error.has_issue_at("success"));
}

#[test]
fn test_authentication_result_through_serde() {
    let parsed: AuthenticationResult =
        serde_json::from_value(json!({ "success": false, "error": "Server error" })).unwrap();
    assert_eq!(parsed.error(), Some(AuthenticationFailure::ServerError));

    let rejected = serde_json::from_value::<AuthenticationResult>(json!({ "success": 1 }));
    assert!(rejected.is_err());
}

#[test]
fn test_valid_post() {
    let post = validate_social_post(&TestFixtures::post_json()).unwrap();
    assert_eq!(post.user, "Jo Bloggs");
    assert_eq!(post.user_link, "https://facebook.com/jo.bloggs");
    assert!((post.estimated_pricing - 12.5).abs() < f64::EPSILON);

    let via_serde: SocialPost = serde_json::from_value(TestFixtures::post_json()).unwrap();
    assert_eq!(via_serde, post);
}

#[test]
fn test_post_field_errors() {
    let mut post = TestFixtures::post_json();
    post["estimatedPricing"] = json!("12.50");
    let error = validate_social_post(&post).unwrap_err();
    assert_eq!(error.paths(), vec!["estimatedPricing".to_string()]);

    let mut post = TestFixtures::post_json();
    post.as_object_mut().unwrap().remove("userLink");
    let error = validate_social_post(&post).unwrap_err();
    assert!(error.has_issue_at("userLink"));

    let mut post = TestFixtures::post_json();
    post["likes"] = json!(3);
    let error = validate_social_post(&post).unwrap_err();
    assert!(error.has_issue_at("likes"));
}

#[test]
fn test_post_collections() {
    assert!(validate_social_posts(&json!([])).unwrap().is_empty());

    let two = json!([TestFixtures::post_json(), TestFixtures::post_json()]);
    assert_eq!(validate_social_posts(&two).unwrap().len(), 2);

    let mut broken = TestFixtures::post_json();
    broken["userLink"] = json!(42);
    let mixed = json!([TestFixtures::post_json(), TestFixtures::post_json(), broken]);
    let error = validate_social_posts(&mixed).unwrap_err();
    assert!(error.has_issue_at("[2].userLink"));
    assert_eq!(error.issues().len(), 1);

    assert!(validate_social_posts(&TestFixtures::post_json()).is_err());
}

#[test]
fn test_issues_serialize_for_diagnostics() {
    let error = validate_social_posts(&json!([{ "content": "x" }])).unwrap_err();
    let rendered = serde_json::to_value(error.issues()).unwrap();
    assert!(rendered
        .as_array()
        .unwrap()
        .iter()
        .any(|issue| issue["path"] == json!([0, "user"]) && issue["code"] == "required"));
}
