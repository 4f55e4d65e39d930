//! Envelope assertion helpers

use serde_json::Value;

/// Assert that `body` is an error envelope with `status`
///
/// # Panics
///
/// Panics if the body is not an error envelope or the status differs.
pub fn assert_error_envelope(body: &Value, status: &str) {
    assert!(
        body.get("result").is_none(),
        "Error envelope must not carry a result: {body}"
    );
    assert_eq!(
        body["error"]["status"], status,
        "Expected error status {status}, got {body}"
    );
    assert!(
        body["error"]["message"].is_string(),
        "Error envelope without message: {body}"
    );
}

/// Assert that `body` is a result envelope and return the result
///
/// # Panics
///
/// Panics if the body is not a result envelope.
#[must_use]
pub fn assert_result_envelope(body: &Value) -> &Value {
    assert!(
        body.get("error").is_none(),
        "Expected a result envelope, got {body}"
    );
    body.get("result")
        .unwrap_or_else(|| panic!("Missing result member: {body}"))
}

/// Assert that `result` is a failed authentication result with `reason`
///
/// # Panics
///
/// Panics if the result does not have exactly that shape.
pub fn assert_authentication_failure(result: &Value, reason: &str) {
    assert_eq!(
        result,
        &serde_json::json!({ "success": false, "error": reason }),
        "Unexpected authentication result"
    );
}
