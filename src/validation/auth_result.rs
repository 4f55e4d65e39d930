//! Authentication result schema
//!
//! The variant is decided by the `success` flag; the reason is then looked up
//! in the closed set of failure literals. Field presence alone never selects
//! a variant.

use serde_json::Value;

use super::core::{
    expect_object, json_type_name, reject_unknown_keys, required_bool, FieldPath, IssueCollector,
    IssueKind, ValidationError,
};
use crate::models::{AuthenticationFailure, AuthenticationResult};

const SUCCESS_FIELDS: &[&str] = &["success"];
const FAILURE_FIELDS: &[&str] = &["success", "error"];

/// Validate an arbitrary JSON value as an [`AuthenticationResult`]
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every offending field when the value
/// is not an object, `success` is missing or not a boolean, a failure lacks a
/// known `error` reason, or unknown fields are present.
///
/// # Example
///
/// ```rust
/// use lift_automator::models::{AuthenticationFailure, AuthenticationResult};
/// use lift_automator::validation::validate_authentication_result;
/// use serde_json::json;
///
/// let result = validate_authentication_result(&json!({
///     "success": false,
///     "error": "2FA required"
/// }))
/// .unwrap();
/// assert_eq!(result, AuthenticationResult::Failure(AuthenticationFailure::TwoFactorRequired));
/// ```
pub fn validate_authentication_result(
    value: &Value,
) -> Result<AuthenticationResult, ValidationError> {
    let root = FieldPath::root();
    let object = expect_object(value, &root)?;
    let mut issues = IssueCollector::new();

    let Some(success) = required_bool(object, "success", &root, &mut issues) else {
        reject_unknown_keys(object, FAILURE_FIELDS, &root, &mut issues);
        return Err(issues.into_error());
    };

    if success {
        reject_unknown_keys(object, SUCCESS_FIELDS, &root, &mut issues);
        return issues.finish(AuthenticationResult::Success);
    }

    reject_unknown_keys(object, FAILURE_FIELDS, &root, &mut issues);
    let reason = failure_reason(object.get("error"), &root, &mut issues);

    match reason {
        Some(reason) => issues.finish(AuthenticationResult::Failure(reason)),
        None => Err(issues.into_error()),
    }
}

fn failure_reason(
    field: Option<&Value>,
    root: &FieldPath,
    issues: &mut IssueCollector,
) -> Option<AuthenticationFailure> {
    let path = root.key("error");
    match field {
        None => {
            issues.push(path, IssueKind::Required);
            None
        }
        Some(Value::String(text)) => {
            let parsed = text.parse::<AuthenticationFailure>().ok();
            if parsed.is_none() {
                issues.push(
                    path,
                    IssueKind::InvalidEnumValue {
                        options: AuthenticationFailure::ALL
                            .into_iter()
                            .map(AuthenticationFailure::as_str)
                            .collect(),
                        received: text.clone(),
                    },
                );
            }
            parsed
        }
        Some(other) => {
            issues.push(
                path,
                IssueKind::InvalidType {
                    expected: "string",
                    received: json_type_name(other),
                },
            );
            None
        }
    }
}
