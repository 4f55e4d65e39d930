//! Facebook authentication callables
//!
//! Both callables require an identity claim and delegate the actual outcome to
//! a [`FacebookAuthBackend`]. The only backend shipped here is
//! [`PlaceholderFacebookBackend`], which does not talk to Facebook at all.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::callable::{CallableContext, CallableError, IdentityClaim};
use super::CallableFunction;
use crate::models::{AuthenticationFailure, AuthenticationResult};

pub const CHECK_FACEBOOK_AUTHENTICATION: &str = "checkFacebookAuthentication";
pub const SUBMIT_2FA_CODE: &str = "submit2FaCode";

/// Source of Facebook authentication outcomes
///
/// This is the integration point for a real login/2FA flow. `submit_two_factor_code`
/// deliberately receives no code: the callable does not define a code parameter yet.
#[async_trait]
pub trait FacebookAuthBackend: Send + Sync {
    /// Name used in log lines
    fn backend_name(&self) -> &'static str;

    /// Report whether the caller's Facebook session is authenticated
    async fn check_authentication(&self, identity: &IdentityClaim) -> AuthenticationResult;

    /// Complete a pending two-factor challenge for the caller
    async fn submit_two_factor_code(&self, identity: &IdentityClaim) -> AuthenticationResult;
}

/// Fixed answers standing in for a real Facebook integration
///
/// Not implemented: every check reports `2FA required` and every submission
/// reports `Authentication failed`, regardless of the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFacebookBackend;

#[async_trait]
impl FacebookAuthBackend for PlaceholderFacebookBackend {
    fn backend_name(&self) -> &'static str {
        "placeholder"
    }

    async fn check_authentication(&self, _identity: &IdentityClaim) -> AuthenticationResult {
        AuthenticationResult::failure(AuthenticationFailure::TwoFactorRequired)
    }

    async fn submit_two_factor_code(&self, _identity: &IdentityClaim) -> AuthenticationResult {
        AuthenticationResult::failure(AuthenticationFailure::AuthenticationFailed)
    }
}

/// `checkFacebookAuthentication`
///
/// # Errors
///
/// Returns [`CallableError::Unauthenticated`] when the caller has no identity claim.
pub async fn check_facebook_authentication(
    backend: &dyn FacebookAuthBackend,
    context: &CallableContext,
) -> Result<AuthenticationResult, CallableError> {
    let identity = context.require_identity()?;
    log::info!("Checking Facebook authentication");
    log::debug!(
        "[{}] checkFacebookAuthentication answered by {} backend",
        context.invocation_id,
        backend.backend_name()
    );
    Ok(backend.check_authentication(identity).await)
}

/// `submit2FaCode`
///
/// The request payload is accepted and ignored.
///
/// # Errors
///
/// Returns [`CallableError::Unauthenticated`] when the caller has no identity claim.
pub async fn submit_2fa_code(
    backend: &dyn FacebookAuthBackend,
    context: &CallableContext,
) -> Result<AuthenticationResult, CallableError> {
    let identity = context.require_identity()?;
    log::info!("Submitting 2FA code");
    if !context.data.is_null() {
        log::debug!(
            "[{}] submit2FaCode ignores its payload",
            context.invocation_id
        );
    }
    Ok(backend.submit_two_factor_code(identity).await)
}

fn encode_result(result: AuthenticationResult) -> Result<Value, CallableError> {
    serde_json::to_value(result).map_err(|e| CallableError::Internal(e.to_string()))
}

/// Registry adapter for [`check_facebook_authentication`]
pub struct CheckFacebookAuthentication {
    backend: Arc<dyn FacebookAuthBackend>,
}

impl CheckFacebookAuthentication {
    #[must_use]
    pub fn new(backend: Arc<dyn FacebookAuthBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CallableFunction for CheckFacebookAuthentication {
    fn name(&self) -> &'static str {
        CHECK_FACEBOOK_AUTHENTICATION
    }

    async fn call(&self, context: &CallableContext) -> Result<Value, CallableError> {
        let result = check_facebook_authentication(self.backend.as_ref(), context).await?;
        encode_result(result)
    }
}

/// Registry adapter for [`submit_2fa_code`]
pub struct SubmitTwoFactorCode {
    backend: Arc<dyn FacebookAuthBackend>,
}

impl SubmitTwoFactorCode {
    #[must_use]
    pub fn new(backend: Arc<dyn FacebookAuthBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CallableFunction for SubmitTwoFactorCode {
    fn name(&self) -> &'static str {
        SUBMIT_2FA_CODE
    }

    async fn call(&self, context: &CallableContext) -> Result<Value, CallableError> {
        let result = submit_2fa_code(self.backend.as_ref(), context).await?;
        encode_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signed_in(data: Value) -> CallableContext {
        CallableContext::new(IdentityClaim::new("id-token"), data)
    }

    #[actix_web::test]
    async fn test_check_requires_identity() {
        let context = CallableContext::new(None, Value::Null);
        let result = check_facebook_authentication(&PlaceholderFacebookBackend, &context).await;
        assert_eq!(result, Err(CallableError::Unauthenticated));
    }

    #[actix_web::test]
    async fn test_submit_requires_identity() {
        let context = CallableContext::new(None, json!({ "code": "123456" }));
        let result = submit_2fa_code(&PlaceholderFacebookBackend, &context).await;
        assert_eq!(result, Err(CallableError::Unauthenticated));
    }

    #[actix_web::test]
    async fn test_check_reports_two_factor_required() {
        let result =
            check_facebook_authentication(&PlaceholderFacebookBackend, &signed_in(Value::Null))
                .await
                .unwrap();
        assert_eq!(
            result,
            AuthenticationResult::Failure(AuthenticationFailure::TwoFactorRequired)
        );
    }

    #[actix_web::test]
    async fn test_submit_reports_authentication_failed_for_any_payload() {
        for data in [Value::Null, json!({ "code": "123456" }), json!("999999")] {
            let result = submit_2fa_code(&PlaceholderFacebookBackend, &signed_in(data))
                .await
                .unwrap();
            assert_eq!(
                result,
                AuthenticationResult::Failure(AuthenticationFailure::AuthenticationFailed)
            );
        }
    }

    #[actix_web::test]
    async fn test_adapters_emit_wire_shape() {
        let backend: Arc<dyn FacebookAuthBackend> = Arc::new(PlaceholderFacebookBackend);

        let check = CheckFacebookAuthentication::new(Arc::clone(&backend));
        assert_eq!(check.name(), "checkFacebookAuthentication");
        assert_eq!(
            check.call(&signed_in(Value::Null)).await.unwrap(),
            json!({ "success": false, "error": "2FA required" })
        );

        let submit = SubmitTwoFactorCode::new(backend);
        assert_eq!(submit.name(), "submit2FaCode");
        assert_eq!(
            submit.call(&signed_in(Value::Null)).await.unwrap(),
            json!({ "success": false, "error": "Authentication failed" })
        );
    }
}
