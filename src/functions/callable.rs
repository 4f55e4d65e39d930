//! Callable protocol
//!
//! Requests arrive as `POST /{name}` with a JSON body `{"data": ...}` and an
//! optional `Authorization: Bearer <token>` header. Successful calls answer
//! `{"result": ...}`; invocation errors answer
//! `{"error": {"status": "...", "message": "..."}}`.

use actix_web::http::{header, StatusCode};
use actix_web::HttpRequest;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ===============================
// ERRORS
// ===============================

/// Canonical status names used in error envelopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallableStatus {
    InvalidArgument,
    NotFound,
    Unauthenticated,
    Internal,
}

impl CallableStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Internal => "INTERNAL",
        }
    }

    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Invocation-level failure: aborts the call, no result is produced
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CallableError {
    /// The caller did not present an identity claim
    #[error("Authentication Required")]
    Unauthenticated,
    /// The request envelope is malformed
    #[error("{0}")]
    InvalidArgument(String),
    /// No callable is registered under the requested name
    #[error("Function {0} not found")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl CallableError {
    #[must_use]
    pub const fn status(&self) -> CallableStatus {
        match self {
            Self::Unauthenticated => CallableStatus::Unauthenticated,
            Self::InvalidArgument(_) => CallableStatus::InvalidArgument,
            Self::NotFound(_) => CallableStatus::NotFound,
            Self::Internal(_) => CallableStatus::Internal,
        }
    }
}

// ===============================
// IDENTITY
// ===============================

/// Proof that the caller is authenticated
///
/// The token is opaque to the callables. Only its presence matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaim {
    token: String,
}

impl IdentityClaim {
    /// Build a claim from a raw token; blank tokens are not a claim
    #[must_use]
    pub fn new(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self {
                token: token.to_string(),
            })
        }
    }

    /// Parse an `Authorization` header value of the form `Bearer <token>`
    #[must_use]
    pub fn from_authorization(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(' ')?;
        if scheme.eq_ignore_ascii_case("bearer") {
            Self::new(token)
        } else {
            None
        }
    }

    #[must_use]
    pub fn from_request(req: &HttpRequest) -> Option<Self> {
        req.headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::from_authorization)
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Unverified subject of a JWT-shaped token, for log context only
    #[must_use]
    pub fn subject_hint(&self) -> Option<String> {
        let payload = self.token.split('.').nth(1)?;
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .ok()?;
        let claims: Value = serde_json::from_slice(&bytes).ok()?;
        claims
            .get("user_id")
            .or_else(|| claims.get("sub"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
    }
}

// ===============================
// REQUEST CONTEXT
// ===============================

/// Everything a callable sees about one invocation
#[derive(Debug, Clone)]
pub struct CallableContext {
    pub invocation_id: Uuid,
    pub auth: Option<IdentityClaim>,
    pub data: Value,
}

impl CallableContext {
    #[must_use]
    pub fn new(auth: Option<IdentityClaim>, data: Value) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            auth,
            data,
        }
    }

    /// The caller's identity, or the authentication-required error
    ///
    /// # Errors
    ///
    /// Returns [`CallableError::Unauthenticated`] when no claim was presented.
    pub fn require_identity(&self) -> Result<&IdentityClaim, CallableError> {
        self.auth.as_ref().ok_or(CallableError::Unauthenticated)
    }
}

/// Extract the `data` member of a request body
///
/// # Errors
///
/// Returns [`CallableError::InvalidArgument`] when the body is not JSON or is
/// not an object carrying a `data` key.
pub fn parse_request_body(body: &[u8]) -> Result<Value, CallableError> {
    let parsed: Value = serde_json::from_slice(body).map_err(|e| {
        log::debug!("Callable body is not JSON: {e}");
        CallableError::InvalidArgument("Bad Request".to_string())
    })?;

    match parsed {
        Value::Object(mut envelope) => envelope
            .remove("data")
            .ok_or_else(|| CallableError::InvalidArgument("Bad Request".to_string())),
        _ => Err(CallableError::InvalidArgument("Bad Request".to_string())),
    }
}
