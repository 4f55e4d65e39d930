//! HTTP response handling system
//!
//! This module provides a unified interface for the callable envelopes,
//! offering consistent patterns for results and invocation errors while
//! keeping pre-serialized bodies for the errors every caller can trigger.

use actix_web::{http::header, HttpResponse};
use serde::Serialize;
use serde_json::{json, Value};

use crate::functions::{CallableError, CallableStatus};

// ===============================
// CACHED RESPONSES FOR PERFORMANCE
// ===============================

/// Global instance of pre-serialized common responses for performance
static CACHED_RESPONSES: std::sync::LazyLock<CachedResponses> =
    std::sync::LazyLock::new(CachedResponses::new);

/// Container for pre-serialized error envelopes
struct CachedResponses {
    unauthenticated: String,
    bad_request: String,
    internal: String,
}

impl CachedResponses {
    fn new() -> Self {
        Self {
            unauthenticated: Self::create_json(
                CallableStatus::Unauthenticated,
                "Authentication Required",
            ),
            bad_request: Self::create_json(CallableStatus::InvalidArgument, "Bad Request"),
            internal: Self::create_json(CallableStatus::Internal, "INTERNAL"),
        }
    }

    fn create_json(status: CallableStatus, message: &str) -> String {
        error_envelope(status, message).to_string()
    }

    fn respond(status: CallableStatus, body: &str) -> HttpResponse {
        HttpResponse::build(status.http_status())
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .body(body.to_string())
    }
}

/// Body of an error envelope
fn error_envelope(status: CallableStatus, message: &str) -> Value {
    json!({
        "error": {
            "status": status.as_str(),
            "message": message,
        }
    })
}

/// Unified response builder for callable endpoints
pub struct ResponseBuilder;

impl ResponseBuilder {
    // ===============================
    // ERROR RESPONSE METHODS
    // ===============================

    /// Map an invocation error to its envelope
    #[must_use]
    pub fn callable_error(error: &CallableError) -> HttpResponse {
        match error {
            CallableError::Unauthenticated => Self::unauthenticated(),
            CallableError::Internal(detail) => {
                // Internal details stay in the log, callers only see the status
                log::error!("Callable failed internally: {detail}");
                CachedResponses::respond(CallableStatus::Internal, &CACHED_RESPONSES.internal)
            }
            other => Self::error(other.status(), &other.to_string()),
        }
    }

    /// Error envelope for `status` carrying `message`
    #[must_use]
    pub fn error(status: CallableStatus, message: &str) -> HttpResponse {
        HttpResponse::build(status.http_status()).json(error_envelope(status, message))
    }

    // ===============================
    // SUCCESS RESPONSE METHODS
    // ===============================

    /// Wrap a callable's return value in the result envelope
    #[must_use]
    pub fn callable_result<T: Serialize>(result: &T) -> HttpResponse {
        HttpResponse::Ok().json(json!({ "result": result }))
    }

    // ===============================
    // CACHED ERROR SHORTCUTS
    // ===============================

    #[must_use]
    pub fn unauthenticated() -> HttpResponse {
        CachedResponses::respond(
            CallableStatus::Unauthenticated,
            &CACHED_RESPONSES.unauthenticated,
        )
    }

    #[must_use]
    pub fn bad_request() -> HttpResponse {
        CachedResponses::respond(CallableStatus::InvalidArgument, &CACHED_RESPONSES.bad_request)
    }
}
