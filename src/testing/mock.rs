//! Recording and scripted fakes

use async_trait::async_trait;
use std::sync::Mutex;

use crate::functions::{FacebookAuthBackend, IdentityClaim};
use crate::models::AuthenticationResult;
use crate::notifications::{Toast, ToastSink};

/// Toast sink that keeps every toast it is handed
#[derive(Debug, Default)]
pub struct RecordingToastSink {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingToastSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts triggered so far, oldest first
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl ToastSink for RecordingToastSink {
    fn trigger(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

/// Facebook backend with fixed answers that records the tokens it saw
#[derive(Debug)]
pub struct ScriptedFacebookBackend {
    check: AuthenticationResult,
    submit: AuthenticationResult,
    seen_tokens: Mutex<Vec<String>>,
}

impl ScriptedFacebookBackend {
    #[must_use]
    pub fn new(check: AuthenticationResult, submit: AuthenticationResult) -> Self {
        Self {
            check,
            submit,
            seen_tokens: Mutex::new(Vec::new()),
        }
    }

    /// Backend that reports success for both callables
    #[must_use]
    pub fn succeeding() -> Self {
        Self::new(AuthenticationResult::Success, AuthenticationResult::Success)
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().unwrap().clone()
    }

    fn record(&self, identity: &IdentityClaim) {
        self.seen_tokens
            .lock()
            .unwrap()
            .push(identity.token().to_string());
    }
}

#[async_trait]
impl FacebookAuthBackend for ScriptedFacebookBackend {
    fn backend_name(&self) -> &'static str {
        "scripted"
    }

    async fn check_authentication(&self, identity: &IdentityClaim) -> AuthenticationResult {
        self.record(identity);
        self.check
    }

    async fn submit_two_factor_code(&self, identity: &IdentityClaim) -> AuthenticationResult {
        self.record(identity);
        self.submit
    }
}
