//! Toast notifications
//!
//! Maps a severity and a message to one transient, auto-dismissing toast on a
//! caller-supplied sink. Sink failures are the sink's business.

use serde::Serialize;

use crate::models::AuthenticationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    /// Background style class for this severity
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Error => "bg-error-500",
            Self::Success => "bg-success-500",
        }
    }
}

/// Settings handed to the sink for a single toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub background: &'static str,
    pub autohide: bool,
    pub classes: &'static str,
}

impl Toast {
    #[must_use]
    pub fn new(severity: Severity, message: &str) -> Self {
        Self {
            message: message.to_string(),
            severity,
            background: severity.background(),
            autohide: true,
            classes: "text-white",
        }
    }
}

/// Anything that can display a toast
pub trait ToastSink {
    fn trigger(&self, toast: Toast);
}

/// Trigger one toast styled for `severity`
pub fn notify(sink: &dyn ToastSink, severity: Severity, message: &str) {
    sink.trigger(Toast::new(severity, message));
}

pub fn toast_error(sink: &dyn ToastSink, message: &str) {
    notify(sink, Severity::Error, message);
}

pub fn toast_success(sink: &dyn ToastSink, message: &str) {
    notify(sink, Severity::Success, message);
}

/// Render an authentication outcome as a toast
pub fn notify_authentication_result(sink: &dyn ToastSink, result: &AuthenticationResult) {
    match result {
        AuthenticationResult::Success => toast_success(sink, "Facebook authentication successful"),
        AuthenticationResult::Failure(reason) => toast_error(sink, reason.as_str()),
    }
}

/// Sink for headless use: toasts become log lines
#[derive(Debug, Default, Clone, Copy)]
pub struct LogToastSink;

impl ToastSink for LogToastSink {
    fn trigger(&self, toast: Toast) {
        match toast.severity {
            Severity::Error => log::error!("🔔 {}", toast.message),
            Severity::Success => log::info!("🔔 {}", toast.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthenticationFailure;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Collect(RefCell<Vec<Toast>>);

    impl ToastSink for Collect {
        fn trigger(&self, toast: Toast) {
            self.0.borrow_mut().push(toast);
        }
    }

    #[test]
    fn test_error_toast() {
        let sink = Collect::default();
        toast_error(&sink, "X");
        let toasts = sink.0.into_inner();
        assert_eq!(toasts.len(), 1);
        assert_eq!(
            toasts[0],
            Toast {
                message: "X".to_string(),
                severity: Severity::Error,
                background: "bg-error-500",
                autohide: true,
                classes: "text-white",
            }
        );
    }

    #[test]
    fn test_success_toast() {
        let sink = Collect::default();
        toast_success(&sink, "Saved");
        let toasts = sink.0.into_inner();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].background, "bg-success-500");
        assert!(toasts[0].autohide);
    }

    #[test]
    fn test_authentication_result_toasts() {
        let sink = Collect::default();
        notify_authentication_result(
            &sink,
            &AuthenticationResult::Failure(AuthenticationFailure::TwoFactorRequired),
        );
        notify_authentication_result(&sink, &AuthenticationResult::Success);
        let toasts = sink.0.into_inner();
        assert_eq!(toasts[0].message, "2FA required");
        assert_eq!(toasts[0].severity, Severity::Error);
        assert_eq!(toasts[1].severity, Severity::Success);
    }
}
