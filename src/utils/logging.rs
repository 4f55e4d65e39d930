// Centralized logging utilities to reduce verbose logging patterns
use log::{debug, info, warn};
use uuid::Uuid;

use crate::functions::{CallableError, IdentityClaim};
use crate::settings::AppSettings;

pub struct LoggingHelper;

impl LoggingHelper {
    /// Log the startup banner with every exposed callable
    pub fn log_startup(settings: &AppSettings, function_names: &[&str]) {
        info!(
            "🚀 Starting lift automator functions on http://{}",
            settings.get_bind_address()
        );
        info!("Environment: {}", settings.client.environment);
        for name in function_names {
            info!("  POST /{name}");
        }
        info!("  GET  /ping");
    }

    /// Log an inbound invocation
    pub fn log_invocation_start(name: &str, invocation_id: Uuid, identity: Option<&IdentityClaim>) {
        match identity.and_then(IdentityClaim::subject_hint) {
            Some(subject) => debug!("[{invocation_id}] {name} invoked by {subject}"),
            None if identity.is_some() => {
                debug!("[{invocation_id}] {name} invoked with opaque identity");
            }
            None => debug!("[{invocation_id}] {name} invoked anonymously"),
        }
    }

    /// Log an invocation that ended without a result
    pub fn log_invocation_rejected(name: &str, invocation_id: Uuid, error: &CallableError) {
        warn!(
            "[{invocation_id}] {name} rejected with {}: {error}",
            error.status().as_str()
        );
    }

    /// Log a completed invocation
    pub fn log_invocation_complete(name: &str, invocation_id: Uuid, result: &serde_json::Value) {
        debug!("[{invocation_id}] {name} returned {result}");
    }

    /// Log an envelope that could not be parsed
    pub fn log_bad_envelope(name: &str) {
        warn!("Rejected {name} call: body is not a callable envelope");
    }
}
