#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the lift automator application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod client;
pub mod functions;
pub mod handlers;
pub mod models;
pub mod notifications;
pub mod settings;
pub mod utils;
pub mod validation;

// Testing utilities for both unit tests and integration tests
#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use client::{ClientConfig, Environment, FunctionsClient};
pub use functions::{CallableFunction, FacebookAuthBackend, FunctionRegistry};
pub use handlers::{configure_services, health, invoke_callable};
pub use models::{AuthenticationFailure, AuthenticationResult, SocialPost};
pub use settings::AppSettings;
