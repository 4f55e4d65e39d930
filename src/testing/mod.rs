//! Unified testing utilities for the lift automator
//!
//! ## Organization
//!
//! - [`fixtures`] - Pre-built test data (settings, registries, tokens, posts)
//! - [`requests`] - Callable request builders for testing handlers
//! - [`assertions`] - Envelope assertion helpers
//! - [`mock`] - Recording and scripted fakes for the crate's seams
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lift_automator::testing::{fixtures::TestFixtures, requests::CallableRequestBuilder};
//!
//! let registry = TestFixtures::registry();
//! let request = CallableRequestBuilder::new("checkFacebookAuthentication")
//!     .with_id_token(&TestFixtures::id_token())
//!     .build()
//!     .to_request();
//! # let _ = (registry, request);
//! ```

pub mod assertions;
pub mod fixtures;
pub mod mock;
pub mod requests;

pub use assertions::*;
pub use fixtures::TestFixtures;
pub use requests::CallableRequestBuilder;

/// Common test constants
pub mod constants {
    /// Subject carried by the fixture ID token
    pub const TEST_USER_ID: &str = "test-user-123";

    /// Default test region
    pub const TEST_REGION: &str = "us-central1";

    /// Default test project
    pub const TEST_PROJECT_ID: &str = "lift-automator-test";
}
