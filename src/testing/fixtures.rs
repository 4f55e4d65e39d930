//! Pre-built test data

use base64::Engine as _;
use serde_json::{json, Value};
use std::sync::Arc;

use super::constants::{TEST_PROJECT_ID, TEST_REGION, TEST_USER_ID};
use crate::client::{ClientConfig, Environment, FirebaseConfig};
use crate::functions::{FunctionRegistry, PlaceholderFacebookBackend};
use crate::settings::{AppSettings, ApplicationSettings, FunctionsSettings};

pub struct TestFixtures;

impl TestFixtures {
    /// Create standard test settings
    #[must_use]
    pub fn settings() -> AppSettings {
        let mut settings = AppSettings {
            application: ApplicationSettings {
                host: "127.0.0.1".to_string(),
                port: 5001,
                cors_origins: "http://localhost:5173".to_string(),
            },
            functions: FunctionsSettings {
                region: TEST_REGION.to_string(),
            },
            ..Default::default()
        };
        settings.client.firebase.project_id = TEST_PROJECT_ID.to_string();
        settings
    }

    /// Registry backed by the placeholder Facebook backend
    #[must_use]
    pub fn registry() -> FunctionRegistry {
        FunctionRegistry::with_facebook_functions(Arc::new(PlaceholderFacebookBackend))
    }

    /// Client configuration for `environment` against the test project
    #[must_use]
    pub fn client_config(environment: Environment) -> ClientConfig {
        let firebase = FirebaseConfig {
            project_id: TEST_PROJECT_ID.to_string(),
            ..FirebaseConfig::default()
        };
        ClientConfig::new(environment, firebase, TEST_REGION)
    }

    /// Unsigned JWT-shaped ID token for [`TEST_USER_ID`]
    #[must_use]
    pub fn id_token() -> String {
        Self::id_token_for(TEST_USER_ID)
    }

    #[must_use]
    pub fn id_token_for(user_id: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = engine.encode(json!({ "user_id": user_id, "sub": user_id }).to_string());
        format!("{header}.{payload}.signature")
    }

    /// A conforming post as it arrives over the wire
    #[must_use]
    pub fn post_json() -> Value {
        json!({
            "content": "Need a lift to Leeds on Friday",
            "user": "Jo Bloggs",
            "userLink": "https://facebook.com/jo.bloggs",
            "posted_at": 1_700_000_000.0,
            "estimatedPricing": 12.5
        })
    }
}
