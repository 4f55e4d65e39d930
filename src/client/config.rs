//! Backend endpoint selection
//!
//! The environment is decided once at start-up. Development talks to the local
//! emulators, production to the hosted project.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub const fn uses_emulators(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Hosted project identifiers used by the web client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_domain: "lift-automator-v2.firebaseapp.com".to_string(),
            project_id: "lift-automator-v2".to_string(),
            storage_bucket: "lift-automator-v2.appspot.com".to_string(),
            messaging_sender_id: String::new(),
            app_id: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort {
    pub host: String,
    pub port: u16,
}

impl HostPort {
    #[must_use]
    pub fn localhost(port: u16) -> Self {
        Self {
            host: "localhost".to_string(),
            port,
        }
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Local emulator addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorEndpoints {
    pub firestore: HostPort,
    pub auth_url: String,
    pub storage: HostPort,
    pub functions: HostPort,
}

impl Default for EmulatorEndpoints {
    fn default() -> Self {
        Self {
            firestore: HostPort::localhost(8080),
            auth_url: "http://localhost:9099".to_string(),
            storage: HostPort::localhost(9199),
            functions: HostPort::localhost(5001),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEndpoints {
    Emulators(EmulatorEndpoints),
    Hosted,
}

/// Client wiring chosen once and handed to whatever needs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    pub firebase: FirebaseConfig,
    pub region: String,
    pub endpoints: BackendEndpoints,
}

impl ClientConfig {
    #[must_use]
    pub fn new(environment: Environment, firebase: FirebaseConfig, region: &str) -> Self {
        let endpoints = if environment.uses_emulators() {
            BackendEndpoints::Emulators(EmulatorEndpoints::default())
        } else {
            BackendEndpoints::Hosted
        };
        Self {
            environment,
            firebase,
            region: region.to_string(),
            endpoints,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &crate::settings::AppSettings) -> Self {
        Self::new(
            settings.client.environment,
            settings.client.firebase.clone(),
            &settings.functions.region,
        )
    }

    /// Base URL under which callables are addressed by name
    ///
    /// # Errors
    ///
    /// Returns an error if the project id or region produce an invalid URL.
    pub fn functions_base_url(&self) -> Result<Url, url::ParseError> {
        let base = match &self.endpoints {
            BackendEndpoints::Emulators(emulators) => format!(
                "http://{}/{}/{}/",
                emulators.functions, self.firebase.project_id, self.region
            ),
            BackendEndpoints::Hosted => format!(
                "https://{}-{}.cloudfunctions.net/",
                self.region, self.firebase.project_id
            ),
        };
        Url::parse(&base)
    }

    /// Full URL of the callable `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn callable_url(&self, name: &str) -> Result<Url, url::ParseError> {
        self.functions_base_url()?.join(name)
    }
}
