use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::client::{Environment, FirebaseConfig};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppSettings {
    pub application: ApplicationSettings,
    pub functions: FunctionsSettings,
    pub client: ClientSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionsSettings {
    /// Region the callables are deployed to
    pub region: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientSettings {
    pub environment: Environment,
    pub firebase: FirebaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            cors_origins: "http://localhost:5173,http://localhost:4173".to_string(),
        }
    }
}

impl Default for FunctionsSettings {
    fn default() -> Self {
        Self {
            region: "us-central1".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from configuration files and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A settings file cannot be read or parsed
    /// - Logger initialization fails
    pub fn load() -> anyhow::Result<Self> {
        Self::load_env_file();

        let mut settings = Self::load_base_settings()?;
        Self::apply_env_overrides(&mut settings);

        env_logger::Builder::new()
            .parse_filters(&settings.logging.level)
            .try_init()
            .context("Failed to initialize logger")?;

        Ok(settings)
    }

    /// Load base settings from TOML file(s) or use defaults
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables (applied separately after loading base settings)
    /// 2. Settings.toml in `LIFT_SECRETS_DIR` (if specified and exists)
    /// 3. Settings.toml in current directory (if exists)
    /// 4. Default settings
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file cannot be read or parsed.
    pub fn load_base_settings() -> anyhow::Result<Self> {
        let mut settings = Self::default();

        let default_config_path = std::path::PathBuf::from("Settings.toml");
        if default_config_path.exists() {
            settings = Self::from_file(&default_config_path)?;
            println!(
                "✓ Loaded base settings from {}",
                default_config_path.display()
            );
        }

        if let Ok(secrets_dir) = std::env::var("LIFT_SECRETS_DIR") {
            let secrets_path = std::path::Path::new(&secrets_dir).join("Settings.toml");
            if secrets_path.exists() {
                settings = Self::from_file(&secrets_path)?;
                println!("✓ Overriding settings from {}", secrets_path.display());
            } else {
                println!(
                    "ℹ LIFT_SECRETS_DIR set but no Settings.toml found at: {}",
                    secrets_path.display()
                );
            }
        }

        Ok(settings)
    }

    /// Parse a single TOML settings file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid settings TOML.
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let toml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        basic_toml::from_str(&toml_content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(settings: &mut Self) {
        Self::apply_application_env_overrides(&mut settings.application);
        Self::apply_functions_env_overrides(&mut settings.functions);
        Self::apply_client_env_overrides(&mut settings.client);
        Self::apply_logging_env_overrides(&mut settings.logging);
    }

    fn apply_application_env_overrides(app_settings: &mut ApplicationSettings) {
        if let Ok(host) = std::env::var("HOST") {
            app_settings.host = host;
        }
        if let Ok(port_str) = std::env::var("PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                app_settings.port = port;
            }
        }
        if let Ok(cors_origins) = std::env::var("CORS_ORIGINS") {
            app_settings.cors_origins = cors_origins;
        }
    }

    fn apply_functions_env_overrides(functions_settings: &mut FunctionsSettings) {
        if let Ok(region) = std::env::var("FUNCTIONS_REGION") {
            functions_settings.region = region;
        }
    }

    /// `APP_ENV` wins over `NODE_ENV`; unknown values are ignored
    pub fn apply_client_env_overrides(client_settings: &mut ClientSettings) {
        let requested = std::env::var("APP_ENV").or_else(|_| std::env::var("NODE_ENV"));
        if let Ok(value) = requested {
            match value.parse::<Environment>() {
                Ok(environment) => client_settings.environment = environment,
                Err(e) => eprintln!("⚠️  Ignoring environment override: {e}"),
            }
        }
        if let Ok(project_id) = std::env::var("FIREBASE_PROJECT_ID") {
            client_settings.firebase.project_id = project_id;
        }
        if let Ok(api_key) = std::env::var("FIREBASE_API_KEY") {
            client_settings.firebase.api_key = api_key;
        }
    }

    fn apply_logging_env_overrides(logging_settings: &mut LoggingSettings) {
        if let Ok(log_level) = std::env::var("RUST_LOG") {
            logging_settings.level = log_level;
        }
    }

    /// Load environment variables from .env file
    fn load_env_file() {
        if let Ok(contents) = std::fs::read_to_string(".env") {
            for line in contents.lines() {
                let line = line.trim();
                if line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    std::env::set_var(key.trim(), value.trim());
                }
            }
        }
    }

    /// Get the bind address for the server
    #[must_use]
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }

    /// Get CORS origins as a vector of strings
    #[must_use]
    pub fn get_cors_origins(&self) -> Vec<String> {
        self.application
            .cors_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
