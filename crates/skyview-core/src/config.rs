use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;
use crate::prefs::Language;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Dashboard server settings
    pub server: ServerConfig,

    /// Page element ids and presentation settings
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the dashboard server (the `/api/...` routes live under it)
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Element ids the dashboard looks up in the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementIds {
    pub temperature_chart: String,
    pub weekly_chart: String,
    pub theme_toggle: String,
    pub favorite_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            temperature_chart: "temperatureChart".to_string(),
            weekly_chart: "weeklyChart".to_string(),
            theme_toggle: "themeToggle".to_string(),
            favorite_button: "favoriteBtn".to_string(),
        }
    }
}

/// Notification timing in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays fully visible
    pub dwell_ms: u64,
    /// Length of the slide-out animation before removal
    pub fade_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dwell_ms: 3000,
            fade_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Language used when none has been stored yet
    #[serde(default)]
    pub default_language: Language,

    #[serde(default)]
    pub elements: ElementIds,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skyview");

        Self {
            config_dir,
            server: ServerConfig {
                base_url: std::env::var("SKYVIEW_SERVER_URL")
                    .unwrap_or_else(|_| ServerConfig::default().base_url),
                request_timeout_secs: default_request_timeout_secs(),
            },
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, writing defaults there if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", config_path.display(), e)))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Point the client at another server, keeping the config valid.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` and leaves the config untouched when
    /// the result would fail validation.
    pub fn override_server_url(&mut self, url: impl Into<String>) -> Result<(), ConfigError> {
        let previous = std::mem::replace(&mut self.server.base_url, url.into());
        let validation = self.validate();
        if !validation.is_valid() {
            let rejected = std::mem::replace(&mut self.server.base_url, previous);
            return Err(ConfigError::Invalid(format!(
                "{}: {}",
                rejected,
                validation.error_summary()
            )));
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.server.base_url, "server.base_url", &mut result);

        if self.server.request_timeout_secs == 0 {
            result.add_error(
                "server.request_timeout_secs",
                "Request timeout must be greater than 0",
            );
        } else if self.server.request_timeout_secs > 300 {
            result.add_warning(
                "server.request_timeout_secs",
                "Request timeout is unusually long (>300s)",
            );
        }

        let notifications = &self.ui.notifications;
        if notifications.dwell_ms == 0 {
            result.add_error(
                "ui.notifications.dwell_ms",
                "Notifications would disappear immediately",
            );
        }
        if notifications.fade_ms > notifications.dwell_ms {
            result.add_warning(
                "ui.notifications.fade_ms",
                "Fade-out is longer than the time a notification stays visible",
            );
        }

        let ids = &self.ui.elements;
        for (field, value) in [
            ("ui.elements.temperature_chart", &ids.temperature_chart),
            ("ui.elements.weekly_chart", &ids.weekly_chart),
            ("ui.elements.theme_toggle", &ids.theme_toggle),
            ("ui.elements.favorite_button", &ids.favorite_button),
        ] {
            if value.trim().is_empty() {
                result.add_error(field, "Element id must not be empty");
            }
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Path of the client-side preference file
    pub fn preferences_path(&self) -> PathBuf {
        self.config_dir.join("preferences.json")
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skyview");

        Ok(config_dir.join("config.toml"))
    }
}
