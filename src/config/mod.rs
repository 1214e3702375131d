//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAREER_COMPASS` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use career_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Chat-completion provider configuration (DeepSeek).
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `CAREER_COMPASS` prefix, e.g.
    /// `CAREER_COMPASS__AI__API_KEY=sk-...` -> `ai.api_key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAREER_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// Fails fast with a typed error when the API credential is absent,
    /// rather than failing at the first outbound request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ai_config_fails_validation() {
        let config = AppConfig {
            ai: AiConfig::default(),
        };
        assert!(config.validate().is_err());
    }
}
