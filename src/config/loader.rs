use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `article-board/config.toml` under the platform config directory,
    /// or the current directory if there is none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("article-board").join("config.toml")
    }

    /// Load from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - `failure_rate` lies in `0.0..=1.0`
    /// - retry delays are ordered and `max_attempts` is positive
    /// - the redraw tick is non-zero
    /// - configured article ids are unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.api.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(invalid(format!(
                "api.failure_rate must be between 0.0 and 1.0, got {}",
                rate
            )));
        }

        if self.retry.initial_delay_ms > self.retry.max_delay_ms {
            return Err(invalid(format!(
                "retry.initial_delay_ms ({}) exceeds retry.max_delay_ms ({})",
                self.retry.initial_delay_ms, self.retry.max_delay_ms
            )));
        }

        if self.retry.max_attempts == Some(0) {
            return Err(invalid("retry.max_attempts must be at least 1".to_string()));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms must be positive".to_string()));
        }

        let mut seen = HashSet::new();
        for article in &self.articles {
            if !seen.insert(article.id) {
                return Err(invalid(format!("duplicate article id {}", article.id)));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn failure_rate_out_of_range_is_rejected() {
        let mut config = Config::default();
        config.api.failure_rate = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn zero_max_attempts_is_rejected() {
        let mut config = Config::default();
        config.retry.max_attempts = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_delays_are_rejected() {
        let mut config = Config::default();
        config.retry.initial_delay_ms = 10_000;
        config.retry.max_delay_ms = 100;
        assert!(config.validate().is_err());
    }
}
