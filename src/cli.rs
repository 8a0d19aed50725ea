use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Article list backed by a flaky in-memory store.
#[derive(Debug, Parser)]
#[command(name = "article-board", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/article-board/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated store latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Probability in [0, 1] that a store call fails
    #[arg(long, value_name = "RATE")]
    pub failure_rate: Option<f64>,

    /// Retry failed calls automatically with backoff
    #[arg(long)]
    pub auto_retry: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = Config::load_from(&self.config_path())?;
        self.apply(config)
    }

    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(latency_ms) = self.latency_ms {
            config.api.latency_ms = latency_ms;
        }
        if let Some(rate) = self.failure_rate {
            config.api.failure_rate = rate;
        }
        if self.auto_retry {
            config.retry.auto = true;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["article-board"]);
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "article-board",
            "--latency-ms",
            "10",
            "--failure-rate",
            "0.5",
            "--auto-retry",
        ]);
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config.api.latency_ms, 10);
        assert_eq!(config.api.failure_rate, 0.5);
        assert!(config.retry.auto);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::parse_from(["article-board", "--failure-rate", "2"]);
        assert!(matches!(
            cli.apply(Config::default()),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
