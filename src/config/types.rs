use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::{default_fixture, Article, StubSettings};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Articles served by the store stub. Empty means the built-in fixture.
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Simulated store behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Latency of every successful or transiently failing call (default: 500).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Probability that a call fails (default: 0.2).
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

/// Retry behaviour for failed store calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retry without waiting for the user (default: false).
    #[serde(default)]
    pub auto: bool,
    /// First automatic retry delay in milliseconds (default: 500).
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Upper bound for the doubling delay in milliseconds (default: 8000).
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Stop retrying automatically after this many consecutive failures.
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_latency_ms() -> u64 {
    500
}

fn default_failure_rate() -> f64 {
    0.2
}

fn default_initial_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    8000
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            failure_rate: default_failure_rate(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            auto: false,
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            max_attempts: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    pub fn stub_settings(&self) -> StubSettings {
        StubSettings {
            latency: Duration::from_millis(self.api.latency_ms),
            failure_rate: self.api.failure_rate,
        }
    }

    /// Configured articles, or the built-in fixture when none are set.
    pub fn fixture(&self) -> Vec<Article> {
        if self.articles.is_empty() {
            default_fixture()
        } else {
            self.articles.clone()
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}
