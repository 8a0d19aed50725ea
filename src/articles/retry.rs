//! When failed store calls are re-issued.

use std::time::Duration;

use crate::config::RetryConfig;

/// Retry behaviour of the synchronizer.
///
/// A failed call is always re-issued on the next retry signal. With `auto`
/// set, the synchronizer raises that signal itself after an exponential
/// backoff, until `max_attempts` consecutive failures have been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub auto: bool,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// Consecutive failed attempts after which automatic retry stops.
    /// `None` never stops.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Retries only happen when the user asks for them.
    pub fn manual() -> Self {
        Self {
            auto: false,
            ..Self::default()
        }
    }

    pub fn automatic(initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            auto: true,
            initial_delay,
            max_delay,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Delay before the automatic retry that follows `failures` consecutive
    /// failures (1-based). Doubles each time, capped at `max_delay`.
    pub fn delay_for_attempt(&self, failures: u32) -> Duration {
        let exponent = failures.saturating_sub(1).min(31);
        let factor = 1u32 << exponent;
        self.initial_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    /// Whether an automatic retry should follow `failures` consecutive failures.
    pub fn schedules_after(&self, failures: u32) -> bool {
        self.auto && self.max_attempts.map_or(true, |max| failures < max)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            auto: false,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            max_attempts: None,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            auto: config.auto,
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
            max_attempts: config.max_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_policy_never_schedules() {
        let policy = RetryPolicy::manual();
        assert!(!policy.schedules_after(1));
        assert!(!policy.schedules_after(100));
    }

    #[test]
    fn delay_doubles_and_caps() {
        let policy =
            RetryPolicy::automatic(Duration::from_millis(100), Duration::from_millis(1000));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for_attempt(4), Duration::from_millis(800));
        assert_eq!(policy.delay_for_attempt(5), Duration::from_millis(1000));
        assert_eq!(policy.delay_for_attempt(60), Duration::from_millis(1000));
    }

    #[test]
    fn max_attempts_stops_scheduling() {
        let policy = RetryPolicy::automatic(Duration::from_millis(10), Duration::from_millis(10))
            .with_max_attempts(3);
        assert!(policy.schedules_after(1));
        assert!(policy.schedules_after(2));
        assert!(!policy.schedules_after(3));
    }

    #[test]
    fn unbounded_automatic_policy_always_schedules() {
        let policy = RetryPolicy::automatic(Duration::from_millis(10), Duration::from_millis(10));
        assert!(policy.schedules_after(u32::MAX));
    }
}
