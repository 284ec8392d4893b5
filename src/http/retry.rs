//! Retry policies for GraphQL requests.
//!
//! The query layer never retries on its own: every query runs with
//! [`RetryPolicy::None`] unless the caller opts in through the client builder.

use std::time::Duration;

/// Retry policy for a GraphQL request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt. Errors go straight to the caller.
    #[default]
    None,
    /// Retry transport failures, timeouts and 429/502/503/504.
    Transient,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolve the policy into a concrete config, `None` meaning one attempt.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Transient => Some(RetryConfig::transient()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::transient()
    }
}

impl RetryConfig {
    pub fn transient() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }

    /// Delay before retry number `attempt` (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base =
            self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_jitter(initial_ms: u64, max_ms: u64, factor: f64) -> RetryConfig {
        RetryConfig {
            max_retries: 4,
            initial_delay: Duration::from_millis(initial_ms),
            max_delay: Duration::from_millis(max_ms),
            backoff_factor: factor,
            jitter: false,
            retryable_statuses: vec![503],
        }
    }

    #[test]
    fn test_default_policy_never_retries() {
        assert!(RetryPolicy::default().config().is_none());
    }

    #[test]
    fn test_transient_policy_covers_gateway_errors() {
        let config = RetryPolicy::Transient.config().unwrap();
        for status in [429, 502, 503, 504] {
            assert!(config.retryable_statuses.contains(&status));
        }
        assert!(!config.retryable_statuses.contains(&500));
    }

    #[test]
    fn test_delay_doubles_per_attempt() {
        let config = no_jitter(50, 10_000, 2.0);
        let delays: Vec<u128> = (0..3)
            .map(|a| config.delay_for_attempt(a).as_millis())
            .collect();
        assert_eq!(delays, vec![50, 100, 200]);
    }

    #[test]
    fn test_delay_is_capped() {
        let config = no_jitter(1000, 1500, 3.0);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 1500);
    }

    #[test]
    fn test_jitter_stays_within_quarter() {
        let mut config = no_jitter(400, 10_000, 1.0);
        config.jitter = true;
        for _ in 0..50 {
            let ms = config.delay_for_attempt(0).as_millis();
            assert!((300..=500).contains(&ms), "delay {ms} out of range");
        }
    }
}
