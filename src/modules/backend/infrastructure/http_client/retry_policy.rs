//! Retry policy for backend requests
//!
//! Only transient failures are retried: connectivity problems, timeouts and
//! 5xx answers. Auth and not-found answers go straight to the listing.

use crate::shared::errors::AppError;
use std::time::Duration;

/// Configuration for HTTP retry behavior
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub base_delay: Duration,
    /// Upper bound for a single wait
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    /// Add up to 10% random extra delay
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::listing(2)
    }
}

impl RetryPolicy {
    /// Policy for listing fetches: short waits, the whole fetch is bounded by a timeout anyway
    pub fn listing(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(300),
            max_delay: Duration::from_secs(3),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }

    /// Single attempt, no waiting
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::listing(0)
        }
    }

    pub fn total_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Delay before retry number `attempt` (0-based) with exponential backoff and jitter
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        let exponential_delay =
            self.base_delay.as_millis() as f64 * self.backoff_multiplier.powi(attempt as i32);

        let mut delay = Duration::from_millis(exponential_delay as u64).min(self.max_delay);

        if self.jitter {
            let jitter_ms = (delay.as_millis() as f64 * 0.1 * rand::random::<f64>()) as u64;
            delay += Duration::from_millis(jitter_ms);
        }

        delay
    }

    /// Whether `error` after attempt `attempt` (0-based) should be retried
    pub fn should_retry(&self, error: &AppError, attempt: u32) -> bool {
        attempt < self.max_retries && is_retryable(error)
    }
}

pub fn is_retryable(error: &AppError) -> bool {
    error.is_transient()
}
