use std::time::Duration;

use crate::RetryConfig;

/// Upper (exclusive) bound of the random jitter added to every backoff.
pub const JITTER_MS: u64 = 100;

impl RetryConfig {
    /// Decides whether a failed attempt is retried.
    ///
    /// `status` is the non-2xx HTTP status behind the failure; failures
    /// without one (network, client-side validation) are never retried.
    pub fn should_retry(&self, status: Option<u16>, attempt: u32) -> bool {
        if attempt >= self.max_retries {
            return false;
        }
        status.is_some_and(|status| self.retryable_status_codes.contains(&status))
    }

    /// Exponential part of the backoff for `attempt`, capped at `max_delay_ms`.
    pub fn capped_delay_ms(&self, attempt: u32) -> u64 {
        let multiplier = 2u64.saturating_pow(attempt);
        self.base_delay_ms
            .saturating_mul(multiplier)
            .min(self.max_delay_ms)
    }

    /// Backoff before retry number `attempt + 1`, jitter included.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let jitter = fastrand::u64(0..JITTER_MS);
        Duration::from_millis(self.capped_delay_ms(attempt).saturating_add(jitter))
    }
}
