/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.streamtape.com";

/// Configures the API endpoint, HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Base URL every request path is appended to.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Retry and backoff policy.
    pub retry: RetryConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: 30_000,
            retry: RetryConfig::default(),
        }
    }
}

/// Retry policy applied by the request layer.
///
/// Zero and empty values are honored as given: `max_retries: 0` makes a
/// single attempt and an empty `retryable_status_codes` disables retries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Base backoff in milliseconds, doubled on every retry.
    pub base_delay_ms: u64,
    /// Upper bound for the exponential part of the backoff.
    pub max_delay_ms: u64,
    /// Non-2xx HTTP statuses that trigger a retry.
    pub retryable_status_codes: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1_000,
            max_delay_ms: 5_000,
            retryable_status_codes: vec![429, 503],
        }
    }
}
