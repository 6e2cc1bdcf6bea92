use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{
    decode::{classify_status, decode_envelope},
    services::{AccountService, DownloadService, FileService, UploadService},
    ClientOptions, Envelope, Request, Result, StreamTapeError,
};

#[derive(Clone)]
/// HTTP client for the StreamTape API.
///
/// The client is cheap to clone and holds no mutable state, so one
/// instance can serve any number of concurrent callers.
pub struct StreamTapeClient {
    http: reqwest::Client,
    login: String,
    key: String,
    options: ClientOptions,
}

impl fmt::Debug for StreamTapeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamTapeClient")
            .field("login", &self.login)
            .field("key", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

/// A failed attempt plus the status the retry decision is based on.
struct Failure {
    error: StreamTapeError,
    status: Option<u16>,
}

impl Failure {
    fn transport(err: reqwest::Error) -> Self {
        let error = if err.is_builder() {
            StreamTapeError::Generic(format!("could not build request: {err}"))
        } else {
            StreamTapeError::network(err)
        };
        Self {
            error,
            status: None,
        }
    }
}

impl StreamTapeClient {
    /// Creates a client for the API user `login` with API key `key`.
    ///
    /// Both values are sent as query parameters on every request.
    pub fn new(login: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            login: login.into(),
            key: key.into(),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `STREAMTAPE_LOGIN`: API login
    /// - `STREAMTAPE_KEY`: API key
    /// - `STREAMTAPE_BASE_URL`: optional endpoint override
    ///
    /// Returns an error if a credential variable is missing or empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use streamtape_http::StreamTapeClient;
    ///
    /// let client = StreamTapeClient::from_env().expect("missing STREAMTAPE_* env vars");
    /// ```
    pub fn from_env() -> std::result::Result<Self, String> {
        let login = std::env::var("STREAMTAPE_LOGIN")
            .map_err(|_| "missing STREAMTAPE_LOGIN environment variable".to_owned())?;
        let key = std::env::var("STREAMTAPE_KEY")
            .map_err(|_| "missing STREAMTAPE_KEY environment variable".to_owned())?;
        if login.trim().is_empty() {
            return Err("STREAMTAPE_LOGIN is set but empty".to_owned());
        }
        if key.trim().is_empty() {
            return Err("STREAMTAPE_KEY is set but empty".to_owned());
        }

        let mut options = ClientOptions::default();
        if let Ok(base_url) = std::env::var("STREAMTAPE_BASE_URL") {
            if !base_url.trim().is_empty() {
                options.base_url = base_url.trim().to_owned();
            }
        }
        Ok(Self::new(login.trim(), key.trim()).with_options(options))
    }

    /// Applies client options such as base URL, timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn account(&self) -> AccountService<'_> {
        AccountService::new(self)
    }

    pub fn file(&self) -> FileService<'_> {
        FileService::new(self)
    }

    pub fn download(&self) -> DownloadService<'_> {
        DownloadService::new(self)
    }

    pub fn upload(&self) -> UploadService<'_> {
        UploadService::new(self)
    }

    /// Sends `request` with credentials and retries, returning the
    /// validated envelope.
    ///
    /// Non-2xx responses whose HTTP status is listed in
    /// [`RetryConfig::retryable_status_codes`](crate::RetryConfig) are
    /// retried with exponential backoff up to `max_retries` times. Network
    /// errors and envelope failures under HTTP 2xx are returned immediately.
    pub async fn execute<T: DeserializeOwned>(&self, request: &Request) -> Result<Envelope<T>> {
        if request.path.trim().is_empty() {
            return Err(StreamTapeError::Validation(
                "request path must not be empty".to_owned(),
            ));
        }

        let retry = &self.options.retry;
        let mut attempt = 0u32;
        let mut last_error = None;

        while attempt <= retry.max_retries {
            match self.send_once(request).await {
                Ok(envelope) => return Ok(envelope),
                Err(failure) => {
                    if !retry.should_retry(failure.status, attempt) {
                        return Err(failure.error);
                    }
                    self.wait_before_retry(request, attempt, &failure).await;
                    attempt += 1;
                    last_error = Some(failure.error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| StreamTapeError::Network {
            message: "request failed without a recorded error".to_owned(),
            source: None,
        }))
    }

    /// Runs `request` and returns only the envelope `result`.
    pub(crate) async fn fetch_result<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        Ok(self.execute::<T>(request).await?.result)
    }

    async fn send_once<T: DeserializeOwned>(
        &self,
        request: &Request,
    ) -> std::result::Result<Envelope<T>, Failure> {
        let response = self
            .http
            .request(request.method.clone(), self.endpoint_url(&request.path))
            .query(&request.query.to_wire(&self.login, &self.key))
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .send()
            .await
            .map_err(Failure::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(Failure::transport)?;

        if !status.is_success() {
            return Err(Failure {
                error: classify_status(status.as_u16(), body),
                status: Some(status.as_u16()),
            });
        }

        // Envelope failures arrive under HTTP 2xx and are never retried.
        decode_envelope(body).map_err(|error| Failure {
            error,
            status: None,
        })
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.options.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Sleeps for the backoff computed by [`RetryConfig::backoff_delay`](crate::RetryConfig::backoff_delay).
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    async fn wait_before_retry(&self, request: &Request, attempt: u32, failure: &Failure) {
        let delay = self.options.retry.backoff_delay(attempt);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %request.path,
            attempt = attempt + 1,
            status = ?failure.status,
            "retrying request after {} ms",
            delay.as_millis()
        );

        sleep(delay).await;
    }
}
