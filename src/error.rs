/// Discriminator for [`StreamTapeError`] variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    Authentication,
    Validation,
    RateLimit,
    NotFound,
    ApiRequest,
    Network,
    Generic,
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum StreamTapeError {
    /// Credentials were rejected (HTTP 403).
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// Request parameters were rejected (HTTP 400) or an upload response was malformed.
    #[error("validation error: {0}")]
    Validation(String),
    /// Bandwidth or request limit exceeded (HTTP 509).
    #[error("rate limit exceeded: {0}")]
    RateLimit(String),
    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),
    /// Any other API failure, at HTTP or envelope level.
    #[error("api request failed with status {status}: {message}")]
    ApiRequest {
        /// HTTP status, or the envelope `status` when HTTP reported success.
        status: u16,
        /// Upstream `msg` text when available.
        message: String,
        /// Raw response body.
        body: String,
    },
    /// No response was received (connect failure, timeout, broken body).
    #[error("network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
    /// Anything else, including undecodable payloads and polling timeouts.
    #[error("{0}")]
    Generic(String),
}

impl StreamTapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Validation(_) => ErrorKind::Validation,
            Self::RateLimit(_) => ErrorKind::RateLimit,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::ApiRequest { .. } => ErrorKind::ApiRequest,
            Self::Network { .. } => ErrorKind::Network,
            Self::Generic(_) => ErrorKind::Generic,
        }
    }

    /// Returns the upstream status carried by [`StreamTapeError::ApiRequest`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequest { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn network(source: reqwest::Error) -> Self {
        Self::Network {
            message: source.to_string(),
            source: Some(source),
        }
    }
}
