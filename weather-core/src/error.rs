use reqwest::StatusCode;
use thiserror::Error;

/// Why an alert fetch produced no payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid alerts URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid {name} header value '{value}': {reason}")]
    InvalidHeader {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to build request for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse alerts JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// True for failures of the network or the remote service; false for
    /// failures that come from our own URL, headers or client setup.
    pub fn is_transient(&self) -> bool {
        !matches!(
            self,
            FetchError::InvalidUrl { .. }
                | FetchError::InvalidHeader { .. }
                | FetchError::Client(_)
                | FetchError::Request { .. }
        )
    }

    /// Classify a transport error from `send()`.
    pub(crate) fn from_send(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else if err.is_builder() {
            FetchError::Request { url: url.to_string(), source: err }
        } else {
            FetchError::Connect { url: url.to_string(), source: err }
        }
    }

    /// Classify a transport error while reading the body.
    pub(crate) fn from_body(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else {
            FetchError::Body { url: url.to_string(), source: err }
        }
    }
}
