//! Request transports.
//!
//! The orchestrator never talks to the network directly. It hands the
//! composed query URL to a [`Transport`] and awaits the response body. The
//! production implementation is [`HttpTransport`]; [`MockTransport`] serves
//! canned bodies for tests and offline use.

mod http;
pub mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

use async_trait::async_trait;

/// Performs a GET request and returns the response body.
///
/// Implementations should report non-success HTTP statuses as
/// [`TransportError::Status`] rather than returning the error body.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Fetch the body at `url`
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// Errors that can occur while performing a request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Network failure (DNS, connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TransportError::Status(status.as_u16()),
            None => TransportError::Network(err.to_string()),
        }
    }
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidUrl(err.to_string())
    }
}
