//! reqwest-backed transport.

use async_trait::async_trait;
use std::time::Duration;

use crate::transport::{Transport, TransportError};
use crate::utils::HttpClient;

/// Transport that performs real HTTP GET requests
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            client: HttpClient::new()?,
        })
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            client: HttpClient::with_timeout(timeout)?,
        })
    }

    pub fn from_client(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        let parsed = url::Url::parse(url)?;

        let response = self
            .client
            .get(parsed.as_str())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Search request failed");
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
