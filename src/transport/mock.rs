//! Mock transport for testing purposes.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::transport::{Transport, TransportError};

/// A mock transport that returns predefined responses.
///
/// Queued responses are served first, in order; after that the default
/// response (if any) is returned for every request. Every requested URL is
/// recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    queued: Mutex<VecDeque<(Duration, Result<String, TransportError>)>>,
    default_response: Mutex<Option<Result<String, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create a new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock transport that always answers with `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.set_response(Ok(body.into()));
        mock
    }

    /// Set the response returned when the queue is empty.
    pub fn set_response(&self, response: Result<String, TransportError>) {
        let mut guard = self.default_response.lock().unwrap();
        *guard = Some(response);
    }

    /// Queue a one-off response delivered after `delay`.
    pub fn push_response(&self, delay: Duration, response: Result<String, TransportError>) {
        let mut guard = self.queued.lock().unwrap();
        guard.push_back((delay, response));
    }

    /// URLs requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());

        let queued = self.queued.lock().unwrap().pop_front();
        if let Some((delay, response)) = queued {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            return response;
        }

        let guard = self.default_response.lock().unwrap();
        match &*guard {
            Some(response) => response.clone(),
            None => Err(TransportError::Network("no mock response set".to_string())),
        }
    }
}

/// Build one Solr document record for tests.
pub fn solr_doc(title: &str, authors: &[&str], date: &str, link: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "origin": authors,
        "datePublished": date,
        "resourceMap": [link],
    })
}

/// Build a Solr JSON response body for tests.
pub fn solr_body(num_found: u64, docs: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "response": {
            "numFound": num_found,
            "start": 0,
            "docs": docs,
        }
    })
    .to_string()
}
