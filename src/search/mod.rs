//! Search orchestration.
//!
//! [`Searcher`] ties the pieces together: it composes the Solr query URL
//! from the configuration and a [`SearchQuery`](crate::models::SearchQuery),
//! awaits the [`Transport`](crate::transport::Transport), and writes the
//! rendered results, page links, and count into a
//! [`RenderTarget`](crate::render::RenderTarget).
//!
//! # Overlapping searches
//!
//! Each search takes a generation number. A response that arrives after a
//! newer search has started is dropped and reported as
//! [`SearchOutcome::Superseded`]; only the latest search touches the results
//! regions or clears the busy indicator.

mod bootstrap;
mod orchestrator;

pub use bootstrap::query_from_location;
pub use orchestrator::{Searcher, FIELD_LIST, REQUEST_ERROR_MESSAGE};

use crate::config::ConfigError;
use crate::models::SearchResultPage;
use crate::transport::TransportError;

/// What happened to a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response was rendered into the target
    Rendered(SearchResultPage),

    /// A newer search started before the response arrived; nothing was rendered
    Superseded,
}

impl SearchOutcome {
    /// The rendered page, if this search was not superseded.
    pub fn page(&self) -> Option<&SearchResultPage> {
        match self {
            SearchOutcome::Rendered(page) => Some(page),
            SearchOutcome::Superseded => None,
        }
    }
}

/// Errors that can occur during a search
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request itself failed
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),

    /// The index answered with something other than the expected payload
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The configuration is unusable
    #[error(transparent)]
    Config(#[from] ConfigError),
}
