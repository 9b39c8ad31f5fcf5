//! # Dataset Search
//!
//! A client for Solr-backed dataset catalogues (such as a DataONE Metacat
//! member node). It composes the query URL, performs the request, and
//! renders paginated HTML for the results.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (SearchQuery, Document, PageLinkSet, etc.)
//! - [`render`]: Result, page-link and count formatters plus the render target trait
//! - [`search`]: The orchestrator and page bootstrap
//! - [`transport`]: Request transports (reqwest-backed and mock)
//! - [`utils`]: Query string helpers and the HTTP client
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal render target for the CLI

pub mod config;
pub mod models;
pub mod render;
pub mod search;
pub mod transport;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use crate::config::SearchConfig;
pub use models::{Document, PageLinkSet, SearchQuery, SearchResultPage};
pub use render::RenderTarget;
pub use search::{SearchError, SearchOutcome, Searcher};
pub use transport::{HttpTransport, Transport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
