//! Core data models for search queries, documents, and pagination.

mod document;
mod pagination;
mod search;

pub use document::{
    date_prefix, normalize_resource_link, Document, SearchResultPage, SolrDoc, SolrResponse,
    SolrResponseInner,
};
pub use pagination::{PageLink, PageLinkSet};
pub use search::{SearchQuery, ANY_CORE_AREA};
