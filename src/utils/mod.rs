//! Utility modules supporting search operations.
//!
//! - [`get_parameter_by_name`]: Read and decode a query parameter from a URL
//! - [`update_query_string_parameter`]: Set a single `key=value` pair in a URL
//! - [`Location`]: The current page URL with parameter accessors
//! - [`HttpClient`]: Shared reqwest client with timeouts and a user agent
//!
//! # Query strings
//!
//! ```rust
//! use dataset_search::utils::{get_parameter_by_name, update_query_string_parameter};
//!
//! let page = "https://example.org/data?q=permafrost";
//! let next = update_query_string_parameter(page, "start", "10");
//! assert_eq!(next, "https://example.org/data?q=permafrost&start=10");
//! assert_eq!(get_parameter_by_name("start", &next).as_deref(), Some("10"));
//! ```

mod http;
mod query_string;

pub use http::{HttpClient, DEFAULT_TIMEOUT_SECS};
pub use query_string::{get_parameter_by_name, update_query_string_parameter, Location};
