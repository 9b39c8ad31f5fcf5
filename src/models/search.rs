//! Search query model.

use serde::{Deserialize, Serialize};

/// Sentinel category value meaning "no category filter".
pub const ANY_CORE_AREA: &str = "any";

/// Search query parameters, rebuilt from the page URL on every load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query typed by the user
    pub free_text: String,

    /// Core area (keyword facet) to narrow results to
    pub core_area: Option<String>,

    /// Zero-based index of the first result to return
    pub start_offset: u64,
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(free_text: impl Into<String>) -> Self {
        Self {
            free_text: free_text.into(),
            ..Default::default()
        }
    }

    /// Set core area filter
    pub fn core_area(mut self, core_area: impl Into<String>) -> Self {
        self.core_area = Some(core_area.into());
        self
    }

    /// Set start offset
    pub fn start_offset(mut self, start: u64) -> Self {
        self.start_offset = start;
        self
    }

    /// The core area to filter on, if it selects anything.
    ///
    /// Empty values and the `any` sentinel mean no filter.
    pub fn effective_core_area(&self) -> Option<&str> {
        self.core_area
            .as_deref()
            .map(str::trim)
            .filter(|area| !area.is_empty() && *area != ANY_CORE_AREA)
    }

    /// Parse a `start` parameter, tolerating garbage.
    ///
    /// Absent, empty, negative, or non-numeric values all mean offset 0.
    pub fn parse_start(raw: Option<&str>) -> u64 {
        raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_core_area() {
        assert_eq!(SearchQuery::new("x").effective_core_area(), None);
        assert_eq!(SearchQuery::new("x").core_area("").effective_core_area(), None);
        assert_eq!(
            SearchQuery::new("x").core_area("any").effective_core_area(),
            None
        );
        assert_eq!(
            SearchQuery::new("x")
                .core_area("Vegetation")
                .effective_core_area(),
            Some("Vegetation")
        );
    }

    #[test]
    fn test_parse_start() {
        assert_eq!(SearchQuery::parse_start(None), 0);
        assert_eq!(SearchQuery::parse_start(Some("")), 0);
        assert_eq!(SearchQuery::parse_start(Some("abc")), 0);
        assert_eq!(SearchQuery::parse_start(Some("-10")), 0);
        assert_eq!(SearchQuery::parse_start(Some("20")), 20);
        assert_eq!(SearchQuery::parse_start(Some("35")), 35);
    }
}
