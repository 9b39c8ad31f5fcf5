//! Markup rendering and the render target abstraction.
//!
//! Everything in here except [`RenderTarget`] implementations is pure: the
//! formatters turn models into HTML strings and never touch presentation
//! state. The orchestrator decides which region each string goes to.

mod count;
mod pages;
mod results;

pub use count::{render_result_count, result_count_text, CountDescription};
pub use pages::{make_page_links, render_page_link, render_page_links, FIRST_LABEL, LAST_LABEL};
pub use results::{render_document, render_results, NO_RESULTS_HTML};

use std::collections::HashMap;
use std::sync::Mutex;

/// Where rendered markup ends up.
///
/// Regions are addressed by the element identifiers from
/// [`SearchConfig::elements`](crate::config::SearchConfig). The search form
/// (query field and category selector) is part of the target too, since the
/// bootstrap pre-fills it.
pub trait RenderTarget: Send + Sync {
    /// Replace the content of a region
    fn set_content(&self, element_id: &str, html: &str);

    /// Toggle the busy indicator
    fn set_busy(&self, busy: bool);

    /// Show a blocking, user-visible notice
    fn alert(&self, message: &str);

    /// Pre-fill the search form's query field
    fn set_query_field(&self, _value: &str) {}

    /// Values of the category selector options, in order
    fn category_options(&self) -> Vec<String> {
        Vec::new()
    }

    /// Select a category option by index, or clear the selection
    fn select_category(&self, _index: Option<usize>) {}
}

/// Render target that records everything in memory.
///
/// Used by tests and by the JSON output mode of the CLI.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    state: Mutex<MemoryState>,
}

/// Snapshot of a [`MemoryTarget`]
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MemoryState {
    pub regions: HashMap<String, String>,
    pub busy: bool,
    /// Every busy toggle, in order
    pub busy_history: Vec<bool>,
    pub alerts: Vec<String>,
    pub query_field: Option<String>,
    pub category_options: Vec<String>,
    pub selected_category: Option<usize>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a target whose category selector offers `options`.
    pub fn with_category_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = Self::new();
        target.lock().category_options = options.into_iter().map(Into::into).collect();
        target
    }

    /// Current content of a region.
    pub fn content(&self, element_id: &str) -> Option<String> {
        self.lock().regions.get(element_id).cloned()
    }

    pub fn snapshot(&self) -> MemoryState {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RenderTarget for MemoryTarget {
    fn set_content(&self, element_id: &str, html: &str) {
        self.lock()
            .regions
            .insert(element_id.to_string(), html.to_string());
    }

    fn set_busy(&self, busy: bool) {
        let mut state = self.lock();
        state.busy = busy;
        state.busy_history.push(busy);
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }

    fn set_query_field(&self, value: &str) {
        self.lock().query_field = Some(value.to_string());
    }

    fn category_options(&self) -> Vec<String> {
        self.lock().category_options.clone()
    }

    fn select_category(&self, index: Option<usize>) {
        self.lock().selected_category = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_target_records() {
        let target = MemoryTarget::with_category_options(["any", "Vegetation"]);
        target.set_content("searchResults", "<p>x</p>");
        target.set_busy(true);
        target.set_busy(false);
        target.alert("oops");
        target.select_category(Some(1));

        let state = target.snapshot();
        assert_eq!(target.content("searchResults").as_deref(), Some("<p>x</p>"));
        assert_eq!(state.busy_history, vec![true, false]);
        assert!(!state.busy);
        assert_eq!(state.alerts, vec!["oops".to_string()]);
        assert_eq!(state.selected_category, Some(1));
        assert_eq!(target.category_options(), vec!["any", "Vegetation"]);
    }
}
