//! Initial search on page load.

use crate::models::SearchQuery;
use crate::render::RenderTarget;
use crate::search::{SearchError, SearchOutcome, Searcher};
use crate::transport::Transport;
use crate::utils::Location;

impl<T, R> Searcher<T, R>
where
    T: Transport,
    R: RenderTarget,
{
    /// Read `q`, `start` and `coreArea` from the page location, pre-fill the
    /// search form, and run the search.
    ///
    /// Missing or garbled parameters fall back to an empty query, offset 0,
    /// and no category.
    pub async fn bootstrap(&self, location: &Location) -> Result<SearchOutcome, SearchError> {
        let query = query_from_location(location);

        self.target().set_query_field(&query.free_text);

        let selected = query.core_area.as_deref().and_then(|area| {
            self.target()
                .category_options()
                .iter()
                .position(|option| option == area)
        });
        self.target().select_category(selected);

        tracing::debug!(
            query = %query.free_text,
            core_area = ?query.core_area,
            start = query.start_offset,
            "Bootstrapping search from page location"
        );

        self.search(location.href(), &query).await
    }
}

/// Build the query described by a page location.
pub fn query_from_location(location: &Location) -> SearchQuery {
    SearchQuery {
        free_text: location.param("q").unwrap_or_default().trim().to_string(),
        core_area: location.param("coreArea"),
        start_offset: SearchQuery::parse_start(location.param("start").as_deref()),
    }
}
