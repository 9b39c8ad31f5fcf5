use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::SearchConfig;
use crate::models::{SearchQuery, SearchResultPage};
use crate::render::{
    make_page_links, render_page_links, render_result_count, render_results, CountDescription,
    RenderTarget,
};
use crate::search::{SearchError, SearchOutcome};
use crate::transport::Transport;

/// Fields requested from the index for every document.
pub const FIELD_LIST: [&str; 4] = ["title", "origin", "datePublished", "resourceMap"];

/// Notice shown when the request fails.
pub const REQUEST_ERROR_MESSAGE: &str = "There was an error making the request.";

/// Runs searches against one index and renders them into one target
#[derive(Debug)]
pub struct Searcher<T, R> {
    config: Arc<SearchConfig>,
    transport: Arc<T>,
    target: Arc<R>,
    generation: AtomicU64,
}

impl<T, R> Searcher<T, R>
where
    T: Transport,
    R: RenderTarget,
{
    /// Create a searcher, rejecting invalid configuration up front.
    pub fn new(
        config: Arc<SearchConfig>,
        transport: Arc<T>,
        target: Arc<R>,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            config,
            transport,
            target,
            generation: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    /// Compose the Solr query URL for `query`.
    ///
    /// The `fq` and `q` values are percent-encoded; everything else is fixed
    /// or numeric.
    pub fn build_query_url(&self, query: &SearchQuery) -> String {
        let base = &self.config.server;
        let mut url = String::with_capacity(base.len() + 128);
        url.push_str(base);
        if !(base.ends_with('?') || base.ends_with('&')) {
            url.push(if base.contains('?') { '&' } else { '?' });
        }

        url.push_str(&format!(
            "fl={}&defType=edismax&wt=json&rows={}&start={}",
            FIELD_LIST.join(","),
            self.config.limit,
            query.start_offset
        ));

        if let Some(area) = query.effective_core_area() {
            let clause = format!("keywords:\"{}\"", area);
            url.push_str("&fq=");
            url.push_str(&urlencoding::encode(&clause));
        }

        let text = format!("{} {}", self.config.filter, query.free_text.trim());
        url.push_str("&q=");
        url.push_str(&urlencoding::encode(text.trim()));

        url
    }

    /// Run a search and render the response.
    ///
    /// `page_url` is the URL of the page being rendered; page links are
    /// built from it. Transport failures raise an alert on the target and
    /// are returned as errors.
    pub async fn search(
        &self,
        page_url: &str,
        query: &SearchQuery,
    ) -> Result<SearchOutcome, SearchError> {
        let url = self.build_query_url(query);
        self.show_url(&url);

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.target.set_busy(true);
        tracing::debug!(%url, generation, "Sending search request");

        let result = self.transport.get(&url).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding response from superseded search");
            return Ok(SearchOutcome::Superseded);
        }
        self.target.set_busy(false);

        let body = match result {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Search request failed: {}", e);
                self.target.alert(REQUEST_ERROR_MESSAGE);
                return Err(e.into());
            }
        };

        let page = SearchResultPage::from_json(&body).map_err(|e| {
            tracing::error!("Unexpected search response: {}", e);
            SearchError::MalformedResponse(e)
        })?;

        tracing::info!(
            total = page.total_found,
            shown = page.documents.len(),
            start = query.start_offset,
            "Search complete"
        );

        self.render(page_url, query, &page);
        Ok(SearchOutcome::Rendered(page))
    }

    fn show_url(&self, url: &str) {
        let html = format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            html_escape::encode_double_quoted_attribute(url),
            html_escape::encode_text(url)
        );
        self.target.set_content(&self.config.elements.url, &html);
    }

    fn render(&self, page_url: &str, query: &SearchQuery, page: &SearchResultPage) {
        let elements = &self.config.elements;
        let start = query.start_offset;

        self.target.set_content(&elements.results, &render_results(page));

        let links = make_page_links(
            page.total_found,
            self.config.limit,
            self.config.show_pages,
            start,
        );
        self.target
            .set_content(&elements.pages, &render_page_links(&links, page_url));

        let description = CountDescription::from_query(query);
        self.target.set_content(
            &elements.count,
            &render_result_count(page.total_found, self.config.limit, start, Some(&description)),
        );
    }
}
