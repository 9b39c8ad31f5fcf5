//! Document model and the Solr response payload it is decoded from.

use serde::{Deserialize, Serialize};

/// Prefix marking a DOI resource link.
const DOI_SCHEME: &str = "doi:";

/// HTTP resolver that DOI links are rewritten to.
const DOI_RESOLVER: &str = "http://dx.doi.org/";

/// Number of leading characters of `datePublished` kept for display.
const DATE_PREFIX_LEN: usize = 10;

/// Top-level Solr JSON response
#[derive(Debug, Clone, Deserialize)]
pub struct SolrResponse {
    pub response: SolrResponseInner,
}

/// The `response` object of a Solr JSON response
#[derive(Debug, Clone, Deserialize)]
pub struct SolrResponseInner {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<SolrDoc>,
}

/// A raw document record as returned by the index
#[derive(Debug, Clone, Deserialize)]
pub struct SolrDoc {
    pub title: Option<String>,
    #[serde(default)]
    pub origin: Vec<String>,
    #[serde(rename = "datePublished", default)]
    pub date_published: String,
    #[serde(rename = "resourceMap", default)]
    pub resource_map: Vec<String>,
}

/// A document ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub authors: Vec<String>,
    pub published_date: String,
    pub resource_link: String,
}

impl Document {
    /// Authors joined for display.
    pub fn author_list(&self) -> String {
        self.authors.join(", ")
    }
}

impl TryFrom<SolrDoc> for Document {
    type Error = String;

    fn try_from(doc: SolrDoc) -> Result<Self, Self::Error> {
        let title = doc
            .title
            .ok_or_else(|| "document has no title".to_string())?
            .trim()
            .to_string();

        let resource_link = doc
            .resource_map
            .into_iter()
            .next()
            .map(|link| normalize_resource_link(&link))
            .ok_or_else(|| format!("document '{}' has no resource map entry", title))?;

        Ok(Self {
            title,
            authors: doc.origin,
            published_date: date_prefix(&doc.date_published),
            resource_link,
        })
    }
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub total_found: u64,
    pub documents: Vec<Document>,
}

impl SearchResultPage {
    /// Decode a JSON response body.
    ///
    /// Any record missing a title or resource link fails the whole page.
    pub fn from_json(body: &str) -> Result<Self, String> {
        let data: SolrResponse =
            serde_json::from_str(body).map_err(|e| format!("JSON: {}", e))?;

        let documents = data
            .response
            .docs
            .into_iter()
            .map(Document::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            total_found: data.response.num_found,
            documents,
        })
    }
}

/// Rewrite `doi:` links to the HTTP resolver; other links pass through.
pub fn normalize_resource_link(link: &str) -> String {
    match link.strip_prefix(DOI_SCHEME) {
        Some(doi) => format!("{}{}", DOI_RESOLVER, doi),
        None => link.to_string(),
    }
}

/// First ten characters of an ISO date string, or all of it if shorter.
pub fn date_prefix(date: &str) -> String {
    date.chars().take(DATE_PREFIX_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doi_rewrite() {
        assert_eq!(
            normalize_resource_link("doi:10.1/xyz"),
            "http://dx.doi.org/10.1/xyz"
        );
        assert_eq!(
            normalize_resource_link("https://example.org/data"),
            "https://example.org/data"
        );
        assert_eq!(
            normalize_resource_link("resource_map_doi:10.6073/pasta"),
            "resource_map_doi:10.6073/pasta"
        );
    }

    #[test]
    fn test_date_prefix() {
        assert_eq!(date_prefix("2017-03-14T00:00:00Z"), "2017-03-14");
        assert_eq!(date_prefix("2017"), "2017");
        assert_eq!(date_prefix(""), "");
    }

    #[test]
    fn test_from_json() {
        let body = r#"{
            "responseHeader": {"status": 0},
            "response": {
                "numFound": 42,
                "start": 0,
                "docs": [{
                    "title": "  Soil temperature at Bonanza Creek \n",
                    "origin": ["Jane Doe", "John Roe"],
                    "datePublished": "2015-06-01T00:00:00Z",
                    "resourceMap": ["doi:10.6073/AA/knb-lter-bnz.1.1", "other"]
                }]
            }
        }"#;

        let page = SearchResultPage::from_json(body).unwrap();
        assert_eq!(page.total_found, 42);
        assert_eq!(page.documents.len(), 1);

        let doc = &page.documents[0];
        assert_eq!(doc.title, "Soil temperature at Bonanza Creek");
        assert_eq!(doc.author_list(), "Jane Doe, John Roe");
        assert_eq!(doc.published_date, "2015-06-01");
        assert_eq!(
            doc.resource_link,
            "http://dx.doi.org/10.6073/AA/knb-lter-bnz.1.1"
        );
    }

    #[test]
    fn test_from_json_missing_resource_map() {
        let body = r#"{"response": {"numFound": 1, "docs": [{"title": "t"}]}}"#;
        assert!(SearchResultPage::from_json(body).is_err());
    }

    #[test]
    fn test_from_json_missing_response() {
        assert!(SearchResultPage::from_json(r#"{"error": "boom"}"#).is_err());
    }
}
