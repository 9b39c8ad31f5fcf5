//! Result list rendering.

use crate::models::{Document, SearchResultPage};

/// Markup shown when a search matches nothing.
pub const NO_RESULTS_HTML: &str = "<p>Your search returned no results.</p>";

/// Render one document as a paragraph block.
///
/// The title links to the (DOI-normalised) resource; authors and the
/// publication date sit above it.
pub fn render_document(doc: &Document) -> String {
    format!(
        concat!(
            "<p>{} (Published {})<br>",
            r#"<strong><a rel="external" href="{}" target="_blank">{}</a></strong>"#,
            "</p>"
        ),
        html_escape::encode_text(&doc.author_list()),
        html_escape::encode_text(&doc.published_date),
        html_escape::encode_double_quoted_attribute(&doc.resource_link),
        html_escape::encode_text(&doc.title),
    )
}

/// Render the result list, one block per line.
pub fn render_results(page: &SearchResultPage) -> String {
    if page.documents.is_empty() {
        return NO_RESULTS_HTML.to_string();
    }

    page.documents
        .iter()
        .map(render_document)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, authors: &[&str], date: &str, link: &str) -> Document {
        Document {
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            published_date: date.to_string(),
            resource_link: link.to_string(),
        }
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(render_results(&SearchResultPage::default()), NO_RESULTS_HTML);

        let page = SearchResultPage {
            total_found: 0,
            documents: Vec::new(),
        };
        assert_eq!(render_results(&page), NO_RESULTS_HTML);
    }

    #[test]
    fn test_render_document() {
        let html = render_document(&doc(
            "Snow depth",
            &["A. Smith", "B. Jones"],
            "2012-01-05",
            "http://dx.doi.org/10.1/xyz",
        ));

        assert_eq!(
            html,
            concat!(
                "<p>A. Smith, B. Jones (Published 2012-01-05)<br>",
                r#"<strong><a rel="external" href="http://dx.doi.org/10.1/xyz" target="_blank">Snow depth</a></strong>"#,
                "</p>"
            )
        );
    }

    #[test]
    fn test_render_escapes_text() {
        let html = render_document(&doc("Fish <b>counts</b>", &["R&D Team"], "2001", "http://x/1"));
        assert!(html.contains("Fish &lt;b&gt;counts&lt;/b&gt;"));
        assert!(html.contains("R&amp;D Team"));
    }

    #[test]
    fn test_blocks_joined_by_newline() {
        let page = SearchResultPage {
            total_found: 2,
            documents: vec![
                doc("One", &["A"], "2001-01-01", "http://x/1"),
                doc("Two", &["B"], "2002-02-02", "http://x/2"),
            ],
        };

        let html = render_results(&page);
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("One"));
        assert!(lines[1].contains("Two"));
    }
}
