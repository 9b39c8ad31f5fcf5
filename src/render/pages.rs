//! Page link calculation and rendering.

use crate::models::{PageLink, PageLinkSet};
use crate::utils::update_query_string_parameter;

/// Label of the link to the first page.
pub const FIRST_LABEL: &str = "&laquo;";

/// Label of the link to the last page.
pub const LAST_LABEL: &str = "&raquo;";

/// Compute the page links to show for a result set.
///
/// A window of `show_pages` numbered links is centred on the current page
/// and shifted (not shrunk) when it runs past either end. First and last
/// navigation links are always included. Nothing is returned when all
/// results fit on one page.
///
/// ```
/// use dataset_search::render::make_page_links;
///
/// let links = make_page_links(100, 10, 5, 90);
/// let pages: Vec<_> = links.numbered().map(|l| l.label.as_str()).collect();
/// assert_eq!(pages, ["6", "7", "8", "9", "10"]);
/// ```
pub fn make_page_links(total: u64, limit: u64, show_pages: u64, current_start: u64) -> PageLinkSet {
    if limit == 0 || total <= limit {
        return PageLinkSet::default();
    }

    let num_pages = total.div_ceil(limit);
    // `start` comes straight from the page URL; pages past the end sit on the last one.
    let current_page = (current_start / limit).saturating_add(1).min(num_pages);
    let show_pages = show_pages.max(1);
    let left_right = show_pages / 2;

    // A start page of 0 stands for a window running off the front.
    let mut start_page = current_page.saturating_sub(left_right);
    let mut end_page = current_page.saturating_add(left_right);

    if end_page > num_pages {
        end_page = num_pages;
        start_page = if end_page < show_pages {
            0
        } else {
            end_page - show_pages + 1
        };
    }
    if start_page == 0 {
        start_page = 1;
        end_page = show_pages.min(num_pages);
    }

    let mut links = vec![PageLink::navigation(FIRST_LABEL, 0, current_start)];
    for page in start_page..=end_page {
        links.push(PageLink::numbered(page, (page - 1) * limit, current_start));
    }
    let last_offset = (num_pages - 1) * limit;
    links.push(PageLink::navigation(LAST_LABEL, last_offset, current_start));

    PageLinkSet { links }
}

/// Render a single page link as an anchor.
///
/// Active links point at `#`; only numbered ones get the `active` class.
pub fn render_page_link(link: &PageLink, current_url: &str) -> String {
    if link.is_active {
        let class = if link.is_navigation {
            ""
        } else {
            r#" class="active""#
        };
        return format!(r##"<a{} href="#">{}</a>"##, class, link.label);
    }

    let href = update_query_string_parameter(
        current_url,
        "start",
        &link.target_offset.to_string(),
    );
    format!(r#"<a href="{}">{}</a>"#, href, link.label)
}

/// Render a link set as concatenated anchors, hrefs based on `current_url`.
pub fn render_page_links(links: &PageLinkSet, current_url: &str) -> String {
    links
        .links
        .iter()
        .map(|link| render_page_link(link, current_url))
        .collect()
}
