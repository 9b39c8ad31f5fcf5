//! Result count summary.

use crate::models::SearchQuery;

/// What was searched for, used to phrase the count summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountDescription {
    pub query: String,
    pub core_area: Option<String>,
}

impl CountDescription {
    pub fn from_query(query: &SearchQuery) -> Self {
        Self {
            query: query.free_text.trim().to_string(),
            core_area: query.effective_core_area().map(str::to_string),
        }
    }

    fn suffix(&self) -> String {
        let mut suffix = String::new();
        if !self.query.is_empty() {
            suffix.push_str(&format!(" for \"{}\"", self.query));
        }
        if let Some(area) = &self.core_area {
            suffix.push_str(&format!(" in {}", area));
        }
        suffix
    }
}

/// Summarise how many results were found and which are shown.
///
/// Returns `None` when nothing was found so the caller can blank the count
/// region.
///
/// ```
/// use dataset_search::render::result_count_text;
///
/// assert_eq!(result_count_text(0, 10, 0, None), None);
/// assert_eq!(result_count_text(1, 10, 0, None).as_deref(), Some("Found 1 result"));
/// assert_eq!(
///     result_count_text(25, 10, 10, None).as_deref(),
///     Some("Showing results 11 to 20 out of 25")
/// );
/// ```
pub fn result_count_text(
    total: u64,
    limit: u64,
    current_start: u64,
    description: Option<&CountDescription>,
) -> Option<String> {
    if total == 0 {
        return None;
    }

    let suffix = description.map(CountDescription::suffix).unwrap_or_default();

    if total <= limit {
        let plural = if total > 1 { "s" } else { "" };
        return Some(format!("Found {} result{}{}", total, plural, suffix));
    }

    let from = current_start.saturating_add(1);
    let to = current_start.saturating_add(limit).min(total);
    Some(format!(
        "Showing results {} to {} out of {}{}",
        from, to, total, suffix
    ))
}

/// The count summary as a paragraph, or an empty string when nothing was found.
pub fn render_result_count(
    total: u64,
    limit: u64,
    current_start: u64,
    description: Option<&CountDescription>,
) -> String {
    result_count_text(total, limit, current_start, description)
        .map(|text| format!("<p>{}</p>", html_escape::encode_text(&text)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_results() {
        assert_eq!(result_count_text(0, 10, 0, None), None);
        assert_eq!(render_result_count(0, 10, 0, None), "");
    }

    #[test]
    fn test_single_page_counts() {
        assert_eq!(
            result_count_text(1, 10, 0, None).as_deref(),
            Some("Found 1 result")
        );
        assert_eq!(
            result_count_text(7, 10, 0, None).as_deref(),
            Some("Found 7 results")
        );
        assert_eq!(
            result_count_text(10, 10, 0, None).as_deref(),
            Some("Found 10 results")
        );
    }

    #[test]
    fn test_multi_page_counts() {
        assert_eq!(
            result_count_text(25, 10, 10, None).as_deref(),
            Some("Showing results 11 to 20 out of 25")
        );
        assert_eq!(
            result_count_text(25, 10, 20, None).as_deref(),
            Some("Showing results 21 to 25 out of 25")
        );
    }

    #[test]
    fn test_with_description() {
        let description = CountDescription::from_query(
            &SearchQuery::new("  permafrost ").core_area("Hydrology"),
        );
        assert_eq!(
            result_count_text(3, 10, 0, Some(&description)).as_deref(),
            Some("Found 3 results for \"permafrost\" in Hydrology")
        );

        let any_area = CountDescription::from_query(&SearchQuery::new("").core_area("any"));
        assert_eq!(
            result_count_text(1, 10, 0, Some(&any_area)).as_deref(),
            Some("Found 1 result")
        );
    }

    #[test]
    fn test_render_wraps_paragraph() {
        assert_eq!(
            render_result_count(25, 10, 0, None),
            "<p>Showing results 1 to 10 out of 25</p>"
        );
    }
}
