//! Query string reading and rewriting for page URLs.
//!
//! These work on raw URL strings rather than parsed [`url::Url`] values so
//! that relative and partially-formed page URLs are handled the same way a
//! browser location string would be.

use regex::{Captures, RegexBuilder};

/// Read a query parameter from a URL.
///
/// Returns `None` when the parameter is absent and `Some("")` when it is
/// present without a value. Values are percent-decoded with `+` read as a
/// space; invalid UTF-8 is replaced rather than rejected.
///
/// # Examples
///
/// ```
/// use dataset_search::utils::get_parameter_by_name;
///
/// let url = "https://example.org/search?q=hello%20world&start=10";
/// assert_eq!(get_parameter_by_name("q", url).as_deref(), Some("hello world"));
/// assert_eq!(get_parameter_by_name("coreArea", url), None);
/// ```
pub fn get_parameter_by_name(name: &str, url: &str) -> Option<String> {
    let pattern = format!(r"[?&]{}(=([^&#]*)|&|#|$)", regex::escape(name));
    let re = RegexBuilder::new(&pattern).build().ok()?;
    let caps = re.captures(url)?;

    let raw = match caps.get(2) {
        Some(value) if !value.as_str().is_empty() => value.as_str(),
        _ => return Some(String::new()),
    };

    Some(decode_component(raw))
}

/// Set `key=value` in a URL, replacing an existing occurrence in place.
///
/// The key is matched case-insensitively. When absent the pair is appended
/// with `?` or `&` as appropriate. Any `#fragment` stays at the end. The value
/// is inserted verbatim; encoding it is the caller's job.
///
/// # Examples
///
/// ```
/// use dataset_search::utils::update_query_string_parameter;
///
/// assert_eq!(update_query_string_parameter("/s", "start", "10"), "/s?start=10");
/// assert_eq!(
///     update_query_string_parameter("/s?q=a&start=0", "start", "10"),
///     "/s?q=a&start=10"
/// );
/// ```
pub fn update_query_string_parameter(uri: &str, key: &str, value: &str) -> String {
    let (base, fragment) = match uri.find('#') {
        Some(idx) => uri.split_at(idx),
        None => (uri, ""),
    };

    let pattern = format!(r"([?&]){}=[^&]*(&|$)", regex::escape(key));
    let existing = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()
        .filter(|re| re.is_match(base));

    match existing {
        Some(re) => {
            let updated = re.replace(base, |caps: &Captures| {
                format!("{}{}={}{}", &caps[1], key, value, &caps[2])
            });
            format!("{}{}", updated, fragment)
        }
        None => append_parameter(base, key, value, fragment),
    }
}

fn append_parameter(base: &str, key: &str, value: &str, fragment: &str) -> String {
    format!(
        "{}{}{}={}{}",
        base,
        determine_separator(base),
        key,
        value,
        fragment
    )
}

fn determine_separator(url: &str) -> char {
    if url.contains('?') {
        '&'
    } else {
        '?'
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// The URL of the page currently shown.
///
/// Wraps the location string so callers can read parameters without passing
/// the URL around explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    href: String,
}

impl Location {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Read a query parameter of this location.
    pub fn param(&self, name: &str) -> Option<String> {
        get_parameter_by_name(name, &self.href)
    }

    /// This location with `key` set to `value`.
    pub fn with_param(&self, key: &str, value: &str) -> Self {
        Self::new(update_query_string_parameter(&self.href, key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_percent_and_plus() {
        assert_eq!(
            get_parameter_by_name("q", "http://x/?q=hello%20world").as_deref(),
            Some("hello world")
        );
        assert_eq!(
            get_parameter_by_name("q", "http://x/?q=soil+temperature").as_deref(),
            Some("soil temperature")
        );
        assert_eq!(
            get_parameter_by_name("q", "http://x/?q=caf%C3%A9").as_deref(),
            Some("café")
        );
    }

    #[test]
    fn test_present_without_value() {
        assert_eq!(get_parameter_by_name("q", "/s?q").as_deref(), Some(""));
        assert_eq!(get_parameter_by_name("q", "/s?q=").as_deref(), Some(""));
        assert_eq!(get_parameter_by_name("q", "/s?q&start=1").as_deref(), Some(""));
        assert_eq!(get_parameter_by_name("q", "/s?q#top").as_deref(), Some(""));
    }

    #[test]
    fn test_absent_parameter() {
        assert_eq!(get_parameter_by_name("q", "/s"), None);
        assert_eq!(get_parameter_by_name("q", "/s?query=x"), None);
        assert_eq!(get_parameter_by_name("start", "/s?restart=5"), None);
    }

    #[test]
    fn test_stops_at_fragment() {
        assert_eq!(
            get_parameter_by_name("start", "/s?start=20#results").as_deref(),
            Some("20")
        );
    }

    #[test]
    fn test_name_with_metacharacters() {
        assert_eq!(
            get_parameter_by_name("a[]", "/s?a[]=1&b=2").as_deref(),
            Some("1")
        );
        assert_eq!(get_parameter_by_name("a.b", "/s?axb=1"), None);
    }

    #[test]
    fn test_malformed_percent_sequence_is_tolerated() {
        assert_eq!(
            get_parameter_by_name("q", "/s?q=100%").as_deref(),
            Some("100%")
        );
    }

    #[test]
    fn test_update_appends() {
        assert_eq!(
            update_query_string_parameter("http://x/search", "start", "10"),
            "http://x/search?start=10"
        );
        assert_eq!(
            update_query_string_parameter("http://x/search?q=soil", "start", "10"),
            "http://x/search?q=soil&start=10"
        );
    }

    #[test]
    fn test_update_replaces_in_place() {
        assert_eq!(
            update_query_string_parameter("/s?start=0&q=soil", "start", "20"),
            "/s?start=20&q=soil"
        );
        assert_eq!(
            update_query_string_parameter("/s?q=soil&START=0", "start", "20"),
            "/s?q=soil&start=20"
        );
    }

    #[test]
    fn test_update_keeps_fragment() {
        assert_eq!(
            update_query_string_parameter("/s?q=a#top", "start", "10"),
            "/s?q=a&start=10#top"
        );
        assert_eq!(
            update_query_string_parameter("/s?start=0#top", "start", "10"),
            "/s?start=10#top"
        );
    }

    #[test]
    fn test_update_is_idempotent() {
        for url in ["/s", "/s?q=a", "/s?start=5&q=a", "/s?q=a#f"] {
            let once = update_query_string_parameter(url, "start", "30");
            let twice = update_query_string_parameter(&once, "start", "30");
            assert_eq!(once, twice, "not idempotent for {}", url);
        }
    }

    #[test]
    fn test_update_value_with_dollar_is_literal() {
        assert_eq!(
            update_query_string_parameter("/s?k=1", "k", "$1"),
            "/s?k=$1"
        );
    }

    #[test]
    fn test_update_key_with_metacharacters() {
        assert_eq!(
            update_query_string_parameter("/s?a[]=1&b=2", "a[]", "3"),
            "/s?a[]=3&b=2"
        );
        assert_eq!(
            update_query_string_parameter("/s?axb=1", "a.b", "2"),
            "/s?axb=1&a.b=2"
        );
    }

    #[test]
    fn test_location() {
        let location = Location::new("/search?q=ice&start=10");
        assert_eq!(location.param("q").as_deref(), Some("ice"));
        assert_eq!(
            location.with_param("start", "20").href(),
            "/search?q=ice&start=20"
        );
    }
}
