//! Page link model.

use serde::{Deserialize, Serialize};

/// A single page link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Link text (a page number, or an arrow entity for navigation links)
    pub label: String,

    /// Result offset the link navigates to
    pub target_offset: u64,

    /// Whether the link points at the page currently shown
    pub is_active: bool,

    /// First/last navigation link rather than a numbered page
    pub is_navigation: bool,
}

impl PageLink {
    /// Create a numbered page link
    pub fn numbered(page: u64, target_offset: u64, current_start: u64) -> Self {
        Self {
            label: page.to_string(),
            target_offset,
            is_active: target_offset == current_start,
            is_navigation: false,
        }
    }

    /// Create a first/last navigation link
    pub fn navigation(label: &str, target_offset: u64, current_start: u64) -> Self {
        Self {
            label: label.to_string(),
            target_offset,
            is_active: target_offset == current_start,
            is_navigation: true,
        }
    }
}

/// Ordered page links: first, the numbered window, last
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinkSet {
    pub links: Vec<PageLink>,
}

impl PageLinkSet {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Numbered links only, in order.
    pub fn numbered(&self) -> impl Iterator<Item = &PageLink> {
        self.links.iter().filter(|link| !link.is_navigation)
    }

    /// The numbered link for the current page, if it is in the window.
    pub fn active(&self) -> Option<&PageLink> {
        self.numbered().find(|link| link.is_active)
    }
}
