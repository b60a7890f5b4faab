//! Link target policy
//!
//! Anchors for absolute (http-prefixed) URLs open in a new browsing context
//! with `rel="noreferrer"`; everything else (fragment jumps, same-site
//! paths) navigates in place.

/// Navigation behavior for a rendered anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Open in a new browsing context (`target="_blank" rel="noreferrer"`)
    NewContext,
    /// Navigate the current document (in-page anchors, relative paths)
    InPlace,
}

impl LinkTarget {
    /// Classify an href
    pub fn for_href(href: &str) -> Self {
        if href.starts_with("http") {
            LinkTarget::NewContext
        } else {
            LinkTarget::InPlace
        }
    }

    /// Whether anchors with this target carry new-context attributes
    pub fn opens_new_context(&self) -> bool {
        matches!(self, LinkTarget::NewContext)
    }
}
