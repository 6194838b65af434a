#![forbid(unsafe_code)]

//! In-page anchor links.

/// Selector matching links that scroll smoothly instead of jumping.
pub const IN_PAGE_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

/// Selector for the scroll target of an in-page `href`.
///
/// Returns `None` for hrefs that do not start with `#` and for a bare `#`,
/// which has no target element.
#[must_use]
pub fn scroll_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() { None } else { Some(href) }
}
