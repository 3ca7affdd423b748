use std::fmt;

use crate::shared::constants::PATH_SEPARATOR;

/// Display state of a sidebar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Active,
    Inactive,
}

impl NavState {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavState::Active => "active",
            NavState::Inactive => "inactive",
        }
    }
}

/// Text after the final `/` of a URL.
/// Example: "https://site/admin/About" -> "About", "https://site/admin/" -> ""
/// Query strings and fragments are kept as-is.
pub fn last_segment(url: &str) -> &str {
    match url.rfind(PATH_SEPARATOR) {
        Some(idx) => &url[idx + PATH_SEPARATOR.len_utf8()..],
        None => url,
    }
}

/// Whitespace as `String.prototype.trim` sees it: ECMAScript WhiteSpace
/// (including U+FEFF and the Zs category) plus LineTerminator. U+0085 is
/// not part of it.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Normalized identifier of a sidebar entry (last segment, trimmed, lowercased)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinkId(String);

impl LinkId {
    pub fn from_href(href: &str) -> Self {
        LinkId(last_segment(href).trim_matches(is_js_whitespace).to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the current page.
///
/// Unlike `LinkId` this is the raw last segment: no trimming or lowercasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageId(String);

impl PageId {
    pub fn from_location(href: &str) -> Self {
        PageId(last_segment(href).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, link: &LinkId) -> bool {
        self.0 == link.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("https://example.com/admin/About"), "About");
        assert_eq!(last_segment("https://example.com/admin/"), "");
        assert_eq!(last_segment("about"), "about");
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn test_last_segment_keeps_query() {
        assert_eq!(last_segment("/admin/reservations?page=2"), "reservations?page=2");
    }

    #[test]
    fn test_link_id_normalizes() {
        assert_eq!(LinkId::from_href("https://example.com/Home").as_str(), "home");
        assert_eq!(LinkId::from_href("/admin/  Contact ").as_str(), "contact");
    }

    #[test]
    fn test_link_id_trims_like_browser() {
        assert_eq!(LinkId::from_href("/admin/home\u{FEFF}").as_str(), "home");
        assert_eq!(LinkId::from_href("/admin/\u{3000}home\u{2028}").as_str(), "home");
        assert_eq!(LinkId::from_href("/admin/home\u{0085}").as_str(), "home\u{0085}");
    }

    #[test]
    fn test_page_id_is_verbatim() {
        assert_eq!(PageId::from_location("https://example.com/About").as_str(), "About");
        assert_eq!(PageId::from_location("https://example.com/about ").as_str(), "about ");
    }

    #[test]
    fn test_page_id_matching_is_case_sensitive() {
        let link = LinkId::from_href("https://example.com/About");
        assert!(PageId::from_location("https://example.com/about").matches(&link));
        assert!(!PageId::from_location("https://example.com/About").matches(&link));
    }
}
