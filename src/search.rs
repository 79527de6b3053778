//! Listings-route URL construction for the hero search box.
//!
//! Empty or whitespace-only input degrades to the unfiltered listings page
//! rather than failing; anything else lands in a percent-encoded `search`
//! query parameter.

use js_sys::encode_uri_component;

/// Route the search box and the "browse all" links both point at.
pub const LISTINGS_PATH: &str = "/properties";

/// Query parameter key carrying the search term.
pub const SEARCH_PARAM: &str = "search";

/// The effective search term: trimmed input, or `None` when nothing is left
/// after trimming.
pub fn search_term(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Href for the listings route, with the trimmed term attached as a
/// percent-encoded `search` parameter when present.
pub fn listings_href(raw: &str) -> String {
    match search_term(raw) {
        Some(term) => format!(
            "{LISTINGS_PATH}?{SEARCH_PARAM}={}",
            String::from(encode_uri_component(term))
        ),
        None => LISTINGS_PATH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Encoding itself goes through the browser's encodeURIComponent, so the
    // non-empty path of `listings_href` is covered in tests/search_encoding.rs
    // under wasm-bindgen-test.

    #[test]
    fn term_is_trimmed() {
        assert_eq!(search_term("  Makutano  "), Some("Makutano"));
        assert_eq!(search_term("Thika"), Some("Thika"));
    }

    #[test]
    fn empty_input_has_no_term() {
        assert_eq!(search_term(""), None);
        assert_eq!(search_term("   "), None);
        assert_eq!(search_term("\t\n"), None);
    }

    #[test]
    fn empty_input_routes_to_bare_listings() {
        assert_eq!(listings_href(""), "/properties");
        assert_eq!(listings_href("   "), "/properties");
    }
}
