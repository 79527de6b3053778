//! Browser-side checks for the search → listings URL: percent-encoding goes
//! through the host's encodeURIComponent, so these run under wasm-bindgen-test.

#![cfg(target_arch = "wasm32")]

use provision_landing::search::listings_href;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn trims_before_encoding() {
    assert_eq!(listings_href("  Makutano  "), "/properties?search=Makutano");
}

#[wasm_bindgen_test]
fn encodes_spaces() {
    assert_eq!(
        listings_href("5 acre plot"),
        "/properties?search=5%20acre%20plot"
    );
}

#[wasm_bindgen_test]
fn reserved_characters_round_trip() {
    let input = "5 acre & commercial";
    let href = listings_href(input);
    let encoded = href.strip_prefix("/properties?search=").unwrap();

    // The encoded form must carry no raw reserved characters and decode back
    // to the exact trimmed input.
    assert!(!encoded.contains('&'));
    assert!(!encoded.contains(' '));
    let decoded = String::from(js_sys::decode_uri_component(encoded).unwrap());
    assert_eq!(decoded, input);
}
