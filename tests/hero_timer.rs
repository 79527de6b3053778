//! Browser-side checks for the hero auto-advance timer: one tick per
//! interval while the handle lives, none after it is cleared.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use provision_landing::carousel::Rotator;
use provision_landing::sections::start_auto_advance;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let _ = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[wasm_bindgen_test]
async fn ticks_once_per_interval_then_stops_when_cleared() {
    let (rotator, set_rotator) = signal(Rotator::new(7));
    let handle = start_auto_advance(set_rotator).expect("interval should start in a browser");

    // Exactly one automatic advance per 6000 ms elapsed.
    sleep(6_500).await;
    assert_eq!(rotator.get_untracked().current(), 1);

    // After the handle is cleared, no further automatic advances happen
    // no matter how much time passes.
    handle.clear();
    sleep(6_500).await;
    assert_eq!(rotator.get_untracked().current(), 1);
}
