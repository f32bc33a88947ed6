//! Browser-side checks for the DOM glue. Run with `wasm-pack test --chrome`
//! or `cargo test --target wasm32-unknown-unknown` under a wasm test runner;
//! on native targets this file compiles to nothing.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use atelje_frontend::dom::{analytics, cookies};
use atelje_frontend::state::consent::Consent;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn cookie_round_trip() {
    cookies::set("atelje_test", "accepted", 1);
    assert_eq!(cookies::get("atelje_test").as_deref(), Some("accepted"));
    assert_eq!(
        Consent::from_cookie(cookies::get("atelje_test").as_deref()),
        Consent::Accepted
    );
}

#[wasm_bindgen_test]
fn missing_cookie_reads_as_unset() {
    assert_eq!(cookies::get("atelje_never_set"), None);
    assert_eq!(Consent::from_cookie(None), Consent::Unset);
}

#[wasm_bindgen_test]
fn analytics_is_a_noop_without_a_measurement_id() {
    let document = web_sys::window().unwrap().document().unwrap();
    let head = document.head().unwrap();
    let before = head.child_element_count();

    analytics::load();

    assert_eq!(head.child_element_count(), before);
}
