//! Window-level helpers shared by the app shell and its components. Every
//! lookup is optional; a missing window or history simply does nothing.

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::state::page::Page;

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Pushes `#<page>` onto the session history without reloading.
pub fn push_hash(page: Page) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&page.hash()));
        }
    }
}

/// Current location hash, including the leading `#` (empty when absent).
pub fn location_hash() -> Option<String> {
    web_sys::window().and_then(|w| w.location().hash().ok())
}
