//! Thin wrapper over `document.cookie`. The string handling is kept pure so
//! it can be tested without a browser.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Finds `name` in a `document.cookie` header. Whole-name match only, so
/// `xcookie_consent` never shadows `cookie_consent`.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Assembles the `document.cookie` assignment string: site-wide path and lax
/// same-site, matching what the consent banner promises.
pub fn build_set_cookie(name: &str, value: &str, expires_utc: &str) -> String {
    format!("{name}={value}; expires={expires_utc}; path=/; SameSite=Lax")
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Reads a cookie by name. `None` when unset or when there is no document.
pub fn get(name: &str) -> Option<String> {
    let header = html_document()?.cookie().ok()?;
    find_cookie(&header, name).map(str::to_owned)
}

/// Persists a cookie with the given lifetime in days.
pub fn set(name: &str, value: &str, days: u32) {
    if let Some(document) = html_document() {
        let expires_at = js_sys::Date::now() + f64::from(days) * MS_PER_DAY;
        let expires = js_sys::Date::new(&JsValue::from_f64(expires_at)).to_utc_string();
        let _ = document.set_cookie(&build_set_cookie(name, value, &String::from(expires)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookies_in_any_position() {
        let header = "theme=dark; cookie_consent=accepted; lang=sv";
        assert_eq!(find_cookie(header, "theme"), Some("dark"));
        assert_eq!(find_cookie(header, "cookie_consent"), Some("accepted"));
        assert_eq!(find_cookie(header, "lang"), Some("sv"));
    }

    #[test]
    fn name_prefixes_do_not_match() {
        let header = "xcookie_consent=declined; cookie_consent=accepted";
        assert_eq!(find_cookie(header, "cookie_consent"), Some("accepted"));
        assert_eq!(find_cookie("xcookie_consent=declined", "cookie_consent"), None);
    }

    #[test]
    fn missing_and_empty_headers() {
        assert_eq!(find_cookie("", "cookie_consent"), None);
        assert_eq!(find_cookie("theme=dark", "cookie_consent"), None);
    }

    #[test]
    fn set_string_carries_path_and_same_site() {
        let cookie = build_set_cookie("cookie_consent", "accepted", "Tue, 01 Sep 2026 00:00:00 GMT");
        assert!(cookie.starts_with("cookie_consent=accepted; "));
        assert!(cookie.contains("expires=Tue, 01 Sep 2026 00:00:00 GMT"));
        assert!(cookie.contains("path=/"));
        assert!(cookie.contains("SameSite=Lax"));
    }
}
