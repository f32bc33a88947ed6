//! Google tag injection, gated on visitor consent and on a configured
//! measurement id. Without an id this whole module is a no-op.

use log::info;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::config;

/// Appends the gtag loader and its inline bootstrap to `<head>`. Called once
/// consent is accepted (at load for returning visitors, on click otherwise).
pub fn load() {
    if !config::analytics_configured() {
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };
    let id = config::ANALYTICS_MEASUREMENT_ID;

    if let Ok(element) = document.create_element("script") {
        if let Ok(script) = element.dyn_into::<HtmlScriptElement>() {
            script.set_async(true);
            script.set_src(&format!("https://www.googletagmanager.com/gtag/js?id={id}"));
            let _ = head.append_child(&script);
        }
    }

    if let Ok(bootstrap) = document.create_element("script") {
        bootstrap.set_text_content(Some(&format!(
            "window.dataLayer=window.dataLayer||[];\
             function gtag(){{dataLayer.push(arguments);}}\
             gtag('js',new Date());\
             gtag('config','{id}',{{'anonymize_ip':true}});"
        )));
        let _ = head.append_child(&bootstrap);
    }

    info!("analytics tag injected");
}
