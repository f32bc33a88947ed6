use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom::browser;
use crate::state::scroll;

/// Floating button that appears past the scroll threshold and smooth-scrolls
/// back to the top. The scroll handler is not debounced; it only flips a
/// boolean.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let win = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let y = win.scroll_y().unwrap_or(0.0);
                        visible.set(scroll::back_to_top_visible(y));
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        browser::scroll_to_top();
    });

    html! {
        <button id="backToTop"
            class={classes!("back-to-top", (*visible).then(|| "visible"))}
            aria-label="Till toppen av sidan"
            onclick={onclick}>
            {"↑"}
        </button>
    }
}
