use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::state::lightbox::LightboxState;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub state: LightboxState,
    pub on_close: Callback<()>,
}

/// Full-screen overlay for a single enlarged image. The overlay is always
/// mounted so the CSS fade has something to transition; the image itself is
/// cleared by the app once the close transition has finished.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let active = props.state.is_open();
    let image = props.state.image();

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    // Only a click on the backdrop itself closes; clicks on the image or the
    // close button must not bubble into a double close.
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let hit_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el.id() == "lightbox")
                .unwrap_or(false);
            if hit_backdrop {
                on_close.emit(());
            }
        })
    };

    html! {
        <div id="lightbox"
            class={classes!("lightbox", active.then(|| "active"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={if active { "false" } else { "true" }}
            onclick={on_backdrop_click}>
            <button id="lightboxClose"
                class="lightbox-close"
                aria-label="Stäng bildvisning"
                onclick={on_close_click}>
                {"✕"}
            </button>
            <img id="lightboxImage"
                src={image.map(|i| i.src.clone()).unwrap_or_default()}
                alt={image.map(|i| i.alt.clone()).unwrap_or_default()} />
        </div>
    }
}
