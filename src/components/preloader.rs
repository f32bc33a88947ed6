use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Minimum time the preloader stays on screen, so fast loads do not flash.
pub const MIN_DISPLAY_MS: f64 = 1500.0;

fn remaining_delay(elapsed_ms: f64) -> u32 {
    (MIN_DISPLAY_MS - elapsed_ms).max(0.0) as u32
}

/// Full-screen overlay shown until the window has loaded and the minimum
/// display time has passed.
#[function_component(Preloader)]
pub fn preloader() -> Html {
    let hidden = use_state(|| false);

    {
        let hidden = hidden.clone();
        use_effect_with_deps(
            move |_| {
                let started = js_sys::Date::now();
                let schedule_hide = move || {
                    let hidden = hidden.clone();
                    let delay = remaining_delay(js_sys::Date::now() - started);
                    Timeout::new(delay, move || hidden.set(true)).forget();
                };

                let mut listener = None;
                if let Some(window) = web_sys::window() {
                    // The window load event may already be behind us by the
                    // time the module runs.
                    let complete = window
                        .document()
                        .map(|d| d.ready_state() == "complete")
                        .unwrap_or(false);
                    if complete {
                        schedule_hide();
                    } else {
                        let callback =
                            Closure::wrap(Box::new(schedule_hide) as Box<dyn FnMut()>);
                        let _ = window.add_event_listener_with_callback(
                            "load",
                            callback.as_ref().unchecked_ref(),
                        );
                        listener = Some((window, callback));
                    }
                }

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "load",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div id="preloader"
            class={classes!("preloader", (*hidden).then(|| "hidden"))}
            aria-hidden="true">
            <div class="preloader-spinner"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_loads_wait_out_the_minimum() {
        assert_eq!(remaining_delay(0.0), 1500);
        assert_eq!(remaining_delay(400.0), 1100);
    }

    #[test]
    fn slow_loads_hide_immediately() {
        assert_eq!(remaining_delay(1500.0), 0);
        assert_eq!(remaining_delay(4000.0), 0);
    }
}
