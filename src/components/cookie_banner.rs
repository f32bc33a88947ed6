use gloo_timers::callback::Timeout;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom::{analytics, cookies};
use crate::state::consent::{
    self, Consent, LoadAction, BANNER_DELAY_MS, CONSENT_COOKIE, CONSENT_TTL_DAYS,
};

/// Consent banner. First visits get the banner after a short delay; a stored
/// choice is honored silently and never re-prompted.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let stored = Consent::from_cookie(cookies::get(CONSENT_COOKIE).as_deref());
                let pending = match consent::on_load(stored) {
                    LoadAction::PromptAfterDelay => Some(Timeout::new(BANNER_DELAY_MS, move || {
                        visible.set(true);
                    })),
                    LoadAction::LoadAnalytics => {
                        analytics::load();
                        None
                    }
                    LoadAction::Nothing => None,
                };

                // Dropping the handle on unmount cancels a prompt that has
                // not fired yet.
                move || drop(pending)
            },
            (),
        );
    }

    let decide = |choice: Consent| {
        let visible = visible.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(value) = choice.cookie_value() {
                cookies::set(CONSENT_COOKIE, value, CONSENT_TTL_DAYS);
            }
            visible.set(false);
            info!("cookie consent: {value}", value = choice.cookie_value().unwrap_or("unset"));
            if choice == Consent::Accepted {
                analytics::load();
            }
        })
    };

    html! {
        <div id="cookieBanner"
            class={classes!("cookie-banner", (*visible).then(|| "visible"))}
            role="dialog"
            aria-live="polite"
            aria-label="Samtycke till kakor">
            <p>
                {"Vi använder kakor för att förstå hur webbplatsen används. \
                  Inget laddas förrän du godkänner."}
            </p>
            <div class="cookie-actions">
                <button id="cookieAccept" class="cookie-accept" onclick={decide(Consent::Accepted)}>
                    {"Godkänn"}
                </button>
                <button id="cookieDecline" class="cookie-decline" onclick={decide(Consent::Declined)}>
                    {"Avböj"}
                </button>
            </div>
        </div>
    }
}
