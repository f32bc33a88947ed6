use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::cookie_banner::CookieBanner;
use crate::components::lightbox::Lightbox;
use crate::components::nav::Nav;
use crate::components::preloader::Preloader;
use crate::config::Features;
use crate::dom::browser;
use crate::pages::about::About;
use crate::pages::contact::Contact;
use crate::pages::home::Home;
use crate::state::lightbox::{LightboxAction, LightboxImage, LightboxState, CLEAR_DELAY_MS};
use crate::state::menu::MenuState;
use crate::state::page::Page;
use crate::state::router::{self, NavEffect, Request};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub features: Features,
}

fn apply_nav_effects(
    effects: Vec<NavEffect>,
    page: &UseStateSetter<Page>,
    menu: &UseStateSetter<MenuState>,
) {
    for effect in effects {
        match effect {
            NavEffect::ShowPage(target) => page.set(target),
            NavEffect::CloseMenu => menu.set(MenuState::closed()),
            NavEffect::ScrollToTop => browser::scroll_to_top(),
            NavEffect::PushHistory(target) => browser::push_hash(target),
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let features = props.features;
    let current_page = use_state(|| Page::Home);
    let menu = use_state(MenuState::default);
    let lightbox = use_reducer(LightboxState::default);
    // Pending clear of the lightbox image. Replacing or dropping the handle
    // cancels the old timer; a timer that fires anyway dispatches
    // `FinishClose`, which the reducer ignores unless still closing.
    let clear_timer = use_mut_ref(|| None::<Timeout>);
    let menu_button_ref = use_node_ref();
    let nav_panel_ref = use_node_ref();

    // Initial hash and back/forward handling.
    {
        let page_setter = current_page.setter();
        let menu_setter = menu.setter();
        use_effect_with_deps(
            move |_| {
                let mut listener = None;
                if features.hash_router {
                    // A valid hash at load navigates exactly like a link
                    // click, redundant history push included.
                    if let Some(target) = browser::location_hash()
                        .as_deref()
                        .and_then(Page::from_hash)
                    {
                        let (_, effects) = router::navigate(Page::Home, Request::Activate(target));
                        apply_nav_effects(effects, &page_setter, &menu_setter);
                    }

                    if let Some(window) = web_sys::window() {
                        let callback = Closure::wrap(Box::new(move || {
                            let hash = browser::location_hash().unwrap_or_default();
                            if let Some(target) = router::pop_target(&hash) {
                                info!("history navigation to {target}");
                                let (_, effects) =
                                    router::navigate(target, Request::PopState(target));
                                apply_nav_effects(effects, &page_setter, &menu_setter);
                            }
                        }) as Box<dyn FnMut()>);
                        let _ = window.add_event_listener_with_callback(
                            "popstate",
                            callback.as_ref().unchecked_ref(),
                        );
                        listener = Some((window, callback));
                    }
                }

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "popstate",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_navigate = {
        let current_page = current_page.clone();
        let menu = menu.clone();
        Callback::from(move |target: Page| {
            if features.hash_router {
                let (_, effects) = router::navigate(*current_page, Request::Activate(target));
                info!("navigate: {current} -> {target}", current = *current_page);
                apply_nav_effects(effects, &current_page.setter(), &menu.setter());
            } else {
                menu.set(MenuState::closed());
            }
        })
    };

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(menu.toggled()))
    };

    let open_lightbox = {
        let lightbox = lightbox.clone();
        let clear_timer = clear_timer.clone();
        Callback::from(move |image: LightboxImage| {
            if !features.lightbox {
                return;
            }
            // A reopen cancels any clear still pending from the last close.
            clear_timer.borrow_mut().take();
            lightbox.dispatch(LightboxAction::Open(image));
        })
    };

    let close_lightbox = {
        let lightbox = lightbox.clone();
        let clear_timer = clear_timer.clone();
        Callback::from(move |_: ()| {
            lightbox.dispatch(LightboxAction::BeginClose);
            let dispatcher = lightbox.dispatcher();
            *clear_timer.borrow_mut() = Some(Timeout::new(CLEAR_DELAY_MS, move || {
                dispatcher.dispatch(LightboxAction::FinishClose);
            }));
        })
    };

    // Escape closes the lightbox first, then the menu (with focus returned
    // to the trigger).
    {
        let lightbox_open = lightbox.is_open();
        let menu_open = menu.is_open();
        let close_lightbox = close_lightbox.clone();
        let menu_setter = menu.setter();
        let menu_button_ref = menu_button_ref.clone();
        use_effect_with_deps(
            move |&(lightbox_open, menu_open)| {
                let listener = web_sys::window().and_then(|w| w.document()).map(|document| {
                    let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                        if event.key() != "Escape" {
                            return;
                        }
                        if lightbox_open {
                            close_lightbox.emit(());
                        } else if menu_open {
                            menu_setter.set(MenuState::closed());
                            if let Some(button) = menu_button_ref.cast::<HtmlElement>() {
                                let _ = button.focus();
                            }
                        }
                    })
                        as Box<dyn FnMut(KeyboardEvent)>);
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    );
                    (document, callback)
                });

                move || {
                    if let Some((document, callback)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (lightbox_open, menu_open),
        );
    }

    // Clicks outside the open menu and its trigger close it.
    {
        let menu_open = menu.is_open();
        let menu_setter = menu.setter();
        let panel_ref = nav_panel_ref.clone();
        let button_ref = menu_button_ref.clone();
        use_effect_with_deps(
            move |&menu_open| {
                let listener = menu_open
                    .then(web_sys::window)
                    .flatten()
                    .and_then(|w| w.document())
                    .map(|document| {
                        let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                            let target = event
                                .target()
                                .and_then(|t| t.dyn_into::<Node>().ok());
                            let Some(target) = target else { return };
                            let in_panel = panel_ref
                                .cast::<Node>()
                                .map(|n| n.contains(Some(&target)))
                                .unwrap_or(false);
                            let on_button = button_ref
                                .cast::<Node>()
                                .map(|n| n.contains(Some(&target)))
                                .unwrap_or(false);
                            if !in_panel && !on_button {
                                menu_setter.set(MenuState::closed());
                            }
                        })
                            as Box<dyn FnMut(MouseEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        );
                        (document, callback)
                    });

                move || {
                    if let Some((document, callback)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            menu_open,
        );
    }

    // Mirror the lightbox state onto <body> to suppress background scroll.
    {
        let lightbox_open = lightbox.is_open();
        use_effect_with_deps(
            move |&open| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let classes = body.class_list();
                    let _ = if open {
                        classes.add_1("lightbox-open")
                    } else {
                        classes.remove_1("lightbox-open")
                    };
                }
                || ()
            },
            lightbox_open,
        );
    }

    html! {
        <>
            <Preloader />

            {
                if features.menu {
                    html! {
                        <Nav menu={*menu}
                            current={*current_page}
                            on_toggle={on_toggle_menu}
                            on_navigate={on_navigate}
                            button_ref={menu_button_ref.clone()}
                            panel_ref={nav_panel_ref.clone()} />
                    }
                } else {
                    html! {}
                }
            }

            <main class="site-main">
                <Home active={*current_page == Page::Home}
                    features={features}
                    on_open_lightbox={open_lightbox} />
                <About active={*current_page == Page::About} />
                <Contact active={*current_page == Page::Contact} />
            </main>

            { if features.back_to_top { html! { <BackToTop /> } } else { html! {} } }

            {
                if features.lightbox {
                    html! { <Lightbox state={(*lightbox).clone()} on_close={close_lightbox} /> }
                } else {
                    html! {}
                }
            }

            { if features.cookie_banner { html! { <CookieBanner /> } } else { html! {} } }

            <footer class="site-footer">
                <p>{"© 2025 Ateljé Ljung · Smedjegatan 4, Malmö"}</p>
            </footer>
        </>
    }
}
