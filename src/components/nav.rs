use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::menu::MenuState;
use crate::state::page::Page;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu: MenuState,
    pub current: Page,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<Page>,
    /// Owned by the app so its document-level listeners can check whether a
    /// click landed on the trigger or inside the panel.
    pub button_ref: NodeRef,
    pub panel_ref: NodeRef,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let link = |page: Page| -> Html {
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(page);
            })
        };
        html! {
            <a href={page.hash()}
                data-page={page.slug()}
                class={classes!("nav-link", (page == props.current).then(|| "active"))}
                onclick={onclick}>
                { page.title() }
            </a>
        }
    };

    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
        })
    };

    html! {
        <header class="site-header">
            <nav class="nav" aria-label="Huvudmeny">
                <a class="nav-logo" href="#home" onclick={go_home}>
                    {"Ateljé Ljung"}
                </a>

                <button id="mobileMenuBtn"
                    ref={props.button_ref.clone()}
                    class={classes!("menu-btn", props.menu.is_open().then(|| "active"))}
                    aria-expanded={props.menu.aria_expanded()}
                    aria-label={props.menu.aria_label()}
                    aria-controls="navMobile"
                    onclick={toggle}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div id="navMobile"
                    ref={props.panel_ref.clone()}
                    class={classes!("nav-mobile", props.menu.is_open().then(|| "active"))}>
                    { for Page::ALL.iter().copied().map(link) }
                </div>
            </nav>
        </header>
    }
}
