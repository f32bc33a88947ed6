use yew::prelude::*;

use crate::state::page::Page;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub active: bool,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    html! {
        <section id={Page::Contact.section_id()}
            class={classes!("page", props.active.then(|| "active"))}>
            <h1>{"Kontakt"}</h1>
            <address>
                <p>{"Ateljé Ljung"}</p>
                <p>{"Smedjegatan 4, 214 22 Malmö"}</p>
                <p>
                    <a href="mailto:hej@ateljeljung.se">{"hej@ateljeljung.se"}</a>
                </p>
            </address>
            <p>
                {"Ateljébutiken är öppen lördagar 11–15 eller enligt \
                  överenskommelse."}
            </p>
        </section>
    }
}
