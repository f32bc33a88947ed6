use yew::prelude::*;

use crate::state::page::Page;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub active: bool,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id={Page::About.section_id()}
            class={classes!("page", props.active.then(|| "active"))}>
            <h1>{"Om oss"}</h1>
            <p>
                {"Ateljén startades 2012 i en gammal smedja på Möllevången. \
                  Idag är vi tre keramiker som delar på ugnar, drejskivor och \
                  ett gemensamt glasyrkök."}
            </p>
            <p>
                {"Allt gods bränns i egen regi, det mesta i elugn och en del i \
                  vedugnen på gården. Vi arbetar med lokala leror så långt det \
                  går."}
            </p>
        </section>
    }
}
