use yew::prelude::*;

use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::config::Features;
use crate::state::lightbox::LightboxImage;
use crate::state::page::Page;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub active: bool,
    pub features: Features,
    pub on_open_lightbox: Callback<LightboxImage>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <section id={Page::Home.section_id()}
            class={classes!("page", props.active.then(|| "active"))}>
            <Hero video={props.features.video_fallback} />

            <p class="intro">
                {"Ateljé Ljung är en keramikateljé i Malmö. Vi drejar bruksgods \
                  i stengods och porslin, håller kurser och tar emot \
                  beställningar för både hem och restaurang."}
            </p>

            {
                if props.features.gallery {
                    html! {
                        <>
                            <h2>{"Ur verkstaden"}</h2>
                            <Gallery on_open={props.on_open_lightbox.clone()} />
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
