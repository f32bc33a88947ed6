use log::info;
use web_sys::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// When false the hero skips the video and shows the still image only.
    #[prop_or(true)]
    pub video: bool,
}

/// Hero banner: background video with a still-image fallback. A failed load
/// switches to the image for the rest of the session; there is no retry.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let video_failed = use_state(|| false);

    let on_error = {
        let video_failed = video_failed.clone();
        Callback::from(move |_: Event| {
            info!("hero video failed to load, showing fallback image");
            video_failed.set(true);
        })
    };

    let show_video = props.video && !*video_failed;
    let show_fallback = !show_video;

    html! {
        <div class="hero">
            {
                if props.video {
                    html! {
                        <video id="heroVideo"
                            class={classes!("hero-video", (!show_video).then(|| "hidden"))}
                            autoplay=true
                            muted=true
                            playsinline=true
                            preload="metadata"
                            onerror={on_error.clone()}>
                            <source src="/assets/hero.mp4" type="video/mp4" onerror={on_error.clone()} />
                        </video>
                    }
                } else {
                    html! {}
                }
            }
            <img id="heroFallbackImage"
                class={classes!("hero-fallback", show_fallback.then(|| "visible"))}
                src="/assets/hero-fallback.jpg"
                alt="Drejskiva i arbete i ateljén" />
            <h1 class="hero-title">{"Keramik, formad för hand"}</h1>
        </div>
    }
}
