use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::state::lightbox::LightboxImage;
use crate::state::scroll::{self, GalleryDirection};

/// Gallery pieces. The `data-lightbox` value is the full-size source shown in
/// the overlay.
const GALLERY_ITEMS: &[(&str, &str)] = &[
    ("/assets/gallery/skal-stengods.jpg", "Keramikskål i stengods"),
    ("/assets/gallery/vas-bla.jpg", "Vas med blå glasyr"),
    ("/assets/gallery/muggar.jpg", "Handdrejade muggar"),
    ("/assets/gallery/fat-raku.jpg", "Rakubränt fat"),
    ("/assets/gallery/kanna.jpg", "Kanna med askglasyr"),
    ("/assets/gallery/ugn.jpg", "Vedugnen under bränning"),
];

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub on_open: Callback<LightboxImage>,
}

/// Horizontally scrolling image strip. Prev/next shift the strip by a fixed
/// step; clicking a piece opens it in the lightbox.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let strip_ref = use_node_ref();

    let scroll_by = |direction: GalleryDirection| {
        let strip_ref = strip_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(strip) = strip_ref.cast::<Element>() {
                let target = scroll::gallery_target(f64::from(strip.scroll_left()), direction);
                let options = ScrollToOptions::new();
                options.set_left(target);
                options.set_behavior(ScrollBehavior::Smooth);
                strip.scroll_to_with_scroll_to_options(&options);
            }
        })
    };

    let item = |src: &'static str, alt: &'static str| -> Html {
        let onclick = {
            let on_open = props.on_open.clone();
            Callback::from(move |_: MouseEvent| {
                on_open.emit(LightboxImage {
                    src: src.to_owned(),
                    alt: alt.to_owned(),
                });
            })
        };
        html! {
            <button class="gallery-item" data-lightbox={src} onclick={onclick}>
                <img src={src} alt={alt} loading="lazy" />
            </button>
        }
    };

    html! {
        <div class="gallery">
            <button id="galleryPrev"
                class="gallery-nav prev"
                aria-label="Föregående bilder"
                onclick={scroll_by(GalleryDirection::Prev)}>
                {"‹"}
            </button>
            <div id="galleryScroll" class="gallery-scroll">
                { for GALLERY_ITEMS.iter().map(|(src, alt)| item(src, alt)) }
            </div>
            <button id="galleryNext"
                class="gallery-nav next"
                aria-label="Nästa bilder"
                onclick={scroll_by(GalleryDirection::Next)}>
                {"›"}
            </button>
        </div>
    }
}
