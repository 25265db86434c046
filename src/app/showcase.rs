use leptos::{html, prelude::*};

use super::section::Section;
use crate::catalog::VideoCardModel;
use crate::scroll::{ScrollCentering, ScrollDimensions};

const PLAYER_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

#[component]
pub fn VideoCard(embed_src: String, title: String) -> impl IntoView {
    view! {
        <div class="relative hover:z-10 flex-shrink-0 w-64 sm:w-72 bg-gray-800/50 rounded-lg overflow-hidden shadow-lg border border-gray-700/50 hover:border-amber-400/50 transition-all duration-300 transform hover:scale-105 hover:shadow-amber-400/20">
            <div class="aspect-[9/16] w-full bg-black">
                <iframe
                    class="w-full h-full border-0"
                    src=embed_src
                    title=title.clone()
                    allow=PLAYER_PERMISSIONS
                    allowfullscreen=true
                ></iframe>
            </div>
            <div class="p-4">
                <h3 class="font-bold text-white text-lg truncate">{title}</h3>
            </div>
        </div>
    }
}

/// Horizontally scrolling strip of video cards. Starts scrolled to the middle.
#[component]
pub fn Showcase(cards: Vec<VideoCardModel>) -> impl IntoView {
    let scroll_ref = NodeRef::<html::Div>::new();
    let centering = StoredValue::new(ScrollCentering::new());

    // Effects run after mount, so the strip has been laid out by now
    Effect::new(move |_| {
        let Some(el) = scroll_ref.get() else {
            return;
        };
        let dims = ScrollDimensions {
            scroll_width: el.scroll_width(),
            client_width: el.client_width(),
        };
        if let Some(offset) = centering.try_update_value(|c| c.initialize(dims)).flatten() {
            log::debug!("centering showcase at {offset}px ({dims:?})");
            el.set_scroll_left(offset);
        }
    });

    view! {
        <Section id="work" class="bg-black/20 text-center">
            <h2 class="text-4xl sm:text-5xl font-black text-white uppercase tracking-tighter">
                "UGC Showcase"
            </h2>
            <p class="mt-4 max-w-2xl mx-auto text-lg text-gray-400">
                "A collection of my recent work. Authentic, engaging, and designed to convert."
            </p>
            <div
                node_ref=scroll_ref
                class="flex overflow-x-auto gap-8 mt-16 pt-4 pb-8 -mx-4 sm:-mx-6 lg:-mx-8 px-4 sm:px-6 lg:px-8 hide-scrollbar"
            >
                <For
                    each=move || cards.clone()
                    key=|card: &VideoCardModel| card.key.clone()
                    children=move |card: VideoCardModel| {
                        view! { <VideoCard embed_src=card.embed_src title=card.title /> }
                    }
                />
            </div>
        </Section>
    }
}
