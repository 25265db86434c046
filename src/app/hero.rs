use leptos::{html, prelude::*};

use super::icons::{ChevronDownIcon, SocialIcon};
use super::section::Section;
use crate::profile::load_already_failed;
use crate::site::{CURRENT_PARTNER, HERO_BACKDROP_URL, OWNER_NAME, SOCIAL_LINKS};

#[component]
pub fn Hero(
    /// Current profile picture source, owned by the page.
    image_src: Signal<&'static str>,
    on_image_error: Callback<()>,
    on_contact: Callback<()>,
) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();

    // The server-rendered <img> can fail before hydration attaches on:error
    Effect::new(move |_| {
        let Some(img) = img_ref.get() else {
            return;
        };
        if load_already_failed(img.complete(), img.natural_width()) {
            on_image_error.run(());
        }
    });

    view! {
        <Section class="relative min-h-screen flex items-center justify-center text-center">
            <div class="absolute inset-0 bg-gradient-to-b from-gray-900 via-gray-900 to-black opacity-80 z-10"></div>
            <div class="absolute inset-0 z-0">
                <img
                    src=HERO_BACKDROP_URL
                    alt="Abstract background"
                    class="object-cover w-full h-full opacity-10 blur-sm"
                />
            </div>
            <div class="relative z-20 p-4">
                <img
                    node_ref=img_ref
                    src=move || image_src.get()
                    on:error=move |_| on_image_error.run(())
                    alt=format!("{OWNER_NAME}'s Profile Picture")
                    class="w-32 h-32 sm:w-40 sm:h-40 object-cover rounded-full mx-auto mb-4 sm:mb-6 border-4 border-gray-700 shadow-lg bg-gray-700"
                />
                <h1 class="text-4xl sm:text-5xl lg:text-7xl font-black text-white uppercase tracking-tighter">
                    {OWNER_NAME}
                </h1>
                <p class="mt-3 sm:mt-4 max-w-2xl mx-auto text-base sm:text-lg text-gray-300 font-medium">
                    "UGC Creator " <span class="text-amber-400">"&"</span> " Social Media Manager"
                </p>
                <p class="mt-2 max-w-2xl mx-auto text-gray-400">
                    "I create authentic content that doesn't feel like an ad, specializing in high-volume video and full-service management."
                </p>
                <div class="mt-6 sm:mt-8">
                    <button
                        type="button"
                        on:click=move |_| on_contact.run(())
                        class="inline-block bg-amber-400 text-gray-900 font-bold py-3 px-8 rounded-lg text-lg hover:bg-amber-500 transition-transform transform hover:scale-105"
                    >
                        "Get In Touch"
                    </button>
                </div>
                <div class="mt-10 sm:mt-12 text-center">
                    <p class="text-sm text-gray-500 uppercase tracking-widest">
                        "Currently Working With"
                    </p>
                    <div class="flex items-center justify-center gap-6 mt-3">
                        <p class="text-xl sm:text-2xl font-bold text-gray-200">{CURRENT_PARTNER}</p>
                        <div class="flex items-center gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-gray-400 hover:text-amber-400 transition-colors"
                                            aria-label=link.label
                                        >
                                            <SocialIcon network=link.network />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-10 inset-x-0 z-30 flex justify-center">
                <a
                    href="#work"
                    class="flex flex-col items-center animate-gentle-bounce"
                    aria-label="View Showcase"
                >
                    <span class="text-gray-400 text-sm tracking-wider">"View Showcase"</span>
                    <ChevronDownIcon class="w-5 h-5 mt-1 text-gray-400" />
                </a>
            </div>
        </Section>
    }
}
