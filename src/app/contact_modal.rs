use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::icons::{CloseIcon, MailIcon, SocialIcon};
use crate::modal::{DismissReason, ModalState};
use crate::site::{mailto, CONTACT_EMAIL, SOCIAL_LINKS};

/// Contact overlay. Shows while `state` is open and reports every way of
/// dismissing it through `on_close`; the parent decides what closing means.
#[component]
pub fn ContactModal(
    #[prop(into)] state: Signal<ModalState>,
    on_close: Callback<DismissReason>,
) -> impl IntoView {
    let close_on_escape = dismiss_with(on_close, DismissReason::EscapeKey);
    let close_on_backdrop = dismiss_with(on_close, DismissReason::Backdrop);
    let close_on_button = dismiss_with(on_close, DismissReason::CloseButton);

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.get_untracked().is_open() {
            close_on_escape();
        }
    });

    view! {
        <Show when=move || state.get().is_open()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4"
                on:click=move |_| close_on_backdrop()
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="contact-title"
                    class="relative w-full max-w-md bg-gray-800 rounded-lg shadow-2xl border border-gray-700 p-8 text-center"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute top-4 right-4 text-gray-400 hover:text-white transition-colors"
                        aria-label="Close"
                        on:click=move |_| close_on_button()
                    >
                        <CloseIcon class="h-6 w-6" />
                    </button>
                    <h2
                        id="contact-title"
                        class="text-3xl font-black text-white uppercase tracking-tighter"
                    >
                        "Let's Work Together"
                    </h2>
                    <p class="mt-3 text-gray-400">
                        "Have a product that needs authentic content? Send me a message and I'll get back to you."
                    </p>
                    <a
                        href=mailto()
                        class="mt-6 inline-flex items-center gap-3 bg-amber-400 text-gray-900 font-bold py-3 px-6 rounded-lg hover:bg-amber-500 transition-colors"
                    >
                        <MailIcon class="h-5 w-5" />
                        {CONTACT_EMAIL}
                    </a>
                    <div class="mt-6 flex items-center justify-center gap-4">
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
        </Show>
    }
}

fn dismiss_with(
    on_close: Callback<DismissReason>,
    reason: DismissReason,
) -> impl Fn() + Copy + Send + Sync + 'static {
    move || on_close.run(reason)
}
