use leptos::prelude::*;
use leptos_meta::Title;

use super::contact_modal::ContactModal;
use super::hero::Hero;
use super::showcase::Showcase;
use crate::catalog::catalog;
use crate::modal::{DismissReason, ModalEvent, ModalState};
use crate::profile::ProfileImage;
use crate::site::build_stamp;

/// The whole site. Owns the page's mutable state and hands it down.
#[component]
pub fn HomePage() -> impl IntoView {
    let modal = RwSignal::new(ModalState::default());
    let profile = RwSignal::new(ProfileImage::new());

    let (on_contact, on_close) = modal_callbacks(modal);

    let on_image_error = Callback::new(move |_: ()| {
        if let Some(true) = profile.try_update(ProfileImage::on_load_error) {
            log::warn!("profile picture failed to load, using inline fallback");
        }
    });
    let image_src = Signal::derive(move || profile.get().src());

    view! {
        <Title text="UGC Creator & Social Media Manager" />
        <div class="bg-gray-900 text-gray-200 min-h-screen">
            <main>
                <Hero image_src on_image_error on_contact />
                <Showcase cards=catalog().cards() />
                <Footer />
                <ContactModal state=modal on_close />
            </main>
        </div>
    }
}

/// Open/close callbacks driving the page-owned modal state.
fn modal_callbacks(modal: RwSignal<ModalState>) -> (Callback<()>, Callback<DismissReason>) {
    let dispatch = move |event: ModalEvent| modal.update(|s| *s = s.apply(event));
    let on_contact = Callback::new(move |_: ()| dispatch(ModalEvent::Open));
    let on_close = Callback::new(move |reason: DismissReason| {
        log::debug!("contact modal dismissed: {reason:?}");
        dispatch(reason.into());
    });
    (on_contact, on_close)
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-black/30 py-8 px-4 text-center">
            <p class="text-gray-500 text-sm mt-2">"Built with ❤️ and powered by creativity."</p>
            {build_stamp()
                .map(|stamp| {
                    view! { <p class="text-gray-600 text-xs mt-1">"Last updated " {stamp}</p> }
                })}
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos_meta::provide_meta_context;

    #[test]
    fn test_initial_render() {
        let owner = Owner::new();
        owner.set();
        provide_meta_context();
        let html = view! { <HomePage /> }.to_html();
        assert!(html.contains(r#"src="assets/profile.jpeg""#));
        assert!(!html.contains(r#"role="dialog""#));
        assert_eq!(html.matches("<iframe").count(), catalog().len());
    }

    #[test]
    fn test_modal_callbacks_drive_state() {
        let owner = Owner::new();
        owner.set();
        let modal = RwSignal::new(ModalState::default());
        let (on_contact, on_close) = modal_callbacks(modal);

        on_contact.run(());
        assert_eq!(modal.get_untracked(), ModalState::Open);
        on_contact.run(());
        assert_eq!(modal.get_untracked(), ModalState::Open);
        on_close.run(DismissReason::Backdrop);
        assert_eq!(modal.get_untracked(), ModalState::Closed);
        on_contact.run(());
        on_close.run(DismissReason::CloseButton);
        assert_eq!(modal.get_untracked(), ModalState::Closed);
    }
}
