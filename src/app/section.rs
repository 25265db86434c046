use leptos::prelude::*;

/// Page band. `id` makes it an anchor target, `class` is appended to the
/// base padding.
#[component]
pub fn Section(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = format!("w-full py-20 sm:py-24 px-4 sm:px-6 lg:px-8 {class}");
    view! {
        <section id=id class=class>
            {children()}
        </section>
    }
}
