use leptos::prelude::*;

/// Dedicated view for a missing page or record, with a way back.
#[component]
pub fn NotFound(
    #[prop(into)] heading: String,
    #[prop(into)] message: String,
    #[prop(into)] back_href: String,
    #[prop(into)] back_label: String,
) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>{heading}</h1>
            <p>{message}</p>
            <a href=back_href class="btn btn-primary">{back_label}</a>
        </section>
    }
}
