use leptos::prelude::*;

/// Page header band. Pages pass their own call-to-action buttons as children.
#[component]
pub fn Hero(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <h1>{title}</h1>
                {subtitle.map(|text| view! { <p class="hero-subtitle">{text}</p> })}
                {children.map(|children| view! { <div class="hero-actions">{children()}</div> })}
            </div>
        </section>
    }
}
