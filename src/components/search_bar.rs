use leptos::prelude::*;

/// Free-text filter box; the owning page decides what the term filters.
#[component]
pub fn SearchBar(
    query: RwSignal<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-container">
            <input
                type="search"
                class="input"
                placeholder=placeholder
                on:input=move |ev| query.set(event_target_value(&ev))
                prop:value=move || query.get()
            />
            {move || {
                (!query.get().trim().is_empty())
                    .then(|| view! {
                        <button class="btn btn-ghost" on:click=move |_| query.set(String::new())>
                            "Clear"
                        </button>
                    })
            }}
        </div>
    }
}
