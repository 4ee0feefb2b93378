use leptos::prelude::*;

/// Primary navigation links, shared by the desktop bar and the mobile drawer.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <li>
                        <a href=*href on:click=move |_| set_menu_open.set(false)>
                            {*label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class="navbar">
            <div class="navbar-brand">
                <a href="/" class="logo">"Decode Law with Gauri"</a>
            </div>
            <button
                class="navbar-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <ul class="navbar-links" class:open=move || menu_open.get()>
                {links}
            </ul>
            <a href="/contact" class="btn btn-primary navbar-cta">"Book a consultation"</a>
        </header>
    }
}
