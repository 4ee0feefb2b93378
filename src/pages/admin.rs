//! Gated admin pages. Every server function here re-checks the session
//! cookie, independently of the page gate middleware.

pub mod blogs;
pub mod dashboard;
pub mod leads;
pub mod login;
pub mod services;

use leptos::prelude::*;

/// Resolve the app state and the signed-in admin for the current request.
#[cfg(feature = "ssr")]
pub(crate) fn require_admin(
) -> Result<(crate::state::AppState, crate::auth::middleware::AdminSession), ServerFnError> {
    use crate::auth::middleware::AdminSession;

    let state = crate::state::app_state()?;
    let parts = use_context::<axum::http::request::Parts>()
        .ok_or_else(|| ServerFnError::new("Request context is not available"))?;
    let session = AdminSession::from_headers(&parts.headers, state.gate.keys())
        .map_err(crate::api::errors::to_server_error)?;
    Ok((state, session))
}

/// Attach a `Set-Cookie` header to the server function response.
#[cfg(feature = "ssr")]
pub(crate) fn set_cookie(cookie: &axum_extra::extract::cookie::Cookie<'static>) -> Result<(), ServerFnError> {
    let value = axum::http::HeaderValue::from_str(&cookie.to_string())
        .map_err(|e| ServerFnError::new(format!("Invalid cookie header: {e}")))?;
    let response = use_context::<leptos_axum::ResponseOptions>()
        .ok_or_else(|| ServerFnError::new("Response context is not available"))?;
    response.append_header(axum::http::header::SET_COOKIE, value);
    Ok(())
}

#[server]
pub async fn admin_logout() -> Result<(), ServerFnError> {
    set_cookie(&crate::auth::session::removal_cookie())?;
    leptos_axum::redirect(crate::auth::middleware::LOGIN_PATH);
    Ok(())
}

const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/admin/dashboard", "Dashboard"),
    ("/admin/services", "Services"),
    ("/admin/blogs", "Blog posts"),
    ("/admin/contact-leads", "Contact leads"),
];

/// Sidebar chrome shared by every signed-in admin page.
#[component]
pub fn AdminLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let logout = ServerAction::<AdminLogout>::new();

    view! {
        <leptos_meta::Title text=format!("Admin: {title}")/>
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <a href="/" class="logo">"Decode Law with Gauri"</a>
                <nav>
                    <ul>
                        {ADMIN_LINKS
                            .iter()
                            .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </nav>
                <ActionForm action=logout>
                    <button type="submit" class="btn btn-ghost">"Log out"</button>
                </ActionForm>
            </aside>
            <main class="admin-main">
                <h1>{title}</h1>
                {children()}
            </main>
        </div>
    }
}

/// Ask the browser to confirm a destructive action. Always true while server rendering.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        window().confirm_with_message(message).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        true
    }
}

/// Short-lived feedback line shown after an admin action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

#[component]
pub fn NoticeBanner(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| match notice {
            Notice::Success(message) => view! { <p class="alert alert-success">{message}</p> }.into_any(),
            Notice::Failure(message) => view! { <p class="alert alert-error">{message}</p> }.into_any(),
        })
    }
}
