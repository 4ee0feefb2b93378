use leptos::prelude::*;
use leptos_meta::Title;

use crate::api::errors::server_message;

/// Check the submitted credentials; on success set the session cookie and go to the dashboard.
#[server]
pub async fn admin_login(email: String, password: String) -> Result<(), ServerFnError> {
    let state = crate::state::app_state()?;
    let cookie = state
        .gate
        .start_session(&email, &password)
        .map_err(crate::api::errors::to_server_error)?;

    super::set_cookie(&cookie)?;
    leptos_axum::redirect(crate::auth::middleware::DASHBOARD_PATH);
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let login = ServerAction::<AdminLogin>::new();
    let error = move || {
        login
            .value()
            .get()
            .and_then(|result| result.err())
            .map(|e| server_message(&e))
    };

    view! {
        <Title text="Admin login"/>
        <section class="login">
            <h1>"Admin login"</h1>
            <ActionForm action=login attr:class="login-form">
                <label>
                    "Email"
                    <input type="email" name="email" class="input" autocomplete="username" required/>
                </label>
                <label>
                    "Password"
                    <input type="password" name="password" class="input" autocomplete="current-password" required/>
                </label>
                <button type="submit" class="btn btn-primary" prop:disabled=move || login.pending().get()>
                    {move || if login.pending().get() { "Signing in..." } else { "Sign in" }}
                </button>
            </ActionForm>
            {move || error().map(|message| view! { <p class="alert alert-error">{message}</p> })}
            <a href="/" class="back-link">"← Back to site"</a>
        </section>
    }
}
