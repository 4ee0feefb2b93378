use leptos::prelude::*;

use super::AdminLayout;
use crate::content::models::DashboardCounts;

#[server]
pub async fn get_dashboard_counts() -> Result<DashboardCounts, ServerFnError> {
    let (state, _) = super::require_admin()?;
    crate::api::admin::process_dashboard(
        state.services.as_ref(),
        state.blogs.as_ref(),
        state.leads.as_ref(),
    )
    .await
    .map_err(crate::api::errors::to_server_error)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let counts = Resource::new(|| (), |_| get_dashboard_counts());

    view! {
        <AdminLayout title="Dashboard">
            <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                {move || counts.get().map(|result| match result {
                    Ok(counts) => view! {
                        <div class="stat-grid">
                            <StatCard label="Services" value=counts.services href="/admin/services"/>
                            <StatCard label="Blog posts" value=counts.blogs href="/admin/blogs"/>
                            <StatCard label="Contact leads" value=counts.contact_leads href="/admin/contact-leads"/>
                        </div>
                    }
                    .into_any(),
                    Err(e) => view! { <p class="alert alert-error">"Could not load counts: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </AdminLayout>
    }
}

#[component]
fn StatCard(label: &'static str, value: u64, href: &'static str) -> impl IntoView {
    view! {
        <a class="card stat-card" href=href>
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </a>
    }
}
