use leptos::prelude::*;

use super::{confirm, AdminLayout, Notice, NoticeBanner};
use crate::api::errors::server_message;
use crate::content::models::{ContactLead, Entry};

/// All leads, newest first.
#[server]
pub async fn list_contact_leads() -> Result<Vec<Entry<ContactLead>>, ServerFnError> {
    let (state, _) = super::require_admin()?;
    crate::content::leads::list_leads(state.leads.as_ref())
        .await
        .map_err(crate::api::errors::to_server_error)
}

#[server]
pub async fn delete_contact_lead(id: String) -> Result<(), ServerFnError> {
    let (state, session) = super::require_admin()?;
    state
        .leads
        .delete(&id)
        .await
        .map_err(crate::api::errors::to_server_error)?;
    tracing::info!(id = %id, admin = %session.email, "Contact lead deleted");
    Ok(())
}

fn received_at(lead: &ContactLead) -> String {
    lead.created_at
        .map(|d| d.format("%-d %b %Y, %H:%M UTC").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[component]
pub fn AdminLeadsPage() -> impl IntoView {
    let (notice, set_notice) = signal(None::<Notice>);
    let selected = RwSignal::new(None::<Entry<ContactLead>>);
    let reload = RwSignal::new(0u32);
    let leads = Resource::new(move || reload.get(), |_| list_contact_leads());

    let remove = Action::new(move |id: &String| {
        let id = id.clone();
        async move {
            match delete_contact_lead(id.clone()).await {
                Ok(()) => {
                    if selected.with_untracked(|s| s.as_ref().is_some_and(|lead| lead.id == id)) {
                        selected.set(None);
                    }
                    set_notice.set(Some(Notice::Success("Lead deleted.".to_string())));
                    reload.update(|n| *n += 1);
                }
                Err(e) => set_notice.set(Some(Notice::Failure(server_message(&e)))),
            }
        }
    });

    let delete = move |id: String, name: &str| {
        if confirm(&format!("Delete the enquiry from {name}?")) {
            remove.dispatch(id);
        }
    };

    view! {
        <AdminLayout title="Contact leads">
            <NoticeBanner notice=notice/>

            {move || selected.get().map(|entry| {
                let lead = entry.record;
                let id = entry.id;
                let name = lead.name.clone();
                view! {
                    <section class="card admin-panel lead-detail">
                        <h2>{lead.subject.clone().unwrap_or_else(|| "No subject".to_string())}</h2>
                        <dl>
                            <dt>"From"</dt>
                            <dd>{lead.name.clone()}</dd>
                            <dt>"Email"</dt>
                            <dd><a href=format!("mailto:{}", lead.email)>{lead.email.clone()}</a></dd>
                            <dt>"Phone"</dt>
                            <dd>{lead.phone.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Received"</dt>
                            <dd>{received_at(&lead)}</dd>
                        </dl>
                        <p class="lead-message">{lead.message.clone()}</p>
                        <div class="row-actions">
                            <button class="btn btn-ghost" on:click=move |_| selected.set(None)>"Close"</button>
                            <button class="btn btn-error" on:click=move |_| delete(id.clone(), &name)>"Delete"</button>
                        </div>
                    </section>
                }
            })}

            <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                {move || leads.get().map(|result| match result {
                    Ok(entries) if entries.is_empty() => {
                        view! { <p class="empty">"No enquiries yet."</p> }.into_any()
                    }
                    Ok(entries) => view! {
                        <table class="table">
                            <thead>
                                <tr><th>"Received"</th><th>"Name"</th><th>"Subject"</th><th></th></tr>
                            </thead>
                            <tbody>
                                {entries
                                    .into_iter()
                                    .map(|entry| {
                                        let id = entry.id.clone();
                                        let name = entry.record.name.clone();
                                        let subject = entry.record.subject.clone().unwrap_or_default();
                                        let received = received_at(&entry.record);
                                        view! {
                                            <tr>
                                                <td>{received}</td>
                                                <td>{name.clone()}</td>
                                                <td>{subject}</td>
                                                <td class="row-actions">
                                                    <button
                                                        class="btn btn-sm"
                                                        on:click=move |_| selected.set(Some(entry.clone()))
                                                    >
                                                        "View"
                                                    </button>
                                                    <button
                                                        class="btn btn-sm btn-error"
                                                        on:click=move |_| delete(id.clone(), &name)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                    Err(e) => view! { <p class="alert alert-error">{server_message(&e)}</p> }.into_any(),
                })}
            </Suspense>
        </AdminLayout>
    }
}
