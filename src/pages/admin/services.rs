use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use super::{confirm, AdminLayout, Notice, NoticeBanner};
use crate::api::errors::server_message;
use crate::components::image_upload::ImageUpload;
use crate::components::list_editor::ListEditor;
use crate::content::drafts::{AdminEditor, Draft, EditorSlot, ServiceDraft, ServiceInput};
use crate::content::models::{Entry, Service};
use crate::storage::images::ImageNamespace;

#[server]
pub async fn list_admin_services() -> Result<Vec<Entry<Service>>, ServerFnError> {
    let (state, _) = super::require_admin()?;
    let mut services = state
        .services
        .list_all()
        .await
        .map_err(crate::api::errors::to_server_error)?;
    crate::content::catalog::sort_services(&mut services);
    Ok(services)
}

/// Create a service when `id` is `None`, otherwise replace the stored one.
#[server(input = Json)]
pub async fn save_service(
    id: Option<String>,
    input: ServiceInput,
) -> Result<Entry<Service>, ServerFnError> {
    use crate::api::admin::{process_create, process_update};

    let (state, session) = super::require_admin()?;
    let saved = match id {
        None => process_create(state.services.as_ref(), input).await,
        Some(id) => process_update(state.services.as_ref(), &id, input).await,
    }
    .map_err(crate::api::errors::to_server_error)?;

    tracing::info!(id = %saved.id, admin = %session.email, "Service saved");
    Ok(saved)
}

#[server]
pub async fn delete_service(id: String) -> Result<(), ServerFnError> {
    let (state, session) = super::require_admin()?;
    state
        .services
        .delete(&id)
        .await
        .map_err(crate::api::errors::to_server_error)?;
    tracing::info!(id = %id, admin = %session.email, "Service deleted");
    Ok(())
}

#[component]
pub fn AdminServicesPage() -> impl IntoView {
    let editor = RwSignal::new(AdminEditor::<ServiceDraft>::default());
    let (notice, set_notice) = signal(None::<Notice>);
    let reload = RwSignal::new(0u32);
    let services = Resource::new(move || reload.get(), |_| list_admin_services());

    let save = Action::new(move |(slot, id, input): &(EditorSlot, Option<String>, ServiceInput)| {
        let (slot, id, input) = (*slot, id.clone(), input.clone());
        async move {
            match save_service(id, input).await {
                Ok(saved) => {
                    editor.update(|e| match slot {
                        EditorSlot::New => e.created(),
                        EditorSlot::Edit => e.updated(),
                    });
                    set_notice.set(Some(Notice::Success(format!("Saved \"{}\".", saved.record.title))));
                    reload.update(|n| *n += 1);
                }
                // The draft is left untouched so the admin can retry.
                Err(e) => set_notice.set(Some(Notice::Failure(server_message(&e)))),
            }
        }
    });

    let remove = Action::new(move |id: &String| {
        let id = id.clone();
        async move {
            match delete_service(id.clone()).await {
                Ok(()) => {
                    if editor.with_untracked(|e| e.editing_id() == Some(id.as_str())) {
                        editor.update(|e| e.cancel_edit());
                    }
                    set_notice.set(Some(Notice::Success("Service deleted.".to_string())));
                    reload.update(|n| *n += 1);
                }
                Err(e) => set_notice.set(Some(Notice::Failure(server_message(&e)))),
            }
        }
    });

    let pending = Signal::derive(move || save.pending().get());

    view! {
        <AdminLayout title="Services">
            <NoticeBanner notice=notice/>

            <Show when=move || editor.with(|e| e.editing.is_some())>
                <section class="card admin-panel">
                    <h2>"Edit service"</h2>
                    <ServiceForm
                        editor=editor
                        editor_slot=EditorSlot::Edit
                        pending=pending
                        submit_label="Save changes"
                        on_submit=Callback::new(move |input| {
                            let id = editor.with_untracked(|e| e.editing_id().map(str::to_string));
                            save.dispatch((EditorSlot::Edit, id, input));
                        })
                    />
                    <button class="btn btn-ghost" on:click=move |_| editor.update(|e| e.cancel_edit())>
                        "Cancel"
                    </button>
                </section>
            </Show>

            <section class="card admin-panel">
                <h2>"Add a service"</h2>
                <ServiceForm
                    editor=editor
                    editor_slot=EditorSlot::New
                    pending=pending
                    submit_label="Create service"
                    on_submit=Callback::new(move |input| {
                        save.dispatch((EditorSlot::New, None, input));
                    })
                />
            </section>

            <section class="admin-list">
                <h2>"Existing services"</h2>
                <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                    {move || services.get().map(|result| match result {
                        Ok(entries) if entries.is_empty() => {
                            view! { <p class="empty">"No services yet."</p> }.into_any()
                        }
                        Ok(entries) => view! {
                            <table class="table">
                                <thead>
                                    <tr><th>"Title"</th><th>"Pricing"</th><th>"Features"</th><th></th></tr>
                                </thead>
                                <tbody>
                                    {entries
                                        .into_iter()
                                        .map(|entry| {
                                            let id = entry.id.clone();
                                            let title = entry.record.title.clone();
                                            let pricing = entry.record.pricing.clone().unwrap_or_default();
                                            let features = entry.record.features.len();
                                            view! {
                                                <tr>
                                                    <td><a href=format!("/services/{id}")>{title.clone()}</a></td>
                                                    <td>{pricing}</td>
                                                    <td>{features}</td>
                                                    <td class="row-actions">
                                                        <button
                                                            class="btn btn-sm"
                                                            on:click=move |_| editor.update(|e| e.begin_edit(&entry))
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn-sm btn-error"
                                                            on:click=move |_| {
                                                                if confirm(&format!("Delete \"{title}\"?")) {
                                                                    remove.dispatch(id.clone());
                                                                }
                                                            }
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
            </section>
        </AdminLayout>
    }
}

/// Form bound to one of the editor's drafts.
#[component]
fn ServiceForm(
    editor: RwSignal<AdminEditor<ServiceDraft>>,
    editor_slot: EditorSlot,
    pending: Signal<bool>,
    submit_label: &'static str,
    on_submit: Callback<ServiceInput>,
) -> impl IntoView {
    let read = move |get: fn(&ServiceDraft) -> String| {
        move || editor.with(|e| e.draft(editor_slot).map(get).unwrap_or_default())
    };
    let write = move |set: fn(&mut ServiceDraft, String), value: String| {
        editor.update(|e| {
            if let Some(draft) = e.draft_mut(editor_slot) {
                set(draft, value);
            }
        })
    };

    view! {
        <form
            class="admin-form"
            on:submit=move |ev| {
                ev.prevent_default();
                if let Some(draft) = editor.with_untracked(|e| e.draft(editor_slot).cloned()) {
                    on_submit.run(draft.into_input());
                }
            }
        >
            <label>
                "Title"
                <input
                    type="text"
                    class="input"
                    required
                    prop:value=read(|d| d.title.clone())
                    on:input=move |ev| write(|d, v| d.title = v, event_target_value(&ev))
                />
            </label>
            <label>
                "Short description"
                <input
                    type="text"
                    class="input"
                    prop:value=read(|d| d.short_description.clone())
                    on:input=move |ev| write(|d, v| d.short_description = v, event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    class="textarea"
                    rows="3"
                    required
                    prop:value=read(|d| d.description.clone())
                    on:input=move |ev| write(|d, v| d.description = v, event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Long description (Markdown)"
                <textarea
                    class="textarea"
                    rows="8"
                    prop:value=read(|d| d.long_description.clone())
                    on:input=move |ev| write(|d, v| d.long_description = v, event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Icon"
                <input
                    type="text"
                    class="input"
                    prop:value=read(|d| d.icon.clone())
                    on:input=move |ev| write(|d, v| d.icon = v, event_target_value(&ev))
                />
            </label>
            <label>
                "Pricing"
                <input
                    type="text"
                    class="input"
                    prop:value=read(|d| d.pricing.clone())
                    on:input=move |ev| write(|d, v| d.pricing = v, event_target_value(&ev))
                />
            </label>
            <ImageUpload
                namespace=ImageNamespace::Services
                image_url=Signal::derive(move || editor.with(|e| e.draft(editor_slot).and_then(|d| d.image_url.clone())))
                on_uploaded=Callback::new(move |url: String| write(|d, v| d.image_url = Some(v), url))
                on_clear=Callback::new(move |_| editor.update(|e| {
                    if let Some(draft) = e.draft_mut(editor_slot) {
                        draft.clear_image();
                    }
                }))
            />
            <ListEditor
                label="Features"
                items=Signal::derive(move || {
                    editor.with(|e| e.draft(editor_slot).map(|d| d.features.items().to_vec()).unwrap_or_default())
                })
                on_edit=Callback::new(move |edit| editor.update(|e| {
                    if let Some(draft) = e.draft_mut(editor_slot) {
                        draft.features.apply(edit);
                    }
                }))
            />
            <button type="submit" class="btn btn-primary" prop:disabled=move || pending.get()>
                {move || if pending.get() { "Saving..." } else { submit_label }}
            </button>
        </form>
    }
}
