use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use super::{confirm, AdminLayout, Notice, NoticeBanner};
use crate::api::errors::server_message;
use crate::components::cards::display_date;
use crate::components::image_upload::ImageUpload;
use crate::content::drafts::{AdminEditor, BlogDraft, BlogInput, Draft, EditorSlot, ListEdit};
use crate::content::models::{BlogPost, Entry};
use crate::storage::images::ImageNamespace;

#[server]
pub async fn list_admin_blogs() -> Result<Vec<Entry<BlogPost>>, ServerFnError> {
    let (state, _) = super::require_admin()?;
    let mut posts = state
        .blogs
        .list_all()
        .await
        .map_err(crate::api::errors::to_server_error)?;
    crate::content::catalog::sort_blog_posts(&mut posts);
    Ok(posts)
}

/// Create a post when `id` is `None`, otherwise replace the stored one.
#[server(input = Json)]
pub async fn save_blog(id: Option<String>, input: BlogInput) -> Result<Entry<BlogPost>, ServerFnError> {
    use crate::api::admin::{process_create, process_update};

    let (state, session) = super::require_admin()?;
    let saved = match id {
        None => process_create(state.blogs.as_ref(), input).await,
        Some(id) => process_update(state.blogs.as_ref(), &id, input).await,
    }
    .map_err(crate::api::errors::to_server_error)?;

    tracing::info!(id = %saved.id, admin = %session.email, "Blog post saved");
    Ok(saved)
}

#[server]
pub async fn delete_blog(id: String) -> Result<(), ServerFnError> {
    let (state, session) = super::require_admin()?;
    state
        .blogs
        .delete(&id)
        .await
        .map_err(crate::api::errors::to_server_error)?;
    tracing::info!(id = %id, admin = %session.email, "Blog post deleted");
    Ok(())
}

#[component]
pub fn AdminBlogsPage() -> impl IntoView {
    let editor = RwSignal::new(AdminEditor::<BlogDraft>::default());
    let (notice, set_notice) = signal(None::<Notice>);
    let reload = RwSignal::new(0u32);
    let posts = Resource::new(move || reload.get(), |_| list_admin_blogs());

    let save = Action::new(move |(slot, id, input): &(EditorSlot, Option<String>, BlogInput)| {
        let (slot, id, input) = (*slot, id.clone(), input.clone());
        async move {
            match save_blog(id, input).await {
                Ok(saved) => {
                    editor.update(|e| match slot {
                        EditorSlot::New => e.created(),
                        EditorSlot::Edit => e.updated(),
                    });
                    set_notice.set(Some(Notice::Success(format!("Saved \"{}\".", saved.record.title))));
                    reload.update(|n| *n += 1);
                }
                Err(e) => set_notice.set(Some(Notice::Failure(server_message(&e)))),
            }
        }
    });

    let remove = Action::new(move |id: &String| {
        let id = id.clone();
        async move {
            match delete_blog(id.clone()).await {
                Ok(()) => {
                    if editor.with_untracked(|e| e.editing_id() == Some(id.as_str())) {
                        editor.update(|e| e.cancel_edit());
                    }
                    set_notice.set(Some(Notice::Success("Blog post deleted.".to_string())));
                    reload.update(|n| *n += 1);
                }
                Err(e) => set_notice.set(Some(Notice::Failure(server_message(&e)))),
            }
        }
    });

    let pending = Signal::derive(move || save.pending().get());

    view! {
        <AdminLayout title="Blog posts">
            <NoticeBanner notice=notice/>

            <Show when=move || editor.with(|e| e.editing.is_some())>
                <section class="card admin-panel">
                    <h2>"Edit post"</h2>
                    <BlogForm
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
                <h2>"Write a post"</h2>
                <BlogForm
                    editor=editor
                    editor_slot=EditorSlot::New
                    pending=pending
                    submit_label="Publish post"
                    on_submit=Callback::new(move |input| {
                        save.dispatch((EditorSlot::New, None, input));
                    })
                />
            </section>

            <section class="admin-list">
                <h2>"Published posts"</h2>
                <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                    {move || posts.get().map(|result| match result {
                        Ok(entries) if entries.is_empty() => {
                            view! { <p class="empty">"No posts yet."</p> }.into_any()
                        }
                        Ok(entries) => view! {
                            <table class="table">
                                <thead>
                                    <tr><th>"Title"</th><th>"Published"</th><th>"Tags"</th><th></th></tr>
                                </thead>
                                <tbody>
                                    {entries
                                        .into_iter()
                                        .map(|entry| {
                                            let id = entry.id.clone();
                                            let title = entry.record.title.clone();
                                            let published = display_date(entry.record.created_at).unwrap_or_default();
                                            let tags = entry.record.tags.join(", ");
                                            view! {
                                                <tr>
                                                    <td><a href=format!("/blog/{id}")>{title.clone()}</a></td>
                                                    <td>{published}</td>
                                                    <td>{tags}</td>
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

#[component]
fn BlogForm(
    editor: RwSignal<AdminEditor<BlogDraft>>,
    editor_slot: EditorSlot,
    pending: Signal<bool>,
    submit_label: &'static str,
    on_submit: Callback<BlogInput>,
) -> impl IntoView {
    let read = move |get: fn(&BlogDraft) -> String| {
        move || editor.with(|e| e.draft(editor_slot).map(get).unwrap_or_default())
    };
    let update = move |change: &dyn Fn(&mut BlogDraft)| {
        editor.update(|e| {
            if let Some(draft) = e.draft_mut(editor_slot) {
                change(draft);
            }
        })
    };
    let tags = move || editor.with(|e| e.draft(editor_slot).map(|d| d.tags.items().to_vec()).unwrap_or_default());

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
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        update(&|d| d.title = value.clone());
                    }
                />
            </label>
            <label>
                "Short description"
                <input
                    type="text"
                    class="input"
                    prop:value=read(|d| d.short_description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        update(&|d| d.short_description = value.clone());
                    }
                />
            </label>
            <label>
                "Summary"
                <textarea
                    class="textarea"
                    rows="3"
                    required
                    prop:value=read(|d| d.summary.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        update(&|d| d.summary = value.clone());
                    }
                ></textarea>
            </label>
            <label>
                "Content (Markdown)"
                <textarea
                    class="textarea"
                    rows="14"
                    required
                    prop:value=read(|d| d.content.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        update(&|d| d.content = value.clone());
                    }
                ></textarea>
            </label>
            <ImageUpload
                namespace=ImageNamespace::Blogs
                image_url=Signal::derive(move || editor.with(|e| e.draft(editor_slot).and_then(|d| d.image_url.clone())))
                on_uploaded=Callback::new(move |url: String| update(&|d| d.image_url = Some(url.clone())))
                on_clear=Callback::new(move |_| update(&|d| d.clear_image()))
            />
            <fieldset class="tag-editor">
                <legend>"Tags"</legend>
                <ul class="tag-list">
                    {move || {
                        tags()
                            .into_iter()
                            .enumerate()
                            .map(|(index, tag)| view! {
                                <li class="badge">
                                    {tag}
                                    <button
                                        type="button"
                                        class="badge-remove"
                                        title="Remove tag"
                                        on:click=move |_| update(&|d| d.tags.apply(ListEdit::Remove(index)))
                                    >
                                        "✕"
                                    </button>
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
                <input
                    type="text"
                    class="input"
                    placeholder="Add a tag and press Enter"
                    prop:value=read(|d| d.tag_input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        update(&|d| d.tag_input = value.clone());
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            update(&|d| d.commit_tag());
                        }
                    }
                />
                <button type="button" class="btn btn-sm" on:click=move |_| update(&|d| d.commit_tag())>
                    "Add tag"
                </button>
            </fieldset>
            <button type="submit" class="btn btn-primary" prop:disabled=move || pending.get()>
                {move || if pending.get() { "Saving..." } else { submit_label }}
            </button>
        </form>
    }
}
