use leptos::prelude::*;

use crate::content::drafts::ListEdit;

/// Editable ordered list of short strings (service features).
///
/// The component owns no state; every change is reported through `on_edit`.
/// Rows are rebuilt only when the length changes, so typing keeps focus.
#[component]
pub fn ListEditor(
    #[prop(into)] items: Signal<Vec<String>>,
    on_edit: Callback<ListEdit>,
    #[prop(into)] label: String,
) -> impl IntoView {
    let len = Memo::new(move |_| items.with(Vec::len));

    view! {
        <fieldset class="list-editor">
            <legend>{label}</legend>
            <ol>
                {move || {
                    let len = len.get();
                    (0..len)
                        .map(|index| {
                            let value = move || items.with(|items| items.get(index).cloned().unwrap_or_default());
                            view! {
                                <li class="list-editor-row">
                                    <input
                                        type="text"
                                        class="input"
                                        prop:value=value
                                        on:input=move |ev| {
                                            on_edit.run(ListEdit::Set(index, event_target_value(&ev)))
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="btn btn-sm btn-ghost"
                                        title="Move up"
                                        disabled=index == 0
                                        on:click=move |_| on_edit.run(ListEdit::MoveUp(index))
                                    >
                                        "↑"
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn-sm btn-ghost"
                                        title="Move down"
                                        disabled=index + 1 == len
                                        on:click=move |_| on_edit.run(ListEdit::MoveDown(index))
                                    >
                                        "↓"
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn-sm btn-error"
                                        title="Remove"
                                        on:click=move |_| on_edit.run(ListEdit::Remove(index))
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
            <button type="button" class="btn btn-sm" on:click=move |_| on_edit.run(ListEdit::Add)>
                "+ Add"
            </button>
        </fieldset>
    }
}
