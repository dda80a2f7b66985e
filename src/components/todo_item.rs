//! Todo Item Component
//!
//! One row of the list: checkbox, text (double-click to edit), delete.

use leptos::prelude::*;
use todo_sync::Task;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

fn row_class(completed: bool, busy: bool) -> &'static str {
    match (completed, busy) {
        (_, true) => "todo-row pending",
        (true, false) => "todo-row completed",
        (false, false) => "todo-row",
    }
}

/// A single task row
///
/// Rows with a request in flight are dimmed. Rows whose create has not been
/// confirmed yet carry a temporary id and cannot be edited, toggled or
/// deleted until the server answers.
#[component]
pub fn TodoItem(
    task: Task,
    #[prop(optional)] edit_by_double_click: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let unconfirmed = task.id.is_temporary();
    let completed = task.completed;
    let id = StoredValue::new(task.id);
    let text = StoredValue::new(task.text);
    let busy = move || unconfirmed || id.with_value(|id| store.pending().with(|p| p.contains(id)));

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let start_edit = move |_: web_sys::MouseEvent| {
        if edit_by_double_click && !unconfirmed {
            set_draft.set(text.get_value());
            set_editing.set(true);
        }
    };

    let commit_edit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let value = draft.get_untracked();
        if !value.trim().is_empty() && value != text.get_value() {
            commands::update_task(ctx, id.get_value(), value);
        }
    };

    view! {
        <div class=move || row_class(completed, busy())>
            <input
                type="checkbox"
                checked=completed
                disabled=unconfirmed
                on:change=move |_| commands::toggle_task(ctx, id.get_value(), completed)
            />

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="task-text" on:dblclick=start_edit>{text.get_value()}</span>
                }
            >
                <input
                    type="text"
                    class="edit-input"
                    autofocus=true
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:blur=move |_| commit_edit()
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => commit_edit(),
                        "Escape" => set_editing.set(false),
                        _ => {}
                    }
                />
                // mousedown fires before the input's blur, so cancelling wins
                <button
                    type="button"
                    class="cancel-btn"
                    on:mousedown=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        set_editing.set(false);
                    }
                >
                    "✕"
                </button>
            </Show>

            <button
                type="button"
                class="delete-btn"
                disabled=unconfirmed
                on:click=move |_| commands::delete_task(ctx, id.get_value())
            >
                "×"
            </button>
        </div>
    }
}
