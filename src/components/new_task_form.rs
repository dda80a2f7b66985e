//! New Task Form Component

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() {
            return;
        }
        // the row shows up optimistically, so the box can be cleared right away
        set_new_text.set(String::new());
        commands::create_task(ctx, text);
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                name="todoin"
                placeholder="Add a new task ..."
                required=true
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
