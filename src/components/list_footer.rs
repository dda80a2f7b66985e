//! List Footer Component
//!
//! Completion counter and the bulk actions.

use leptos::prelude::*;
use todo_sync::{TaskFilter, TaskStats};

use crate::commands;
use crate::components::ConfirmButton;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListFooter(
    filter: ReadSignal<TaskFilter>,
    show_completed: bool,
    can_mark_visible_completed: bool,
    can_clear_completed: bool,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let stats = move || store.tasks().with(|tasks| TaskStats::of(tasks));

    view! {
        <div class="list-footer">
            {show_completed.then(|| view! {
                <span class="stats">{move || stats().to_string()}</span>
            })}

            {can_mark_visible_completed.then(|| view! {
                <ConfirmButton
                    label="Mark as completed"
                    prompt="Complete all visible tasks?"
                    on_confirm=Callback::new(move |_: ()| commands::complete_visible(ctx, filter.get_untracked()))
                />
            })}

            {can_clear_completed.then(|| view! {
                <ConfirmButton
                    label="Clear completed"
                    prompt="Remove all completed tasks?"
                    on_confirm=Callback::new(move |_: ()| commands::clear_completed(ctx))
                />
            })}
        </div>
    }
}
