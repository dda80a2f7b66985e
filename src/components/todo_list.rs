//! Todo List Component
//!
//! The complete list of tasks and its management: form, filter, rows, footer.

use leptos::prelude::*;
use todo_sync::{LoadState, Task, TaskFilter};

use crate::components::{FilterSelect, ListFooter, NewTaskForm, TodoItem};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Task list with optional parts switched on by the parent
#[component]
pub fn TodoList(
    /// Rename a task by double-clicking its text
    #[prop(optional)]
    edit_by_double_click: bool,
    #[prop(optional)] show_filter: bool,
    /// "Completed: x/y" counter
    #[prop(optional)]
    show_completed: bool,
    #[prop(optional)] can_mark_visible_completed: bool,
    #[prop(optional)] can_clear_completed: bool,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (filter, set_filter) = signal(TaskFilter::All);

    let visible = move || {
        let filter = filter.get();
        store
            .tasks()
            .get()
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect::<Vec<_>>()
    };

    let message = move || {
        let empty = store.tasks().with(|tasks| tasks.is_empty());
        match store.load_state().get() {
            LoadState::Idle | LoadState::Loading if empty => Some("Loading ..."),
            LoadState::Failed(_) if empty => Some("No tasks yet. Add one above!"),
            _ => None,
        }
    };

    let load_failed = move || matches!(store.load_state().get(), LoadState::Failed(_));

    let show_footer = show_completed || can_mark_visible_completed || can_clear_completed;

    view! {
        <NewTaskForm />

        {show_filter.then(|| view! { <FilterSelect filter=filter set_filter=set_filter /> })}

        <div class="todo-list">
            {move || message().map(|text| view! { <div class="list-message">{text}</div> })}
            {move || load_failed().then(|| view! {
                <button type="button" class="reload-btn" on:click=move |_| ctx.reload()>
                    "Reload"
                </button>
            })}

            // key on the mutable fields so edited rows re-render
            <For
                each=visible
                key=|task: &Task| (task.id.clone(), task.text.clone(), task.completed)
                children=move |task: Task| view! {
                    <TodoItem task=task edit_by_double_click=edit_by_double_click />
                }
            />
        </div>

        {show_footer.then(|| view! {
            <ListFooter
                filter=filter
                show_completed=show_completed
                can_mark_visible_completed=can_mark_visible_completed
                can_clear_completed=can_clear_completed
            />
        })}
    }
}
