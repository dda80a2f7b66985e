//! Filter Selector Component

use leptos::prelude::*;
use todo_sync::TaskFilter;

/// Row of buttons choosing which tasks the list shows
#[component]
pub fn FilterSelect(
    filter: ReadSignal<TaskFilter>,
    set_filter: WriteSignal<TaskFilter>,
) -> impl IntoView {
    view! {
        <div class="filter-row">
            {TaskFilter::ALL.iter().map(|&option| {
                view! {
                    <button
                        type="button"
                        class=move || if filter.get() == option { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| set_filter.set(option)
                    >
                        {option.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
