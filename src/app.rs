//! To-Do Frontend App
//!
//! Wires the task cache, the HTTP coordinator and the store together.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{ClientConfig, MutationCoordinator, TaskCache};

use crate::commands;
use crate::components::{ThemeSwitch, TodoList};
use crate::context::AppContext;
use crate::store::{store_apply_snapshot, AppState};

/// API root, overridable at build time with `TODO_API_URL`
fn load_config() -> ClientConfig {
    match option_env!("TODO_API_URL") {
        Some(url) => ClientConfig::new(url).unwrap_or_else(|e| {
            log::warn!("[APP] {}, falling back to default API url", e);
            ClientConfig::default()
        }),
        None => ClientConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let config = load_config();
    log::info!("[APP] Using API at {}", config.base_url);
    let coordinator =
        MutationCoordinator::http(config, TaskCache::new()).with_notifier(commands::alert);

    // Every cache change re-renders through the store
    let tracker = coordinator.tracker().clone();
    coordinator
        .cache()
        .subscribe(move |snapshot| store_apply_snapshot(&store, snapshot, &tracker));
    let ctx = AppContext::new(Rc::new(coordinator));
    provide_context(ctx);

    // Initial load
    ctx.reload();

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"ToDo App"</h1>
                <ThemeSwitch dark_as_default=true />
            </header>

            <TodoList
                edit_by_double_click=true
                show_filter=true
                show_completed=true
                can_mark_visible_completed=true
                can_clear_completed=true
            />
        </div>
    }
}
