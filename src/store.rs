//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! read-only mirror of the task cache: it is only written from the cache's
//! change notifications.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{CacheSnapshot, LoadState, MutationTracker, Task, TaskId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, optimistic rows included
    pub tasks: Vec<Task>,
    /// Whether the list has been fetched yet
    pub load_state: LoadState,
    /// Tasks with a request in flight
    pub pending: Vec<TaskId>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy a cache snapshot, and the tasks still waiting on the server, into the store
pub fn store_apply_snapshot(store: &AppStore, snapshot: &CacheSnapshot, tracker: &MutationTracker) {
    *store.tasks().write() = snapshot.tasks.as_ref().clone();
    if store.load_state().get_untracked() != snapshot.load_state {
        *store.load_state().write() = snapshot.load_state.clone();
    }
    let pending: Vec<TaskId> = tracker.in_flight().into_iter().map(|m| m.task_id).collect();
    if store.pending().get_untracked() != pending {
        *store.pending().write() = pending;
    }
}
