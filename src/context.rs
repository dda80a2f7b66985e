//! Application Context
//!
//! Shared handle to the mutation coordinator, provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{HttpTaskApi, MutationCoordinator};

pub type Coordinator = MutationCoordinator<HttpTaskApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The coordinator is `!Send`, so it lives in thread-local arena storage
    coordinator: StoredValue<Rc<Coordinator>, LocalStorage>,
}

impl AppContext {
    pub fn new(coordinator: Rc<Coordinator>) -> Self {
        Self {
            coordinator: StoredValue::new_local(coordinator),
        }
    }

    pub fn coordinator(&self) -> Rc<Coordinator> {
        self.coordinator.get_value()
    }

    /// Refetch the whole list from the backend
    pub fn reload(&self) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            let _ = coordinator.refresh().await;
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
