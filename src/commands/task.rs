//! Task Commands
//!
//! Each command spawns the coordinator operation on the UI thread. The
//! coordinator already logs and alerts on failure, so results are dropped.

use leptos::task::spawn_local;
use todo_sync::{TaskFilter, TaskId};

use crate::context::AppContext;

pub fn create_task(ctx: AppContext, text: String) {
    let coordinator = ctx.coordinator();
    spawn_local(async move {
        let _ = coordinator.create(&text).await;
    });
}

pub fn update_task(ctx: AppContext, id: TaskId, text: String) {
    let coordinator = ctx.coordinator();
    spawn_local(async move {
        let _ = coordinator.update(&id, &text).await;
    });
}

pub fn delete_task(ctx: AppContext, id: TaskId) {
    let coordinator = ctx.coordinator();
    spawn_local(async move {
        let _ = coordinator.delete(&id).await;
    });
}

/// Flip a task's checkbox: complete it if open, reopen it if done
pub fn toggle_task(ctx: AppContext, id: TaskId, completed: bool) {
    let coordinator = ctx.coordinator();
    spawn_local(async move {
        let _ = if completed {
            coordinator.incomplete(&id).await
        } else {
            coordinator.complete(&id).await
        };
    });
}

pub fn complete_visible(ctx: AppContext, filter: TaskFilter) {
    let coordinator = ctx.coordinator();
    spawn_local(async move {
        let outcome = coordinator.complete_visible(filter).await;
        log::info!(
            "[LIST] Completed {} visible tasks ({} failed)",
            outcome.attempted,
            outcome.failed
        );
    });
}

pub fn clear_completed(ctx: AppContext) {
    let coordinator = ctx.coordinator();
    spawn_local(async move {
        let outcome = coordinator.clear_completed().await;
        log::info!(
            "[LIST] Cleared {} completed tasks ({} failed)",
            outcome.attempted,
            outcome.failed
        );
    });
}
