//! Task API - Core Trait
//!
//! The REST boundary the coordinator talks to. `HttpTaskApi` is the real
//! implementation; tests plug in an in-memory one.

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::task::{Task, TaskId};

/// Remote task endpoints.
///
/// Futures are `!Send`: everything runs on the single UI thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /tasks`
    async fn list_tasks(&self) -> SyncResult<Vec<Task>>;

    /// `POST /tasks`
    async fn create_task(&self, text: &str) -> SyncResult<Task>;

    /// `POST /tasks/{id}`
    async fn update_task(&self, id: &TaskId, text: &str) -> SyncResult<Task>;

    /// `DELETE /tasks/{id}`
    async fn delete_task(&self, id: &TaskId) -> SyncResult<()>;

    /// `POST /tasks/{id}/complete`
    async fn complete_task(&self, id: &TaskId) -> SyncResult<Task>;

    /// `POST /tasks/{id}/incomplete`
    async fn incomplete_task(&self, id: &TaskId) -> SyncResult<Task>;
}
