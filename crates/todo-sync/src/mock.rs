//! In-memory TaskApi for tests.
//!
//! Behaves like the REST backend, records every call, and can fail or hold
//! open the next request.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::TaskApi;
use crate::error::{SyncError, SyncResult};
use crate::task::{Task, TaskId};

#[derive(Default)]
pub struct MockTaskApi {
    server: RefCell<Vec<Task>>,
    next_id: Cell<u64>,
    calls: RefCell<Vec<String>>,
    failure: RefCell<Option<SyncError>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MockTaskApi {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    /// Server pre-populated with open tasks `(id, text)`
    pub fn with_tasks(tasks: &[(&str, &str)]) -> Self {
        let api = Self::new();
        *api.server.borrow_mut() = tasks.iter().map(|(id, text)| Task::new(*id, *text)).collect();
        api.next_id.set(1000);
        api
    }

    /// Ids handed out by `create_task` start at `id`
    pub fn with_next_id(self, id: u64) -> Self {
        self.next_id.set(id);
        self
    }

    pub fn server_tasks(&self) -> Vec<Task> {
        self.server.borrow().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// The next request fails with `error` and leaves the server untouched.
    pub fn fail_next(&self, error: SyncError) {
        *self.failure.borrow_mut() = Some(error);
    }

    /// The next request waits until the returned sender fires.
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    async fn enter(&self, call: String) -> SyncResult<()> {
        self.calls.borrow_mut().push(call);
        let failure = self.failure.borrow_mut().take();
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn not_found(id: &TaskId) -> SyncError {
        SyncError::Status {
            status: 404,
            body: format!("task {} not found", id),
        }
    }

    fn modify(&self, id: &TaskId, change: impl FnOnce(&mut Task)) -> SyncResult<Task> {
        let mut server = self.server.borrow_mut();
        let task = server
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        change(task);
        Ok(task.clone())
    }
}

#[async_trait(?Send)]
impl TaskApi for MockTaskApi {
    async fn list_tasks(&self) -> SyncResult<Vec<Task>> {
        self.enter("list".to_string()).await?;
        Ok(self.server_tasks())
    }

    async fn create_task(&self, text: &str) -> SyncResult<Task> {
        self.enter(format!("create:{}", text)).await?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let task = Task::new(id.to_string(), text);
        self.server.borrow_mut().push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, text: &str) -> SyncResult<Task> {
        self.enter(format!("update:{}:{}", id, text)).await?;
        self.modify(id, |t| t.text = text.to_string())
    }

    async fn delete_task(&self, id: &TaskId) -> SyncResult<()> {
        self.enter(format!("delete:{}", id)).await?;
        let mut server = self.server.borrow_mut();
        let before = server.len();
        server.retain(|t| &t.id != id);
        if server.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    async fn complete_task(&self, id: &TaskId) -> SyncResult<Task> {
        self.enter(format!("complete:{}", id)).await?;
        self.modify(id, |t| {
            if !t.completed {
                t.completed = true;
                t.completed_date = Some(5_000);
            }
        })
    }

    async fn incomplete_task(&self, id: &TaskId) -> SyncResult<Task> {
        self.enter(format!("incomplete:{}", id)).await?;
        self.modify(id, |t| {
            t.completed = false;
            t.completed_date = None;
        })
    }
}
