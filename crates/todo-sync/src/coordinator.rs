//! Mutation Coordinator
//!
//! Runs each create / update / delete / complete / incomplete as:
//! patch the cache, send the request, then commit or roll back.
//!
//! Rollback policy per operation:
//! - create: drop the speculative row; refetch too when the outcome is unknown
//! - update, complete, incomplete: restore the saved values on that one entry
//! - delete: invalidate and refetch the whole list
//!
//! A mutation is registered before its first patch and resolved before its
//! last, so every snapshot subscribers see agrees with the tracker. Confirmed
//! results are always written back, since a refetch started by another
//! mutation may have replaced the entry meanwhile.

use std::cell::Cell;
use std::rc::Rc;

use futures::future::join_all;

use crate::api::TaskApi;
use crate::cache::{LoadState, TaskCache};
use crate::config::ClientConfig;
use crate::error::{SyncError, SyncResult};
use crate::filter::TaskFilter;
use crate::http::HttpTaskApi;
use crate::mutation::{MutationKind, MutationTracker, PendingMutation};
use crate::notify::{Notifier, SilentNotifier};
use crate::patch;
use crate::task::{now_millis, Task, TaskId, TempIdGenerator};

/// Result of a bulk action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkOutcome {
    pub attempted: usize,
    pub failed: usize,
}

impl BulkOutcome {
    fn from_results<T>(results: &[SyncResult<T>]) -> Self {
        Self {
            attempted: results.len(),
            failed: results.iter().filter(|r| r.is_err()).count(),
        }
    }
}

pub struct MutationCoordinator<A> {
    api: A,
    cache: TaskCache,
    tracker: MutationTracker,
    notifier: Rc<dyn Notifier>,
    notify_errors: bool,
    temp_ids: TempIdGenerator,
    fetch_generation: Cell<u64>,
}

impl MutationCoordinator<HttpTaskApi> {
    /// Coordinator talking HTTP to `config.base_url`
    pub fn http(config: ClientConfig, cache: TaskCache) -> Self {
        let notify_errors = config.notify_errors;
        let mut coordinator = Self::new(HttpTaskApi::new(config), cache);
        coordinator.notify_errors = notify_errors;
        coordinator
    }
}

impl<A: TaskApi> MutationCoordinator<A> {
    pub fn new(api: A, cache: TaskCache) -> Self {
        Self {
            api,
            cache,
            tracker: MutationTracker::new(),
            notifier: Rc::new(SilentNotifier),
            notify_errors: true,
            temp_ids: TempIdGenerator::new(),
            fetch_generation: Cell::new(0),
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Rc::new(notifier);
        self
    }

    /// Log-only failures when disabled
    pub fn notify_errors(mut self, enabled: bool) -> Self {
        self.notify_errors = enabled;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn cache(&self) -> &TaskCache {
        &self.cache
    }

    /// Shared handle to the in-flight registry, for views that mark busy rows
    pub fn tracker(&self) -> &MutationTracker {
        &self.tracker
    }

    pub fn in_flight(&self) -> Vec<PendingMutation> {
        self.tracker.in_flight()
    }

    pub fn is_pending(&self, id: &TaskId) -> bool {
        self.tracker.is_pending(id)
    }

    // ========================
    // Queries
    // ========================

    /// Fetch the full list and install it.
    ///
    /// Only the most recently started refresh may install its result, so a
    /// slow older response cannot overwrite a newer one.
    pub async fn refresh(&self) -> SyncResult<()> {
        let generation = self.fetch_generation.get() + 1;
        self.fetch_generation.set(generation);
        self.cache.set_load_state(LoadState::Loading);

        let result = self.api.list_tasks().await;
        let latest = generation == self.fetch_generation.get();
        match result {
            Ok(tasks) => {
                if latest {
                    log::debug!("[SYNC] Loaded {} tasks", tasks.len());
                    self.cache.replace(tasks);
                } else {
                    log::debug!("[SYNC] Discarding superseded fetch #{}", generation);
                }
                Ok(())
            }
            Err(e) => {
                if latest {
                    self.cache.set_load_state(LoadState::Failed(e.to_string()));
                }
                self.report("load tasks", &e);
                Err(e)
            }
        }
    }

    /// Throw away speculative state by refetching. Errors are already reported.
    async fn invalidate(&self) {
        log::warn!("[SYNC] Invalidating task cache");
        let _ = self.refresh().await;
    }

    // ========================
    // Mutations
    // ========================

    /// Create a task. Blank text is ignored and yields `Ok(None)`.
    pub async fn create(&self, text: &str) -> SyncResult<Option<Task>> {
        if text.trim().is_empty() {
            log::debug!("[SYNC] Ignoring create with empty text");
            return Ok(None);
        }

        let temp_id = self.temp_ids.next_id();
        let speculative = Task::new(temp_id.clone(), text);
        let seq = self.dispatch(MutationKind::Create, &temp_id);
        self.cache.patch(|tasks| patch::insert_speculative(tasks, speculative));

        match self.api.create_task(text).await {
            Ok(created) => {
                let result = created.clone();
                self.commit(seq);
                self.cache.patch(|tasks| patch::reconcile_created(tasks, &temp_id, created));
                log::debug!("[SYNC] Created {} (was {})", result.id, temp_id);
                Ok(Some(result))
            }
            Err(e) => {
                self.roll_back(seq);
                self.cache.patch(|tasks| {
                    patch::remove(tasks, &temp_id);
                });
                self.report("create task", &e);
                if !e.is_rejection() {
                    // the server may have created it anyway
                    self.invalidate().await;
                }
                Err(e)
            }
        }
    }

    /// Rename a task. Blank text is ignored.
    pub async fn update(&self, id: &TaskId, text: &str) -> SyncResult<()> {
        if text.trim().is_empty() {
            log::debug!("[SYNC] Ignoring update of {} with empty text", id);
            return Ok(());
        }
        if self.skip_temporary(MutationKind::Update, id) {
            return Ok(());
        }

        let seq = self.dispatch(MutationKind::Update, id);
        let previous = self.cache.patch(|tasks| patch::set_text(tasks, id, text));

        match self.api.update_task(id, text).await {
            Ok(confirmed) => {
                self.commit(seq);
                self.cache.patch(|tasks| {
                    patch::set_text(tasks, id, &confirmed.text);
                });
                Ok(())
            }
            Err(e) => {
                self.roll_back(seq);
                if let Some(previous) = previous {
                    self.cache.patch(|tasks| {
                        patch::set_text(tasks, id, &previous);
                    });
                }
                self.report("update task", &e);
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: &TaskId) -> SyncResult<()> {
        if self.skip_temporary(MutationKind::Delete, id) {
            return Ok(());
        }

        let seq = self.dispatch(MutationKind::Delete, id);
        let removed = self.cache.patch(|tasks| patch::remove(tasks, id));
        if removed.is_none() {
            log::debug!("[SYNC] Deleting {} which is not cached", id);
        }

        match self.api.delete_task(id).await {
            Ok(()) => {
                self.commit(seq);
                self.cache.patch(|tasks| {
                    patch::remove(tasks, id);
                });
                Ok(())
            }
            Err(e) => {
                self.roll_back(seq);
                self.report("delete task", &e);
                self.invalidate().await;
                Err(e)
            }
        }
    }

    pub async fn complete(&self, id: &TaskId) -> SyncResult<()> {
        self.set_completion(id, true).await
    }

    pub async fn incomplete(&self, id: &TaskId) -> SyncResult<()> {
        self.set_completion(id, false).await
    }

    async fn set_completion(&self, id: &TaskId, completed: bool) -> SyncResult<()> {
        let kind = if completed {
            MutationKind::Complete
        } else {
            MutationKind::Incomplete
        };
        if self.skip_temporary(kind, id) {
            return Ok(());
        }

        let now = now_millis();
        let seq = self.dispatch(kind, id);
        let saved = self
            .cache
            .patch(|tasks| patch::set_completed(tasks, id, completed, now));

        let result = if completed {
            self.api.complete_task(id).await
        } else {
            self.api.incomplete_task(id).await
        };

        match result {
            Ok(confirmed) => {
                self.commit(seq);
                self.cache.patch(|tasks| patch::merge_completion(tasks, &confirmed));
                Ok(())
            }
            Err(e) => {
                self.roll_back(seq);
                if let Some(saved) = saved {
                    self.cache
                        .patch(|tasks| patch::restore_completion(tasks, id, saved));
                }
                self.report(&format!("{} task", kind), &e);
                Err(e)
            }
        }
    }

    // ========================
    // Bulk actions
    // ========================

    /// Complete every task shown under `filter` that is still open.
    pub async fn complete_visible(&self, filter: TaskFilter) -> BulkOutcome {
        let targets: Vec<TaskId> = filter
            .apply(&self.cache.read())
            .filter(|t| !t.completed && !t.id.is_temporary())
            .map(|t| t.id.clone())
            .collect();
        let results = join_all(targets.iter().map(|id| self.complete(id))).await;
        BulkOutcome::from_results(&results)
    }

    /// Delete every completed task.
    pub async fn clear_completed(&self) -> BulkOutcome {
        let targets: Vec<TaskId> = self
            .cache
            .read()
            .iter()
            .filter(|t| t.completed && !t.id.is_temporary())
            .map(|t| t.id.clone())
            .collect();
        let results = join_all(targets.iter().map(|id| self.delete(id))).await;
        BulkOutcome::from_results(&results)
    }

    // ========================
    // Helpers
    // ========================

    fn dispatch(&self, kind: MutationKind, id: &TaskId) -> u64 {
        let seq = self.tracker.dispatch(kind, id.clone());
        log::debug!("[SYNC] Dispatched #{} {} {}", seq, kind, id);
        seq
    }

    fn commit(&self, seq: u64) {
        self.settle(self.tracker.commit(seq));
    }

    fn roll_back(&self, seq: u64) {
        self.settle(self.tracker.roll_back(seq));
    }

    fn settle(&self, mutation: Option<PendingMutation>) {
        let Some(mutation) = mutation else {
            return;
        };
        debug_assert!(mutation.state.is_terminal());
        log::debug!(
            "[SYNC] Settled #{} {} {} as {:?}",
            mutation.seq,
            mutation.kind,
            mutation.task_id,
            mutation.state
        );
    }

    /// Rows still waiting for their create response have no server id yet.
    fn skip_temporary(&self, kind: MutationKind, id: &TaskId) -> bool {
        if id.is_temporary() {
            log::warn!("[SYNC] Skipping {} of unconfirmed task {}", kind, id);
            return true;
        }
        false
    }

    fn report(&self, action: &str, error: &SyncError) {
        log::error!("[SYNC] {} failed: {}", action, error);
        if self.notify_errors {
            self.notifier.notify(&format!("API error: {}", error));
        }
    }
}
