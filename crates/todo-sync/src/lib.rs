//! To-Do Sync
//!
//! Optimistic client-side cache for the to-do REST API:
//! - task: entities and temporary ids
//! - cache: snapshot store with change notification
//! - patch: speculative edits and their inverses
//! - coordinator: mutation protocol (patch, request, commit or roll back)
//! - api / http: the REST boundary and its `reqwest` implementation

mod api;
mod cache;
mod config;
mod coordinator;
mod error;
mod filter;
mod http;
mod mutation;
mod notify;
pub mod patch;
mod task;

#[cfg(test)]
mod mock;

pub use api::TaskApi;
pub use cache::{CacheSnapshot, LoadState, SubscriptionId, TaskCache};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use coordinator::{BulkOutcome, MutationCoordinator};
pub use error::{SyncError, SyncResult};
pub use filter::{TaskFilter, TaskStats};
pub use http::HttpTaskApi;
pub use mutation::{MutationKind, MutationState, MutationTracker, PendingMutation};
pub use notify::{Notifier, SilentNotifier};
pub use task::{Task, TaskId, TaskText, TempIdGenerator, TEMP_ID_PREFIX};
