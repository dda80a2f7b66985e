//! Task Entity
//!
//! Data structures matching the REST backend's JSON.

use std::cell::Cell;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix reserved for client-generated ids
pub const TEMP_ID_PREFIX: &str = "temp-";

/// Opaque task identifier, assigned by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for ids handed out by [`TempIdGenerator`] that the server never saw
    pub fn is_temporary(&self) -> bool {
        self.0.starts_with(TEMP_ID_PREFIX)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A to-do entry (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub created_date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<i64>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            created_date: now_millis(),
            completed_date: None,
        }
    }
}

/// Body of `POST /tasks` and `POST /tasks/{id}`
#[derive(Debug, Serialize)]
pub struct TaskText<'a> {
    pub text: &'a str,
}

/// Hands out `temp-<millis>-<n>` ids for speculative inserts.
///
/// The counter keeps ids distinct even when two tasks are created within the
/// same millisecond.
#[derive(Debug, Default)]
pub struct TempIdGenerator {
    counter: Cell<u64>,
}

impl TempIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> TaskId {
        let n = self.counter.get();
        self.counter.set(n + 1);
        TaskId(format!("{}{}-{}", TEMP_ID_PREFIX, now_millis(), n))
    }
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
