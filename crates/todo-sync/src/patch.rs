//! Cache Patches
//!
//! The speculative edits and their inverses, as plain functions over the task
//! list. The coordinator runs them inside `TaskCache::patch`.

use crate::task::{Task, TaskId};

fn find_mut<'a>(tasks: &'a mut [Task], id: &TaskId) -> Option<&'a mut Task> {
    tasks.iter_mut().find(|t| &t.id == id)
}

/// Completion fields saved before a flag flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSnapshot {
    pub completed: bool,
    pub completed_date: Option<i64>,
}

/// Append the speculative row for a create.
pub fn insert_speculative(tasks: &mut Vec<Task>, task: Task) {
    tasks.push(task);
}

/// Swap the speculative row for the task the server created.
///
/// Falls back to appending when the row is gone, and never produces two
/// entries with the server id.
pub fn reconcile_created(tasks: &mut Vec<Task>, temp_id: &TaskId, created: Task) {
    if let Some(existing) = find_mut(tasks, &created.id) {
        *existing = created;
        tasks.retain(|t| &t.id != temp_id);
        return;
    }
    match find_mut(tasks, temp_id) {
        Some(row) => *row = created,
        None => tasks.push(created),
    }
}

/// Remove a task. Returns the removed entry.
pub fn remove(tasks: &mut Vec<Task>, id: &TaskId) -> Option<Task> {
    let index = tasks.iter().position(|t| &t.id == id)?;
    Some(tasks.remove(index))
}

/// Replace the text of one task. Returns the previous text.
pub fn set_text(tasks: &mut [Task], id: &TaskId, text: &str) -> Option<String> {
    let task = find_mut(tasks, id)?;
    Some(std::mem::replace(&mut task.text, text.to_string()))
}

/// Flip the completion flag. Returns the values to restore on rollback.
pub fn set_completed(
    tasks: &mut [Task],
    id: &TaskId,
    completed: bool,
    now: i64,
) -> Option<CompletionSnapshot> {
    let task = find_mut(tasks, id)?;
    let previous = CompletionSnapshot {
        completed: task.completed,
        completed_date: task.completed_date,
    };
    if completed != task.completed {
        task.completed = completed;
        task.completed_date = if completed { Some(now) } else { None };
    }
    Some(previous)
}

pub fn restore_completion(tasks: &mut [Task], id: &TaskId, snapshot: CompletionSnapshot) {
    if let Some(task) = find_mut(tasks, id) {
        task.completed = snapshot.completed;
        task.completed_date = snapshot.completed_date;
    }
}

/// Take the server's completion fields for a task after a confirmed flip.
pub fn merge_completion(tasks: &mut [Task], confirmed: &Task) {
    if let Some(task) = find_mut(tasks, &confirmed.id) {
        task.completed = confirmed.completed;
        task.completed_date = confirmed.completed_date;
    }
}
