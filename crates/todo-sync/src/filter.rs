//! Client-side filtering and list statistics

use std::fmt;

use crate::task::Task;

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    NotCompleted,
}

impl TaskFilter {
    /// Selector order
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Completed, TaskFilter::NotCompleted];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::NotCompleted => !task.completed,
        }
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> impl Iterator<Item = &'a Task> + 'a {
        let filter = *self;
        tasks.iter().filter(move |t| filter.matches(t))
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Completed => "Completed",
            TaskFilter::NotCompleted => "Not completed",
        }
    }
}

/// Counter shown under the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }
}

impl fmt::Display for TaskStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Completed: {}/{}", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        let mut done = Task::new("1", "done");
        done.completed = true;
        vec![done, Task::new("2", "open"), Task::new("3", "open too")]
    }

    #[test]
    fn test_filters() {
        let tasks = tasks();
        assert_eq!(TaskFilter::All.apply(&tasks).count(), 3);
        assert_eq!(TaskFilter::Completed.apply(&tasks).count(), 1);
        let open: Vec<&str> = TaskFilter::NotCompleted.apply(&tasks).map(|t| t.id.as_str()).collect();
        assert_eq!(open, vec!["2", "3"]);
    }

    #[test]
    fn test_stats_display() {
        assert_eq!(TaskStats::of(&tasks()).to_string(), "Completed: 1/3");
        assert_eq!(TaskStats::of(&[]).to_string(), "Completed: 0/0");
    }
}
