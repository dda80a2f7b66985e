//! Task Cache Store
//!
//! Single in-memory list of all tasks. Every change goes through `patch` or
//! `replace`, each of which swaps in a complete new snapshot and then
//! notifies subscribers.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::task::{Task, TaskId};

/// Where the cache stands relative to the server
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing fetched yet
    #[default]
    Idle,
    Loading,
    Ready,
    /// Last fetch failed; the tasks held are the previous (stale) list
    Failed(String),
}

/// What subscribers get after every change
#[derive(Debug, Clone)]
pub struct CacheSnapshot {
    pub tasks: Rc<Vec<Task>>,
    pub version: u64,
    pub load_state: LoadState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&CacheSnapshot)>;

#[derive(Default)]
struct CacheState {
    tasks: Rc<Vec<Task>>,
    version: u64,
    load_state: LoadState,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

/// Shared handle to the task list. Clones point at the same cache.
#[derive(Clone, Default)]
pub struct TaskCache {
    state: Rc<RefCell<CacheState>>,
}

impl fmt::Debug for TaskCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("TaskCache")
            .field("tasks", &state.tasks.len())
            .field("version", &state.version)
            .field("load_state", &state.load_state)
            .finish()
    }
}

impl TaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn read(&self) -> Rc<Vec<Task>> {
        Rc::clone(&self.state.borrow().tasks)
    }

    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.state.borrow().tasks.iter().find(|t| &t.id == id).cloned()
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.state.borrow().tasks.iter().any(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.state.borrow().version
    }

    pub fn load_state(&self) -> LoadState {
        self.state.borrow().load_state.clone()
    }

    pub fn snapshot(&self) -> CacheSnapshot {
        let state = self.state.borrow();
        CacheSnapshot {
            tasks: Rc::clone(&state.tasks),
            version: state.version,
            load_state: state.load_state.clone(),
        }
    }

    /// Apply `mutator` to a copy of the list and install the copy as the new
    /// snapshot. Readers only ever see the list before or after the call.
    pub fn patch<R>(&self, mutator: impl FnOnce(&mut Vec<Task>) -> R) -> R {
        let mut next = self.read().as_ref().clone();
        let result = mutator(&mut next);
        debug_assert!(has_unique_ids(&next), "patch produced duplicate task ids");
        {
            let mut state = self.state.borrow_mut();
            state.tasks = Rc::new(next);
            state.version += 1;
        }
        self.notify();
        result
    }

    /// Install a list fetched from the server and mark the cache ready.
    pub fn replace(&self, tasks: Vec<Task>) {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(tasks.len());
        for task in tasks {
            if seen.insert(task.id.clone()) {
                unique.push(task);
            } else {
                log::warn!("[CACHE] Dropping duplicate task id {} from server list", task.id);
            }
        }
        {
            let mut state = self.state.borrow_mut();
            state.tasks = Rc::new(unique);
            state.version += 1;
            state.load_state = LoadState::Ready;
        }
        self.notify();
    }

    pub fn set_load_state(&self, load_state: LoadState) {
        {
            let mut state = self.state.borrow_mut();
            if state.load_state == load_state {
                return;
            }
            state.load_state = load_state;
        }
        self.notify();
    }

    pub fn subscribe(&self, subscriber: impl Fn(&CacheSnapshot) + 'static) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;
        let subscriber: Subscriber = Rc::new(subscriber);
        state.subscribers.push((id, subscriber));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
    }

    // Subscribers run with no borrow held, so they may read the cache.
    fn notify(&self) {
        let subscribers: Vec<Subscriber> = self
            .state
            .borrow()
            .subscribers
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect();
        if subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}

fn has_unique_ids(tasks: &[Task]) -> bool {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks.iter().all(|t| seen.insert(&t.id))
}
