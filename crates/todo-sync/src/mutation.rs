//! Pending Mutations
//!
//! Every optimistic change is recorded from the moment its patch is applied
//! until the server answers: `Dispatched -> Committed | RolledBack`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::task::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    Complete,
    Incomplete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
            MutationKind::Complete => "complete",
            MutationKind::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationState {
    /// Patch applied, request in flight
    Dispatched,
    /// Server confirmed
    Committed,
    /// Server failed; patch undone or cache invalidated
    RolledBack,
}

impl MutationState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MutationState::Dispatched)
    }

    /// Next state, or `None` if the move is not allowed.
    pub fn transition(self, to: MutationState) -> Option<MutationState> {
        match (self, to) {
            (MutationState::Dispatched, MutationState::Committed)
            | (MutationState::Dispatched, MutationState::RolledBack) => Some(to),
            _ => None,
        }
    }
}

/// One speculative change and where it is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMutation {
    pub seq: u64,
    pub kind: MutationKind,
    /// Target task; for creates this is the temporary id
    pub task_id: TaskId,
    pub state: MutationState,
}

#[derive(Default)]
struct TrackerState {
    next_seq: u64,
    in_flight: BTreeMap<u64, PendingMutation>,
}

/// Registry of mutations still waiting for the server
#[derive(Clone, Default)]
pub struct MutationTracker {
    state: Rc<RefCell<TrackerState>>,
}

impl MutationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, kind: MutationKind, task_id: TaskId) -> u64 {
        let mut state = self.state.borrow_mut();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.in_flight.insert(
            seq,
            PendingMutation {
                seq,
                kind,
                task_id,
                state: MutationState::Dispatched,
            },
        );
        seq
    }

    pub fn commit(&self, seq: u64) -> Option<PendingMutation> {
        self.resolve(seq, MutationState::Committed)
    }

    pub fn roll_back(&self, seq: u64) -> Option<PendingMutation> {
        self.resolve(seq, MutationState::RolledBack)
    }

    /// Move a mutation to its terminal state and drop it from the registry.
    fn resolve(&self, seq: u64, to: MutationState) -> Option<PendingMutation> {
        let mut state = self.state.borrow_mut();
        let mut mutation = state.in_flight.remove(&seq)?;
        match mutation.state.transition(to) {
            Some(next) => mutation.state = next,
            None => {
                log::warn!("[SYNC] Ignoring {:?} -> {:?} for mutation #{}", mutation.state, to, seq);
            }
        }
        Some(mutation)
    }

    /// In-flight mutations, oldest first
    pub fn in_flight(&self) -> Vec<PendingMutation> {
        self.state.borrow().in_flight.values().cloned().collect()
    }

    pub fn is_pending(&self, task_id: &TaskId) -> bool {
        self.state
            .borrow()
            .in_flight
            .values()
            .any(|m| &m.task_id == task_id)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dispatched_can_move() {
        use MutationState::*;
        assert_eq!(Dispatched.transition(Committed), Some(Committed));
        assert_eq!(Dispatched.transition(RolledBack), Some(RolledBack));
        assert_eq!(Committed.transition(RolledBack), None);
        assert_eq!(RolledBack.transition(Committed), None);
        assert_eq!(Dispatched.transition(Dispatched), None);
        assert!(!Dispatched.is_terminal());
        assert!(Committed.is_terminal());
    }

    #[test]
    fn test_tracker_lifecycle() {
        let tracker = MutationTracker::new();
        let a = tracker.dispatch(MutationKind::Delete, TaskId::from("1"));
        let b = tracker.dispatch(MutationKind::Update, TaskId::from("2"));

        assert_eq!(tracker.len(), 2);
        assert!(tracker.is_pending(&TaskId::from("1")));

        let done = tracker.commit(a).unwrap();
        assert_eq!(done.state, MutationState::Committed);
        assert!(!tracker.is_pending(&TaskId::from("1")));

        let failed = tracker.roll_back(b).unwrap();
        assert_eq!(failed.state, MutationState::RolledBack);
        assert!(tracker.is_empty());

        // already resolved
        assert!(tracker.commit(a).is_none());
    }

    #[test]
    fn test_in_flight_is_ordered() {
        let tracker = MutationTracker::new();
        tracker.dispatch(MutationKind::Complete, TaskId::from("b"));
        tracker.dispatch(MutationKind::Incomplete, TaskId::from("a"));
        let kinds: Vec<MutationKind> = tracker.in_flight().iter().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![MutationKind::Complete, MutationKind::Incomplete]);
    }
}
