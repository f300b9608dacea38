//! Cancellation handles

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    Finished,
    Cancelled,
}

/// Shared flag checked by a run before every frame it emits or schedules.
///
/// Clones observe the same run.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    state: Rc<Cell<RunState>>,
}

impl AnimationHandle {
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(RunState::Running)),
        }
    }

    /// Stop the run. No further frames are emitted once this returns.
    ///
    /// Returns `false` if the run had already finished or been cancelled.
    pub fn cancel(&self) -> bool {
        if self.state.get() == RunState::Running {
            self.state.set(RunState::Cancelled);
            true
        } else {
            false
        }
    }

    /// Still emitting frames
    pub fn is_active(&self) -> bool {
        self.state.get() == RunState::Running
    }

    /// Reached its terminal frame
    pub fn is_finished(&self) -> bool {
        self.state.get() == RunState::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.get() == RunState::Cancelled
    }

    pub(crate) fn finish(&self) {
        if self.state.get() == RunState::Running {
            self.state.set(RunState::Finished);
        }
    }

    /// Whether two handles refer to the same run
    pub fn same_run(&self, other: &AnimationHandle) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}
