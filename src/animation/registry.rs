//! Per-target run bookkeeping

use std::cell::RefCell;
use std::collections::HashMap;

use super::AnimationHandle;

/// Tracks the current run for each display target.
///
/// Registering a run for a target cancels whatever was running there.
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    runs: RefCell<HashMap<String, AnimationHandle>>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `handle` as the run for `target`, cancelling the previous one
    pub fn insert(&self, target: &str, handle: AnimationHandle) {
        let previous = self.runs.borrow_mut().insert(target.to_string(), handle);

        if let Some(previous) = previous {
            if previous.cancel() {
                tracing::debug!(target = %target, "Superseded running animation");
            }
        }
    }

    /// Cancel the run on `target`. Returns whether a running run was stopped.
    pub fn cancel(&self, target: &str) -> bool {
        self.runs
            .borrow_mut()
            .remove(target)
            .map(|handle| handle.cancel())
            .unwrap_or(false)
    }

    /// Cancel every run. Returns how many were still running.
    pub fn cancel_all(&self) -> usize {
        self.runs
            .borrow_mut()
            .drain()
            .filter(|(_, handle)| handle.cancel())
            .count()
    }

    pub fn is_active(&self, target: &str) -> bool {
        self.runs
            .borrow()
            .get(target)
            .map(|handle| handle.is_active())
            .unwrap_or(false)
    }

    /// Targets with a run still in progress, sorted. Completed entries are
    /// dropped.
    pub fn active(&self) -> Vec<String> {
        let mut runs = self.runs.borrow_mut();
        runs.retain(|_, handle| handle.is_active());

        let mut targets: Vec<String> = runs.keys().cloned().collect();
        targets.sort();
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_writer_wins() {
        let registry = AnimationRegistry::new();
        let first = AnimationHandle::new();
        let second = AnimationHandle::new();

        registry.insert("total-amount", first.clone());
        registry.insert("total-amount", second.clone());

        assert!(first.is_cancelled());
        assert!(second.is_active());
        assert_eq!(registry.active(), vec!["total-amount".to_string()]);
    }

    #[test]
    fn test_cancel_all() {
        let registry = AnimationRegistry::new();
        let a = AnimationHandle::new();
        let b = AnimationHandle::new();
        let done = AnimationHandle::new();
        done.finish();

        registry.insert("a", a.clone());
        registry.insert("b", b.clone());
        registry.insert("done", done);

        assert_eq!(registry.cancel_all(), 2);
        assert!(a.is_cancelled() && b.is_cancelled());
        assert!(registry.active().is_empty());
    }

    #[test]
    fn test_active_prunes_finished_runs() {
        let registry = AnimationRegistry::new();
        let handle = AnimationHandle::new();
        registry.insert("goal-1", handle.clone());

        handle.finish();
        assert!(!registry.is_active("goal-1"));
        assert!(registry.active().is_empty());
        assert!(!registry.cancel("goal-1"));
    }
}
