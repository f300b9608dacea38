//! Goal progress bars

use std::rc::Rc;
use std::time::Duration;

use super::surface::{report, DisplaySurface};
use crate::animation::{defer, AnimationHandle, FrameScheduler};

/// A goal card and how far along its progress bar is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub card: &'static str,
    /// The bar element inside the card
    pub fill: &'static str,
    pub width_percent: f64,
}

pub const GOAL_PROGRESS: [GoalProgress; 3] = [
    GoalProgress {
        card: "goal-1",
        fill: "goal-1-fill",
        width_percent: 5.8,
    },
    GoalProgress {
        card: "goal-2",
        fill: "goal-2-fill",
        width_percent: 0.0,
    },
    GoalProgress {
        card: "goal-3",
        fill: "goal-3-fill",
        width_percent: 3.5,
    },
];

impl GoalProgress {
    /// Goal whose card is `card`
    pub fn for_card(card: &str) -> Option<&'static GoalProgress> {
        GOAL_PROGRESS.iter().find(|goal| goal.card == card)
    }
}

/// Set every bar to its target width. Returns how many bars were found.
pub fn apply_initial_widths(surface: &dyn DisplaySurface) -> usize {
    GOAL_PROGRESS
        .iter()
        .filter(|goal| {
            let result = surface.set_width(goal.fill, goal.width_percent);
            let applied = result.is_ok();
            report("progress", result);
            applied
        })
        .count()
}

/// Collapse the bar to 0% and grow it back to its target after `delay`.
///
/// Returns `None` when the bar element is missing.
pub fn replay_progress(
    goal: &GoalProgress,
    surface: Rc<dyn DisplaySurface>,
    scheduler: Rc<dyn FrameScheduler>,
    delay: Duration,
) -> Option<AnimationHandle> {
    if let Err(e) = surface.set_width(goal.fill, 0.0) {
        tracing::warn!(goal = goal.card, error = %e, "Progress bar not found");
        return None;
    }

    let fill = goal.fill;
    let width = goal.width_percent;
    Some(defer(scheduler, delay, move || {
        report("progress", surface.set_width(fill, width));
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualFrameLoop;
    use crate::page::MemorySurface;

    #[test]
    fn test_initial_widths() {
        let surface = MemorySurface::with_elements(["goal-1-fill", "goal-3-fill"]);
        assert_eq!(apply_initial_widths(&surface), 2);
        assert_eq!(surface.width("goal-1-fill"), Some(5.8));
        assert_eq!(surface.width("goal-3-fill"), Some(3.5));
    }

    #[test]
    fn test_replay_restores_width_after_delay() {
        let surface = Rc::new(MemorySurface::with_elements(["goal-1-fill"]));
        let frames = Rc::new(ManualFrameLoop::new(Duration::from_millis(16)));
        let goal = GoalProgress::for_card("goal-1").unwrap();

        let handle = replay_progress(
            goal,
            surface.clone(),
            frames.clone(),
            Duration::from_millis(200),
        )
        .unwrap();
        assert_eq!(surface.width("goal-1-fill"), Some(0.0));

        frames.run_until_idle(100);
        assert!(handle.is_finished());
        assert_eq!(surface.width("goal-1-fill"), Some(5.8));
    }

    #[test]
    fn test_replay_missing_bar() {
        let surface = Rc::new(MemorySurface::new());
        let frames = Rc::new(ManualFrameLoop::new(Duration::from_millis(16)));
        let goal = GoalProgress::for_card("goal-2").unwrap();

        assert!(replay_progress(goal, surface, frames.clone(), Duration::ZERO).is_none());
        assert_eq!(frames.pending(), 0);
    }
}
