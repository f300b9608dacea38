//! Eased value animator

use std::rc::Rc;
use std::time::Duration;

use super::{AnimationHandle, AnimationRun, Easing, FrameScheduler};
use crate::format::AmountValue;

type FrameSink = Box<dyn FnMut(AmountValue)>;

/// Drives [`AnimationRun`]s on a [`FrameScheduler`].
///
/// Runs started from one animator are independent of each other; each owns
/// its own state and handle.
#[derive(Clone)]
pub struct Animator {
    scheduler: Rc<dyn FrameScheduler>,
    easing: Easing,
}

impl Animator {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn scheduler(&self) -> Rc<dyn FrameScheduler> {
        self.scheduler.clone()
    }

    /// Animate from `start` to `end` over `duration`, calling `on_frame` with
    /// each display value.
    ///
    /// Values are monotone in the direction of travel and the last one is
    /// exactly `end`. When there is nothing to interpolate (`start == end`
    /// or a zero duration) `end` is emitted before this returns and no frame
    /// is requested.
    pub fn animate<F>(
        &self,
        start: AmountValue,
        end: AmountValue,
        duration: Duration,
        on_frame: F,
    ) -> AnimationHandle
    where
        F: FnMut(AmountValue) + 'static,
    {
        let handle = AnimationHandle::new();
        let mut on_frame: FrameSink = Box::new(on_frame);

        if start == end || duration.is_zero() {
            on_frame(end);
            handle.finish();
            return handle;
        }

        tracing::debug!(
            start,
            end,
            duration_ms = duration.as_millis() as u64,
            "Animation started"
        );

        let run = AnimationRun::new(start, end, duration).with_easing(self.easing);
        let started_at = self.scheduler.now();
        schedule_frame(self.scheduler.clone(), handle.clone(), run, started_at, on_frame);

        handle
    }
}

fn schedule_frame(
    scheduler: Rc<dyn FrameScheduler>,
    handle: AnimationHandle,
    mut run: AnimationRun,
    started_at: Duration,
    mut on_frame: FrameSink,
) {
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move |now| {
        if !handle.is_active() {
            return;
        }

        run.advance_to(now.saturating_sub(started_at));
        on_frame(run.value());

        if run.is_complete() {
            handle.finish();
            tracing::debug!(end = run.end, "Animation finished");
        } else if handle.is_active() {
            schedule_frame(next, handle, run, started_at, on_frame);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualFrameLoop;
    use std::cell::{Cell, RefCell};

    fn setup() -> (Rc<ManualFrameLoop>, Animator) {
        let frames = Rc::new(ManualFrameLoop::new(Duration::from_millis(16)));
        let animator = Animator::new(frames.clone());
        (frames, animator)
    }

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        (values, move |v| sink.borrow_mut().push(v))
    }

    #[test]
    fn test_counter_reaches_end_exactly() {
        let (frames, animator) = setup();
        let (values, on_frame) = recorder();

        let handle = animator.animate(0.0, 31_896_000.0, Duration::from_millis(2000), on_frame);
        frames.run_until_idle(1_000);

        let values = values.borrow();
        assert_eq!(values.len(), 125);
        assert_eq!(*values.last().unwrap(), 31_896_000.0);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values[..values.len() - 1].iter().all(|v| v.fract() == 0.0));
        assert!(handle.is_finished());
    }

    #[test]
    fn test_descending_values_are_non_increasing() {
        let (frames, animator) = setup();
        let (values, on_frame) = recorder();

        animator.animate(500.0, 20.0, Duration::from_millis(300), on_frame);
        frames.run_until_idle(1_000);

        let values = values.borrow();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*values.last().unwrap(), 20.0);
    }

    #[test]
    fn test_equal_endpoints_emit_once_immediately() {
        let (frames, animator) = setup();
        let (values, on_frame) = recorder();

        let handle = animator.animate(42.0, 42.0, Duration::from_millis(1000), on_frame);

        assert_eq!(*values.borrow(), vec![42.0]);
        assert!(handle.is_finished());
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_cancel_stops_further_frames() {
        let (frames, animator) = setup();
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let handle = animator.animate(0.0, 1000.0, Duration::from_millis(1000), move |_| {
            counter.set(counter.get() + 1);
        });

        frames.tick();
        frames.tick();
        frames.tick();
        assert_eq!(calls.get(), 3);

        assert!(handle.cancel());
        frames.run_until_idle(1_000);

        assert_eq!(calls.get(), 3);
        assert!(handle.is_cancelled());
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_cancel_from_inside_frame() {
        let (frames, animator) = setup();
        let calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<AnimationHandle>>> = Rc::new(RefCell::new(None));

        let counter = calls.clone();
        let own_handle = slot.clone();
        let handle = animator.animate(0.0, 1000.0, Duration::from_millis(1000), move |_| {
            counter.set(counter.get() + 1);
            if counter.get() == 2 {
                if let Some(h) = own_handle.borrow().as_ref() {
                    h.cancel();
                }
            }
        });
        *slot.borrow_mut() = Some(handle);

        frames.run_until_idle(1_000);
        assert_eq!(calls.get(), 2);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_concurrent_runs_do_not_interfere() {
        let (frames, animator) = setup();
        let (first, first_sink) = recorder();
        let (second, second_sink) = recorder();

        let a = animator.animate(0.0, 100.0, Duration::from_millis(160), first_sink);
        animator.animate(1000.0, 0.0, Duration::from_millis(320), second_sink);

        frames.tick();
        a.cancel();
        frames.run_until_idle(1_000);

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 20);
        assert_eq!(*second.borrow().last().unwrap(), 0.0);
    }

    #[test]
    fn test_linear_easing() {
        let (frames, animator) = setup();
        let animator = animator.with_easing(Easing::Linear);
        let (values, on_frame) = recorder();

        animator.animate(0.0, 160.0, Duration::from_millis(160), on_frame);
        frames.run_until_idle(100);

        assert_eq!(values.borrow()[0], 16.0);
    }
}
