//! Frame Scheduling
//!
//! The "notify next frame" primitive animations are built on, plus a
//! deterministic frame loop for running the dashboard outside a browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::AnimationHandle;

/// Callback run on the next frame with the frame timestamp
pub type FrameCallback = Box<dyn FnOnce(Duration)>;

/// Source of display-refresh callbacks.
///
/// Timestamps from [`now`](FrameScheduler::now) and those passed to frame
/// callbacks share one monotonic clock.
pub trait FrameScheduler {
    /// Current time on the scheduler's clock
    fn now(&self) -> Duration;

    /// Run `callback` once on the next frame
    fn request_frame(&self, callback: FrameCallback);
}

/// Fixed-step frame loop with a virtual clock.
///
/// Each [`tick`](ManualFrameLoop::tick) advances the clock by one step and
/// runs the callbacks queued before the tick. Callbacks queued during a tick
/// run on the following one.
pub struct ManualFrameLoop {
    now: Cell<Duration>,
    step: Duration,
    pending: RefCell<Vec<FrameCallback>>,
}

impl ManualFrameLoop {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step,
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Frame interval
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Advance one frame and run what was queued. Returns the number of
    /// callbacks run.
    pub fn tick(&self) -> usize {
        let now = self.now.get() + self.step;
        self.now.set(now);

        let callbacks = std::mem::take(&mut *self.pending.borrow_mut());
        let count = callbacks.len();
        for callback in callbacks {
            callback(now);
        }
        count
    }

    /// Tick until nothing is queued or `max_frames` frames have run.
    /// Returns the number of frames ticked.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while self.pending() > 0 && frames < max_frames {
            self.tick();
            frames += 1;
        }
        frames
    }

    /// Tick for at least `span` of virtual time
    pub fn run_for(&self, span: Duration) {
        let until = self.now.get() + span;
        while self.now.get() < until {
            self.tick();
        }
    }
}

impl FrameScheduler for ManualFrameLoop {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push(callback);
    }
}

/// Run `callback` on the first frame at least `delay` after now.
///
/// Cancelling the returned handle before then drops the callback unrun.
pub fn defer<F>(scheduler: Rc<dyn FrameScheduler>, delay: Duration, callback: F) -> AnimationHandle
where
    F: FnOnce() + 'static,
{
    let handle = AnimationHandle::new();
    let deadline = scheduler.now() + delay;
    wait_until(scheduler, handle.clone(), deadline, Box::new(callback));
    handle
}

fn wait_until(
    scheduler: Rc<dyn FrameScheduler>,
    handle: AnimationHandle,
    deadline: Duration,
    callback: Box<dyn FnOnce()>,
) {
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move |now| {
        if !handle.is_active() {
            return;
        }
        if now >= deadline {
            handle.finish();
            callback();
        } else {
            wait_until(next, handle, deadline, callback);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_loop() -> Rc<ManualFrameLoop> {
        Rc::new(ManualFrameLoop::new(Duration::from_millis(16)))
    }

    #[test]
    fn test_tick_runs_queued_callbacks_once() {
        let frames = frame_loop();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        frames.request_frame(Box::new(move |now| sink.borrow_mut().push(now)));

        assert_eq!(frames.tick(), 1);
        assert_eq!(frames.tick(), 0);
        assert_eq!(*seen.borrow(), vec![Duration::from_millis(16)]);
    }

    #[test]
    fn test_callbacks_queued_during_tick_wait_for_next_frame() {
        let frames = frame_loop();
        let count = Rc::new(Cell::new(0));

        let inner_frames = frames.clone();
        let inner_count = count.clone();
        frames.request_frame(Box::new(move |_| {
            inner_count.set(inner_count.get() + 1);
            let again = inner_count.clone();
            inner_frames.request_frame(Box::new(move |_| again.set(again.get() + 1)));
        }));

        frames.tick();
        assert_eq!(count.get(), 1);
        assert_eq!(frames.pending(), 1);

        frames.tick();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_defer_waits_for_delay() {
        let frames = frame_loop();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        let handle = defer(frames.clone(), Duration::from_millis(200), move || flag.set(true));

        frames.run_for(Duration::from_millis(192));
        assert!(!fired.get());
        assert!(handle.is_active());

        frames.tick();
        assert!(fired.get());
        assert!(handle.is_finished());
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_cancelled_defer_never_fires() {
        let frames = frame_loop();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        let handle = defer(frames.clone(), Duration::from_millis(100), move || flag.set(true));
        frames.tick();
        handle.cancel();

        frames.run_until_idle(100);
        assert!(!fired.get());
        assert_eq!(frames.pending(), 0);
    }
}
