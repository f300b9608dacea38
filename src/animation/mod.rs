//! Frame-Driven Animation
//!
//! Eased numeric interpolation driven by a cooperative frame scheduler.
//!
//! ## Components
//!
//! - [`Easing`]: the deceleration curve (quartic ease-out for counters)
//! - [`AnimationRun`]: start/end/duration/elapsed state of a single run
//! - [`Animator`]: schedules a run frame by frame and emits display values
//! - [`AnimationHandle`]: cooperative cancellation of a run or delay
//! - [`AnimationRegistry`]: one run per display target, last writer wins
//! - [`FrameScheduler`]: "notify next frame" primitive; [`ManualFrameLoop`]
//!   drives it deterministically outside a browser
//!
//! ## Example
//!
//! ```rust
//! use folio::animation::{Animator, ManualFrameLoop};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let frames = Rc::new(ManualFrameLoop::new(Duration::from_millis(16)));
//! let animator = Animator::new(frames.clone());
//!
//! let last = Rc::new(RefCell::new(0.0));
//! let sink = last.clone();
//! animator.animate(0.0, 31_896_000.0, Duration::from_millis(2000), move |v| {
//!     *sink.borrow_mut() = v;
//! });
//!
//! frames.run_until_idle(1_000);
//! assert_eq!(*last.borrow(), 31_896_000.0);
//! ```

pub mod animator;
pub mod easing;
pub mod handle;
pub mod registry;
pub mod run;
pub mod scheduler;

pub use animator::Animator;
pub use easing::Easing;
pub use handle::AnimationHandle;
pub use registry::AnimationRegistry;
pub use run::AnimationRun;
pub use scheduler::{defer, FrameCallback, FrameScheduler, ManualFrameLoop};
