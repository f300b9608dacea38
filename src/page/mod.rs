//! Page Runtime
//!
//! The presentation-side plumbing the dashboard runs on: event
//! subscriptions, the display surface animations write to, goal progress
//! bars, section reveal and financial-term tooltips.

pub mod events;
pub mod glossary;
pub mod progress;
pub mod reveal;
pub mod surface;

pub use events::{Event, EventBus, EventKind, SubscriptionToken};
pub use glossary::{terms_in, tooltip_for, FINANCIAL_TERMS};
pub use progress::{apply_initial_widths, replay_progress, GoalProgress, GOAL_PROGRESS};
pub use reveal::{reveal, ANIMATE_IN_CLASS, REVEAL_TARGETS};
pub use surface::{dashboard_surface, report, DisplaySurface, ElementState, MemorySurface};

/// Element showing the animated portfolio total
pub const TOTAL_AMOUNT_ID: &str = "total-amount";

/// Card wrapping the total; revealing it again replays the count-up
pub const TOTAL_VALUE_CARD_ID: &str = "total-value-card";
