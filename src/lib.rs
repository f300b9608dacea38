//! # Folio
//!
//! Core of a personal portfolio dashboard: rupee formatting, eased counter
//! animation and the chart data shown on the page.
//!
//! ## Features
//!
//! - **Indian number formatting**: crore / lakh units and `3,18,96,000` grouping
//! - **Eased counters**: quartic ease-out runs that end exactly on target
//! - **Cooperative scheduling**: frame-driven, cancellable, no threads
//! - **Chart pipeline**: literal holdings, allocation and growth projection
//!   with legend and tooltip text ready for any renderer
//!
//! ## Modules
//!
//! - [`format`]: Currency and progress formatting
//! - [`animation`]: Animator, easing and frame scheduling
//! - [`charts`]: Chart series and configurations
//! - [`page`]: Event bus, display surface and page behaviors
//! - [`context`]: Application context owning charts, runs and subscriptions
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::animation::ManualFrameLoop;
//! use folio::config::AnimationConfig;
//! use folio::page::{dashboard_surface, Event, TOTAL_AMOUNT_ID};
//! use folio::AppContext;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let frames = Rc::new(ManualFrameLoop::new(Duration::from_millis(16)));
//! let surface = Rc::new(dashboard_surface());
//! let ctx = AppContext::new(AnimationConfig::default(), frames.clone(), surface.clone());
//!
//! ctx.initialize();
//! ctx.events().emit(&Event::visible(TOTAL_AMOUNT_ID));
//! frames.run_until_idle(10_000);
//!
//! assert_eq!(surface.text(TOTAL_AMOUNT_ID).as_deref(), Some("₹3,18,96,000"));
//! ctx.teardown();
//! ```

pub mod animation;
pub mod charts;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod page;

// Re-export top-level types for convenience
pub use format::{
    calculate_progress_percentage, format_currency, format_rupees, group_indian, AmountValue,
};

pub use animation::{
    AnimationHandle, AnimationRegistry, AnimationRun, Animator, Easing, FrameScheduler,
    ManualFrameLoop,
};

pub use charts::{dashboard_charts, ChartConfig, ChartId, ChartKind, ChartSeries};

pub use page::{DisplaySurface, Event, EventBus, EventKind, MemorySurface, SubscriptionToken};

pub use context::{AppContext, InitSummary};

pub use config::{AnimationConfig, Config, ConfigError, LoggingConfig};

pub use error::{DashboardError, DashboardResult};
