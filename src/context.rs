//! Application Context
//!
//! Owns everything the dashboard page keeps alive: mounted charts, running
//! animations and event subscriptions. Components receive what they need
//! from here instead of reaching for globals, and [`AppContext::teardown`]
//! releases all of it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::{defer, AnimationHandle, AnimationRegistry, Animator, FrameScheduler};
use crate::charts::{dashboard_charts, ChartConfig, ChartId, TOTAL_PORTFOLIO_VALUE};
use crate::config::AnimationConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::format::{format_rupees, AmountValue};
use crate::page::{
    apply_initial_widths, replay_progress, report, reveal, DisplaySurface, EventBus, EventKind,
    GoalProgress, SubscriptionToken, REVEAL_TARGETS, TOTAL_AMOUNT_ID, TOTAL_VALUE_CARD_ID,
};

/// Outcome of [`AppContext::initialize`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitSummary {
    pub charts_mounted: usize,
    pub charts_skipped: usize,
    pub progress_bars: usize,
    pub subscriptions: usize,
}

impl fmt::Display for InitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "charts={} (skipped {}), progress_bars={}, subscriptions={}",
            self.charts_mounted, self.charts_skipped, self.progress_bars, self.subscriptions
        )
    }
}

/// Shared pieces handed to event handlers
#[derive(Clone)]
struct Runtime {
    settings: AnimationConfig,
    scheduler: Rc<dyn FrameScheduler>,
    surface: Rc<dyn DisplaySurface>,
    animator: Animator,
    animations: Rc<AnimationRegistry>,
}

impl Runtime {
    fn animate_counter(
        &self,
        target: &str,
        start: AmountValue,
        end: AmountValue,
        duration: Duration,
    ) -> DashboardResult<AnimationHandle> {
        if !self.surface.contains(target) {
            return Err(DashboardError::MissingElement(target.to_string()));
        }

        let surface = self.surface.clone();
        let element = target.to_string();
        let handle = self.animator.animate(start, end, duration, move |value| {
            report("counter", surface.set_text(&element, &format_rupees(value)));
        });

        self.animations.insert(target, handle.clone());
        Ok(handle)
    }

    fn replay_goal(&self, goal: &GoalProgress) {
        if let Some(handle) = replay_progress(
            goal,
            self.surface.clone(),
            self.scheduler.clone(),
            self.settings.progress_delay(),
        ) {
            self.animations.insert(goal.fill, handle);
        }
    }

    /// Count the total up again if it is showing its settled value. A
    /// count already in progress is left alone.
    fn recount_total(&self) {
        let settled = format_rupees(TOTAL_PORTFOLIO_VALUE);
        if self.surface.text(TOTAL_AMOUNT_ID).as_deref() != Some(settled.as_str()) {
            return;
        }

        let duration = self.settings.recount_duration();
        if let Err(e) = self.animate_counter(TOTAL_AMOUNT_ID, 0.0, TOTAL_PORTFOLIO_VALUE, duration)
        {
            tracing::warn!(error = %e, "Total value recount not started");
        }
    }

    /// Wait out the configured delay, then count the total up from zero
    fn start_total_counter(&self) {
        let runtime = self.clone();
        let duration = self.settings.counter_duration();
        let handle = defer(self.scheduler.clone(), self.settings.counter_delay(), move || {
            if let Err(e) =
                runtime.animate_counter(TOTAL_AMOUNT_ID, 0.0, TOTAL_PORTFOLIO_VALUE, duration)
            {
                tracing::warn!(error = %e, "Total value counter not started");
            }
        });
        self.animations.insert(TOTAL_AMOUNT_ID, handle);
    }
}

/// Dashboard application state with explicit teardown
pub struct AppContext {
    runtime: Runtime,
    events: Rc<EventBus>,
    charts: RefCell<Vec<ChartConfig>>,
    subscriptions: RefCell<Vec<SubscriptionToken>>,
}

impl AppContext {
    pub fn new(
        settings: AnimationConfig,
        scheduler: Rc<dyn FrameScheduler>,
        surface: Rc<dyn DisplaySurface>,
    ) -> Self {
        let animator = Animator::new(scheduler.clone());

        Self {
            runtime: Runtime {
                settings,
                scheduler,
                surface,
                animator,
                animations: Rc::new(AnimationRegistry::new()),
            },
            events: Rc::new(EventBus::new()),
            charts: RefCell::new(Vec::new()),
            subscriptions: RefCell::new(Vec::new()),
        }
    }

    /// Mount charts, set progress bars and register visibility handlers.
    ///
    /// Each chart is independent: one whose canvas is missing is skipped and
    /// the rest still mount.
    pub fn initialize(&self) -> InitSummary {
        let mut summary = InitSummary::default();

        for config in dashboard_charts() {
            if self.runtime.surface.contains(config.canvas) {
                tracing::debug!(chart = %config.id, "Chart mounted");
                self.charts.borrow_mut().push(config);
                summary.charts_mounted += 1;
            } else {
                tracing::warn!(
                    chart = %config.id,
                    canvas = config.canvas,
                    "Chart canvas missing, skipping"
                );
                summary.charts_skipped += 1;
            }
        }

        summary.progress_bars = apply_initial_widths(&*self.runtime.surface);

        for target in REVEAL_TARGETS {
            let runtime = self.runtime.clone();
            let token = self
                .events
                .subscribe(EventKind::Visible(target.to_string()), move |_| {
                    reveal(&*runtime.surface, target);
                    if let Some(goal) = GoalProgress::for_card(target) {
                        runtime.replay_goal(goal);
                    }
                    if target == TOTAL_VALUE_CARD_ID {
                        runtime.recount_total();
                    }
                });
            self.subscriptions.borrow_mut().push(token);
        }

        let runtime = self.runtime.clone();
        let token = self
            .events
            .subscribe_once(EventKind::Visible(TOTAL_AMOUNT_ID.to_string()), move |_| {
                runtime.start_total_counter();
            });
        self.subscriptions.borrow_mut().push(token);

        let charts = summary.charts_mounted;
        let token = self.events.subscribe_once(EventKind::PageLoad, move |_| {
            tracing::info!("Page loaded, rendered {} charts", charts);
        });
        self.subscriptions.borrow_mut().push(token);

        summary.subscriptions = self.events.len();
        tracing::info!("Dashboard initialized: {}", summary);
        summary
    }

    /// Count `target` from `start` to `end`, writing formatted rupees each
    /// frame. Supersedes any run already on `target`.
    pub fn animate_counter(
        &self,
        target: &str,
        start: AmountValue,
        end: AmountValue,
        duration: Duration,
    ) -> DashboardResult<AnimationHandle> {
        self.runtime.animate_counter(target, start, end, duration)
    }

    /// Register a run started elsewhere so teardown cancels it
    pub fn track_animation(&self, target: &str, handle: AnimationHandle) {
        self.runtime.animations.insert(target, handle);
    }

    /// Event bus the page delivers load, visibility and scroll events to
    pub fn events(&self) -> Rc<EventBus> {
        self.events.clone()
    }

    pub fn animator(&self) -> &Animator {
        &self.runtime.animator
    }

    pub fn surface(&self) -> Rc<dyn DisplaySurface> {
        self.runtime.surface.clone()
    }

    /// Mounted charts in page order
    pub fn charts(&self) -> Vec<ChartConfig> {
        self.charts.borrow().clone()
    }

    pub fn chart(&self, id: ChartId) -> DashboardResult<ChartConfig> {
        self.charts
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DashboardError::UnknownChart(id.to_string()))
    }

    /// Targets with an animation or pending delay in progress
    pub fn active_animations(&self) -> Vec<String> {
        self.runtime.animations.active()
    }

    /// Cancel every run, drop every subscription and unmount the charts.
    /// Safe to call more than once.
    pub fn teardown(&self) {
        let cancelled = self.runtime.animations.cancel_all();

        let mut dropped = 0;
        for token in self.subscriptions.borrow_mut().drain(..) {
            if self.events.unsubscribe(token) {
                dropped += 1;
            }
        }

        let charts = {
            let mut charts = self.charts.borrow_mut();
            let count = charts.len();
            charts.clear();
            count
        };

        if cancelled + dropped + charts > 0 {
            tracing::info!(
                animations = cancelled,
                subscriptions = dropped,
                charts,
                "Dashboard torn down"
            );
        }
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.teardown();
    }
}
