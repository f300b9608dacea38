//! Folio
//!
//! Runs the dashboard page headless: mounts the charts, replays the page's
//! load and scroll-into-view events on a simulated frame clock and logs what
//! the page would show.

use folio::animation::ManualFrameLoop;
use folio::charts::ChartConfig;
use folio::page::{
    dashboard_surface, Event, EventKind, GOAL_PROGRESS, REVEAL_TARGETS, TOTAL_AMOUNT_ID,
    TOTAL_VALUE_CARD_ID,
};
use folio::{AppContext, Config};
use std::rc::Rc;

const SECTION_HEIGHT: f64 = 400.0;

fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    config.logging.init_tracing();

    tracing::info!("Folio dashboard v{}", env!("CARGO_PKG_VERSION"));

    let frames = Rc::new(ManualFrameLoop::new(config.animation.frame_interval()));
    let surface = Rc::new(dashboard_surface());
    let ctx = AppContext::new(config.animation.clone(), frames.clone(), surface.clone());

    let summary = ctx.initialize();
    tracing::info!("Page ready: {}", summary);

    for chart in ctx.charts() {
        log_chart(&chart);
    }

    let events = ctx.events();

    // Each section is one simulated viewport tall
    let weak = Rc::downgrade(&events);
    let on_scroll = events.subscribe(EventKind::Scroll, move |event| {
        let (Some(bus), Event::Scroll { offset }) = (weak.upgrade(), event) else {
            return;
        };
        let section = (*offset / SECTION_HEIGHT) as usize;
        if let Some(target) = REVEAL_TARGETS.get(section) {
            tracing::debug!(offset = *offset, target = *target, "Section in view");
            bus.emit(&Event::visible(*target));
            if *target == TOTAL_VALUE_CARD_ID {
                bus.emit(&Event::visible(TOTAL_AMOUNT_ID));
            }
        }
    });

    events.emit(&Event::PageLoad);
    for i in 0..REVEAL_TARGETS.len() {
        events.emit(&Event::Scroll {
            offset: i as f64 * SECTION_HEIGHT,
        });
    }
    events.unsubscribe(on_scroll);

    let mut last_shown = String::new();
    let mut frames_run = 0;
    while frames.pending() > 0 && frames_run < 10_000 {
        frames.tick();
        frames_run += 1;

        if let Some(text) = surface.text(TOTAL_AMOUNT_ID) {
            if text != last_shown && frames_run % 10 == 0 {
                tracing::debug!(frame = frames_run, "Total value: {}", text);
            }
            last_shown = text;
        }
    }

    tracing::info!(
        "Animations settled after {} frames ({:?})",
        frames_run,
        frames.step() * frames_run as u32
    );
    tracing::info!("Total portfolio value: {}", last_shown);

    for goal in GOAL_PROGRESS.iter() {
        tracing::info!(
            "Goal {}: {:.1}% complete",
            goal.card,
            surface.width(goal.fill).unwrap_or_default()
        );
    }

    ctx.teardown();
    tracing::info!("Folio shutdown complete");
    Ok(())
}

fn log_chart(chart: &ChartConfig) {
    let total = chart.series.total();
    tracing::info!(
        "Chart {} ({:?}): {} points, total {:.2}, {} ms {}",
        chart.id,
        chart.kind,
        chart.series.len(),
        total,
        chart.animation.duration_ms,
        chart.animation.easing.as_str()
    );

    if let Some(tooltip) = chart.tooltip(0) {
        tracing::debug!("  first tooltip: {}", tooltip.lines.join(" | "));
    }
}
