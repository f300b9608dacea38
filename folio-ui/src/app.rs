//! App Root Component
//!
//! Page layout plus the wiring between browser events and the dashboard
//! context: load, scroll and elements entering the viewport.

use folio::charts::ChartId;
use folio::page::{REVEAL_TARGETS, TOTAL_AMOUNT_ID};
use folio::{AnimationConfig, AppContext, Event, EventKind};
use leptos::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::components::{
    animate_charts, CategorySection, ChartCard, GoalCards, PolicyCard, TotalValueCard,
};
use crate::web::{in_viewport, DomSurface, WebFrameScheduler};

/// Elements whose visibility the page reports
fn watched() -> impl Iterator<Item = &'static str> {
    REVEAL_TARGETS.iter().copied().chain(std::iter::once(TOTAL_AMOUNT_ID))
}

/// Emit `Visible` for every watched element that has come into view since
/// the last check. Elements that leave the viewport can fire again later.
fn check_visibility(ctx: &AppContext, seen: &RefCell<HashSet<&'static str>>) {
    let mut entered = Vec::new();
    {
        let mut seen = seen.borrow_mut();
        for id in watched() {
            if in_viewport(id) {
                if seen.insert(id) {
                    entered.push(id);
                }
            } else {
                seen.remove(id);
            }
        }
    }

    // Handlers may touch the DOM, so deliver outside the borrow
    for id in entered {
        ctx.events().emit(&Event::visible(id));
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let ctx = Rc::new(AppContext::new(
        AnimationConfig::default(),
        Rc::new(WebFrameScheduler),
        Rc::new(DomSurface),
    ));
    let seen: RefCell<HashSet<&'static str>> = RefCell::new(HashSet::new());

    let events = ctx.events();

    // Chart entry animations start with the page
    let weak = Rc::downgrade(&ctx);
    events.subscribe_once(EventKind::PageLoad, move |_| {
        if let Some(ctx) = weak.upgrade() {
            animate_charts(&ctx);
        }
    });

    let weak = Rc::downgrade(&ctx);
    let on_scroll = events.subscribe(EventKind::Scroll, move |_| {
        if let Some(ctx) = weak.upgrade() {
            check_visibility(&ctx, &seen);
        }
    });

    // Markup is in the document by the next frame
    {
        let ctx = ctx.clone();
        request_animation_frame(move || {
            let summary = ctx.initialize();
            web_sys::console::log_1(&format!("Dashboard ready: {}", summary).into());

            let events = ctx.events();
            events.emit(&Event::PageLoad);
            events.emit(&Event::Scroll {
                offset: window().scroll_y().unwrap_or(0.0),
            });
        });
    }

    let scroll = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        events.emit(&Event::Scroll { offset });
    });

    on_cleanup(move || {
        scroll.remove();
        ctx.events().unsubscribe(on_scroll);
        ctx.teardown();
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <Header />

            <main class="container mx-auto px-4 py-8 space-y-8">
                <TotalValueCard />
                <GoalCards />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <ChartCard config=ChartId::Portfolio.config() title="Portfolio Composition" />
                    <ChartCard config=ChartId::Allocation.config() title="Asset Allocation" />
                </div>
                <ChartCard config=ChartId::Growth.config() title="Growth Projection" />

                <CategorySection />
                <PolicyCard />
            </main>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <h1 class="text-2xl font-bold">"Folio"</h1>
                <span class="text-sm text-gray-400">"Personal Investment Dashboard"</span>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watched_includes_counter_and_sections() {
        let ids: Vec<_> = watched().collect();
        assert_eq!(ids.len(), REVEAL_TARGETS.len() + 1);
        assert!(ids.contains(&TOTAL_AMOUNT_ID));
        assert!(ids.contains(&"projection-chart-section"));
    }
}
