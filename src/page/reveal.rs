//! Scroll-triggered section reveal

use super::surface::{report, DisplaySurface};
use super::TOTAL_VALUE_CARD_ID;

/// Class added to an element the first time it scrolls into view
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Elements that animate in when they become visible
pub const REVEAL_TARGETS: [&str; 9] = [
    TOTAL_VALUE_CARD_ID,
    "goal-1",
    "goal-2",
    "goal-3",
    "portfolio-chart-section",
    "allocation-chart-section",
    "projection-chart-section",
    "category-section",
    "ips-card",
];

/// Mark `target` as revealed. Missing elements are logged and ignored.
pub fn reveal(surface: &dyn DisplaySurface, target: &str) {
    report("reveal", surface.add_class(target, ANIMATE_IN_CLASS));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemorySurface;

    #[test]
    fn test_reveal_adds_class() {
        let surface = MemorySurface::with_elements(["ips-card"]);
        reveal(&surface, "ips-card");
        reveal(&surface, "missing-card");
        assert!(surface.has_class("ips-card", ANIMATE_IN_CLASS));
    }
}
