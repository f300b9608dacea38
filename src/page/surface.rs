//! Display Surface
//!
//! Where animation frames and page behaviors land. The browser front-end
//! implements this over the DOM; [`MemorySurface`] keeps element state in
//! memory for the binaries and tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::progress::GOAL_PROGRESS;
use super::reveal::REVEAL_TARGETS;
use super::TOTAL_AMOUNT_ID;
use crate::charts::ChartId;
use crate::error::{DashboardError, DashboardResult};

/// Element store addressed by id.
///
/// Writing to an id that is not present fails with
/// [`DashboardError::MissingElement`]; callers treat that as non-fatal.
pub trait DisplaySurface {
    fn contains(&self, id: &str) -> bool;

    /// Current text content, `None` when the element is missing
    fn text(&self, id: &str) -> Option<String>;

    fn set_text(&self, id: &str, text: &str) -> DashboardResult<()>;

    /// Set the element's width as a percentage of its container
    fn set_width(&self, id: &str, percent: f64) -> DashboardResult<()>;

    fn add_class(&self, id: &str, class: &str) -> DashboardResult<()>;
}

/// Log a failed surface write and carry on
pub fn report(operation: &str, result: DashboardResult<()>) {
    if let Err(e) = result {
        tracing::warn!(operation, error = %e, "Display update skipped");
    }
}

/// State of one element in a [`MemorySurface`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub text: String,
    pub width_percent: Option<f64>,
    pub classes: BTreeSet<String>,
}

/// In-memory [`DisplaySurface`]
#[derive(Debug, Default)]
pub struct MemorySurface {
    elements: RefCell<BTreeMap<String, ElementState>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with an empty element for each id
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let surface = Self::new();
        for id in ids {
            surface.insert(id);
        }
        surface
    }

    pub fn insert(&self, id: impl Into<String>) {
        self.elements
            .borrow_mut()
            .entry(id.into())
            .or_default();
    }

    pub fn remove(&self, id: &str) -> Option<ElementState> {
        self.elements.borrow_mut().remove(id)
    }

    pub fn element(&self, id: &str) -> Option<ElementState> {
        self.elements.borrow().get(id).cloned()
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|e| e.text.clone())
    }

    pub fn width(&self, id: &str) -> Option<f64> {
        self.elements.borrow().get(id).and_then(|e| e.width_percent)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .borrow()
            .get(id)
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    pub fn ids(&self) -> Vec<String> {
        self.elements.borrow().keys().cloned().collect()
    }

    fn update<F>(&self, id: &str, f: F) -> DashboardResult<()>
    where
        F: FnOnce(&mut ElementState),
    {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| DashboardError::MissingElement(id.to_string()))?;
        f(element);
        Ok(())
    }
}

impl DisplaySurface for MemorySurface {
    fn contains(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn text(&self, id: &str) -> Option<String> {
        MemorySurface::text(self, id)
    }

    fn set_text(&self, id: &str, text: &str) -> DashboardResult<()> {
        self.update(id, |e| e.text = text.to_string())
    }

    fn set_width(&self, id: &str, percent: f64) -> DashboardResult<()> {
        self.update(id, |e| e.width_percent = Some(percent))
    }

    fn add_class(&self, id: &str, class: &str) -> DashboardResult<()> {
        self.update(id, |e| {
            e.classes.insert(class.to_string());
        })
    }
}

/// Memory surface holding every element the dashboard page defines
pub fn dashboard_surface() -> MemorySurface {
    let surface = MemorySurface::with_elements(REVEAL_TARGETS.iter().copied());
    surface.insert(TOTAL_AMOUNT_ID);
    for goal in GOAL_PROGRESS.iter() {
        surface.insert(goal.card);
        surface.insert(goal.fill);
    }
    for chart in ChartId::ALL {
        surface.insert(chart.canvas_id());
    }
    surface
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_update_state() {
        let surface = MemorySurface::with_elements(["total-amount"]);

        surface.set_text("total-amount", "₹0").unwrap();
        surface.set_width("total-amount", 5.8).unwrap();
        surface.add_class("total-amount", "animate-in").unwrap();

        assert_eq!(surface.text("total-amount").as_deref(), Some("₹0"));
        assert_eq!(surface.width("total-amount"), Some(5.8));
        assert!(surface.has_class("total-amount", "animate-in"));
    }

    #[test]
    fn test_missing_element() {
        let surface = MemorySurface::new();
        assert_eq!(
            surface.set_text("nowhere", "x"),
            Err(DashboardError::MissingElement("nowhere".to_string()))
        );
        assert!(!surface.contains("nowhere"));
        report("set_text", surface.set_text("nowhere", "x"));
    }

    #[test]
    fn test_dashboard_surface_has_page_elements() {
        let surface = dashboard_surface();
        assert!(surface.contains("total-amount"));
        assert!(surface.contains("portfolioChart"));
        assert!(surface.contains("goal-3-fill"));
        assert!(surface.contains("ips-card"));
    }
}
