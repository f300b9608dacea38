//! Browser Bindings
//!
//! `requestAnimationFrame` scheduling and a DOM-backed display surface for
//! the dashboard core.

use folio::animation::{FrameCallback, FrameScheduler};
use folio::{DashboardError, DashboardResult, DisplaySurface};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, HtmlElement};

fn millis(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

/// Frames delivered by `window.requestAnimationFrame`
pub struct WebFrameScheduler;

impl FrameScheduler for WebFrameScheduler {
    fn now(&self) -> Duration {
        let now = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        millis(now)
    }

    fn request_frame(&self, callback: FrameCallback) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let closure = Closure::once_into_js(move |timestamp: f64| callback(millis(timestamp)));
        let callback = closure.unchecked_ref::<js_sys::Function>();
        if let Err(e) = window.request_animation_frame(callback) {
            web_sys::console::error_2(&"requestAnimationFrame failed:".into(), &e);
        }
    }
}

/// [`DisplaySurface`] over the live document, addressed by element id
pub struct DomSurface;

impl DomSurface {
    fn element(&self, id: &str) -> DashboardResult<Element> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .ok_or_else(|| DashboardError::MissingElement(id.to_string()))
    }
}

impl DisplaySurface for DomSurface {
    fn contains(&self, id: &str) -> bool {
        self.element(id).is_ok()
    }

    fn text(&self, id: &str) -> Option<String> {
        self.element(id).ok().and_then(|e| e.text_content())
    }

    fn set_text(&self, id: &str, text: &str) -> DashboardResult<()> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_width(&self, id: &str, percent: f64) -> DashboardResult<()> {
        let element = self
            .element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DashboardError::MissingElement(id.to_string()))?;
        let _ = element.style().set_property("width", &format!("{}%", percent));
        Ok(())
    }

    fn add_class(&self, id: &str, class: &str) -> DashboardResult<()> {
        let _ = self.element(id)?.class_list().add_1(class);
        Ok(())
    }
}

/// Canvas element with the given id
pub fn canvas_by_id(id: &str) -> Option<HtmlCanvasElement> {
    DomSurface
        .element(id)
        .ok()
        .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
}

/// Whether the element is at least partly inside the viewport, ignoring a
/// 50px strip at the bottom
pub fn in_viewport(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    match DomSurface.element(id) {
        Ok(element) => {
            let rect = element.get_bounding_client_rect();
            rect.top() < height - 50.0 && rect.bottom() > 0.0
        }
        Err(_) => false,
    }
}
