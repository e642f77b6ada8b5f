use rustysearch_core::analytics::{AnalyticsEvent, AnalyticsSink};

#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::info;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, warn};

/// Forwards events to Google Analytics' global `gtag` function.
///
/// The page loads `gtag.js` from a third party; ad blockers routinely remove
/// it, in which case events are dropped silently.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformAnalytics;

#[cfg(target_arch = "wasm32")]
impl AnalyticsSink for PlatformAnalytics {
    fn track(&self, event: &AnalyticsEvent) -> bool {
        use js_sys::{Function, Object, Reflect};
        use wasm_bindgen::{JsCast, JsValue};

        let Some(window) = web_sys::window() else {
            return false;
        };

        let gtag = match Reflect::get(&window, &JsValue::from_str("gtag")) {
            Ok(value) => value,
            Err(_) => return false,
        };
        let Some(gtag) = gtag.dyn_ref::<Function>() else {
            debug!("gtag not defined, skipping '{}'", event.name);
            return false;
        };

        let params = Object::new();
        let populated = Reflect::set(
            &params,
            &JsValue::from_str("event_category"),
            &JsValue::from_str(&event.category),
        )
        .and_then(|_| {
            Reflect::set(
                &params,
                &JsValue::from_str("event_label"),
                &JsValue::from_str(&event.label),
            )
        });
        if populated.is_err() {
            warn!("Failed to build gtag params for '{}'", event.name);
            return false;
        }

        match gtag.call3(
            &JsValue::UNDEFINED,
            &JsValue::from_str("event"),
            &JsValue::from_str(&event.name),
            &params,
        ) {
            Ok(_) => true,
            Err(e) => {
                warn!("gtag call failed: {:?}", e);
                false
            }
        }
    }
}

/// Desktop has no page analytics; events go to the log instead.
#[cfg(not(target_arch = "wasm32"))]
impl AnalyticsSink for PlatformAnalytics {
    fn track(&self, event: &AnalyticsEvent) -> bool {
        info!(
            category = %event.category,
            label = %event.label,
            "📊 analytics event '{}'",
            event.name
        );
        true
    }
}
