use dioxus::logger::tracing::debug;
use rustysearch_core::bootstrap::scroll_top_for;

/// Smooth-scrolls the window to the element with `id`, leaving room for the
/// fixed header. Does nothing if the element does not exist.
#[cfg(target_arch = "wasm32")]
pub fn smooth_scroll_to(id: &str) {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("Anchor target #{} not found", id);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_top_for(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scrolls the webview to the element with `id`, leaving room for the
/// fixed header. Does nothing if the element does not exist.
#[cfg(not(target_arch = "wasm32"))]
pub fn smooth_scroll_to(id: &str) {
    // offsetTop is only known inside the webview, so the offset is applied there
    let offset = -scroll_top_for(0.0);
    let Ok(js_id) = serde_json::to_string(id) else {
        return;
    };
    debug!("Scrolling to #{}", id);
    let _ = dioxus::document::eval(&format!(
        "const el = document.getElementById({js_id}); \
         if (el) {{ window.scrollTo({{ top: el.offsetTop - {offset}, behavior: 'smooth' }}); }}"
    ));
}
