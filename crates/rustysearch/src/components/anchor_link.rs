use dioxus::prelude::*;
use rustysearch_core::bootstrap::anchor_target;

use crate::platform::smooth_scroll_to;

/// Link that smooth-scrolls to an in-page target instead of jumping.
///
/// Any `href` starting with `#` has its default navigation suppressed; other
/// links behave normally.
#[component]
pub fn AnchorLink(href: String, #[props(default)] class: String, children: Element) -> Element {
    let in_page = href.starts_with('#');
    let target = anchor_target(&href).map(str::to_string);

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt| {
                if !in_page {
                    return;
                }
                evt.prevent_default();
                if let Some(id) = &target {
                    smooth_scroll_to(id);
                }
            },
            {children}
        }
    }
}
