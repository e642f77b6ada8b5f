use dioxus::prelude::*;

use super::AnchorLink;

/// Fixed header with logo and section links
#[component]
pub fn NavBar() -> Element {
    rsx! {
        header { class: "rs-nav",
            AnchorLink { href: "#top", class: "rs-logo",
                span { class: "rs-logo-mark", "⚙" }
                "RustySearch"
            }
            nav { class: "rs-nav-links",
                AnchorLink { href: "#features", class: "rs-nav-link", "Features" }
                AnchorLink { href: "#demo", class: "rs-nav-link", "Demo" }
                AnchorLink { href: "#waitlist", class: "rs-btn rs-btn--primary rs-btn--small",
                    "Join Waitlist"
                }
            }
        }
    }
}
