use dioxus::prelude::*;

use super::AnchorLink;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "top", class: "rs-hero",
            h1 { class: "rs-hero-title",
                "Search code by "
                span { class: "rs-accent", "what it means" }
                ", not what it's called"
            }
            p { class: "rs-hero-subtitle",
                "RustySearch understands the context of your codebase. Ask for \"user login\" \
                 and find the authentication handler, even when the word never appears."
            }
            div { class: "rs-hero-actions",
                AnchorLink { href: "#demo", class: "rs-btn rs-btn--primary", "Try the demo" }
                AnchorLink { href: "#waitlist", class: "rs-btn rs-btn--secondary", "Get early access" }
            }
            p { class: "rs-hero-note", "Written in Rust • Runs locally • Private by default" }
        }
    }
}
