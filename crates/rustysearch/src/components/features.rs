use dioxus::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🧠",
        title: "Context-aware",
        body: "Matches intent instead of spelling, so fuzzy questions still land on the right function.",
    },
    Feature {
        icon: "⚡",
        title: "Fast",
        body: "A Rust index answers in milliseconds, even on large monorepos.",
    },
    Feature {
        icon: "🔒",
        title: "Local-first",
        body: "Your code never leaves your machine. No uploads, no telemetry on source.",
    },
    Feature {
        icon: "🧩",
        title: "Fits your tools",
        body: "Use it from the terminal, your editor, or as a library in your own tooling.",
    },
];

/// Feature cards
#[component]
pub fn Features() -> Element {
    rsx! {
        section { id: "features", class: "rs-section rs-features",
            h2 { class: "rs-section-title", "Why RustySearch" }
            div { class: "rs-feature-grid",
                for feature in FEATURES.iter() {
                    article { key: "{feature.title}", class: "rs-feature-card",
                        div { class: "rs-feature-icon", "{feature.icon}" }
                        h3 { class: "rs-feature-title", "{feature.title}" }
                        p { class: "rs-feature-body", "{feature.body}" }
                    }
                }
            }
        }
    }
}
