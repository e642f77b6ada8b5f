use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use rustysearch_core::demo::{self, DemoOutcome, DemoResults};

use super::ResultList;

const EXAMPLE_QUERIES: [&str; 3] = [
    "where do users log in?",
    "database connection setup",
    "list the REST endpoints",
];

/// Demo search: type a question, press Enter, see canned results.
#[component]
pub fn DemoSection() -> Element {
    let mut query = use_signal(String::new);
    // None until the first committed query
    let mut shown = use_signal(|| None::<DemoResults>);

    // Commit on Enter only; typing alone never re-renders results
    let handle_keyup = move |evt: KeyboardEvent| {
        if evt.key() != Key::Enter {
            return;
        }
        let DemoOutcome::Rendered { bucket, results } = demo::search(&query.read()) else {
            return;
        };
        info!("🔍 Demo query answered from {} bucket", bucket);
        shown.set(Some(results));
    };

    let placeholder = format!("e.g. {}", EXAMPLE_QUERIES[0]);
    let results_view: Element = match shown.read().as_ref() {
        None => rsx! {
            div { class: "placeholder-text", "Results will appear here" }
        },
        Some(rendered) => rsx! {
            ResultList { results: rendered.clone() }
        },
    };

    rsx! {
        section { id: "demo", class: "rs-section rs-demo",
            h2 { class: "rs-section-title", "See it in action" }
            p { class: "rs-section-subtitle",
                "Ask a question about a sample Go codebase and press Enter."
            }
            div { class: "rs-demo-card",
                input {
                    id: "demo-search",
                    class: "rs-demo-input",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    autocomplete: "off",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                    onkeyup: handle_keyup,
                }
                div { class: "rs-demo-hints",
                    "Try: "
                    for example in EXAMPLE_QUERIES {
                        code { key: "{example}", class: "rs-demo-hint", "{example}" }
                    }
                }
                div { id: "demo-results", class: "rs-demo-results", {results_view} }
            }
        }
    }
}
