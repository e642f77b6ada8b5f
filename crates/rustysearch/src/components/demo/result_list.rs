use dioxus::prelude::*;
use rustysearch_core::demo::{DemoResults, ResultView};

/// Rendered demo results, or the "no results" placeholder.
#[component]
pub fn ResultList(results: DemoResults) -> Element {
    match results {
        DemoResults::Empty => rsx! {
            div { class: "placeholder-text", "No results found" }
        },
        DemoResults::Results(views) => rsx! {
            ul { class: "search-result-list",
                for (idx, view) in views.into_iter().enumerate() {
                    ResultItem { key: "{idx}-{view.file_path}", view }
                }
            }
        },
    }
}

/// One result: file, line and match percentage, then the code line and why it matched.
#[component]
fn ResultItem(view: ResultView) -> Element {
    rsx! {
        li { class: "search-result-item",
            div { class: "result-header",
                span { class: "result-file", "{view.file_path}" }
                span { class: "result-line", "{view.line_label}" }
                span {
                    class: "result-score",
                    "data-score": "{view.relevance_percent}",
                    "{view.match_label}"
                }
            }
            div { class: "result-code", "{view.snippet}" }
            div { class: "result-context", "{view.description}" }
        }
    }
}
