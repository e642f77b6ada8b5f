use dioxus::prelude::*;

/// Footer
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "rs-footer",
            span { class: "rs-footer-text", "© RustySearch • Built with Rust and WebAssembly" }
        }
    }
}
