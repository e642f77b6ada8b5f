use dioxus::prelude::*;
use rustysearch::components::App as RustySearchApp;

const MAIN_CSS: Asset = asset!("/assets/rustysearch.css");

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    let level = dioxus::logger::tracing::Level::DEBUG;
    #[cfg(not(debug_assertions))]
    let level = dioxus::logger::tracing::Level::INFO;

    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger failed to init: {e}");
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("RustySearch")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1200.0, 900.0))
                .with_min_inner_size(LogicalSize::new(480.0, 600.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "RustySearch - semantic code search" }

        // CSS loading: asset! macro has issues on desktop, use include_str! as workaround
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/rustysearch.css")} }
        }

        body { class: "rs-body",
            RustySearchApp {}
        }
    }
}
