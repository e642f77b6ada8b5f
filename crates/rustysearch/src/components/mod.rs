//! UI components for the RustySearch landing page.
//!
//! # Layout
//!
//! - `nav`: fixed header with in-page links
//! - `hero`: headline and calls to action
//! - `features`: product feature cards
//! - `demo`: the interactive demo search (DemoSection, ResultList)
//! - `waitlist`: sign-up form and success panel
//! - `footer`
//!
//! # Context Providers
//!
//! [`App`] provides the [`SiteConfig`] to the tree:
//!
//! ```ignore
//! let config = use_site_config();
//! rsx! { form { action: "{config.read().form_action}" } }
//! ```

mod anchor_link;
mod demo;
mod features;
mod footer;
mod hero;
mod nav;
mod waitlist;

pub use anchor_link::AnchorLink;
pub use demo::{DemoSection, ResultList};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::NavBar;
pub use waitlist::WaitlistSection;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use rustysearch_core::config::SiteConfig;

const SITE_CONFIG_JSON: &str = include_str!("../../assets/site.json");

/// Parses the embedded site config, falling back to defaults if it is broken.
fn load_site_config() -> SiteConfig {
    SiteConfig::from_json(SITE_CONFIG_JSON).unwrap_or_else(|e| {
        warn!("Using default site config: {}", e);
        SiteConfig::default()
    })
}

/// Site config context provider
pub fn use_site_config() -> Signal<SiteConfig> {
    use_context::<Signal<SiteConfig>>()
}

/// Root of the landing page.
#[component]
pub fn App() -> Element {
    let site_config = use_signal(load_site_config);
    use_context_provider(|| site_config);

    rsx! {
        div { class: "rs-page",
            NavBar {}
            main { class: "rs-main",
                Hero {}
                Features {}
                DemoSection {}
                WaitlistSection {}
            }
            Footer {}
        }
    }
}
