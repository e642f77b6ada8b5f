//! RustySearch - landing page for a semantic code search tool.
//!
//! A single-page Dioxus app that pitches the product, lets visitors try a
//! canned demo search, and collects waitlist sign-ups.
//!
//! # Layout
//!
//! - **components**: the page sections (nav, hero, features, demo, waitlist, footer)
//! - **platform**: per-target delay, analytics and smooth scrolling
//! - **storage**: per-target persistence for the "joined the waitlist" flag
//!
//! The decisions themselves (which demo results to show, how the waitlist
//! form moves between states) live in `rustysearch_core` and are tested there.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: `localStorage`, `window.gtag`, `gloo-timers`
//! - **Desktop**: a file per key in the platform data directory, tokio timers

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
pub mod storage;
