//! # RustySearch Core
//!
//! Platform-independent logic behind the RustySearch landing page, kept free
//! of DOM types so it can be tested on the host.
//!
//! ## Modules
//!
//! - [`demo`] - Keyword-bucket demo search and its result view model
//! - [`waitlist`] - Waitlist form state machine and controller
//! - [`bootstrap`] - Page load restore and anchor scroll helpers
//! - [`storage`] - Key-value storage trait and the persisted waitlist flag
//! - [`delay`] - Async delay abstraction for the simulated submission latency
//! - [`analytics`] - Optional analytics hook
//! - [`config`] - Constants and deployment config
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod analytics;
pub mod bootstrap;
pub mod config;
pub mod delay;
pub mod demo;
pub mod error;
pub mod storage;
pub mod waitlist;

#[cfg(test)]
mod test_utils;
