//! Zypp Web - Rust Implementation
//!
//! Marketing site for Zypp Electric's last-mile delivery service.
//!
//! This library provides:
//! - Navigation menu controller (pill dropdowns, mobile sheet, active item)
//! - Fire-and-forget analytics events
//! - Impact counters and the `/api/impact` payload
//! - Dioxus components rendered on the server and hydrated in the browser

pub mod analytics;
pub mod app;
pub mod impact;
pub mod nav;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;
