//! Page behaviours for the fresco site
//!
//! Each module wires one behaviour to the server-rendered markup:
//!
//! - [`header`]: sticky-header shadow and the back-to-top control
//! - [`nav`]: the mobile navigation overlay
//! - [`anchors`]: smooth scrolling for in-page links
//! - [`accordion`]: one-open-at-a-time FAQ items
//! - [`reveal`]: entrance animations driven by `IntersectionObserver`
//! - [`contact`]: the estimate request form
//! - [`launcher`]: mounts everything, including the footer year
//!
//! Every module keeps its decisions in plain functions and types that build
//! on any target; only the `mount` functions touch the DOM and exist on
//! `wasm32` alone. A behaviour whose elements are missing from the page is
//! skipped without error.

#![warn(missing_docs)]

pub mod accordion;
pub mod anchors;
pub mod contact;
pub mod dom;
pub mod header;
pub mod launcher;
pub mod nav;
pub mod reveal;

pub use dom::{DomError, DomResult};
pub use launcher::{Feature, SiteLauncher};
