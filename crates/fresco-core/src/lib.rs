//! Shared foundations for the fresco page scripts
//!
//! This crate holds the pieces every other fresco crate leans on:
//!
//! - [`settings`]: page identifiers, thresholds and contact details, with
//!   compiled defaults that can be overridden from the page
//! - [`logging`]: console/tracing logging macros that vanish in release builds
//!
//! Nothing here touches the DOM beyond reading the optional settings object
//! from `window`.

#![warn(missing_docs)]

pub mod logging;
pub mod settings;

pub use settings::{
	ContactSettings, DomSettings, RevealSettings, ScrollSettings, SettingsError, SettingsResult,
	SiteSettings,
};

#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
