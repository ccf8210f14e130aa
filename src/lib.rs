//! # Fresco
//!
//! Client-side behaviour for the MM Painting & Design marketing site,
//! compiled to WebAssembly and loaded by every page.
//!
//! The site is server-rendered HTML; this crate only attaches behaviour to
//! the markup already on the page:
//!
//! - sticky header shadow and a back-to-top control
//! - the mobile navigation overlay
//! - smooth scrolling for in-page links
//! - the free-estimate contact form, validated in the browser and handed to
//!   the visitor's mail client
//! - one-open-at-a-time FAQ items
//! - entrance animations
//! - the current year in the footer
//!
//! ## Crates
//!
//! - [`core`]: settings and logging
//! - [`forms`]: contact form validation, the `mailto:` link and the
//!   submission state machine, all testable off the browser
//! - [`pages`]: the DOM wiring
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - readable panic messages in the console
//! - `debug-hooks` - verbose `debug_log!` output in debug builds
//!
//! ## Configuration
//!
//! Defaults match the shipped markup. A page may override any of them by
//! defining `window.__FRESCO_SETTINGS__` before the module loads:
//!
//! ```html
//! <script>
//!   window.__FRESCO_SETTINGS__ = {
//!     contact: { recipient: "estimates@example.com", reset_delay_ms: 3000 }
//!   };
//! </script>
//! ```

pub use fresco_core as core;
pub use fresco_forms as forms;
pub use fresco_pages as pages;

pub use fresco_core::SiteSettings;
pub use fresco_pages::{Feature, SiteLauncher};

/// Builds the launcher from the page's settings.
///
/// Invalid settings are reported and replaced by the defaults.
pub fn launcher() -> SiteLauncher {
	SiteLauncher::new(SiteSettings::load())
}

/// WASM entry point, run once the module is instantiated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	launcher().launch();
}
