//! Page start-up
//!
//! [`SiteLauncher`] mounts every [`Feature`] in turn. A feature that fails to
//! bind is logged and skipped; the rest of the page keeps working.

use fresco_core::SiteSettings;
use std::fmt;

/// The behaviours mounted on page load, in mount order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
	/// Current year in the footer.
	Year,
	/// Sticky header and back-to-top control.
	ScrollChrome,
	/// Mobile navigation overlay.
	MobileNav,
	/// Smooth in-page anchors.
	SmoothAnchors,
	/// Contact form validation and handoff.
	ContactForm,
	/// One-open-at-a-time FAQ items.
	Accordion,
	/// Entrance animations.
	Reveal,
}

impl Feature {
	/// Every feature, in mount order.
	pub const ALL: [Feature; 7] = [
		Self::Year,
		Self::ScrollChrome,
		Self::MobileNav,
		Self::SmoothAnchors,
		Self::ContactForm,
		Self::Accordion,
		Self::Reveal,
	];

	/// Short name used in log messages.
	pub fn name(self) -> &'static str {
		match self {
			Self::Year => "year",
			Self::ScrollChrome => "scroll-chrome",
			Self::MobileNav => "mobile-nav",
			Self::SmoothAnchors => "smooth-anchors",
			Self::ContactForm => "contact-form",
			Self::Accordion => "accordion",
			Self::Reveal => "reveal",
		}
	}
}

impl fmt::Display for Feature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Text shown in the year element.
pub fn year_text(year: u32) -> String {
	year.to_string()
}

/// Mounts the page behaviours.
///
/// ```ignore
/// use fresco_core::SiteSettings;
/// use fresco_pages::SiteLauncher;
///
/// SiteLauncher::new(SiteSettings::load()).launch();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SiteLauncher {
	settings: SiteSettings,
}

impl SiteLauncher {
	/// Creates a launcher for `settings`.
	pub fn new(settings: SiteSettings) -> Self {
		Self { settings }
	}

	/// The settings every feature is mounted with.
	pub fn settings(&self) -> &SiteSettings {
		&self.settings
	}

	/// Mounts every feature and returns the ones that failed to bind.
	#[cfg(target_arch = "wasm32")]
	pub fn launch(&self) -> Vec<(Feature, crate::DomError)> {
		use fresco_core::{error_log, info_log};

		let failures: Vec<_> = Feature::ALL
			.into_iter()
			.filter_map(|feature| self.mount(feature).err().map(|err| (feature, err)))
			.collect();

		for (feature, err) in &failures {
			error_log!("failed to mount {}: {}", feature, err);
		}
		info_log!(
			"mounted {} of {} page behaviours",
			Feature::ALL.len() - failures.len(),
			Feature::ALL.len()
		);
		failures
	}

	/// Host builds have no page to mount on.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn launch(&self) -> Vec<(Feature, crate::DomError)> {
		fresco_core::debug_log!("no DOM on this target, skipping {} behaviours", Feature::ALL.len());
		Vec::new()
	}

	#[cfg(target_arch = "wasm32")]
	fn mount(&self, feature: Feature) -> crate::DomResult<()> {
		use crate::{accordion, anchors, contact, header, nav, reveal};

		let settings = &self.settings;
		match feature {
			Feature::Year => mount_year(settings),
			Feature::ScrollChrome => header::mount(settings),
			Feature::MobileNav => nav::mount(settings),
			Feature::SmoothAnchors => anchors::mount(settings),
			Feature::ContactForm => contact::mount(settings),
			Feature::Accordion => accordion::mount(settings),
			Feature::Reveal => reveal::mount(settings),
		}
	}
}

#[cfg(target_arch = "wasm32")]
fn mount_year(settings: &SiteSettings) -> crate::DomResult<()> {
	let document = crate::dom::document()?;
	if let Some(element) = document.get_element_by_id(&settings.dom.year_id) {
		let year = js_sys::Date::new_0().get_full_year();
		element.set_text_content(Some(&year_text(year)));
	}
	Ok(())
}
