//! Sticky header and back-to-top control
//!
//! One passive `scroll` listener updates both: the header gains the
//! `scrolled` class once the page leaves the top, and the back-to-top control
//! is un-hidden further down. The listener also runs once at mount so a page
//! restored mid-scroll starts in the right state.

use fresco_core::ScrollSettings;

/// Class added to the header once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Header and back-to-top state for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollChrome {
	/// Whether the header carries [`SCROLLED_CLASS`].
	pub header_scrolled: bool,
	/// Whether the back-to-top control is shown.
	pub back_to_top_visible: bool,
}

impl ScrollChrome {
	/// Chrome state at vertical offset `scroll_y`.
	///
	/// # Examples
	///
	/// ```
	/// use fresco_core::ScrollSettings;
	/// use fresco_pages::header::ScrollChrome;
	///
	/// let chrome = ScrollChrome::at(120.0, &ScrollSettings::default());
	/// assert!(chrome.header_scrolled);
	/// assert!(!chrome.back_to_top_visible);
	/// ```
	pub fn at(scroll_y: f64, settings: &ScrollSettings) -> Self {
		Self {
			header_scrolled: scroll_y > settings.header_threshold,
			back_to_top_visible: scroll_y > settings.back_to_top_threshold,
		}
	}
}

/// Wires the scroll listener and the back-to-top click.
#[cfg(target_arch = "wasm32")]
pub fn mount(settings: &fresco_core::SiteSettings) -> crate::DomResult<()> {
	use crate::dom;
	use fresco_core::info_log;
	use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

	let window = dom::window()?;
	let document = dom::document()?;
	let header: Option<Element> = dom::by_id(&document, &settings.dom.header_id);
	let back_to_top: Option<HtmlElement> = dom::by_id(&document, &settings.dom.back_to_top_id);

	let apply = {
		let window = window.clone();
		let back_to_top = back_to_top.clone();
		let scroll = settings.scroll.clone();
		move || {
			let chrome = ScrollChrome::at(window.scroll_y().unwrap_or(0.0), &scroll);
			if let Some(header) = &header {
				let _ = header
					.class_list()
					.toggle_with_force(SCROLLED_CLASS, chrome.header_scrolled);
			}
			if let Some(button) = &back_to_top {
				button.set_hidden(!chrome.back_to_top_visible);
			}
		}
	};
	apply();
	dom::listen_passive(&window, "scroll", move |_| apply())?;

	match back_to_top {
		Some(button) => {
			let window = window.clone();
			dom::listen(&button, "click", move |_| {
				let options = ScrollToOptions::new();
				options.set_top(0.0);
				options.set_behavior(ScrollBehavior::Smooth);
				window.scroll_to_with_scroll_to_options(&options);
			})?;
		}
		None => info_log!("#{} not found, back-to-top disabled", settings.dom.back_to_top_id),
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	/// Tests the default scroll thresholds are exclusive
	#[rstest]
	#[case(0.0, false, false)]
	#[case(20.0, false, false)]
	#[case(20.5, true, false)]
	#[case(400.0, true, false)]
	#[case(401.0, true, true)]
	fn test_default_thresholds_are_exclusive(
		#[case] scroll_y: f64,
		#[case] header_scrolled: bool,
		#[case] back_to_top_visible: bool,
	) {
		let chrome = ScrollChrome::at(scroll_y, &ScrollSettings::default());
		assert_eq!(
			chrome,
			ScrollChrome {
				header_scrolled,
				back_to_top_visible,
			}
		);
	}

	/// Tests custom scroll thresholds
	#[rstest]
	fn test_custom_thresholds() {
		let settings = ScrollSettings {
			header_threshold: 0.0,
			back_to_top_threshold: 50.0,
		};
		assert!(ScrollChrome::at(1.0, &settings).header_scrolled);
		assert!(ScrollChrome::at(51.0, &settings).back_to_top_visible);
	}
}
