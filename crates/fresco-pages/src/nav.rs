//! Mobile navigation overlay
//!
//! The hamburger's `aria-expanded` attribute is the single source of truth
//! for whether the overlay is open. Opening sets it, adds the `open` class to
//! the overlay, exposes the overlay to assistive technology and locks body
//! scrolling; closing reverses all four.
//!
//! The overlay closes on a hamburger click while open, on a click on any
//! mobile link, on `Escape` (focus returns to the hamburger), and on a click
//! on the overlay backdrop itself.

/// Class added to the overlay while open.
pub const OPEN_CLASS: &str = "open";

/// Whether the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
	/// Overlay hidden.
	#[default]
	Closed,
	/// Overlay shown.
	Open,
}

impl NavState {
	/// Reads the state from the hamburger's `aria-expanded` value.
	pub fn from_aria_expanded(value: Option<&str>) -> Self {
		if value == Some("true") {
			Self::Open
		} else {
			Self::Closed
		}
	}

	/// Whether the overlay is open.
	pub fn is_open(self) -> bool {
		self == Self::Open
	}

	/// The state a hamburger click leads to.
	pub fn toggled(self) -> Self {
		match self {
			Self::Open => Self::Closed,
			Self::Closed => Self::Open,
		}
	}

	/// Value for the hamburger's `aria-expanded`.
	pub fn aria_expanded(self) -> &'static str {
		if self.is_open() { "true" } else { "false" }
	}

	/// Value for the overlay's `aria-hidden`.
	pub fn aria_hidden(self) -> &'static str {
		if self.is_open() { "false" } else { "true" }
	}

	/// Value for the body's `overflow` style.
	pub fn body_overflow(self) -> &'static str {
		if self.is_open() { "hidden" } else { "" }
	}

	/// Whether a key press with `key` should close the overlay.
	///
	/// # Examples
	///
	/// ```
	/// use fresco_pages::nav::NavState;
	///
	/// assert!(NavState::Open.closes_on_key("Escape"));
	/// assert!(!NavState::Closed.closes_on_key("Escape"));
	/// assert!(!NavState::Open.closes_on_key("Enter"));
	/// ```
	pub fn closes_on_key(self, key: &str) -> bool {
		self.is_open() && key == "Escape"
	}
}

#[cfg(target_arch = "wasm32")]
pub use wasm::mount;

#[cfg(target_arch = "wasm32")]
mod wasm {
	use super::{NavState, OPEN_CLASS};
	use crate::{DomResult, dom};
	use fresco_core::{SiteSettings, info_log, warn_log};
	use wasm_bindgen::{JsCast, JsValue};
	use web_sys::{Element, HtmlElement, KeyboardEvent};

	#[derive(Clone)]
	struct MobileNav {
		hamburger: HtmlElement,
		overlay: Element,
		body: Option<HtmlElement>,
	}

	impl MobileNav {
		fn state(&self) -> NavState {
			NavState::from_aria_expanded(self.hamburger.get_attribute("aria-expanded").as_deref())
		}

		fn apply(&self, state: NavState) -> DomResult<()> {
			self.hamburger
				.set_attribute("aria-expanded", state.aria_expanded())?;
			self.overlay
				.class_list()
				.toggle_with_force(OPEN_CLASS, state.is_open())?;
			self.overlay
				.set_attribute("aria-hidden", state.aria_hidden())?;
			if let Some(body) = &self.body {
				body.style()
					.set_property("overflow", state.body_overflow())?;
			}
			Ok(())
		}

		fn set(&self, state: NavState) {
			if let Err(err) = self.apply(state) {
				warn_log!("failed to update mobile navigation: {}", err);
			}
		}
	}

	/// Wires the hamburger, mobile links, `Escape` and backdrop clicks.
	///
	/// Skipped unless both the hamburger and the overlay exist.
	pub fn mount(settings: &SiteSettings) -> DomResult<()> {
		let document = dom::document()?;
		let hamburger: Option<HtmlElement> = dom::by_id(&document, &settings.dom.hamburger_id);
		let overlay: Option<Element> = dom::by_id(&document, &settings.dom.mobile_nav_id);
		let (Some(hamburger), Some(overlay)) = (hamburger, overlay) else {
			info_log!("mobile navigation elements not found, skipping");
			return Ok(());
		};

		let nav = MobileNav {
			hamburger,
			overlay,
			body: document.body(),
		};

		{
			let nav = nav.clone();
			let hamburger = nav.hamburger.clone();
			dom::listen(&hamburger, "click", move |_| {
				nav.set(nav.state().toggled());
			})?;
		}

		for link in dom::query_all(&document, &settings.dom.mobile_link_selector)? {
			let nav = nav.clone();
			dom::listen(&link, "click", move |_| nav.set(NavState::Closed))?;
		}

		{
			let nav = nav.clone();
			dom::listen(&document, "keydown", move |event| {
				let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
					return;
				};
				if nav.state().closes_on_key(&key_event.key()) {
					nav.set(NavState::Closed);
					let _ = nav.hamburger.focus();
				}
			})?;
		}

		let overlay = nav.overlay.clone();
		dom::listen(&overlay, "click", move |event| {
			let overlay_value: &JsValue = nav.overlay.as_ref();
			let on_backdrop = event
				.target()
				.is_some_and(|target| JsValue::from(target) == *overlay_value);
			if on_backdrop {
				nav.set(NavState::Closed);
			}
		})?;

		Ok(())
	}
}
