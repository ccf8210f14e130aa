//! Entrance animations
//!
//! Targets start faded and shifted down (`observe-target`) and transition in
//! once they first intersect the viewport (`in-view`), after which they are no
//! longer observed. Neighbouring targets are staggered so a row of cards
//! arrives one after another. Browsers without `IntersectionObserver` keep
//! the plain, fully visible page.

use fresco_core::RevealSettings;

/// Class that puts a target in its pre-animation state.
pub const OBSERVE_CLASS: &str = "observe-target";

/// Class that completes the animation.
pub const IN_VIEW_CLASS: &str = "in-view";

/// Style rules injected into `<head>` at mount.
pub const STYLE_RULES: &str = "
.observe-target {
  opacity: 0;
  transform: translateY(18px);
  transition: opacity 0.5s ease, transform 0.5s ease;
}
.observe-target.in-view {
  opacity: 1;
  transform: translateY(0);
}
";

/// `transition-delay` for the target at `index`.
///
/// # Examples
///
/// ```
/// use fresco_core::RevealSettings;
/// use fresco_pages::reveal::transition_delay;
///
/// let settings = RevealSettings::default();
/// assert_eq!(transition_delay(0, &settings), "0ms");
/// assert_eq!(transition_delay(3, &settings), "240ms");
/// assert_eq!(transition_delay(4, &settings), "0ms");
/// ```
pub fn transition_delay(index: usize, settings: &RevealSettings) -> String {
	let position = index % settings.stagger_columns.max(1);
	let delay = u64::from(settings.stagger_step_ms) * position as u64;
	format!("{}ms", delay)
}

#[cfg(target_arch = "wasm32")]
pub use wasm::mount;

#[cfg(target_arch = "wasm32")]
mod wasm {
	use super::{IN_VIEW_CLASS, OBSERVE_CLASS, STYLE_RULES, transition_delay};
	use crate::{DomResult, dom};
	use fresco_core::{SiteSettings, info_log};
	use wasm_bindgen::prelude::*;
	use wasm_bindgen::JsCast;
	use web_sys::{
		Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
		IntersectionObserverInit,
	};

	fn inject_style(document: &Document) -> DomResult<()> {
		let style = document.create_element("style")?;
		style.set_text_content(Some(STYLE_RULES));
		if let Some(head) = document.head() {
			head.append_child(&style)?;
		}
		Ok(())
	}

	/// Prepares every target and starts observing it.
	pub fn mount(settings: &SiteSettings) -> DomResult<()> {
		let window = dom::window()?;
		if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
			info_log!("IntersectionObserver unavailable, entrance animations disabled");
			return Ok(());
		}

		let document = dom::document()?;
		let selectors = settings.reveal.selector_list();
		if selectors.is_empty() {
			return Ok(());
		}
		let targets = dom::query_all(&document, &selectors)?;

		inject_style(&document)?;
		for (index, target) in targets.iter().enumerate() {
			target.class_list().add_1(OBSERVE_CLASS)?;
			if let Some(element) = target.dyn_ref::<HtmlElement>() {
				element
					.style()
					.set_property("transition-delay", &transition_delay(index, &settings.reveal))?;
			}
		}

		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			|entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					if entry.is_intersecting() {
						let target = entry.target();
						let _ = target.class_list().add_1(IN_VIEW_CLASS);
						observer.unobserve(&target);
					}
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(settings.reveal.threshold));
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
		callback.forget();

		for target in &targets {
			observer.observe(target);
		}
		Ok(())
	}
}
