//! Smooth scrolling for in-page links

/// The selector an in-page `href` points at, if any.
///
/// A bare `#` and anything not starting with `#` yield `None`, which leaves
/// the browser's default behaviour alone.
///
/// # Examples
///
/// ```
/// use fresco_pages::anchors::anchor_target;
///
/// assert_eq!(anchor_target("#services"), Some("#services"));
/// assert_eq!(anchor_target("#"), None);
/// assert_eq!(anchor_target("/about"), None);
/// ```
pub fn anchor_target(href: &str) -> Option<&str> {
	(href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Makes every matching anchor scroll its target into view smoothly.
///
/// The default jump is prevented only when the target exists.
#[cfg(target_arch = "wasm32")]
pub fn mount(settings: &fresco_core::SiteSettings) -> crate::DomResult<()> {
	use crate::dom;
	use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

	let document = dom::document()?;
	for anchor in dom::query_all(&document, &settings.dom.anchor_selector)? {
		let document = document.clone();
		let link = anchor.clone();
		dom::listen(&anchor, "click", move |event| {
			let href = link.get_attribute("href").unwrap_or_default();
			let Some(selector) = anchor_target(&href) else {
				return;
			};
			// An href like "#1st" is not a valid selector; treat it as missing
			let Ok(Some(target)) = document.query_selector(selector) else {
				return;
			};
			event.prevent_default();

			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			options.set_block(ScrollLogicalPosition::Start);
			target.scroll_into_view_with_scroll_into_view_options(&options);
		})?;
	}
	Ok(())
}
