//! FAQ accordion
//!
//! Items are native `<details>` elements; opening one closes the others.

/// Indices of the items to close after item `opened` toggled.
///
/// `open` holds the current open state of every item. Nothing closes when
/// the toggled item is itself closed.
///
/// # Examples
///
/// ```
/// use fresco_pages::accordion::others_to_close;
///
/// assert_eq!(others_to_close(1, &[true, true, false, true]), vec![0, 3]);
/// assert!(others_to_close(1, &[true, false, true]).is_empty());
/// ```
pub fn others_to_close(opened: usize, open: &[bool]) -> Vec<usize> {
	if !open.get(opened).copied().unwrap_or(false) {
		return Vec::new();
	}
	open.iter()
		.enumerate()
		.filter(|&(index, &is_open)| index != opened && is_open)
		.map(|(index, _)| index)
		.collect()
}

/// Listens for `toggle` on every accordion item.
#[cfg(target_arch = "wasm32")]
pub fn mount(settings: &fresco_core::SiteSettings) -> crate::DomResult<()> {
	use crate::dom;
	use std::rc::Rc;
	use wasm_bindgen::JsCast;
	use web_sys::HtmlDetailsElement;

	let document = dom::document()?;
	let items: Rc<Vec<HtmlDetailsElement>> = Rc::new(
		dom::query_all(&document, &settings.dom.faq_item_selector)?
			.into_iter()
			.filter_map(|element| element.dyn_into::<HtmlDetailsElement>().ok())
			.collect(),
	);

	for (index, item) in items.iter().enumerate() {
		let items = Rc::clone(&items);
		dom::listen(item, "toggle", move |_| {
			let open: Vec<bool> = items.iter().map(HtmlDetailsElement::open).collect();
			for other in others_to_close(index, &open) {
				items[other].set_open(false);
			}
		})?;
	}
	Ok(())
}
