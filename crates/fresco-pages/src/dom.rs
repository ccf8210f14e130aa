//! Thin helpers over `web-sys`
//!
//! Lookups return `Option` because a missing element is an expected state of
//! the page. Listener registration leaks its closure: every behaviour lives
//! as long as the page does.

/// Errors raised while binding behaviours to the page.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
	/// `window` is not available (not running in a browser).
	#[error("Window is not available")]
	NoWindow,

	/// The window has no document.
	#[error("Document is not available")]
	NoDocument,

	/// A DOM call threw.
	#[error("JavaScript error: {0}")]
	Js(String),
}

/// Result type for DOM operations.
pub type DomResult<T> = Result<T, DomError>;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
	use super::{DomError, DomResult};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, Window};

	impl From<JsValue> for DomError {
		fn from(value: JsValue) -> Self {
			let message = value
				.dyn_ref::<js_sys::Error>()
				.map(|err| String::from(err.message()))
				.or_else(|| value.as_string())
				.unwrap_or_else(|| format!("{:?}", value));
			DomError::Js(message)
		}
	}

	/// The global window.
	pub fn window() -> DomResult<Window> {
		web_sys::window().ok_or(DomError::NoWindow)
	}

	/// The window's document.
	pub fn document() -> DomResult<Document> {
		window()?.document().ok_or(DomError::NoDocument)
	}

	/// Looks up an element by id and casts it to `T`.
	///
	/// Returns `None` when the element is missing or of another type.
	pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
		document.get_element_by_id(id)?.dyn_into::<T>().ok()
	}

	/// All elements matching `selector`, in document order.
	pub fn query_all(document: &Document, selector: &str) -> DomResult<Vec<Element>> {
		let list = document.query_selector_all(selector)?;
		Ok((0..list.length())
			.filter_map(|i| list.item(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect())
	}

	/// Registers `handler` for `event` on `target` for the page lifetime.
	pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> DomResult<()>
	where
		F: FnMut(Event) + 'static,
	{
		let closure = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
		closure.forget();
		Ok(())
	}

	/// Like [`listen`], but marks the listener passive.
	pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> DomResult<()>
	where
		F: FnMut(Event) + 'static,
	{
		let options = AddEventListenerOptions::new();
		options.set_passive(true);

		let closure = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback_and_add_event_listener_options(
			event,
			closure.as_ref().unchecked_ref(),
			&options,
		)?;
		closure.forget();
		Ok(())
	}
}
