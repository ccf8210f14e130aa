//! The estimate request form in the browser
//!
//! [`DomFormSurface`] implements [`fresco_forms::FormSurface`] over the real
//! form, and [`mount`] wires its `input` and `submit` events to a
//! [`fresco_forms::SubmissionController`].
//!
//! Field errors use the `error` class on the input and the text of the
//! paired `<id>Error` element.

/// Class marking an invalid input.
pub const ERROR_CLASS: &str = "error";

/// CSS properties overridden on the submit control while the confirmation
/// is shown.
pub const CONFIRMATION_STYLE_PROPERTIES: [&str; 2] = ["background", "border-color"];

#[cfg(target_arch = "wasm32")]
pub use wasm::{DomFormSurface, mount};

#[cfg(target_arch = "wasm32")]
mod wasm {
	use super::{CONFIRMATION_STYLE_PROPERTIES, ERROR_CLASS};
	use crate::{DomError, DomResult, dom};
	use fresco_core::{SiteSettings, info_log, warn_log};
	use fresco_forms::{
		ContactField, FormSurface, SubmissionController, SubmissionOptions, SubmitOutcome,
	};
	use gloo_timers::callback::Timeout;
	use std::rc::Rc;
	use std::time::Duration;
	use wasm_bindgen::JsCast;
	use web_sys::{
		Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
		HtmlTextAreaElement,
	};

	/// [`FormSurface`] over the page's contact form.
	#[derive(Clone)]
	pub struct DomFormSurface {
		document: Document,
		form: HtmlFormElement,
		submit: Option<HtmlButtonElement>,
		initial_label: Rc<str>,
	}

	impl DomFormSurface {
		/// Wraps `form`; the submit control's current markup becomes the
		/// label restored after each confirmation.
		pub fn new(
			document: Document,
			form: HtmlFormElement,
			submit: Option<HtmlButtonElement>,
		) -> Self {
			let initial_label = submit
				.as_ref()
				.map(|button| button.inner_html())
				.unwrap_or_default();
			Self {
				document,
				form,
				submit,
				initial_label: Rc::from(initial_label),
			}
		}

		fn input(&self, field: ContactField) -> Option<Element> {
			self.document.get_element_by_id(field.id())
		}

		fn error_slot(&self, field: ContactField) -> Option<Element> {
			self.document.get_element_by_id(field.error_id())
		}

		fn set_error(&self, field: ContactField, message: Option<&str>) {
			if let Some(input) = self.input(field) {
				let _ = input
					.class_list()
					.toggle_with_force(ERROR_CLASS, message.is_some());
			}
			if let Some(slot) = self.error_slot(field) {
				slot.set_text_content(Some(message.unwrap_or_default()));
			}
		}
	}

	impl FormSurface for DomFormSurface {
		fn value(&self, field: ContactField) -> Option<String> {
			let input = self.input(field)?;
			if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
				return Some(input.value());
			}
			input
				.dyn_ref::<HtmlTextAreaElement>()
				.map(HtmlTextAreaElement::value)
		}

		fn show_error(&self, field: ContactField, message: &str) {
			self.set_error(field, Some(message).filter(|m| !m.is_empty()));
		}

		fn clear_error(&self, field: ContactField) {
			self.set_error(field, None);
		}

		fn focus(&self, field: ContactField) {
			if let Some(input) = self
				.input(field)
				.and_then(|element| element.dyn_into::<HtmlElement>().ok())
			{
				let _ = input.focus();
			}
		}

		fn navigate(&self, uri: &str) {
			let result = dom::window()
				.and_then(|window| window.location().set_href(uri).map_err(DomError::from));
			if let Err(err) = result {
				warn_log!("could not open mail client: {}", err);
			}
		}

		fn show_confirmation(&self, label: &str, color: &str) {
			let Some(button) = &self.submit else {
				return;
			};
			button.set_text_content(Some(label));
			button.set_disabled(true);
			let style = button.style();
			for property in CONFIRMATION_STYLE_PROPERTIES {
				let _ = style.set_property(property, color);
			}
		}

		fn restore_submit(&self) {
			let Some(button) = &self.submit else {
				return;
			};
			button.set_inner_html(&self.initial_label);
			button.set_disabled(false);
			let style = button.style();
			for property in CONFIRMATION_STYLE_PROPERTIES {
				let _ = style.remove_property(property);
			}
		}

		fn reset_fields(&self) {
			self.form.reset();
		}

		fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
			let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
			Timeout::new(millis, task).forget();
		}
	}

	/// Wires the contact form, if the page has one.
	pub fn mount(settings: &SiteSettings) -> DomResult<()> {
		let document = dom::document()?;
		let Some(form) = dom::by_id::<HtmlFormElement>(&document, &settings.dom.contact_form_id)
		else {
			info_log!("#{} not found, contact form disabled", settings.dom.contact_form_id);
			return Ok(());
		};
		let submit = form
			.query_selector(&settings.dom.submit_selector)?
			.and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());

		let surface = DomFormSurface::new(document.clone(), form.clone(), submit);
		let controller = Rc::new(SubmissionController::new(
			surface,
			SubmissionOptions::from(&settings.contact),
		));

		for field in ContactField::ALL {
			let Some(input) = document.get_element_by_id(field.id()) else {
				continue;
			};
			let controller = Rc::clone(&controller);
			dom::listen(&input, "input", move |_| controller.handle_input(field))?;
		}

		dom::listen(&form, "submit", move |event| {
			event.prevent_default();
			match controller.handle_submit() {
				SubmitOutcome::Sent(_) => info_log!("estimate request handed to mail client"),
				SubmitOutcome::Rejected(result) => {
					info_log!("estimate request rejected: {} field(s)", result.errors().count())
				}
			}
		})?;

		Ok(())
	}
}
