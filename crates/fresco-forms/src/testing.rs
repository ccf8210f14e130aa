//! In-memory form surface
//!
//! [`MemorySurface`] stands in for the page in host tests. It records every
//! visible effect (errors, focus, navigation, submit control state) and
//! queues deferred tasks until the test runs them.
//!
//! ```
//! use fresco_forms::testing::MemorySurface;
//! use fresco_forms::{ContactField, SubmissionController, SubmissionOptions};
//!
//! let surface = MemorySurface::filled("J", "123", "bad", "hi");
//! let controller = SubmissionController::new(surface.clone(), SubmissionOptions::default());
//!
//! controller.handle_submit();
//! assert_eq!(surface.focused(), Some(ContactField::Name));
//! assert!(surface.navigations().is_empty());
//! ```

use crate::field::{ContactField, FormField};
use crate::submission::FormSurface;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Label the in-memory submit control starts with.
pub const INITIAL_SUBMIT_LABEL: &str = "Get My Free Estimate";

/// State of the in-memory submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
	/// Current label.
	pub label: String,
	/// Whether the control is disabled.
	pub disabled: bool,
	/// Background and border colour override, if any.
	pub color: Option<String>,
}

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Page {
	fields: Vec<FormField>,
	initial_values: Vec<(ContactField, String)>,
	focused: Option<ContactField>,
	navigations: Vec<String>,
	submit: Option<SubmitControl>,
	deferred: Vec<(Duration, Task)>,
}

impl Page {
	fn field_mut(&mut self, field: ContactField) -> Option<&mut FormField> {
		self.fields.iter_mut().find(|f| f.field() == field)
	}
}

/// A [`FormSurface`] backed by plain Rust values.
///
/// Clones share the same page.
#[derive(Clone)]
pub struct MemorySurface {
	page: Rc<RefCell<Page>>,
}

impl MemorySurface {
	/// A page with all four empty fields and a submit control.
	pub fn new() -> Self {
		let page = Page {
			fields: ContactField::ALL.into_iter().map(FormField::new).collect(),
			initial_values: ContactField::ALL
				.into_iter()
				.map(|field| (field, String::new()))
				.collect(),
			submit: Some(SubmitControl {
				label: INITIAL_SUBMIT_LABEL.to_string(),
				disabled: false,
				color: None,
			}),
			..Page::default()
		};
		Self {
			page: Rc::new(RefCell::new(page)),
		}
	}

	/// A page whose fields already hold the given values.
	pub fn filled(name: &str, phone: &str, email: &str, message: &str) -> Self {
		let surface = Self::new();
		for (field, value) in ContactField::ALL.into_iter().zip([name, phone, email, message]) {
			surface.type_into(field, value);
		}
		surface
	}

	/// Removes `field` from the page.
	pub fn without_field(self, field: ContactField) -> Self {
		{
			let mut page = self.page.borrow_mut();
			page.fields.retain(|f| f.field() != field);
			page.initial_values.retain(|(f, _)| *f != field);
		}
		self
	}

	/// Removes the submit control from the page.
	pub fn without_submit(self) -> Self {
		self.page.borrow_mut().submit = None;
		self
	}

	/// Replaces the value of `field` as if the visitor typed it.
	///
	/// Only the value changes; wiring the input handler is up to the caller.
	pub fn type_into(&self, field: ContactField, value: &str) {
		if let Some(f) = self.page.borrow_mut().field_mut(field) {
			f.set_value(value);
		}
	}

	/// Snapshot of `field`, if present.
	pub fn field(&self, field: ContactField) -> Option<FormField> {
		self.page
			.borrow()
			.fields
			.iter()
			.find(|f| f.field() == field)
			.cloned()
	}

	/// Fields currently marked invalid, in document order.
	pub fn invalid_fields(&self) -> Vec<ContactField> {
		self.page
			.borrow()
			.fields
			.iter()
			.filter(|f| f.is_invalid())
			.map(FormField::field)
			.collect()
	}

	/// Field that last received focus.
	pub fn focused(&self) -> Option<ContactField> {
		self.page.borrow().focused
	}

	/// Every URI the page was sent to, oldest first.
	pub fn navigations(&self) -> Vec<String> {
		self.page.borrow().navigations.clone()
	}

	/// Snapshot of the submit control, if present.
	pub fn submit(&self) -> Option<SubmitControl> {
		self.page.borrow().submit.clone()
	}

	/// Delays of the tasks waiting to run, oldest first.
	pub fn pending_delays(&self) -> Vec<Duration> {
		self.page
			.borrow()
			.deferred
			.iter()
			.map(|(delay, _)| *delay)
			.collect()
	}

	/// Runs the oldest deferred task. Returns `false` when none was queued.
	pub fn run_next_deferred(&self) -> bool {
		let task = {
			let mut page = self.page.borrow_mut();
			if page.deferred.is_empty() {
				return false;
			}
			page.deferred.remove(0).1
		};
		task();
		true
	}

	/// Runs every queued task, including ones queued while running.
	pub fn run_deferred(&self) {
		while self.run_next_deferred() {}
	}
}

impl Default for MemorySurface {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for MemorySurface {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let page = self.page.borrow();
		f.debug_struct("MemorySurface")
			.field("fields", &page.fields)
			.field("focused", &page.focused)
			.field("navigations", &page.navigations)
			.field("submit", &page.submit)
			.field("deferred", &page.deferred.len())
			.finish()
	}
}

impl FormSurface for MemorySurface {
	fn value(&self, field: ContactField) -> Option<String> {
		self.field(field).map(|f| f.value().to_string())
	}

	fn show_error(&self, field: ContactField, message: &str) {
		if let Some(f) = self.page.borrow_mut().field_mut(field) {
			f.show_error(message);
		}
	}

	fn clear_error(&self, field: ContactField) {
		if let Some(f) = self.page.borrow_mut().field_mut(field) {
			f.clear_error();
		}
	}

	fn focus(&self, field: ContactField) {
		let mut page = self.page.borrow_mut();
		if page.field_mut(field).is_some() {
			page.focused = Some(field);
		}
	}

	fn navigate(&self, uri: &str) {
		self.page.borrow_mut().navigations.push(uri.to_string());
	}

	fn show_confirmation(&self, label: &str, color: &str) {
		if let Some(submit) = self.page.borrow_mut().submit.as_mut() {
			submit.label = label.to_string();
			submit.disabled = true;
			submit.color = Some(color.to_string());
		}
	}

	fn restore_submit(&self) {
		if let Some(submit) = self.page.borrow_mut().submit.as_mut() {
			submit.label = INITIAL_SUBMIT_LABEL.to_string();
			submit.disabled = false;
			submit.color = None;
		}
	}

	fn reset_fields(&self) {
		let mut page = self.page.borrow_mut();
		let initial = page.initial_values.clone();
		for (field, value) in initial {
			if let Some(f) = page.field_mut(field) {
				f.set_value(value);
			}
		}
	}

	fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
		self.page.borrow_mut().deferred.push((delay, task));
	}
}
