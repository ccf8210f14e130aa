//! Submission state machine
//!
//! ```text
//! Idle ──submit──► Validating ──► Invalid ──(next submit)──► Validating
//!                       │
//!                       └──────► Valid ──(reset delay)──► Idle
//! ```
//!
//! [`SubmissionController`] drives one contact form. It never touches the
//! DOM itself; everything visible goes through a [`FormSurface`], which the
//! browser build implements with `web-sys` and tests implement in memory.
//!
//! A valid submission schedules one reset through [`FormSurface::defer`].
//! Resets cannot be cancelled, and a second valid submission inside the
//! delay schedules its own. The controller is back in `Idle` once every
//! scheduled reset has run.

use crate::field::ContactField;
use crate::form::{ContactForm, FieldValues, ValidationResult};
use crate::mailto::{EstimateRequest, MailtoLink};
use fresco_core::{ContactSettings, debug_log};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Where the submission cycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
	/// Waiting for a submit.
	#[default]
	Idle,
	/// Checking the fields.
	Validating,
	/// The last submit failed validation.
	Invalid,
	/// The last submit was handed to the mail client; a reset is pending.
	Valid,
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// At least one field failed; nothing was sent.
	Rejected(ValidationResult),
	/// The browser was sent to this `mailto:` URI.
	Sent(String),
}

impl SubmitOutcome {
	/// Whether the request reached the mail client.
	pub fn is_sent(&self) -> bool {
		matches!(self, Self::Sent(_))
	}
}

/// The visible side of a contact form.
///
/// Implementations must keep a field's invalid marking and its error text in
/// step: [`show_error`](Self::show_error) sets both,
/// [`clear_error`](Self::clear_error) clears both. Every method silently does
/// nothing when the element it needs is missing.
pub trait FormSurface: Clone + 'static {
	/// Current raw value of `field`, or `None` when the field is absent.
	fn value(&self, field: ContactField) -> Option<String>;

	/// Marks `field` invalid and shows `message` in its error slot.
	fn show_error(&self, field: ContactField, message: &str);

	/// Removes the invalid marking and empties the error slot.
	fn clear_error(&self, field: ContactField);

	/// Moves input focus to `field`.
	fn focus(&self, field: ContactField);

	/// Sends the browser to `uri`.
	fn navigate(&self, uri: &str);

	/// Disables the submit control and shows the confirmation.
	fn show_confirmation(&self, label: &str, color: &str);

	/// Re-enables the submit control with its original label and colours.
	fn restore_submit(&self);

	/// Returns every field to its initial value.
	fn reset_fields(&self);

	/// Runs `task` once after `delay`.
	fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// What a valid submission does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOptions {
	/// Mail recipient.
	pub recipient: String,
	/// Mail subject.
	pub subject: String,
	/// Submit label shown after sending.
	pub confirmation_label: String,
	/// Submit colour shown after sending.
	pub success_color: String,
	/// Time until the form resets.
	pub reset_delay: Duration,
}

impl From<&ContactSettings> for SubmissionOptions {
	fn from(settings: &ContactSettings) -> Self {
		Self {
			recipient: settings.recipient.clone(),
			subject: settings.subject.clone(),
			confirmation_label: settings.confirmation_label.clone(),
			success_color: settings.success_color.clone(),
			reset_delay: Duration::from_millis(u64::from(settings.reset_delay_ms)),
		}
	}
}

impl Default for SubmissionOptions {
	fn default() -> Self {
		Self::from(&ContactSettings::default())
	}
}

/// Drives validation and handoff for one contact form.
pub struct SubmissionController<S> {
	surface: S,
	form: ContactForm,
	options: SubmissionOptions,
	state: Rc<Cell<SubmissionState>>,
	pending_resets: Rc<Cell<usize>>,
}

impl<S: FormSurface> SubmissionController<S> {
	/// Creates a controller using the standard contact form rules.
	pub fn new(surface: S, options: SubmissionOptions) -> Self {
		Self {
			surface,
			form: ContactForm::new(),
			options,
			state: Rc::new(Cell::new(SubmissionState::Idle)),
			pending_resets: Rc::new(Cell::new(0)),
		}
	}

	/// Replaces the rule set.
	pub fn with_form(mut self, form: ContactForm) -> Self {
		self.form = form;
		self
	}

	/// Current state.
	pub fn state(&self) -> SubmissionState {
		self.state.get()
	}

	/// Number of resets scheduled but not yet run.
	pub fn pending_resets(&self) -> usize {
		self.pending_resets.get()
	}

	/// The surface this controller drives.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Handles an edit of `field`: its own error goes away, nothing is
	/// re-validated.
	pub fn handle_input(&self, field: ContactField) {
		self.surface.clear_error(field);
	}

	/// Handles a submit attempt.
	///
	/// The caller is responsible for suppressing the browser's own
	/// submission before calling this.
	pub fn handle_submit(&self) -> SubmitOutcome {
		self.state.set(SubmissionState::Validating);

		for field in ContactField::ALL {
			self.surface.clear_error(field);
		}

		let mut values = FieldValues::new();
		for field in ContactField::ALL {
			if let Some(value) = self.surface.value(field) {
				values.insert(field, value);
			}
		}

		let result = self.form.validate(&values);
		if !result.is_valid() {
			for (field, error) in result.errors() {
				self.surface.show_error(field, error.message());
			}
			if let Some(field) = result.first_invalid() {
				self.surface.focus(field);
			}
			self.state.set(SubmissionState::Invalid);
			debug_log!("contact form rejected: {:?}", result);
			return SubmitOutcome::Rejected(result);
		}

		let request = EstimateRequest::from_values(&values);
		let uri = MailtoLink::new(&self.options.recipient, &self.options.subject)
			.with_body(request.body())
			.to_uri();

		self.surface.navigate(&uri);
		self.surface
			.show_confirmation(&self.options.confirmation_label, &self.options.success_color);
		self.state.set(SubmissionState::Valid);
		self.schedule_reset();

		SubmitOutcome::Sent(uri)
	}

	fn schedule_reset(&self) {
		self.pending_resets.set(self.pending_resets.get() + 1);

		let surface = self.surface.clone();
		let state = Rc::clone(&self.state);
		let pending = Rc::clone(&self.pending_resets);
		self.surface.defer(
			self.options.reset_delay,
			Box::new(move || {
				surface.restore_submit();
				surface.reset_fields();
				let remaining = pending.get().saturating_sub(1);
				pending.set(remaining);
				if remaining == 0 && state.get() == SubmissionState::Valid {
					state.set(SubmissionState::Idle);
				}
			}),
		);
	}
}

impl<S> std::fmt::Debug for SubmissionController<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SubmissionController")
			.field("form", &self.form)
			.field("options", &self.options)
			.field("state", &self.state.get())
			.field("pending_resets", &self.pending_resets.get())
			.finish_non_exhaustive()
	}
}
