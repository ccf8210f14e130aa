//! Contact form fields and their error state

use std::fmt;

/// Result type for field validation.
pub type FieldResult<T> = Result<T, FieldError>;

/// A field value that failed its rule.
///
/// The `Display` output is the message shown to the visitor.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// The trimmed value is shorter than the rule allows.
	#[error("{message}")]
	TooShort {
		/// Minimum number of characters.
		min: usize,
		/// Number of characters supplied.
		actual: usize,
		/// Message shown to the visitor.
		message: String,
	},

	/// The value does not have the expected shape.
	#[error("{0}")]
	InvalidFormat(String),
}

impl FieldError {
	/// The message shown next to the field.
	pub fn message(&self) -> &str {
		match self {
			Self::TooShort { message, .. } => message,
			Self::InvalidFormat(message) => message,
		}
	}
}

/// The four inputs of the estimate request form, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
	/// Visitor's full name.
	Name,
	/// Contact phone number.
	Phone,
	/// Optional email address.
	Email,
	/// Project description.
	Message,
}

impl ContactField {
	/// Every field in document order.
	pub const ALL: [ContactField; 4] = [Self::Name, Self::Phone, Self::Email, Self::Message];

	/// Element id of the input.
	///
	/// # Examples
	///
	/// ```
	/// use fresco_forms::ContactField;
	///
	/// assert_eq!(ContactField::Phone.id(), "phone");
	/// assert_eq!(ContactField::Phone.error_id(), "phoneError");
	/// ```
	pub fn id(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Phone => "phone",
			Self::Email => "email",
			Self::Message => "message",
		}
	}

	/// Element id of the error slot paired with the input.
	pub fn error_id(self) -> &'static str {
		match self {
			Self::Name => "nameError",
			Self::Phone => "phoneError",
			Self::Email => "emailError",
			Self::Message => "messageError",
		}
	}
}

impl fmt::Display for ContactField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// A form input together with its error slot.
///
/// A field is invalid exactly when its error text is non-empty, so the two
/// are stored as one `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
	field: ContactField,
	value: String,
	error: Option<String>,
}

impl FormField {
	/// Creates an empty, valid field.
	pub fn new(field: ContactField) -> Self {
		Self {
			field,
			value: String::new(),
			error: None,
		}
	}

	/// Sets the initial value.
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Which field this is.
	pub fn field(&self) -> ContactField {
		self.field
	}

	/// Current raw value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Replaces the current value.
	pub fn set_value(&mut self, value: impl Into<String>) {
		self.value = value.into();
	}

	/// Error text currently displayed, if any.
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// Whether the field is marked invalid.
	pub fn is_invalid(&self) -> bool {
		self.error.is_some()
	}

	/// Marks the field invalid with `message`.
	///
	/// An empty message leaves the field clear.
	///
	/// # Examples
	///
	/// ```
	/// use fresco_forms::{ContactField, FormField};
	///
	/// let mut field = FormField::new(ContactField::Name);
	/// field.show_error("Please enter your full name.");
	/// assert!(field.is_invalid());
	///
	/// field.clear_error();
	/// assert!(!field.is_invalid());
	/// assert_eq!(field.error(), None);
	/// ```
	pub fn show_error(&mut self, message: impl Into<String>) {
		let message = message.into();
		self.error = (!message.is_empty()).then_some(message);
	}

	/// Removes the invalid marking and its text.
	pub fn clear_error(&mut self) {
		self.error = None;
	}

	/// Empties the value and clears any error.
	pub fn reset(&mut self) {
		self.value.clear();
		self.error = None;
	}
}
