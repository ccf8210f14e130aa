//! The estimate request form
//!
//! [`ContactForm`] owns one rule per field and turns a snapshot of the
//! field values into a [`ValidationResult`]. Each field is checked
//! independently, so a single submission reports every problem at once.

use crate::field::{ContactField, FieldError};
use crate::validators::{EmailValidator, MinLengthValidator, OptionalValidator, Validator};
use std::collections::BTreeMap;

/// Snapshot of the raw field values read from the page.
///
/// A field that is absent from the page has no entry; its rule is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
	values: BTreeMap<ContactField, String>,
}

impl FieldValues {
	/// Creates an empty snapshot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a value, builder style.
	pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
		self.insert(field, value);
		self
	}

	/// Records the value of `field`.
	pub fn insert(&mut self, field: ContactField, value: impl Into<String>) {
		self.values.insert(field, value.into());
	}

	/// Raw value of `field`, if the field exists.
	pub fn get(&self, field: ContactField) -> Option<&str> {
		self.values.get(&field).map(String::as_str)
	}

	/// Trimmed value of `field`, if the field exists.
	///
	/// See [`trim_value`] for what counts as surrounding whitespace.
	pub fn trimmed(&self, field: ContactField) -> Option<&str> {
		self.get(field).map(trim_value)
	}
}

/// Strips leading and trailing whitespace the way the page's `String.trim`
/// does.
///
/// That is Unicode whitespace plus the byte order mark U+FEFF, but not
/// U+0085 (NEXT LINE).
///
/// # Examples
///
/// ```
/// use fresco_forms::form::trim_value;
///
/// assert_eq!(trim_value("\u{feff} Jo \n"), "Jo");
/// assert_eq!(trim_value("\u{85}Jo"), "\u{85}Jo");
/// ```
pub fn trim_value(value: &str) -> &str {
	value.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
	// Document order; `None` means the field passed or was skipped.
	outcomes: Vec<(ContactField, Option<FieldError>)>,
}

impl ValidationResult {
	/// Whether every field passed.
	pub fn is_valid(&self) -> bool {
		self.outcomes.iter().all(|(_, err)| err.is_none())
	}

	/// The error for `field`, if it failed.
	pub fn error(&self, field: ContactField) -> Option<&FieldError> {
		self.outcomes
			.iter()
			.find(|(f, _)| *f == field)
			.and_then(|(_, err)| err.as_ref())
	}

	/// Failed fields and their errors, in document order.
	pub fn errors(&self) -> impl Iterator<Item = (ContactField, &FieldError)> {
		self.outcomes
			.iter()
			.filter_map(|(field, err)| err.as_ref().map(|err| (*field, err)))
	}

	/// The first failed field in document order.
	pub fn first_invalid(&self) -> Option<ContactField> {
		self.errors().next().map(|(field, _)| field)
	}
}

struct FieldRule {
	field: ContactField,
	validator: Box<dyn Validator>,
}

/// Rule set of the estimate request form.
///
/// # Examples
///
/// ```
/// use fresco_forms::{ContactField, ContactForm, FieldValues};
///
/// let form = ContactForm::new();
/// let values = FieldValues::new()
///     .with(ContactField::Name, "Jo")
///     .with(ContactField::Phone, "1234567")
///     .with(ContactField::Email, "")
///     .with(ContactField::Message, "Please paint my house");
///
/// assert!(form.validate(&values).is_valid());
/// ```
pub struct ContactForm {
	rules: Vec<FieldRule>,
}

impl ContactForm {
	/// The site's standard rules:
	///
	/// - name: at least 2 characters
	/// - phone: at least 7 characters
	/// - email: optional, `local@domain.tld` when present
	/// - message: at least 10 characters
	pub fn new() -> Self {
		Self::empty()
			.with_rule(
				ContactField::Name,
				MinLengthValidator::new(2).with_message("Please enter your full name."),
			)
			.with_rule(
				ContactField::Phone,
				MinLengthValidator::new(7).with_message("Please enter a valid phone number."),
			)
			.with_rule(
				ContactField::Email,
				OptionalValidator::new(
					EmailValidator::new().with_message("Please enter a valid email address."),
				),
			)
			.with_rule(
				ContactField::Message,
				MinLengthValidator::new(10)
					.with_message("Please describe your project (at least 10 characters)."),
			)
	}

	/// A form with no rules.
	pub fn empty() -> Self {
		Self { rules: Vec::new() }
	}

	/// Adds a rule for `field`. Rules run in the order they were added.
	pub fn with_rule(mut self, field: ContactField, validator: impl Validator + 'static) -> Self {
		self.rules.push(FieldRule {
			field,
			validator: Box::new(validator),
		});
		self
	}

	/// Checks every field present in `values`.
	pub fn validate(&self, values: &FieldValues) -> ValidationResult {
		let outcomes = self
			.rules
			.iter()
			.map(|rule| {
				let error = values
					.trimmed(rule.field)
					.and_then(|value| rule.validator.validate(value).err());
				(rule.field, error)
			})
			.collect();

		ValidationResult { outcomes }
	}
}

impl Default for ContactForm {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for ContactForm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ContactForm")
			.field(
				"rules",
				&self.rules.iter().map(|rule| rule.field).collect::<Vec<_>>(),
			)
			.finish()
	}
}
