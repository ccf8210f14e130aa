//! Field validators
//!
//! Validators receive the already-trimmed value. Lengths are counted in
//! UTF-16 code units, the unit the page's `value.length` reports, so a
//! character outside the Basic Multilingual Plane counts as two.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// One `@`, no whitespace, and a `.` somewhere after the `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// A rule applied to a single trimmed field value.
pub trait Validator: Send + Sync {
	/// Returns `Ok(())` when `value` satisfies the rule.
	fn validate(&self, value: &str) -> FieldResult<()>;
}

/// Requires at least `min` UTF-16 code units.
///
/// # Examples
///
/// ```
/// use fresco_forms::{MinLengthValidator, Validator};
///
/// let validator = MinLengthValidator::new(2);
/// assert!(validator.validate("Jo").is_ok());
/// assert!(validator.validate("J").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
	message: Option<String>,
}

impl MinLengthValidator {
	/// Creates a validator for the given minimum length.
	pub fn new(min: usize) -> Self {
		Self { min, message: None }
	}

	/// Sets the message returned on failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Minimum length in UTF-16 code units.
	pub fn min(&self) -> usize {
		self.min
	}
}

impl Validator for MinLengthValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		let actual = value.encode_utf16().count();
		if actual >= self.min {
			return Ok(());
		}
		let message = self.message.clone().unwrap_or_else(|| {
			format!("This field must be at least {} characters long", self.min)
		});
		Err(FieldError::TooShort {
			min: self.min,
			actual,
			message,
		})
	}
}

/// Accepts `local@domain.tld` shaped addresses.
///
/// # Examples
///
/// ```
/// use fresco_forms::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("a@b.c").is_ok());
/// assert!(validator.validate("a@b").is_err());
/// assert!(validator.validate("a b@c.d").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	/// Creates an email validator with the default message.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the message returned on failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl Validator for EmailValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid email address");
			Err(FieldError::InvalidFormat(msg.to_string()))
		}
	}
}

/// Lets an empty value through and applies the inner rule otherwise.
///
/// # Examples
///
/// ```
/// use fresco_forms::{EmailValidator, OptionalValidator, Validator};
///
/// let validator = OptionalValidator::new(EmailValidator::new());
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("bad").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OptionalValidator<V> {
	inner: V,
}

impl<V: Validator> OptionalValidator<V> {
	/// Wraps `inner`.
	pub fn new(inner: V) -> Self {
		Self { inner }
	}
}

impl<V: Validator> Validator for OptionalValidator<V> {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if value.is_empty() {
			Ok(())
		} else {
			self.inner.validate(value)
		}
	}
}
