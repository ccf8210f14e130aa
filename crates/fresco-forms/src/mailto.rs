//! Mail-client handoff
//!
//! A valid request becomes a `mailto:` URI whose subject and body are
//! percent-encoded. Opening the URI lets the visitor's own mail client
//! compose and send the message.

use crate::field::ContactField;
use crate::form::FieldValues;
use std::fmt;

/// Placeholder used in the body when no email address was given.
pub const NOT_PROVIDED: &str = "Not provided";

/// A validated estimate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateRequest {
	/// Visitor's name.
	pub name: String,
	/// Contact phone number.
	pub phone: String,
	/// Email address, if one was given.
	pub email: Option<String>,
	/// Project description.
	pub message: String,
}

impl EstimateRequest {
	/// Builds a request from trimmed field values.
	///
	/// Missing fields contribute empty text; an empty email becomes `None`.
	pub fn from_values(values: &FieldValues) -> Self {
		let text = |field: ContactField| values.trimmed(field).unwrap_or_default().to_string();

		Self {
			name: text(ContactField::Name),
			phone: text(ContactField::Phone),
			email: Some(text(ContactField::Email)).filter(|email| !email.is_empty()),
			message: text(ContactField::Message),
		}
	}

	/// Plain-text message body.
	///
	/// # Examples
	///
	/// ```
	/// use fresco_forms::EstimateRequest;
	///
	/// let request = EstimateRequest {
	///     name: "Jo".into(),
	///     phone: "1234567".into(),
	///     email: None,
	///     message: "Please paint my house".into(),
	/// };
	/// assert_eq!(
	///     request.body(),
	///     "Name: Jo\nPhone: 1234567\nEmail: Not provided\n\nProject Details:\nPlease paint my house"
	/// );
	/// ```
	pub fn body(&self) -> String {
		format!(
			"Name: {}\nPhone: {}\nEmail: {}\n\nProject Details:\n{}",
			self.name,
			self.phone,
			self.email.as_deref().unwrap_or(NOT_PROVIDED),
			self.message
		)
	}
}

/// A `mailto:` link with a subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
	recipient: String,
	subject: String,
	body: String,
}

impl MailtoLink {
	/// Creates a link with an empty body.
	pub fn new(recipient: impl Into<String>, subject: impl Into<String>) -> Self {
		Self {
			recipient: recipient.into(),
			subject: subject.into(),
			body: String::new(),
		}
	}

	/// Sets the body text.
	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();
		self
	}

	/// Recipient address.
	pub fn recipient(&self) -> &str {
		&self.recipient
	}

	/// Unencoded subject.
	pub fn subject(&self) -> &str {
		&self.subject
	}

	/// Unencoded body.
	pub fn body(&self) -> &str {
		&self.body
	}

	/// The encoded URI.
	///
	/// # Examples
	///
	/// ```
	/// use fresco_forms::MailtoLink;
	///
	/// let link = MailtoLink::new("office@example.com", "Quote & more").with_body("Line 1\nLine 2");
	/// assert_eq!(
	///     link.to_uri(),
	///     "mailto:office@example.com?subject=Quote%20%26%20more&body=Line%201%0ALine%202"
	/// );
	/// ```
	pub fn to_uri(&self) -> String {
		format!(
			"mailto:{}?subject={}&body={}",
			self.recipient,
			urlencoding::encode(&self.subject),
			urlencoding::encode(&self.body)
		)
	}
}

impl fmt::Display for MailtoLink {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_uri())
	}
}
