//! Contact form processing for the fresco site
//!
//! The estimate request form is validated entirely in the browser and, when
//! valid, handed to the visitor's own mail client through a `mailto:` link.
//! Nothing is sent over the network.
//!
//! - [`field`]: field identifiers and the error-presentation model
//! - [`validators`]: length and email rules
//! - [`form`]: the contact form rule set and its validation result
//! - [`mailto`]: request body and `mailto:` link construction
//! - [`submission`]: the submit state machine, generic over a [`FormSurface`]
//! - [`testing`]: an in-memory [`FormSurface`] for host tests

pub mod field;
pub mod form;
pub mod mailto;
pub mod submission;
pub mod testing;
pub mod validators;

pub use field::{ContactField, FieldError, FieldResult, FormField};
pub use form::{ContactForm, FieldValues, ValidationResult};
pub use mailto::{EstimateRequest, MailtoLink, NOT_PROVIDED};
pub use submission::{
	FormSurface, SubmissionController, SubmissionOptions, SubmissionState, SubmitOutcome,
};
pub use validators::{EmailValidator, MinLengthValidator, OptionalValidator, Validator};
