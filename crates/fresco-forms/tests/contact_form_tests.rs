//! Contact form submission tests
//!
//! Drives [`SubmissionController`] against the in-memory surface and checks
//! what the visitor would see: error slots, focus, the mail link and the
//! submit control.

use fresco_forms::testing::{INITIAL_SUBMIT_LABEL, MemorySurface};
use fresco_forms::{
	ContactField, SubmissionController, SubmissionOptions, SubmissionState, SubmitOutcome,
};
use rstest::rstest;
use std::time::Duration;

fn controller_for(surface: &MemorySurface) -> SubmissionController<MemorySurface> {
	SubmissionController::new(surface.clone(), SubmissionOptions::default())
}

fn decoded_body(uri: &str) -> String {
	let (_, encoded) = uri.split_once("&body=").expect("mailto link has a body");
	urlencoding::decode(encoded).unwrap().into_owned()
}

/// Tests an all-invalid submit marks every field and focuses the name
#[rstest]
fn test_all_fields_invalid_shows_four_errors_and_focuses_name() {
	let surface = MemorySurface::filled("J", "123", "bad", "hi");
	let controller = controller_for(&surface);

	let outcome = controller.handle_submit();

	assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
	assert_eq!(surface.invalid_fields(), ContactField::ALL);
	assert_eq!(surface.focused(), Some(ContactField::Name));
	assert!(surface.navigations().is_empty());
	assert_eq!(
		surface.field(ContactField::Name).unwrap().error(),
		Some("Please enter your full name.")
	);
	assert_eq!(
		surface.field(ContactField::Message).unwrap().error(),
		Some("Please describe your project (at least 10 characters).")
	);
}

/// Tests a valid request without email opens the mail client
#[rstest]
fn test_valid_request_without_email_hands_off_to_mail_client() {
	let surface = MemorySurface::filled("Jo", "1234567", "", "Please paint my house");
	let controller = controller_for(&surface);

	let SubmitOutcome::Sent(uri) = controller.handle_submit() else {
		panic!("expected the request to be sent");
	};

	assert_eq!(surface.navigations(), vec![uri.clone()]);
	assert!(uri.starts_with("mailto:estimates@mmpaintingdesign.com?subject="));
	assert_eq!(
		decoded_body(&uri),
		"Name: Jo\nPhone: 1234567\nEmail: Not provided\n\nProject Details:\nPlease paint my house"
	);
	assert!(surface.invalid_fields().is_empty());
}

/// Tests the body lists name, phone, email and message in order
#[rstest]
fn test_body_lists_fields_in_order() {
	let surface = MemorySurface::filled(
		"Maria Lopez",
		"+1 555 010 0000",
		"maria@example.com",
		"Two bedrooms and a hallway, eggshell finish",
	);
	let controller = controller_for(&surface);

	let SubmitOutcome::Sent(uri) = controller.handle_submit() else {
		panic!("expected the request to be sent");
	};
	let body = decoded_body(&uri);

	let positions: Vec<usize> = [
		"Name: ",
		"Phone: ",
		"Email: ",
		"Two bedrooms and a hallway, eggshell finish",
	]
	.iter()
	.map(|needle| body.find(needle).expect("body contains every part"))
	.collect();
	assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

/// Tests errors from the previous attempt are cleared
#[rstest]
fn test_previous_errors_are_cleared_on_the_next_attempt() {
	let surface = MemorySurface::filled("J", "1234567", "", "Please paint my house");
	let controller = controller_for(&surface);

	controller.handle_submit();
	assert_eq!(surface.invalid_fields(), vec![ContactField::Name]);

	surface.type_into(ContactField::Name, "Jo");
	surface.type_into(ContactField::Phone, "12");
	controller.handle_submit();

	assert_eq!(surface.invalid_fields(), vec![ContactField::Phone]);
	assert_eq!(surface.focused(), Some(ContactField::Phone));
}

/// Tests typing clears an error without re-validating
#[rstest]
fn test_typing_clears_error_without_revalidating() {
	let surface = MemorySurface::filled("J", "123", "", "Please paint my house");
	let controller = controller_for(&surface);
	controller.handle_submit();

	// Still too short, but the error only comes back on the next submit
	surface.type_into(ContactField::Name, "K");
	controller.handle_input(ContactField::Name);

	assert_eq!(surface.invalid_fields(), vec![ContactField::Phone]);
}

/// Tests the confirmation shows and the form resets after the delay
#[rstest]
fn test_confirmation_then_reset_after_delay() {
	let surface = MemorySurface::filled("Jo", "1234567", "jo@example.com", "Please paint my house");
	let controller = controller_for(&surface);

	controller.handle_submit();

	let submit = surface.submit().unwrap();
	assert!(submit.disabled);
	assert_eq!(submit.label, "✓ Request Sent! We'll be in touch.");
	assert_eq!(submit.color.as_deref(), Some("#22863a"));
	assert_eq!(surface.pending_delays(), vec![Duration::from_secs(5)]);

	surface.run_deferred();

	let submit = surface.submit().unwrap();
	assert!(!submit.disabled);
	assert_eq!(submit.label, INITIAL_SUBMIT_LABEL);
	assert_eq!(submit.color, None);
	for field in ContactField::ALL {
		assert_eq!(surface.field(field).unwrap().value(), "");
	}
	assert_eq!(controller.state(), SubmissionState::Idle);
}

/// Tests a resubmission during the reset window is validated on its own
#[rstest]
fn test_resubmission_inside_reset_window_is_validated_independently() {
	let surface = MemorySurface::filled("Jo", "1234567", "", "Please paint my house");
	let controller = controller_for(&surface);
	controller.handle_submit();
	assert!(surface.submit().unwrap().disabled);

	surface.type_into(ContactField::Email, "not-an-email");
	let outcome = controller.handle_submit();

	assert!(!outcome.is_sent());
	assert_eq!(surface.invalid_fields(), vec![ContactField::Email]);
	assert_eq!(surface.navigations().len(), 1);

	surface.type_into(ContactField::Email, "jo@example.com");
	assert!(controller.handle_submit().is_sent());
	assert_eq!(surface.navigations().len(), 2);
	assert_eq!(surface.pending_delays().len(), 2);
}

/// Tests a page without an email field still sends
#[rstest]
fn test_missing_email_field_is_skipped() {
	let surface = MemorySurface::filled("Jo", "1234567", "", "Please paint my house")
		.without_field(ContactField::Email);
	let controller = controller_for(&surface);

	let SubmitOutcome::Sent(uri) = controller.handle_submit() else {
		panic!("expected the request to be sent");
	};
	assert!(decoded_body(&uri).contains("Email: Not provided"));
}

/// Tests a page without a submit control still resets its fields
#[rstest]
fn test_missing_submit_control_still_resets_fields() {
	let surface =
		MemorySurface::filled("Jo", "1234567", "", "Please paint my house").without_submit();
	let controller = controller_for(&surface);

	assert!(controller.handle_submit().is_sent());
	assert_eq!(surface.submit(), None);

	surface.run_deferred();
	assert_eq!(surface.field(ContactField::Name).unwrap().value(), "");
}

/// Tests custom options change the recipient and reset delay
#[rstest]
fn test_custom_options_change_recipient_and_delay() {
	let surface = MemorySurface::filled("Jo", "1234567", "", "Please paint my house");
	let options = SubmissionOptions {
		recipient: "office@example.com".to_string(),
		subject: "Quote".to_string(),
		reset_delay: Duration::from_millis(1500),
		..SubmissionOptions::default()
	};
	let controller = SubmissionController::new(surface.clone(), options);

	let SubmitOutcome::Sent(uri) = controller.handle_submit() else {
		panic!("expected the request to be sent");
	};
	assert!(uri.starts_with("mailto:office@example.com?subject=Quote&body="));
	assert_eq!(surface.pending_delays(), vec![Duration::from_millis(1500)]);
}
