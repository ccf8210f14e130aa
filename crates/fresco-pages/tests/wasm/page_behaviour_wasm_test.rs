//! Browser tests for the page behaviours
//!
//! Run with `wasm-pack test --headless --chrome crates/fresco-pages`.
//! Every test builds its own markup under unique ids so mounts from other
//! tests never see it.

#![cfg(target_arch = "wasm32")]

use fresco_core::SiteSettings;
use fresco_forms::FormSurface;
use fresco_pages::contact::DomFormSurface;
use fresco_pages::{SiteLauncher, accordion, anchors, contact, header, nav, reveal};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
	Document, Element, Event, EventInit, HtmlButtonElement, HtmlDetailsElement, HtmlElement,
	HtmlFormElement, KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn append(html: &str) -> Element {
	let document = document();
	let container = document.create_element("div").unwrap();
	container.set_inner_html(html);
	document.body().unwrap().append_child(&container).unwrap();
	container
}

fn cancelable(kind: &str) -> Event {
	let init = EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	Event::new_with_event_init_dict(kind, &init).unwrap()
}

fn mounted_nav(prefix: &str) -> (HtmlElement, HtmlElement) {
	append(&format!(
		r##"<button id="{prefix}-hamburger" aria-expanded="false"></button>
		<div id="{prefix}-overlay" aria-hidden="true">
			<span id="{prefix}-panel">Menu</span>
		</div>"##
	));
	let mut settings = SiteSettings::default();
	settings.dom.hamburger_id = format!("{prefix}-hamburger");
	settings.dom.mobile_nav_id = format!("{prefix}-overlay");
	settings.dom.mobile_link_selector = format!(".{prefix}-link");
	nav::mount(&settings).unwrap();

	let hamburger: HtmlElement = element(&format!("{prefix}-hamburger"));
	hamburger.click();
	assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("true"));
	(hamburger, element(&format!("{prefix}-overlay")))
}

fn element<T: JsCast>(id: &str) -> T {
	document()
		.get_element_by_id(id)
		.unwrap()
		.dyn_into::<T>()
		.unwrap()
}

/// Tests the hamburger opens the overlay and a link closes it
#[wasm_bindgen_test]
fn test_hamburger_opens_and_link_closes_overlay() {
	append(
		r##"<button id="nav-test-hamburger" aria-expanded="false"></button>
		<div id="nav-test-overlay" aria-hidden="true">
			<a class="nav-test-link" href="#services">Services</a>
		</div>"##,
	);
	let mut settings = SiteSettings::default();
	settings.dom.hamburger_id = "nav-test-hamburger".to_string();
	settings.dom.mobile_nav_id = "nav-test-overlay".to_string();
	settings.dom.mobile_link_selector = ".nav-test-link".to_string();
	nav::mount(&settings).unwrap();

	let hamburger: HtmlElement = element("nav-test-hamburger");
	let overlay: Element = element("nav-test-overlay");
	hamburger.click();

	assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("true"));
	assert!(overlay.class_list().contains(nav::OPEN_CLASS));
	assert_eq!(overlay.get_attribute("aria-hidden").as_deref(), Some("false"));

	let link: HtmlElement = overlay
		.query_selector(".nav-test-link")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	link.click();

	assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("false"));
	assert!(!overlay.class_list().contains(nav::OPEN_CLASS));
	assert_eq!(overlay.get_attribute("aria-hidden").as_deref(), Some("true"));
}

/// Tests opening a FAQ item closes the others
#[wasm_bindgen_test]
fn test_opening_faq_item_closes_the_others() {
	append(
		r#"<details class="faq-test" open><summary>One</summary></details>
		<details class="faq-test"><summary>Two</summary></details>"#,
	);
	let mut settings = SiteSettings::default();
	settings.dom.faq_item_selector = ".faq-test".to_string();
	accordion::mount(&settings).unwrap();

	let items = document().query_selector_all(".faq-test").unwrap();
	let first: HtmlDetailsElement = items.item(0).unwrap().dyn_into().unwrap();
	let second: HtmlDetailsElement = items.item(1).unwrap().dyn_into().unwrap();

	second.set_open(true);
	second.dispatch_event(&Event::new("toggle").unwrap()).unwrap();

	assert!(!first.open());
	assert!(second.open());
}

/// Tests an empty submit marks fields and focuses the name
#[wasm_bindgen_test]
fn test_empty_submit_marks_fields_and_focuses_name() {
	append(
		r#"<form id="contactForm">
			<input id="name"><span id="nameError"></span>
			<input id="phone"><span id="phoneError"></span>
			<input id="email"><span id="emailError"></span>
			<textarea id="message"></textarea><span id="messageError"></span>
			<button type="submit" class="form-submit">Get My Free Estimate</button>
		</form>"#,
	);
	contact::mount(&SiteSettings::default()).unwrap();

	let form: Element = element("contactForm");
	let submit = cancelable("submit");
	form.dispatch_event(&submit).unwrap();

	assert!(submit.default_prevented());
	for id in ["name", "phone", "message"] {
		let input: Element = element(id);
		assert!(input.class_list().contains(contact::ERROR_CLASS), "{} not marked", id);
	}
	let email: Element = element("email");
	assert!(!email.class_list().contains(contact::ERROR_CLASS));
	assert_eq!(
		element::<Element>("nameError").text_content().as_deref(),
		Some("Please enter your full name.")
	);
	assert_eq!(
		document().active_element().map(|active| active.id()).as_deref(),
		Some("name")
	);
}

/// Tests the header state at the top of the page
#[wasm_bindgen_test]
fn test_header_at_top_is_not_scrolled() {
	append(r#"<header id="header-test"></header><button id="top-test"></button>"#);
	let mut settings = SiteSettings::default();
	settings.dom.header_id = "header-test".to_string();
	settings.dom.back_to_top_id = "top-test".to_string();
	header::mount(&settings).unwrap();

	let header_element: Element = element("header-test");
	let back_to_top: HtmlElement = element("top-test");
	assert!(!header_element.class_list().contains(header::SCROLLED_CLASS));
	assert!(back_to_top.hidden());
}

/// Tests launch writes the current year
#[wasm_bindgen_test]
fn test_launch_fills_in_the_year() {
	append(r#"<span id="year-test"></span>"#);
	let mut settings = SiteSettings::default();
	settings.dom.year_id = "year-test".to_string();
	settings.dom.contact_form_id = "no-such-form".to_string();
	settings.dom.faq_item_selector = ".no-such-item".to_string();

	let failures = SiteLauncher::new(settings).launch();

	assert!(failures.is_empty());
	let year = element::<Element>("year-test").text_content().unwrap_or_default();
	assert_eq!(year.len(), 4);
	assert!(year.parse::<u32>().unwrap() >= 2024);
}

/// Tests Escape closes the open overlay and returns focus to the hamburger
#[wasm_bindgen_test]
fn test_escape_closes_overlay_and_refocuses_hamburger() {
	let (hamburger, overlay) = mounted_nav("escape-test");

	let init = KeyboardEventInit::new();
	init.set_key("Escape");
	let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
	document().dispatch_event(&escape).unwrap();

	assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("false"));
	assert!(!overlay.class_list().contains(nav::OPEN_CLASS));
	assert_eq!(
		document().active_element().map(|active| active.id()).as_deref(),
		Some("escape-test-hamburger")
	);
}

/// Tests a backdrop click closes the overlay but a click inside it does not
#[wasm_bindgen_test]
fn test_backdrop_click_closes_overlay_child_click_does_not() {
	let (hamburger, overlay) = mounted_nav("backdrop-test");

	let panel: HtmlElement = element("backdrop-test-panel");
	panel.click();
	assert!(overlay.class_list().contains(nav::OPEN_CLASS));
	assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("true"));

	overlay.click();
	assert!(!overlay.class_list().contains(nav::OPEN_CLASS));
	assert_eq!(overlay.get_attribute("aria-hidden").as_deref(), Some("true"));
}

/// Tests only anchors with an existing target suppress the default jump
#[wasm_bindgen_test]
fn test_anchor_prevents_default_only_for_existing_targets() {
	append(
		r##"<a id="anchor-test-hit" class="anchor-test" href="#anchor-test-target">Go</a>
		<a id="anchor-test-bare" class="anchor-test" href="#">Top</a>
		<a id="anchor-test-miss" class="anchor-test" href="#anchor-test-nowhere">Lost</a>
		<section id="anchor-test-target"></section>"##,
	);
	let mut settings = SiteSettings::default();
	settings.dom.anchor_selector = ".anchor-test".to_string();
	anchors::mount(&settings).unwrap();

	let hit = cancelable("click");
	element::<Element>("anchor-test-hit").dispatch_event(&hit).unwrap();
	assert!(hit.default_prevented());

	let bare = cancelable("click");
	element::<Element>("anchor-test-bare").dispatch_event(&bare).unwrap();
	assert!(!bare.default_prevented());

	let miss = cancelable("click");
	element::<Element>("anchor-test-miss").dispatch_event(&miss).unwrap();
	assert!(!miss.default_prevented());
}

/// Tests reveal mount injects the style and prepares staggered targets
#[wasm_bindgen_test]
fn test_reveal_prepares_targets_and_injects_style() {
	append(
		r#"<div id="reveal-test-0" class="reveal-test"></div>
		<div id="reveal-test-1" class="reveal-test"></div>"#,
	);
	let mut settings = SiteSettings::default();
	settings.reveal.selectors = vec![".reveal-test".to_string()];
	reveal::mount(&settings).unwrap();

	let head = document().head().unwrap();
	let styles = head.query_selector_all("style").unwrap();
	let injected = (0..styles.length())
		.filter_map(|i| styles.item(i))
		.any(|node| node.text_content().as_deref() == Some(reveal::STYLE_RULES));
	assert!(injected);

	for (id, delay) in [("reveal-test-0", "0ms"), ("reveal-test-1", "80ms")] {
		let target: HtmlElement = element(id);
		assert!(target.class_list().contains(reveal::OBSERVE_CLASS));
		assert_eq!(
			target.style().get_property_value("transition-delay").unwrap(),
			delay
		);
	}
}

/// Tests the submit control shows the confirmation and is restored afterwards
#[wasm_bindgen_test]
fn test_submit_control_confirmation_and_restore() {
	append(
		r#"<form id="confirm-test-form">
			<button id="confirm-test-submit" type="submit"><span>Get My Free Estimate</span></button>
		</form>"#,
	);
	let form: HtmlFormElement = element("confirm-test-form");
	let button: HtmlButtonElement = element("confirm-test-submit");
	let original = button.inner_html();
	let surface = DomFormSurface::new(document(), form, Some(button.clone()));

	surface.show_confirmation("Request Sent!", "#22863a");

	assert_eq!(button.text_content().as_deref(), Some("Request Sent!"));
	assert!(button.disabled());
	let style = button.style();
	for property in contact::CONFIRMATION_STYLE_PROPERTIES {
		assert!(!style.get_property_value(property).unwrap().is_empty(), "{} not set", property);
	}

	surface.restore_submit();

	assert_eq!(button.inner_html(), original);
	assert!(!button.disabled());
	for property in contact::CONFIRMATION_STYLE_PROPERTIES {
		assert_eq!(style.get_property_value(property).unwrap(), "", "{} left behind", property);
	}
}
