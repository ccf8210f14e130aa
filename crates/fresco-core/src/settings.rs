//! Site settings
//!
//! All identifiers, thresholds and contact details the page behaviours need.
//! [`SiteSettings::default`] matches the markup the site ships with; a page
//! can override any subset by defining a JSON-compatible object on
//! `window.__FRESCO_SETTINGS__` before the module starts:
//!
//! ```html
//! <script>
//!   window.__FRESCO_SETTINGS__ = { scroll: { back_to_top_threshold: 600 } };
//! </script>
//! ```
//!
//! Missing keys keep their defaults at every level.

use serde::{Deserialize, Serialize};

/// Name of the global the page may use to override settings.
pub const SETTINGS_GLOBAL: &str = "__FRESCO_SETTINGS__";

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors raised while loading or checking settings.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The settings JSON could not be parsed.
	#[error("Failed to parse settings: {0}")]
	Parse(#[from] serde_json::Error),

	/// The settings object exists but could not be read.
	#[error("Settings unavailable: {0}")]
	Unavailable(String),

	/// A single setting holds an unusable value.
	#[error("Invalid value for '{key}': {message}")]
	InvalidValue {
		/// Dotted path of the offending setting.
		key: String,
		/// What is wrong with it.
		message: String,
	},

	/// Several settings failed validation.
	#[error("Multiple settings errors: {0:?}")]
	Multiple(Vec<SettingsError>),
}

impl SettingsError {
	fn invalid(key: &str, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			key: key.to_string(),
			message: message.into(),
		}
	}
}

/// Top-level settings for every page behaviour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
	/// Element identifiers and selectors.
	pub dom: DomSettings,
	/// Scroll thresholds for the header and back-to-top control.
	pub scroll: ScrollSettings,
	/// Contact form handoff details.
	pub contact: ContactSettings,
	/// Entrance animation tuning.
	pub reveal: RevealSettings,
}

/// Identifiers and selectors of the elements the behaviours attach to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomSettings {
	/// Sticky header.
	pub header_id: String,
	/// Mobile navigation toggle button.
	pub hamburger_id: String,
	/// Full-screen mobile navigation overlay.
	pub mobile_nav_id: String,
	/// Links inside the mobile overlay.
	pub mobile_link_selector: String,
	/// Back-to-top button.
	pub back_to_top_id: String,
	/// Contact form.
	pub contact_form_id: String,
	/// Submit control inside the contact form.
	pub submit_selector: String,
	/// Element that displays the current year.
	pub year_id: String,
	/// Accordion items (`<details>` elements).
	pub faq_item_selector: String,
	/// In-page anchors that scroll smoothly.
	pub anchor_selector: String,
}

impl Default for DomSettings {
	fn default() -> Self {
		Self {
			header_id: "siteHeader".to_string(),
			hamburger_id: "hamburger".to_string(),
			mobile_nav_id: "mobileNavOverlay".to_string(),
			mobile_link_selector: ".mobile-nav-link".to_string(),
			back_to_top_id: "backToTop".to_string(),
			contact_form_id: "contactForm".to_string(),
			submit_selector: ".form-submit".to_string(),
			year_id: "year".to_string(),
			faq_item_selector: ".faq-item".to_string(),
			anchor_selector: "a[href^=\"#\"]".to_string(),
		}
	}
}

/// Scroll offsets (in CSS pixels) past which the chrome changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
	/// The header gets the `scrolled` class strictly above this offset.
	pub header_threshold: f64,
	/// The back-to-top control is shown strictly above this offset.
	pub back_to_top_threshold: f64,
}

impl Default for ScrollSettings {
	fn default() -> Self {
		Self {
			header_threshold: 20.0,
			back_to_top_threshold: 400.0,
		}
	}
}

/// Where and how a valid contact request is handed to the mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
	/// Address the `mailto:` link is addressed to.
	pub recipient: String,
	/// Fixed subject line.
	pub subject: String,
	/// Submit label shown while the confirmation is displayed.
	pub confirmation_label: String,
	/// Background and border colour of the submit control while confirmed.
	pub success_color: String,
	/// How long the confirmation stays before the form resets.
	pub reset_delay_ms: u32,
}

impl Default for ContactSettings {
	fn default() -> Self {
		Self {
			recipient: "estimates@mmpaintingdesign.com".to_string(),
			subject: "Free Estimate Request — MM Painting & Design".to_string(),
			confirmation_label: "✓ Request Sent! We'll be in touch.".to_string(),
			success_color: "#22863a".to_string(),
			reset_delay_ms: 5000,
		}
	}
}

/// Entrance animation targets and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
	/// Selectors of the elements that animate in.
	pub selectors: Vec<String>,
	/// Visible fraction that counts as "in view".
	pub threshold: f64,
	/// Targets are staggered in groups of this many.
	pub stagger_columns: usize,
	/// Delay added per position within a group.
	pub stagger_step_ms: u32,
}

impl Default for RevealSettings {
	fn default() -> Self {
		Self {
			selectors: [
				".service-card",
				".review-card",
				".why-item",
				".gallery-item",
				".faq-item",
				".about-stat",
			]
			.into_iter()
			.map(String::from)
			.collect(),
			threshold: 0.12,
			stagger_columns: 4,
			stagger_step_ms: 80,
		}
	}
}

impl RevealSettings {
	/// All selectors joined into one selector list.
	pub fn selector_list(&self) -> String {
		self.selectors.join(", ")
	}
}

impl SiteSettings {
	/// Parses settings from JSON, keeping defaults for absent keys.
	///
	/// # Examples
	///
	/// ```
	/// use fresco_core::SiteSettings;
	///
	/// let settings = SiteSettings::from_json(r#"{"scroll": {"header_threshold": 64}}"#).unwrap();
	/// assert_eq!(settings.scroll.header_threshold, 64.0);
	/// assert_eq!(settings.scroll.back_to_top_threshold, 400.0);
	/// ```
	pub fn from_json(json: &str) -> SettingsResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Reads overrides from `window.__FRESCO_SETTINGS__`.
	///
	/// Returns the defaults when the global is absent.
	#[cfg(target_arch = "wasm32")]
	pub fn from_window() -> SettingsResult<Self> {
		use wasm_bindgen::JsValue;

		let Some(window) = web_sys::window() else {
			return Ok(Self::default());
		};

		let global = js_sys::Reflect::get(&window, &JsValue::from_str(SETTINGS_GLOBAL))
			.map_err(|e| SettingsError::Unavailable(format!("{:?}", e)))?;

		if global.is_undefined() || global.is_null() {
			return Ok(Self::default());
		}

		let json = js_sys::JSON::stringify(&global)
			.map_err(|e| SettingsError::Unavailable(format!("{:?}", e)))?
			.as_string()
			.ok_or_else(|| SettingsError::Unavailable("settings are not serializable".to_string()))?;

		Self::from_json(&json)
	}

	/// Host builds have no window; the defaults are returned.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn from_window() -> SettingsResult<Self> {
		Ok(Self::default())
	}

	/// Loads and validates the page settings, falling back to the defaults
	/// when the page supplies something unusable.
	pub fn load() -> Self {
		match Self::from_window().and_then(|settings| settings.validate().map(|()| settings)) {
			Ok(settings) => settings,
			Err(err) => {
				crate::warn_log!("ignoring page settings: {}", err);
				Self::default()
			}
		}
	}

	/// Checks every setting and reports all problems at once.
	///
	/// # Examples
	///
	/// ```
	/// use fresco_core::SiteSettings;
	///
	/// let mut settings = SiteSettings::default();
	/// assert!(settings.validate().is_ok());
	///
	/// settings.reveal.threshold = 1.5;
	/// assert!(settings.validate().is_err());
	/// ```
	pub fn validate(&self) -> SettingsResult<()> {
		let mut errors = Vec::new();

		if !self.contact.recipient.contains('@') {
			errors.push(SettingsError::invalid(
				"contact.recipient",
				"must be an email address",
			));
		}
		if self.contact.confirmation_label.trim().is_empty() {
			errors.push(SettingsError::invalid(
				"contact.confirmation_label",
				"must not be empty",
			));
		}
		if !(0.0..=1.0).contains(&self.reveal.threshold) {
			errors.push(SettingsError::invalid(
				"reveal.threshold",
				format!("{} is outside 0.0..=1.0", self.reveal.threshold),
			));
		}
		if self.reveal.stagger_columns == 0 {
			errors.push(SettingsError::invalid(
				"reveal.stagger_columns",
				"must be at least 1",
			));
		}
		for (key, value) in [
			("scroll.header_threshold", self.scroll.header_threshold),
			(
				"scroll.back_to_top_threshold",
				self.scroll.back_to_top_threshold,
			),
		] {
			if value.is_nan() || value < 0.0 {
				errors.push(SettingsError::invalid(key, "must be a non-negative number"));
			}
		}

		if errors.is_empty() {
			Ok(())
		} else {
			Err(SettingsError::Multiple(errors))
		}
	}
}
