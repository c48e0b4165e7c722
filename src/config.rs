//! Page configuration embedded in the HTML.
//!
//! The host page may include
//! `<script id="portfolio-config" type="application/json">{ ... }</script>`.
//! Every field is optional; anything missing falls back to the defaults below.

use serde::Deserialize;

/// A greeting and the language it is in.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Greeting {
	pub text: String,
	pub language: String,
}

impl Greeting {
	fn new(text: &str, language: &str) -> Self {
		Self {
			text: text.to_string(),
			language: language.to_string(),
		}
	}
}

/// Complete page configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
	/// Recipient of contact form messages.
	pub contact_email: String,
	/// Greetings cycled in the hero heading.
	pub greetings: Vec<Greeting>,
	/// Delay between greetings, in milliseconds.
	pub greeting_interval_ms: u32,
}

impl Default for PortfolioConfig {
	fn default() -> Self {
		Self {
			contact_email: "hello@example.com".to_string(),
			greetings: default_greetings(),
			greeting_interval_ms: 2200,
		}
	}
}

impl PortfolioConfig {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

fn default_greetings() -> Vec<Greeting> {
	vec![
		Greeting::new("Hello", "English"),
		Greeting::new("Hola", "Spanish"),
		Greeting::new("Bonjour", "French"),
		Greeting::new("Ciao", "Italian"),
		Greeting::new("Olá", "Portuguese"),
		Greeting::new("Hallo", "German"),
		Greeting::new("السلام عليكم", "Arabic"),
		Greeting::new("হ্যালো", "Bangla"),
		Greeting::new("こんにちは", "Japanese"),
		Greeting::new("안녕하세요", "Korean"),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		let config = PortfolioConfig::from_json("{}").unwrap();
		assert_eq!(config, PortfolioConfig::default());
		assert_eq!(config.greetings.len(), 10);
		assert_eq!(config.greetings[0], Greeting::new("Hello", "English"));
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let config = PortfolioConfig::from_json(
			r#"{
				"contact_email": "me@site.dev",
				"greetings": [{ "text": "Hej", "language": "Swedish" }]
			}"#,
		)
		.unwrap();
		assert_eq!(config.contact_email, "me@site.dev");
		assert_eq!(config.greetings, vec![Greeting::new("Hej", "Swedish")]);
		assert_eq!(config.greeting_interval_ms, 2200);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(PortfolioConfig::from_json("{ not json").is_err());
		assert!(PortfolioConfig::from_json(r#"{ "greeting_interval_ms": -1 }"#).is_err());
	}
}
