//! Light/dark theme mode.
//!
//! The mode lives in a reactive signal owned by the app; this module handles
//! parsing, persistence, and reflecting it onto the document.

use std::fmt;
use std::str::FromStr;

use crate::storage;

const STORAGE_KEY: &str = "theme";

/// Page color scheme. The starfield only renders in [`ThemeMode::Dark`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	Light,
	#[default]
	Dark,
}

impl ThemeMode {
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	/// Label shown on the theme toggle button.
	pub fn button_label(self) -> &'static str {
		match self {
			ThemeMode::Light => "🌞 Mode",
			ThemeMode::Dark => "🌙 Mode",
		}
	}

	/// CSS opacity for the starfield canvas: hidden in light mode.
	pub fn starfield_opacity(self) -> &'static str {
		match self {
			ThemeMode::Light => "0",
			ThemeMode::Dark => "1",
		}
	}

	/// Initial mode: the saved choice, else the system preference.
	pub fn initial() -> Self {
		Self::resolve(storage::load(STORAGE_KEY).as_deref(), prefers_light())
	}

	/// Pick a mode from a saved value and the `prefers-color-scheme` result.
	/// An unrecognized saved value falls through to the system preference.
	pub fn resolve(saved: Option<&str>, prefers_light: bool) -> Self {
		match saved.and_then(|s| s.parse().ok()) {
			Some(mode) => mode,
			None if prefers_light => ThemeMode::Light,
			None => ThemeMode::Dark,
		}
	}

	/// Reflect the mode onto `<html data-theme>` and persist it.
	pub fn apply(self) {
		if let Some(root) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element())
		{
			let _ = root.set_attribute("data-theme", self.as_str());
		}
		storage::save(STORAGE_KEY, self.as_str());
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error for strings other than `"light"` / `"dark"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeMode {
	type Err = UnknownTheme;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(ThemeMode::Light),
			"dark" => Ok(ThemeMode::Dark),
			other => Err(UnknownTheme(other.to_string())),
		}
	}
}

fn prefers_light() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
		.is_some_and(|mq| mq.matches())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_and_round_trips_names() {
		assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
		assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
		assert_eq!(
			"Dark".parse::<ThemeMode>(),
			Err(UnknownTheme("Dark".to_string()))
		);
		assert_eq!(ThemeMode::Light.to_string(), "light");
	}

	#[test]
	fn saved_choice_wins_over_system_preference() {
		assert_eq!(ThemeMode::resolve(Some("dark"), true), ThemeMode::Dark);
		assert_eq!(ThemeMode::resolve(Some("light"), false), ThemeMode::Light);
		assert_eq!(ThemeMode::resolve(None, true), ThemeMode::Light);
		assert_eq!(ThemeMode::resolve(None, false), ThemeMode::Dark);
		assert_eq!(ThemeMode::resolve(Some("sepia"), true), ThemeMode::Light);
	}

	#[test]
	fn toggle_flips_labels_and_canvas_opacity() {
		let mode = ThemeMode::Dark;
		assert_eq!(mode.starfield_opacity(), "1");
		assert_eq!(mode.button_label(), "🌙 Mode");

		let mode = mode.toggled();
		assert_eq!(mode, ThemeMode::Light);
		assert_eq!(mode.starfield_opacity(), "0");
		assert_eq!(mode.button_label(), "🌞 Mode");
		assert_eq!(mode.toggled(), ThemeMode::Dark);
	}
}
