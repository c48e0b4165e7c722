//! "Available for work" status pill.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::storage;

const STORAGE_KEY: &str = "available";

/// Work availability shown in the hero section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Availability {
	#[default]
	Available,
	Unavailable,
}

impl Availability {
	/// Parse the persisted flag. A missing value means available; anything
	/// other than `"true"` means unavailable.
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			None | Some("true") => Availability::Available,
			Some(_) => Availability::Unavailable,
		}
	}

	pub fn is_available(self) -> bool {
		self == Availability::Available
	}

	pub fn toggled(self) -> Self {
		match self {
			Availability::Available => Availability::Unavailable,
			Availability::Unavailable => Availability::Available,
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Availability::Available => "Available for work",
			Availability::Unavailable => "Not currently available",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Availability::Available => "Open to opportunities",
			Availability::Unavailable => "Still happy to connect",
		}
	}

	/// Status dot fill.
	pub fn dot_color(self) -> &'static str {
		match self {
			Availability::Available => "var(--good)",
			Availability::Unavailable => "var(--bad)",
		}
	}

	/// Status dot glow ring.
	pub fn dot_shadow(self) -> &'static str {
		match self {
			Availability::Available => "0 0 0 6px rgba(37,211,102,0.12)",
			Availability::Unavailable => "0 0 0 6px rgba(255,77,79,0.10)",
		}
	}

	pub fn aria_checked(self) -> &'static str {
		if self.is_available() { "true" } else { "false" }
	}

	fn load() -> Self {
		Self::from_stored(storage::load(STORAGE_KEY).as_deref())
	}

	fn save(self) {
		storage::save(STORAGE_KEY, self.aria_checked());
	}
}

/// Clickable/keyboard-operable availability switch.
#[component]
pub fn AvailabilityPill() -> impl IntoView {
	let status = RwSignal::new(Availability::load());

	Effect::new(move |_| status.get().save());

	let flip = move || status.update(|s| *s = s.toggled());
	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" || ev.key() == " " {
			ev.prevent_default();
			flip();
		}
	};

	view! {
		<div
			id="availToggle"
			class="status-pill"
			role="switch"
			tabindex="0"
			aria-checked=move || status.get().aria_checked()
			on:click=move |_| flip()
			on:keydown=on_keydown
		>
			<span
				id="statusDot"
				class="status-dot"
				style:background=move || status.get().dot_color()
				style:box-shadow=move || status.get().dot_shadow()
			/>
			<span class="status-text">
				<strong id="statusTitle">{move || status.get().title()}</strong>
				<small id="statusDesc">{move || status.get().description()}</small>
			</span>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_value_defaults_to_available() {
		assert_eq!(Availability::from_stored(None), Availability::Available);
		assert_eq!(Availability::from_stored(Some("true")), Availability::Available);
		assert_eq!(Availability::from_stored(Some("false")), Availability::Unavailable);
		assert_eq!(Availability::from_stored(Some("yes")), Availability::Unavailable);
	}

	#[test]
	fn toggle_switches_copy_and_colors() {
		let s = Availability::Available;
		assert_eq!(s.title(), "Available for work");
		assert_eq!(s.aria_checked(), "true");

		let s = s.toggled();
		assert_eq!(s.title(), "Not currently available");
		assert_eq!(s.description(), "Still happy to connect");
		assert_eq!(s.dot_color(), "var(--bad)");
		assert_eq!(s.dot_shadow(), "0 0 0 6px rgba(255,77,79,0.10)");
		assert_eq!(s.aria_checked(), "false");
		assert_eq!(s.toggled(), Availability::Available);
	}
}
