//! portfolio-sky: client-side personal portfolio page.
//!
//! This crate renders a single-page portfolio as a WASM app: theme switching,
//! a rotating multilingual greeting, an availability indicator, a mailto
//! contact form, mobile navigation, and an animated starfield background.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
mod storage;
pub mod theme;

pub use components::starfield::{StarfieldCanvas, StarfieldEngine, StarfieldStyle, Surface};
pub use config::PortfolioConfig;
pub use theme::ThemeMode;

use components::availability::AvailabilityPill;
use components::contact::ContactForm;
use components::greeting::RotatingGreeting;
use components::nav::MobileNav;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-sky: logging initialized");
}

/// Load page configuration from a script element with id="portfolio-config".
fn load_config() -> Option<PortfolioConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PortfolioConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"portfolio-sky: loaded config, {} greetings",
				config.greetings.len()
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-sky: failed to parse config: {}", e);
			None
		}
	}
}

fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let theme = RwSignal::new(ThemeMode::initial());

	Effect::new(move |_| theme.get().apply());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<StarfieldCanvas theme=theme />

		<header class="site-header">
			<MobileNav />
			<button
				id="themeBtn"
				class="btn theme-btn"
				on:click=move |_| theme.update(|t| *t = t.toggled())
			>
				{move || theme.get().button_label()}
			</button>
		</header>

		<main>
			<section id="about" class="hero">
				<h1>
					<RotatingGreeting
						greetings=config.greetings
						interval_ms=config.greeting_interval_ms
					/>
				</h1>
				<AvailabilityPill />
			</section>

			<section id="contact">
				<h2>"Contact"</h2>
				<ContactForm recipient=config.contact_email />
			</section>
		</main>

		<footer class="site-footer">
			"© " <span id="year">{current_year()}</span>
		</footer>
	}
}
