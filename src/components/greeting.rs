//! Rotating multilingual greeting.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;

use crate::config::Greeting;

/// Round-robin over a fixed list of greetings.
#[derive(Clone, Debug)]
pub struct GreetingCycle {
	greetings: Vec<Greeting>,
	index: usize,
}

impl GreetingCycle {
	pub fn new(greetings: Vec<Greeting>) -> Self {
		Self {
			greetings,
			index: 0,
		}
	}

	/// Returns the current greeting and moves on to the next one.
	pub fn advance(&mut self) -> Option<&Greeting> {
		if self.greetings.is_empty() {
			return None;
		}
		let greeting = &self.greetings[self.index % self.greetings.len()];
		self.index = self.index.wrapping_add(1);
		Some(greeting)
	}
}

/// Hero greeting that switches language every `interval_ms`.
#[component]
pub fn RotatingGreeting(greetings: Vec<Greeting>, interval_ms: u32) -> impl IntoView {
	let cycle = Rc::new(RefCell::new(GreetingCycle::new(greetings)));
	let current = RwSignal::new(cycle.borrow_mut().advance().cloned());

	let tick = Closure::<dyn FnMut()>::new(move || {
		if let Some(next) = cycle.borrow_mut().advance() {
			current.set(Some(next.clone()));
		}
	});
	if let Some(window) = web_sys::window() {
		if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
			tick.as_ref().unchecked_ref(),
			interval_ms as i32,
		) {
			warn!("portfolio-sky: greeting rotation disabled: {:?}", e);
		}
	}
	// Runs for the lifetime of the page.
	tick.forget();

	view! {
		<span
			id="helloText"
			class="hello"
			title=move || current.get().map(|g| g.language).unwrap_or_default()
		>
			{move || current.get().map(|g| g.text).unwrap_or_default()}
		</span>
	}
}
