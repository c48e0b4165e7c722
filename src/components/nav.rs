//! Header navigation with a collapsible panel on narrow screens.

use leptos::prelude::*;

/// Open/closed state of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
	pub open: bool,
}

impl NavState {
	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	/// Following a link dismisses the panel.
	pub fn link_chosen(&mut self) {
		self.open = false;
	}

	pub fn aria_expanded(self) -> &'static str {
		if self.open { "true" } else { "false" }
	}
}

/// In-page section links. Each entry is `(label, href)`.
const LINKS: [(&str, &str); 4] = [
	("About", "#about"),
	("Projects", "#projects"),
	("Skills", "#skills"),
	("Contact", "#contact"),
];

#[component]
pub fn MobileNav() -> impl IntoView {
	let state = RwSignal::new(NavState::default());

	view! {
		<nav class="site-nav">
			<button
				id="navToggle"
				class="nav-toggle"
				aria-controls="navPanel"
				aria-label="Toggle navigation"
				aria-expanded=move || state.get().aria_expanded()
				on:click=move |_| state.update(NavState::toggle)
			>
				"☰"
			</button>
			<ul id="navPanel" class="nav-panel" class:open=move || state.get().open>
				{LINKS
					.into_iter()
					.map(move |(label, href)| {
						view! {
							<li>
								<a href=href on:click=move |_| state.update(NavState::link_chosen)>
									{label}
								</a>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</nav>
	}
}
