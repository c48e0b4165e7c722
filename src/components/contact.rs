//! Contact form that hands off to the visitor's mail client.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::warn;

/// Note shown after the mail client has been asked to open.
const HANDOFF_NOTE: &str =
	"Opening your email client… if nothing happens, copy/paste the message into an email.";

/// A filled-in contact form, whitespace-trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub message: String,
}

impl ContactMessage {
	pub fn new(name: &str, email: &str, message: &str) -> Self {
		Self {
			name: name.trim().to_string(),
			email: email.trim().to_string(),
			message: message.trim().to_string(),
		}
	}

	pub fn subject(&self) -> String {
		format!("Portfolio message from {}", self.name)
	}

	pub fn body(&self) -> String {
		format!(
			"Name: {}\nEmail: {}\n\nMessage:\n{}",
			self.name, self.email, self.message
		)
	}

	/// `mailto:` link with percent-encoded subject and body.
	pub fn mailto_url(&self, recipient: &str) -> String {
		format!(
			"mailto:{}?subject={}&body={}",
			recipient,
			urlencoding::encode(&self.subject()),
			urlencoding::encode(&self.body())
		)
	}
}

/// Name/email/message form. Submitting navigates to a `mailto:` link.
#[component]
pub fn ContactForm(#[prop(into)] recipient: String) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let note = RwSignal::new("");

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let msg = ContactMessage::new(&name.get(), &email.get(), &message.get());
		let url = msg.mailto_url(&recipient);

		match web_sys::window().map(|w| w.location().set_href(&url)) {
			Some(Ok(())) => {}
			Some(Err(e)) => warn!("portfolio-sky: could not open mail client: {:?}", e),
			None => warn!("portfolio-sky: no window, cannot open mail client"),
		}
		note.set(HANDOFF_NOTE);
	};

	view! {
		<form id="contactForm" class="contact-form" on:submit=on_submit>
			<label for="name">"Name"</label>
			<input
				id="name"
				type="text"
				required
				prop:value=move || name.get()
				on:input=move |ev| name.set(event_target_value(&ev))
			/>
			<label for="email">"Email"</label>
			<input
				id="email"
				type="email"
				required
				prop:value=move || email.get()
				on:input=move |ev| email.set(event_target_value(&ev))
			/>
			<label for="msg">"Message"</label>
			<textarea
				id="msg"
				rows="5"
				required
				prop:value=move || message.get()
				on:input=move |ev| message.set(event_target_value(&ev))
			/>
			<button type="submit" class="btn">"Send"</button>
			<p id="formNote" class="form-note">{move || note.get()}</p>
		</form>
	}
}
