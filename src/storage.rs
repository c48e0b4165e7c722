//! Thin wrapper over `window.localStorage`.
//!
//! Storage can be missing (private browsing, sandboxed iframes) or throw on
//! write; both degrade to in-memory state with a warning.

use log::warn;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

/// Read a string value.
pub fn load(key: &str) -> Option<String> {
	local_storage()?.get_item(key).ok().flatten()
}

/// Write a string value, logging (not propagating) failures.
pub fn save(key: &str, value: &str) {
	let Some(storage) = local_storage() else {
		warn!("portfolio-sky: localStorage unavailable, '{}' not persisted", key);
		return;
	};
	if let Err(e) = storage.set_item(key, value) {
		warn!("portfolio-sky: failed to persist '{}': {:?}", key, e);
	}
}
