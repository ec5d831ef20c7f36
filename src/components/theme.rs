//! Light/dark theme controller.
//!
//! The page's single persisted value: `"dark"` or `"light"` under one
//! localStorage key. Unknown stored values fall back to dark. The current
//! mode is reflected as a `data-theme` attribute on the document element so
//! the stylesheet can follow it.

use leptos::prelude::*;
use log::debug;

/// localStorage key for the persisted theme flag.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The two page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	#[default]
	Dark,
	Light,
}

impl ThemeMode {
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Dark => "dark",
			ThemeMode::Light => "light",
		}
	}

	/// Parse a stored flag; anything unrecognized maps to `None`.
	pub fn from_flag(value: &str) -> Option<Self> {
		match value {
			"dark" => Some(ThemeMode::Dark),
			"light" => Some(ThemeMode::Light),
			_ => None,
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Dark => ThemeMode::Light,
			ThemeMode::Light => ThemeMode::Dark,
		}
	}
}

/// Read the persisted theme flag, if any.
pub fn load_saved_mode() -> Option<ThemeMode> {
	let storage = web_sys::window()?.local_storage().ok()??;
	let value = storage.get_item(THEME_STORAGE_KEY).ok()??;
	ThemeMode::from_flag(&value)
}

/// Persist the theme flag and reflect it on the document element.
fn apply_mode(mode: ThemeMode) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Ok(Some(storage)) = window.local_storage() {
		let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
	}
	if let Some(root) = window.document().and_then(|d| d.document_element()) {
		let _ = root.set_attribute("data-theme", mode.as_str());
	}
	debug!("nightfolio: theme set to {}", mode.as_str());
}

/// Button that flips the page theme. Every change is persisted and applied
/// to the document, including the initial mode on mount.
#[component]
pub fn ThemeToggle(mode: RwSignal<ThemeMode>) -> impl IntoView {
	Effect::new(move |_| apply_mode(mode.get()));

	view! {
		<button class="theme-toggle" on:click=move |_| mode.update(|m| *m = m.toggled())>
			{move || match mode.get() {
				ThemeMode::Dark => "☾",
				ThemeMode::Light => "☀",
			}}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn flag_round_trips_through_its_string_form() {
		for mode in [ThemeMode::Dark, ThemeMode::Light] {
			assert_eq!(ThemeMode::from_flag(mode.as_str()), Some(mode));
		}
	}

	#[test]
	fn unknown_flags_are_rejected() {
		assert_eq!(ThemeMode::from_flag(""), None);
		assert_eq!(ThemeMode::from_flag("DARK"), None);
		assert_eq!(ThemeMode::from_flag("solarized"), None);
	}

	#[test]
	fn toggling_alternates_between_the_two_modes() {
		assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
		assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
		assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
	}

	#[test]
	fn dark_is_the_default() {
		assert_eq!(ThemeMode::default(), ThemeMode::Dark);
	}
}
