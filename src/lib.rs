//! nightfolio: a single-page personal portfolio with an animated particle backdrop.
//!
//! This crate provides a WASM-based portfolio page that renders a drifting,
//! twinkling particle field behind the content, with a persisted light/dark
//! theme, a typewriter hero heading, and scroll-spy navigation.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod site;

pub use components::nav::NavBar;
pub use components::particle_field::ParticleCanvas;
pub use components::theme::{ThemeMode, ThemeToggle};
pub use components::typewriter::Typewriter;
pub use site::{SiteData, SiteSection};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("nightfolio: logging initialized");
}

/// Load page content from a script element with id="site-data".
/// Expected format: JSON with { name, tagline, sections: [...] }
fn load_site_data() -> Option<SiteData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteData>(&json_text) {
		Ok(data) => {
			info!(
				"nightfolio: loaded {} sections for {}",
				data.sections.len(),
				data.name
			);
			Some(data)
		}
		Err(e) => {
			warn!("nightfolio: failed to parse site data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads page content from the DOM and assembles the portfolio page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Load page content from the DOM
	let site = load_site_data().unwrap_or_default();
	let title = format!("{} — Portfolio", site.name);
	let data = Signal::derive(move || site.clone());
	let mode = RwSignal::new(components::theme::load_saved_mode().unwrap_or_default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleCanvas mode=mode />
		<NavBar data=data />
		<ThemeToggle mode=mode />

		<main>
			<section id="home" class="hero">
				<h1>
					<Typewriter text=Signal::derive(move || data.get().name.clone()) />
				</h1>
				<p class="tagline">{move || data.get().tagline.clone()}</p>
			</section>
			{move || {
				data.get()
					.sections
					.iter()
					.filter(|s| s.id != "home")
					.map(|s| {
						view! {
							<section id=s.id.clone()>
								<h2>{s.title.clone()}</h2>
								<p>{s.body.clone()}</p>
							</section>
						}
					})
					.collect_view()
			}}
		</main>
	}
}
