//! Scroll-spy navigation bar.
//!
//! Tracks which page section the viewport currently sits in and marks the
//! matching nav link active. The interval test is pure; the component wires
//! it to real scroll events and element measurements, and smooth-scrolls to
//! a section when its link is clicked.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::site::SiteData;

/// Scroll depth past which the bar gets its condensed treatment.
const SCROLLED_AT: f64 = 50.0;
/// Probe offset below the viewport top used to pick the active section.
const PROBE_OFFSET: f64 = 100.0;
/// Gap left above a section when scrolling to it, so the bar doesn't cover it.
const SCROLL_MARGIN: f64 = 80.0;

/// Measured vertical extent of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
	pub id: String,
	pub top: f64,
	pub height: f64,
}

/// The section whose `[top, top + height)` extent contains the probe point
/// `scroll_y + probe_offset`, if any.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, probe_offset: f64) -> Option<&str> {
	let probe = scroll_y + probe_offset;
	sections
		.iter()
		.find(|s| probe >= s.top && probe < s.top + s.height)
		.map(|s| s.id.as_str())
}

fn measure_sections(ids: &[String]) -> Vec<SectionBounds> {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return Vec::new();
	};
	ids.iter()
		.filter_map(|id| {
			let el: HtmlElement = document.get_element_by_id(id)?.dyn_into().ok()?;
			Some(SectionBounds {
				id: id.clone(),
				top: el.offset_top() as f64,
				height: el.offset_height() as f64,
			})
		})
		.collect()
}

fn scroll_to_section(id: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(el) = window
		.document()
		.and_then(|d| d.get_element_by_id(id))
		.and_then(|e| e.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};

	let options = ScrollToOptions::new();
	options.set_top(el.offset_top() as f64 - SCROLL_MARGIN);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// Fixed navigation bar with one link per section.
#[component]
pub fn NavBar(#[prop(into)] data: Signal<SiteData>) -> impl IntoView {
	let active = RwSignal::new(None::<String>);
	let scrolled = RwSignal::new(false);
	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new({
		let scroll_cb = scroll_cb.clone();
		move |_| {
			let window: Window = web_sys::window().unwrap();
			let ids: Vec<String> = data.get().sections.iter().map(|s| s.id.clone()).collect();

			// Drop any listener from a previous run before replacing its closure.
			if let Some(old) = scroll_cb.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("scroll", old.as_ref().unchecked_ref());
			}

			*scroll_cb.borrow_mut() = Some(Closure::new(move || {
				let win = web_sys::window().unwrap();
				let y = win.scroll_y().unwrap_or(0.0);
				scrolled.set(y > SCROLLED_AT);
				let bounds = measure_sections(&ids);
				active.set(active_section(&bounds, y, PROBE_OFFSET).map(str::to_owned));
			}));
			if let Some(ref cb) = *scroll_cb.borrow() {
				let _ =
					window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
			}
		}
	});

	view! {
		<nav class="navbar" class:scrolled=move || scrolled.get()>
			<span class="brand">{move || data.get().name.clone()}</span>
			<ul class="nav-menu">
				{move || {
					data.get()
						.sections
						.iter()
						.map(|section| {
							let id_click = section.id.clone();
							let id_active = section.id.clone();
							view! {
								<li>
									<a
										class="nav-link"
										class:active=move || {
											active.get().as_deref() == Some(id_active.as_str())
										}
										on:click=move |_| scroll_to_section(&id_click)
									>
										{section.title.clone()}
									</a>
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn sections() -> Vec<SectionBounds> {
		vec![
			SectionBounds { id: "home".into(), top: 0.0, height: 600.0 },
			SectionBounds { id: "about".into(), top: 600.0, height: 400.0 },
			SectionBounds { id: "projects".into(), top: 1200.0, height: 500.0 },
		]
	}

	#[test]
	fn picks_the_section_containing_the_probe() {
		let s = sections();
		assert_eq!(active_section(&s, 0.0, 100.0), Some("home"));
		assert_eq!(active_section(&s, 499.9, 100.0), Some("home"));
		assert_eq!(active_section(&s, 500.0, 100.0), Some("about"));
		assert_eq!(active_section(&s, 1150.0, 100.0), Some("projects"));
	}

	#[test]
	fn gaps_between_sections_have_no_active_link() {
		// 1000..1200 is a gap: probe at scroll 950 lands in it.
		assert_eq!(active_section(&sections(), 950.0, 100.0), None);
	}

	#[test]
	fn empty_section_lists_are_never_active() {
		assert_eq!(active_section(&[], 300.0, 100.0), None);
	}
}
