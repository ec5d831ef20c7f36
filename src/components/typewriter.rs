//! Timed text reveal for the hero heading.
//!
//! Types the text out one character per interval tick and clears the interval
//! once the text is exhausted. The reveal step itself is a pure function.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// The first `count` characters of `text`, respecting char boundaries.
pub fn reveal(text: &str, count: usize) -> &str {
	match text.char_indices().nth(count) {
		Some((byte_idx, _)) => &text[..byte_idx],
		None => text,
	}
}

/// Types `text` out one character per `interval_ms` tick.
#[component]
pub fn Typewriter(
	#[prop(into)] text: Signal<String>,
	#[prop(default = 150)] interval_ms: i32,
) -> impl IntoView {
	let shown = RwSignal::new(0usize);
	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	Effect::new({
		let tick = tick.clone();
		let handle = handle.clone();
		move |_| {
			let window = web_sys::window().unwrap();
			// Clear any interval from a previous run before arming a new one.
			if let Some(old) = handle.take() {
				window.clear_interval_with_handle(old);
			}
			let total = text.get_untracked().chars().count();
			let handle_tick = handle.clone();
			*tick.borrow_mut() = Some(Closure::new(move || {
				shown.update(|n| *n += 1);
				if shown.get_untracked() >= total {
					if let Some(id) = handle_tick.take() {
						web_sys::window().unwrap().clear_interval_with_handle(id);
					}
				}
			}));
			if let Some(ref cb) = *tick.borrow() {
				if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					interval_ms,
				) {
					handle.set(Some(id));
				}
			}
		}
	});

	view! {
		<span class="typewriter">
			{move || {
				let full = text.get();
				reveal(&full, shown.get()).to_string()
			}}
		</span>
	}
}
