//! Leptos component wrapping the particle canvas.
//!
//! The component creates a full-viewport canvas and drives the field from a
//! `requestAnimationFrame` loop: advance every particle, then a full redraw.
//! Window resizes are recorded by an event listener and coalesced by a
//! frame-polled debounce, so a burst of resize events costs one rebuild and
//! the field is only ever touched from the frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::debounce::Debounce;
use super::field::ParticleField;
use super::surface::{self, CanvasSurface};
use super::theme::FieldStyle;
use crate::components::theme::ThemeMode;

/// Quiet period before a resize burst is committed, in ms.
const RESIZE_DEBOUNCE_MS: f64 = 250.0;

/// Bundles the field with the resize bookkeeping the frame loop polls.
struct FieldContext {
	field: ParticleField,
	debounce: Debounce,
	pending_viewport: Option<(f64, f64)>,
}

/// Renders the drifting particle backdrop behind the page content.
///
/// The canvas fills the viewport, ignores pointer events, and resizes itself
/// (with a debounced full rebuild of the particle set) when the window does.
/// Particle colors follow the current page theme.
#[component]
pub fn ParticleCanvas(#[prop(into)] mode: Signal<ThemeMode>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		let surface = CanvasSurface::new(ctx);

		*context_init.borrow_mut() = Some(FieldContext {
			field: ParticleField::new(FieldStyle::for_mode(mode.get_untracked()), w, h),
			debounce: Debounce::new(RESIZE_DEBOUNCE_MS),
			pending_viewport: None,
		});

		// Record the latest viewport; the frame loop commits it once the
		// burst quiets down.
		let context_resize = context_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.pending_viewport = Some(viewport_size(&win));
				c.debounce.trigger(js_sys::Date::now());
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner, canvas_anim) =
			(context_init.clone(), animate_init.clone(), canvas.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let now = js_sys::Date::now();
				if c.debounce.fire(now) {
					if let Some((nw, nh)) = c.pending_viewport.take() {
						canvas_anim.set_width(nw as u32);
						canvas_anim.set_height(nh as u32);
						c.field.rebuild(nw, nh);
					}
				}
				c.field.advance();
				let style = FieldStyle::for_mode(mode.get_untracked());
				surface::render(&c.field, &style, now, &surface);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none;"
		/>
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().unwrap().as_f64().unwrap(),
		window.inner_height().unwrap().as_f64().unwrap(),
	)
}
