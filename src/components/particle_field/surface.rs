//! Rendering seam between the particle field and its drawing surface.
//!
//! Frame composition is pure: [`compose_frame`] turns field state plus a clock
//! into a list of drawable points, and [`render`] hands that list to a
//! [`RenderSurface`]. Production uses [`CanvasSurface`] over a 2D canvas
//! context; tests use a recording double.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::FieldStyle;

/// One drawable point, fully determined by field state and the clock.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSprite {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub alpha: f64,
}

/// Anything that accepts a frame of drawable points.
pub trait RenderSurface {
	/// Reset the surface for a new frame.
	fn begin_frame(&self, width: f64, height: f64);
	/// Draw one point in the style's colors.
	fn draw_sprite(&self, sprite: &PointSprite, style: &FieldStyle);
}

/// Compute the frame's sprites: a twinkling opacity per particle, floored so
/// no particle ever fully vanishes.
pub fn compose_frame(field: &ParticleField, style: &FieldStyle, clock_ms: f64) -> Vec<PointSprite> {
	field
		.particles
		.iter()
		.enumerate()
		.map(|(i, p)| {
			let twinkle = (clock_ms * p.twinkle + i as f64).sin() * style.twinkle_amplitude;
			PointSprite {
				x: p.x,
				y: p.y,
				radius: p.size,
				alpha: (p.base_alpha + twinkle).clamp(style.alpha_floor, 1.0),
			}
		})
		.collect()
}

/// Full-frame redraw: clear the surface, then draw every particle.
pub fn render(
	field: &ParticleField,
	style: &FieldStyle,
	clock_ms: f64,
	surface: &impl RenderSurface,
) {
	surface.begin_frame(field.width(), field.height());
	for sprite in compose_frame(field, style, clock_ms) {
		surface.draw_sprite(&sprite, style);
	}
}

/// Draws sprites onto a 2D canvas context. The canvas element itself belongs
/// to the surrounding page; this only touches its contents.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl RenderSurface for CanvasSurface {
	fn begin_frame(&self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn draw_sprite(&self, sprite: &PointSprite, style: &FieldStyle) {
		// Soft glow: bright core falling off through the halo to transparent.
		let glow_radius = sprite.radius * 2.0;
		let gradient = self
			.ctx
			.create_radial_gradient(sprite.x, sprite.y, 0.0, sprite.x, sprite.y, glow_radius)
			.unwrap();

		gradient
			.add_color_stop(0.0, &style.core_color.with_alpha(0.8).to_css())
			.unwrap();
		gradient
			.add_color_stop(0.5, &style.halo_color.to_css())
			.unwrap();
		gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)").unwrap();

		self.ctx.set_global_alpha(sprite.alpha);
		self.ctx.begin_path();
		let _ = self.ctx.arc(sprite.x, sprite.y, glow_radius, 0.0, PI * 2.0);
		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.fill();
		self.ctx.set_global_alpha(1.0);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use pretty_assertions::assert_eq;

	use super::*;

	/// Test double that records every call it receives.
	#[derive(Default)]
	struct RecordingSurface {
		frames: RefCell<Vec<(f64, f64)>>,
		sprites: RefCell<Vec<PointSprite>>,
	}

	impl RenderSurface for RecordingSurface {
		fn begin_frame(&self, width: f64, height: f64) {
			self.frames.borrow_mut().push((width, height));
		}

		fn draw_sprite(&self, sprite: &PointSprite, _style: &FieldStyle) {
			self.sprites.borrow_mut().push(sprite.clone());
		}
	}

	fn field() -> ParticleField {
		ParticleField::new(FieldStyle::dark(), 1024.0, 768.0)
	}

	#[test]
	fn opacity_never_drops_below_the_floor() {
		let field = field();
		let style = FieldStyle::dark();
		for clock in [-1.0e9, -12345.6, 0.0, 1.0, 1.0e9, f64::MAX.sqrt()] {
			for sprite in compose_frame(&field, &style, clock) {
				assert!(
					sprite.alpha >= style.alpha_floor,
					"alpha {} below floor at clock {}",
					sprite.alpha,
					clock
				);
				assert!(sprite.alpha <= 1.0);
			}
		}
	}

	#[test]
	fn composition_is_pure_for_a_fixed_clock() {
		let field = field();
		let style = FieldStyle::dark();
		let first = compose_frame(&field, &style, 42_000.0);
		let second = compose_frame(&field, &style, 42_000.0);
		assert_eq!(first, second);
	}

	#[test]
	fn render_repeats_identically_with_the_same_inputs() {
		let field = field();
		let style = FieldStyle::dark();
		let surface = RecordingSurface::default();

		render(&field, &style, 7_500.0, &surface);
		let after_first = surface.sprites.borrow().clone();
		render(&field, &style, 7_500.0, &surface);
		let after_second = surface.sprites.borrow()[after_first.len()..].to_vec();

		assert_eq!(after_first, after_second);
		assert_eq!(*surface.frames.borrow(), vec![(1024.0, 768.0); 2]);
	}

	#[test]
	fn render_clears_before_drawing_every_particle() {
		let field = field();
		let surface = RecordingSurface::default();
		render(&field, &FieldStyle::dark(), 0.0, &surface);
		assert_eq!(surface.frames.borrow().len(), 1);
		assert_eq!(surface.sprites.borrow().len(), field.particles.len());
	}
}
