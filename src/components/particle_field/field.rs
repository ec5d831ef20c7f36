//! The particle set and its per-frame motion.
//!
//! A field owns a flat list of particles, each with a position, a per-frame
//! velocity fixed at creation, and fixed visual attributes. `advance` moves
//! every particle once and wraps out-of-bounds coordinates to the opposite
//! edge, so positions always satisfy `0 <= x < width` and `0 <= y < height`.
//! A viewport change discards the whole set and regenerates it; particles are
//! never created or destroyed outside a full rebuild.

use super::theme::FieldStyle;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub base_alpha: f64,
	pub twinkle: f64, // phase speed, radians per ms
}

/// The full particle set plus the viewport it drifts in.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	style: FieldStyle,
	width: f64,
	height: f64,
}

/// Particle count for a viewport: fewer on narrow screens, none at all when
/// the viewport has no area.
pub fn particle_count(style: &FieldStyle, width: f64, height: f64) -> usize {
	if width <= 0.0 || height <= 0.0 {
		0
	} else if width < style.narrow_breakpoint {
		style.count_narrow
	} else {
		style.count_wide
	}
}

/// Wrap a coordinate into `[0, extent)`.
fn wrap(value: f64, extent: f64) -> f64 {
	let wrapped = value.rem_euclid(extent);
	// rem_euclid can round up to the modulus itself for tiny negative inputs.
	if wrapped >= extent { 0.0 } else { wrapped }
}

impl ParticleField {
	/// Build a field sized for the given viewport.
	pub fn new(style: FieldStyle, width: f64, height: f64) -> Self {
		let count = particle_count(&style, width, height);
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			// Deterministic pseudo-random based on index for consistent look
			let seed = i as f64;
			particles.push(Particle {
				x: Self::pseudo_random(seed * 1.1) * width,
				y: Self::pseudo_random(seed * 2.3) * height,
				vx: (Self::pseudo_random(seed * 3.7) - 0.5) * style.drift_span,
				vy: (Self::pseudo_random(seed * 4.1) - 0.5) * style.drift_span,
				size: style.size_min
					+ Self::pseudo_random(seed * 5.3) * (style.size_max - style.size_min),
				base_alpha: style.alpha_min
					+ Self::pseudo_random(seed * 6.7) * (style.alpha_max - style.alpha_min),
				twinkle: style.twinkle_min
					+ Self::pseudo_random(seed * 7.9) * (style.twinkle_max - style.twinkle_min),
			});
		}

		Self {
			particles,
			style,
			width,
			height,
		}
	}

	/// Simple pseudo-random function (deterministic)
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Move every particle one frame, wrapping at the viewport edges.
	pub fn advance(&mut self) {
		for p in &mut self.particles {
			p.x = wrap(p.x + p.vx, self.width);
			p.y = wrap(p.y + p.vy, self.height);
		}
	}

	/// Discard the set and regenerate it for a new viewport.
	pub fn rebuild(&mut self, width: f64, height: f64) {
		*self = Self::new(self.style.clone(), width, height);
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn style() -> FieldStyle {
		FieldStyle::dark()
	}

	#[test]
	fn narrow_viewports_get_the_small_tier() {
		for width in [1.0, 320.0, 767.0, 767.9] {
			assert_eq!(particle_count(&style(), width, 600.0), 30);
		}
	}

	#[test]
	fn wide_viewports_get_the_large_tier() {
		for width in [768.0, 1024.0, 2560.0] {
			assert_eq!(particle_count(&style(), width, 600.0), 80);
		}
	}

	#[test]
	fn degenerate_viewports_produce_an_empty_field() {
		assert_eq!(particle_count(&style(), 0.0, 600.0), 0);
		assert_eq!(particle_count(&style(), 1024.0, 0.0), 0);
		assert_eq!(particle_count(&style(), -5.0, -5.0), 0);
		assert!(ParticleField::new(style(), 0.0, 0.0).particles.is_empty());
	}

	#[test]
	fn generated_attributes_stay_in_their_ranges() {
		let field = ParticleField::new(style(), 1024.0, 768.0);
		assert_eq!(field.particles.len(), 80);
		for p in &field.particles {
			assert!((0.0..1024.0).contains(&p.x));
			assert!((0.0..768.0).contains(&p.y));
			assert!((-0.15..0.15).contains(&p.vx));
			assert!((-0.15..0.15).contains(&p.vy));
			assert!((0.5..2.5).contains(&p.size));
			assert!((0.2..1.0).contains(&p.base_alpha));
			assert!((0.01..0.03).contains(&p.twinkle));
		}
	}

	#[test]
	fn advance_keeps_every_particle_inside_the_viewport() {
		let mut field = ParticleField::new(style(), 300.0, 200.0);
		for _ in 0..10_000 {
			field.advance();
			for p in &field.particles {
				assert!((0.0..300.0).contains(&p.x), "x out of bounds: {}", p.x);
				assert!((0.0..200.0).contains(&p.y), "y out of bounds: {}", p.y);
			}
		}
	}

	#[test]
	fn advance_wraps_to_the_opposite_edge() {
		let mut field = ParticleField::new(style(), 1024.0, 768.0);
		field.particles[0] = Particle {
			x: 1023.9,
			y: 0.05,
			vx: 0.2,
			vy: -0.1,
			size: 1.0,
			base_alpha: 0.5,
			twinkle: 0.02,
		};
		field.advance();
		let p = &field.particles[0];
		assert!((p.x - 0.1).abs() < 1e-9, "x should wrap past the right edge: {}", p.x);
		assert!((p.y - 767.95).abs() < 1e-9, "y should wrap past the top edge: {}", p.y);
	}

	#[test]
	fn rebuild_regenerates_the_whole_set_for_the_new_viewport() {
		let mut field = ParticleField::new(style(), 1024.0, 768.0);
		assert_eq!(field.particles.len(), 80);
		field.rebuild(500.0, 400.0);
		assert_eq!(field.particles.len(), 30);
		assert_eq!(field.width(), 500.0);
		for p in &field.particles {
			assert!((0.0..500.0).contains(&p.x));
			assert!((0.0..400.0).contains(&p.y));
		}
	}
}
