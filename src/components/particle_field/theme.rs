//! Visual styling for the particle backdrop.
//!
//! All constants live in [`FieldStyle`] and are passed in explicitly; there is
//! no global configuration. Styles differ between the page themes only in
//! their colors.

use crate::components::theme::ThemeMode;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Generation and rendering constants for the particle field.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Viewport width below which the small particle tier applies.
	pub narrow_breakpoint: f64,
	/// Particle count on narrow viewports.
	pub count_narrow: usize,
	/// Particle count on wide viewports.
	pub count_wide: usize,
	/// Full span of the symmetric per-frame velocity range.
	pub drift_span: f64,
	/// Minimum particle radius.
	pub size_min: f64,
	/// Maximum particle radius.
	pub size_max: f64,
	/// Minimum base opacity.
	pub alpha_min: f64,
	/// Maximum base opacity.
	pub alpha_max: f64,
	/// Minimum twinkle phase speed (radians per ms).
	pub twinkle_min: f64,
	/// Maximum twinkle phase speed (radians per ms).
	pub twinkle_max: f64,
	/// Amplitude of the opacity oscillation.
	pub twinkle_amplitude: f64,
	/// Opacity never drops below this, so particles never fully vanish.
	pub alpha_floor: f64,
	/// Bright center of each particle.
	pub core_color: Color,
	/// Mid stop of the particle's radial falloff.
	pub halo_color: Color,
}

impl FieldStyle {
	/// Style for the page theme currently in effect.
	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self::dark(),
			ThemeMode::Light => Self::light(),
		}
	}

	/// White starfield over a dark page (default).
	pub fn dark() -> Self {
		Self {
			narrow_breakpoint: 768.0,
			count_narrow: 30,
			count_wide: 80,
			drift_span: 0.3,
			size_min: 0.5,
			size_max: 2.5,
			alpha_min: 0.2,
			alpha_max: 1.0,
			twinkle_min: 0.01,
			twinkle_max: 0.03,
			twinkle_amplitude: 0.3,
			alpha_floor: 0.1,
			core_color: Color::rgb(255, 255, 255),
			halo_color: Color::rgba(79, 70, 229, 0.4),
		}
	}

	/// Indigo motes over a light page. Same motion constants as [`Self::dark`].
	pub fn light() -> Self {
		Self {
			core_color: Color::rgb(49, 46, 129),
			halo_color: Color::rgba(79, 70, 229, 0.25),
			..Self::dark()
		}
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self::dark()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn css_output_uses_hex_for_opaque_and_rgba_otherwise() {
		assert_eq!(Color::rgb(255, 255, 255).to_css(), "#ffffff");
		assert_eq!(Color::rgba(79, 70, 229, 0.4).to_css(), "rgba(79, 70, 229, 0.4)");
		assert_eq!(Color::rgb(10, 20, 30).with_alpha(0.5).to_css(), "rgba(10, 20, 30, 0.5)");
	}

	#[test]
	fn themes_share_motion_constants() {
		let dark = FieldStyle::dark();
		let light = FieldStyle::light();
		assert_eq!(dark.count_narrow, light.count_narrow);
		assert_eq!(dark.count_wide, light.count_wide);
		assert_eq!(dark.drift_span, light.drift_span);
		assert_eq!(dark.alpha_floor, light.alpha_floor);
	}
}
