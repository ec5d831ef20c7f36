//! Animated particle backdrop.
//!
//! Maintains a decorative, continuously drifting set of points behind the
//! page content:
//! - a particle set generated from the viewport (two count tiers at a 768px
//!   breakpoint, empty for degenerate viewports)
//! - per-frame advance with wraparound at the viewport edges
//! - a full stateless redraw every frame with twinkling, floored opacity
//! - a debounced full rebuild when the window is resized
//!
//! Drawing goes through the [`RenderSurface`] trait so the frame pipeline can
//! be exercised without a real canvas.
//!
//! # Example
//!
//! ```ignore
//! use nightfolio::{ParticleCanvas, ThemeMode};
//!
//! let mode = RwSignal::new(ThemeMode::Dark);
//! view! { <ParticleCanvas mode=mode /> }
//! ```

mod component;
mod debounce;
mod field;
mod surface;
pub mod theme;

pub use component::ParticleCanvas;
pub use debounce::Debounce;
pub use field::{Particle, ParticleField, particle_count};
pub use surface::{CanvasSurface, PointSprite, RenderSurface, compose_frame, render};
pub use theme::{Color, FieldStyle};
