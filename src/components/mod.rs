//! Page components: the particle backdrop plus the interactive page chrome.

pub mod nav;
pub mod particle_field;
pub mod theme;
pub mod typewriter;
