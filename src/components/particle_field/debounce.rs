//! Resize coalescing for the frame loop.
//!
//! Bursts of resize notifications collapse into a single rebuild: each
//! trigger arms (or re-arms) a deadline, and the frame loop polls [`Debounce::fire`]
//! until the quiet period has elapsed. A later trigger supersedes a pending
//! one, so only the frame loop ever acts on a resize.

/// Deadline-based debounce, polled once per frame.
#[derive(Clone, Debug, Default)]
pub struct Debounce {
	delay_ms: f64,
	deadline: Option<f64>,
}

impl Debounce {
	pub fn new(delay_ms: f64) -> Self {
		Self {
			delay_ms,
			deadline: None,
		}
	}

	/// Arm (or re-arm) the deadline at `now + delay`.
	pub fn trigger(&mut self, now_ms: f64) {
		self.deadline = Some(now_ms + self.delay_ms);
	}

	/// True at most once per armed deadline, after the quiet period passes.
	pub fn fire(&mut self, now_ms: f64) -> bool {
		match self.deadline {
			Some(deadline) if now_ms >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}

	pub fn pending(&self) -> bool {
		self.deadline.is_some()
	}
}
