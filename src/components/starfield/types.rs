//! Starfield state: particles, pointer and viewport geometry.

/// A single drifting, twinkling star.
///
/// Only `x`/`y` change after creation; everything else is fixed for the
/// lifetime of the population.
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub base_alpha: f64,
	pub vx: f64,
	pub vy: f64,
	pub twinkle_rate: f64,
	pub phase: f64,
}

impl Star {
	/// Moves the star by its velocity and wraps it back to `-margin` once it
	/// drifts past `extent + margin`. Drift is always positive, so only the far
	/// edges wrap.
	pub fn advance(&mut self, width: f64, height: f64, margin: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x > width + margin {
			self.x = -margin;
		}
		if self.y > height + margin {
			self.y = -margin;
		}
	}

	/// Resting alpha plus the sinusoidal twinkle at time `t` (ms).
	pub fn twinkle_alpha(&self, t: f64, amplitude: f64) -> f64 {
		self.base_alpha + (t * self.twinkle_rate + self.phase).sin() * amplitude
	}
}

/// Off-screen coordinate the pointer is parked at while inactive.
const PARKED: f64 = -9999.0;

/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
	pub active: bool,
}

impl Default for Pointer {
	fn default() -> Self {
		Self {
			x: PARKED,
			y: PARKED,
			active: false,
		}
	}
}

impl Pointer {
	pub fn move_to(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
		self.active = true;
	}

	/// Pointer left the page: deactivate and park off-screen.
	pub fn leave(&mut self) {
		*self = Self::default();
	}

	/// Window lost focus: deactivate but keep the last position.
	pub fn blur(&mut self) {
		self.active = false;
	}

	/// Distance to `(x, y)` if the pointer is active.
	pub fn distance_to(&self, x: f64, y: f64) -> Option<f64> {
		if !self.active {
			return None;
		}
		let (dx, dy) = (x - self.x, y - self.y);
		Some((dx * dx + dy * dy).sqrt())
	}
}

/// Viewport size in CSS pixels plus the clamped device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub dpr: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: 0.0,
			height: 0.0,
			dpr: 1.0,
		}
	}
}

impl Viewport {
	/// Sanitizes raw window measurements. Sizes that are negative or not finite
	/// become zero; the pixel ratio is clamped to `[min_dpr, max_dpr]`, with a
	/// missing (NaN/zero) ratio treated as 1.
	pub fn new(width: f64, height: f64, raw_dpr: f64, min_dpr: f64, max_dpr: f64) -> Self {
		let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
		let dpr = if raw_dpr.is_nan() || raw_dpr == 0.0 {
			1.0
		} else {
			raw_dpr
		};
		Self {
			width: sanitize(width),
			height: sanitize(height),
			dpr: dpr.clamp(min_dpr, max_dpr),
		}
	}

	pub fn area(&self) -> f64 {
		self.width * self.height
	}

	/// Backing-store pixel dimensions: `floor(size × dpr)`.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.dpr).floor() as u32,
			(self.height * self.dpr).floor() as u32,
		)
	}
}
