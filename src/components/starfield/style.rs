//! Visual constants for the starfield.
//!
//! Every tunable number the engine uses lives in [`StarfieldStyle`], so the
//! per-frame code reads as the algorithm and nothing else.

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
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}

/// Inclusive-exclusive range `[min, max)` a star attribute is sampled from.
#[derive(Clone, Copy, Debug)]
pub struct Range {
	pub min: f64,
	pub max: f64,
}

impl Range {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Maps a unit sample `u ∈ [0, 1)` into the range.
	pub fn lerp(&self, u: f64) -> f64 {
		self.min + u * (self.max - self.min)
	}

	pub fn contains(&self, v: f64) -> bool {
		v >= self.min && v <= self.max
	}
}

/// Ambient haze gradient painted behind the stars every active frame.
#[derive(Clone, Debug)]
pub struct HazeStyle {
	/// Gradient center as a fraction of the surface size.
	pub center: (f64, f64),
	/// Radius as a fraction of `max(width, height)`.
	pub radius_factor: f64,
	/// `(offset, color)` stops from center to edge.
	pub stops: [(f64, Color); 3],
}

/// Particle generation ranges.
#[derive(Clone, Debug)]
pub struct PopulationStyle {
	/// Surface area (CSS px²) per star.
	pub area_per_star: f64,
	pub min_count: usize,
	pub max_count: usize,
	pub radius: Range,
	pub base_alpha: Range,
	/// Horizontal drift speed.
	pub speed: Range,
	/// Vertical drift as a fraction of the horizontal speed.
	pub vertical_factor: Range,
	pub twinkle_rate: Range,
}

/// Pointer hover influence.
#[derive(Clone, Debug)]
pub struct HoverStyle {
	/// Distance (CSS px) beyond which the pointer has no effect.
	pub radius: f64,
	/// Alpha added at the pointer itself, falling off linearly.
	pub brighten: f64,
	/// Random sparkle added per frame, scaled by the falloff.
	pub jitter: Range,
}

/// Glow drawn around bright stars.
#[derive(Clone, Debug)]
pub struct HaloStyle {
	/// Halo appears only when star alpha strictly exceeds this.
	pub threshold: f64,
	pub radius_factor: f64,
	pub gain: f64,
	pub max_alpha: f64,
	pub color: Color,
}

/// Complete starfield configuration.
#[derive(Clone, Debug)]
pub struct StarfieldStyle {
	pub population: PopulationStyle,
	pub haze: HazeStyle,
	pub hover: HoverStyle,
	pub halo: HaloStyle,
	pub star_color: Color,
	/// Sinusoidal twinkle amplitude applied to the base alpha.
	pub twinkle_amplitude: f64,
	/// Stars wrap once they drift this far past the far edge.
	pub wrap_margin: f64,
	/// Device pixel ratio bounds for the backing store.
	pub dpr_range: Range,
}

impl Default for StarfieldStyle {
	fn default() -> Self {
		Self {
			population: PopulationStyle {
				area_per_star: 6500.0,
				min_count: 140,
				max_count: 420,
				radius: Range::new(0.6, 1.8),
				base_alpha: Range::new(0.22, 0.82),
				speed: Range::new(0.02, 0.10),
				vertical_factor: Range::new(0.18, 0.55),
				twinkle_rate: Range::new(0.002, 0.01),
			},
			haze: HazeStyle {
				center: (0.5, 0.55),
				radius_factor: 0.7,
				stops: [
					(0.0, Color::rgba(255, 255, 255, 0.035)),
					(0.45, Color::rgba(124, 92, 255, 0.025)),
					(1.0, Color::rgba(0, 0, 0, 0.0)),
				],
			},
			hover: HoverStyle {
				radius: 120.0,
				brighten: 0.55,
				jitter: Range::new(-0.08, 0.12),
			},
			halo: HaloStyle {
				threshold: 0.75,
				radius_factor: 2.4,
				gain: 0.5,
				max_alpha: 0.20,
				color: Color::rgb(180, 220, 255),
			},
			star_color: Color::rgb(235, 245, 255),
			twinkle_amplitude: 0.18,
			wrap_margin: 5.0,
			dpr_range: Range::new(1.0, 2.0),
		}
	}
}
