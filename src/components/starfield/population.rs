//! Star population generation.

use std::f64::consts::TAU;

use super::style::PopulationStyle;
use super::types::Star;

/// Number of stars for a surface of `area` CSS px², clamped to the style's
/// bounds. Degenerate areas (zero, negative, NaN) land on the minimum.
pub fn star_count(style: &PopulationStyle, area: f64) -> usize {
	// `as usize` saturates negatives and NaN to 0.
	let raw = (area / style.area_per_star).floor() as usize;
	raw.clamp(style.min_count, style.max_count)
}

/// Builds a fresh population for a `width × height` surface with positions
/// uniformly spread over `[0, width) × [0, height)`.
pub fn build_stars(
	rng: &mut fastrand::Rng,
	style: &PopulationStyle,
	width: f64,
	height: f64,
) -> Vec<Star> {
	let count = star_count(style, width * height);

	(0..count)
		.map(|_| {
			let speed = style.speed.lerp(rng.f64());
			Star {
				x: rng.f64() * width,
				y: rng.f64() * height,
				radius: style.radius.lerp(rng.f64()),
				base_alpha: style.base_alpha.lerp(rng.f64()),
				vx: speed,
				vy: speed * style.vertical_factor.lerp(rng.f64()),
				twinkle_rate: style.twinkle_rate.lerp(rng.f64()),
				phase: rng.f64() * TAU,
			}
		})
		.collect()
}
