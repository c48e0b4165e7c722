//! Starfield simulation and per-frame rendering.
//!
//! [`StarfieldEngine`] owns the star population, the pointer state and the
//! current viewport. The host calls [`StarfieldEngine::resize`] on startup and
//! on viewport changes, forwards pointer events, and calls
//! [`StarfieldEngine::tick`] once per animation frame.

use log::info;

use super::population::build_stars;
use super::style::StarfieldStyle;
use super::surface::{RadialGradient, Surface};
use super::types::{Pointer, Star, Viewport};
use crate::theme::ThemeMode;

/// What a frame did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePhase {
	/// Dark theme: stars advanced and were painted.
	Active,
	/// Light theme: surface cleared, star state untouched.
	Dormant,
}

/// Starfield state plus the update/render step.
pub struct StarfieldEngine {
	style: StarfieldStyle,
	viewport: Viewport,
	stars: Vec<Star>,
	pointer: Pointer,
	rng: fastrand::Rng,
}

impl StarfieldEngine {
	/// Engine seeded from system entropy.
	pub fn new(style: StarfieldStyle) -> Self {
		Self::with_rng(style, fastrand::Rng::new())
	}

	pub fn with_rng(style: StarfieldStyle, rng: fastrand::Rng) -> Self {
		Self {
			style,
			viewport: Viewport::default(),
			stars: Vec::new(),
			pointer: Pointer::default(),
			rng,
		}
	}

	pub fn stars(&self) -> &[Star] {
		&self.stars
	}

	pub fn pointer(&self) -> Pointer {
		self.pointer
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Sync the surface to the viewport and regenerate the whole population.
	pub fn resize(&mut self, surface: &mut impl Surface, width: f64, height: f64, raw_dpr: f64) {
		let dpr = &self.style.dpr_range;
		self.viewport = Viewport::new(width, height, raw_dpr, dpr.min, dpr.max);
		surface.configure(&self.viewport);

		self.stars = build_stars(
			&mut self.rng,
			&self.style.population,
			self.viewport.width,
			self.viewport.height,
		);
		info!(
			"portfolio-sky: starfield {}x{} @{}x, {} stars",
			self.viewport.width,
			self.viewport.height,
			self.viewport.dpr,
			self.stars.len()
		);
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer.move_to(x, y);
	}

	pub fn pointer_left(&mut self) {
		self.pointer.leave();
	}

	pub fn window_blurred(&mut self) {
		self.pointer.blur();
	}

	/// Advance and paint one frame at animation time `t` (ms).
	///
	/// In light mode the surface is only cleared; positions stay frozen so
	/// switching back resumes without a jump.
	pub fn tick(&mut self, surface: &mut impl Surface, t: f64, mode: ThemeMode) -> FramePhase {
		let Viewport { width, height, .. } = self.viewport;
		surface.clear(width, height);

		if mode == ThemeMode::Light {
			return FramePhase::Dormant;
		}

		surface.fill_gradient(&self.haze(), width, height);

		let style = &self.style;
		for star in &mut self.stars {
			star.advance(width, height, style.wrap_margin);

			let mut alpha = star.twinkle_alpha(t, style.twinkle_amplitude);

			if let Some(d) = self.pointer.distance_to(star.x, star.y) {
				if d < style.hover.radius {
					let k = 1.0 - d / style.hover.radius;
					alpha += style.hover.brighten * k;
					alpha += style.hover.jitter.lerp(self.rng.f64()) * k;
				}
			}

			let alpha = alpha.clamp(0.0, 1.0);
			surface.fill_circle(star.x, star.y, star.radius, style.star_color.with_alpha(alpha));

			if let Some(halo_alpha) = halo_alpha(style, alpha) {
				surface.fill_circle(
					star.x,
					star.y,
					star.radius * style.halo.radius_factor,
					style.halo.color.with_alpha(halo_alpha),
				);
			}
		}

		FramePhase::Active
	}

	fn haze(&self) -> RadialGradient {
		let haze = &self.style.haze;
		let Viewport { width, height, .. } = self.viewport;
		RadialGradient {
			cx: width * haze.center.0,
			cy: height * haze.center.1,
			radius: width.max(height) * haze.radius_factor,
			stops: haze.stops.to_vec(),
		}
	}
}

/// Halo opacity for a star drawn at `alpha`, if it is bright enough to glow.
fn halo_alpha(style: &StarfieldStyle, alpha: f64) -> Option<f64> {
	let halo = &style.halo;
	(alpha > halo.threshold).then(|| ((alpha - halo.threshold) * halo.gain).min(halo.max_alpha))
}

#[cfg(test)]
mod tests {
	use super::super::surface::recording::{DrawOp, RecordingSurface};
	use super::*;

	fn engine(seed: u64) -> (StarfieldEngine, RecordingSurface) {
		let mut engine =
			StarfieldEngine::with_rng(StarfieldStyle::default(), fastrand::Rng::with_seed(seed));
		let mut surface = RecordingSurface::default();
		engine.resize(&mut surface, 800.0, 600.0, 1.0);
		surface.take();
		(engine, surface)
	}

	fn positions(engine: &StarfieldEngine) -> Vec<(f64, f64)> {
		engine.stars().iter().map(|s| (s.x, s.y)).collect()
	}

	#[test]
	fn resize_configures_surface_and_regenerates_population() {
		let (mut engine, mut surface) = engine(3);
		assert_eq!(engine.stars().len(), 140);
		let before = positions(&engine);

		engine.resize(&mut surface, 2560.0, 1440.0, 3.0);
		assert_eq!(
			surface.take(),
			vec![DrawOp::Configure(Viewport {
				width: 2560.0,
				height: 1440.0,
				dpr: 2.0
			})]
		);
		assert_eq!(engine.stars().len(), 420);
		assert_ne!(positions(&engine)[..140], before[..]);

		engine.resize(&mut surface, 1500.0, 1300.0, 1.0);
		assert_eq!(engine.stars().len(), 300);
	}

	#[test]
	fn active_frame_clears_paints_haze_then_stars() {
		let (mut engine, mut surface) = engine(5);
		assert_eq!(engine.tick(&mut surface, 0.0, ThemeMode::Dark), FramePhase::Active);

		let ops = surface.take();
		assert_eq!(
			ops[0],
			DrawOp::Clear {
				width: 800.0,
				height: 600.0
			}
		);
		let DrawOp::Gradient(haze) = &ops[1] else {
			panic!("expected haze, got {:?}", ops[1]);
		};
		assert!((haze.cx - 400.0).abs() < 1e-9);
		assert!((haze.cy - 330.0).abs() < 1e-9);
		assert!((haze.radius - 560.0).abs() < 1e-9);
		assert_eq!(haze.stops.len(), 3);
		assert_eq!(haze.stops[1].0, 0.45);

		let cores = ops[2..]
			.iter()
			.filter(|op| matches!(op, DrawOp::Circle { color, .. } if color.r == 235))
			.count();
		assert_eq!(cores, engine.stars().len());
	}

	#[test]
	fn stars_drift_each_active_frame() {
		let (mut engine, mut surface) = engine(9);
		let before = engine.stars().to_vec();
		engine.tick(&mut surface, 16.0, ThemeMode::Dark);
		for (old, new) in before.iter().zip(engine.stars()) {
			assert!((new.x - (old.x + old.vx)).abs() < 1e-12);
			assert!((new.y - (old.y + old.vy)).abs() < 1e-12);
		}
	}

	#[test]
	fn star_past_edge_wraps_on_next_frame() {
		let (mut engine, mut surface) = engine(11);
		engine.stars[0].x = 800.0 + 6.0;
		engine.stars[1].y = 600.0 + 6.0;
		engine.tick(&mut surface, 0.0, ThemeMode::Dark);
		assert_eq!(engine.stars()[0].x, -5.0);
		assert_eq!(engine.stars()[1].y, -5.0);
	}

	#[test]
	fn dormant_frames_only_clear_and_freeze_stars() {
		let (mut engine, mut surface) = engine(13);
		engine.pointer_moved(400.0, 300.0);
		let before = positions(&engine);

		for frame in 0..10 {
			let phase = engine.tick(&mut surface, frame as f64 * 16.0, ThemeMode::Light);
			assert_eq!(phase, FramePhase::Dormant);
		}
		assert_eq!(positions(&engine), before);
		assert_eq!(surface.ops.len(), 10);
		assert!(surface
			.ops
			.iter()
			.all(|op| matches!(op, DrawOp::Clear { .. })));

		engine.tick(&mut surface, 176.0, ThemeMode::Dark);
		let first = &engine.stars()[0];
		assert!((first.x - (before[0].0 + first.vx)).abs() < 1e-12);
	}

	#[test]
	fn alpha_stays_clamped_and_halo_follows_threshold() {
		let (mut engine, mut surface) = engine(17);
		for s in &mut engine.stars {
			s.base_alpha = 0.82;
		}
		engine.pointer_moved(400.0, 300.0);

		for frame in 0..30 {
			engine.tick(&mut surface, frame as f64 * 97.0, ThemeMode::Dark);
		}

		let mut last_core: Option<f64> = None;
		let mut halos = 0;
		for op in &surface.ops {
			let DrawOp::Circle { color, .. } = op else {
				continue;
			};
			assert!((0.0..=1.0).contains(&color.a));
			if color.r == 235 {
				last_core = Some(color.a);
			} else {
				halos += 1;
				let core = last_core.take().expect("halo follows its core");
				assert!(core > 0.75);
				assert!(color.a <= 0.20);
				assert!((color.a - ((core - 0.75) * 0.5).min(0.2)).abs() < 1e-12);
			}
		}
		assert!(halos > 0);
	}

	#[test]
	fn halo_alpha_boundaries() {
		let style = StarfieldStyle::default();
		assert_eq!(halo_alpha(&style, 0.75), None);
		assert_eq!(halo_alpha(&style, 0.2), None);
		assert!((halo_alpha(&style, 0.95).unwrap() - 0.1).abs() < 1e-12);
		assert!((halo_alpha(&style, 1.0).unwrap() - 0.125).abs() < 1e-12);
	}

	#[test]
	fn hover_brightens_only_inside_radius() {
		let (mut engine, mut surface) = engine(19);
		engine.stars.truncate(2);
		for s in &mut engine.stars {
			s.vx = 0.0;
			s.vy = 0.0;
			s.base_alpha = 0.3;
			s.phase = 0.0;
		}
		engine.stars[0].x = 100.0;
		engine.stars[0].y = 100.0;
		engine.stars[1].x = 500.0;
		engine.stars[1].y = 500.0;
		engine.pointer_moved(100.0, 100.0);

		engine.tick(&mut surface, 0.0, ThemeMode::Dark);
		let cores: Vec<f64> = surface
			.circles()
			.filter(|c| c.3.r == 235)
			.map(|c| c.3.a)
			.collect();
		// k = 1 at the pointer: 0.3 + 0.55 + jitter ∈ [-0.08, 0.12)
		assert!(cores[0] >= 0.77 && cores[0] < 0.97);
		assert!((cores[1] - 0.3).abs() < 1e-12);
	}

	#[test]
	fn pointer_deactivation_removes_influence_next_frame() {
		let deactivations: [fn(&mut StarfieldEngine); 2] =
			[StarfieldEngine::pointer_left, StarfieldEngine::window_blurred];
		for deactivate in deactivations {
			let (mut engine, mut surface) = engine(23);
			engine.stars.truncate(1);
			let s = &mut engine.stars[0];
			(s.x, s.y, s.vx, s.vy, s.base_alpha, s.phase) = (50.0, 50.0, 0.0, 0.0, 0.4, 0.0);

			engine.pointer_moved(50.0, 50.0);
			engine.tick(&mut surface, 0.0, ThemeMode::Dark);
			deactivate(&mut engine);
			surface.take();
			engine.tick(&mut surface, 0.0, ThemeMode::Dark);

			let alphas: Vec<f64> = surface.circles().map(|c| c.3.a).collect();
			assert_eq!(alphas.len(), 1);
			assert!((alphas[0] - 0.4).abs() < 1e-12);
		}
	}
}
