//! Drawable surface abstraction.
//!
//! The engine only ever talks to a [`Surface`]. [`CanvasSurface`] backs it with
//! an HTML canvas and its 2D context; tests swap in a recorder.

use std::f64::consts::PI;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::style::Color;
use super::types::Viewport;

/// Radial gradient filling the whole surface.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
	pub cx: f64,
	pub cy: f64,
	pub radius: f64,
	pub stops: Vec<(f64, Color)>,
}

/// Raster target the starfield paints into. All coordinates are CSS pixels.
pub trait Surface {
	/// Resize the backing store to `viewport.backing_size()`, keep the CSS size
	/// at the unscaled viewport and scale all later drawing by `viewport.dpr`.
	fn configure(&mut self, viewport: &Viewport);

	/// Clear a `width × height` region anchored at the origin.
	fn clear(&mut self, width: f64, height: f64);

	/// Fill a `width × height` region with a radial gradient.
	fn fill_gradient(&mut self, gradient: &RadialGradient, width: f64, height: f64);

	/// Fill a circle.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

/// [`Surface`] over an HTML canvas element.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquires the 2D context. Returns `None` when the browser refuses one, in
	/// which case the starfield never starts.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
			Ok(None) | Err(_) => {
				warn!("portfolio-sky: canvas has no 2d context, starfield disabled");
				return None;
			}
		};
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn configure(&mut self, viewport: &Viewport) {
		let (bw, bh) = viewport.backing_size();
		self.canvas.set_width(bw);
		self.canvas.set_height(bh);

		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", viewport.width));
		let _ = style.set_property("height", &format!("{}px", viewport.height));

		let _ = self
			.ctx
			.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_gradient(&mut self, gradient: &RadialGradient, width: f64, height: f64) {
		let Ok(g) = self.ctx.create_radial_gradient(
			gradient.cx,
			gradient.cy,
			0.0,
			gradient.cx,
			gradient.cy,
			gradient.radius,
		) else {
			// Non-finite geometry (e.g. zero-sized viewport); skip the haze.
			return;
		};

		for (offset, color) in &gradient.stops {
			let _ = g.add_color_stop(*offset as f32, &color.to_css());
		}

		#[allow(deprecated)]
		self.ctx.set_fill_style(&g);
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}
}

/// Test double recording every draw call.
#[cfg(test)]
pub mod recording {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		Configure(Viewport),
		Clear { width: f64, height: f64 },
		Gradient(RadialGradient),
		Circle { x: f64, y: f64, radius: f64, color: Color },
	}

	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: Vec<DrawOp>,
	}

	impl RecordingSurface {
		pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64, Color)> + '_ {
			self.ops.iter().filter_map(|op| match op {
				DrawOp::Circle {
					x,
					y,
					radius,
					color,
				} => Some((*x, *y, *radius, *color)),
				_ => None,
			})
		}

		pub fn take(&mut self) -> Vec<DrawOp> {
			std::mem::take(&mut self.ops)
		}
	}

	impl Surface for RecordingSurface {
		fn configure(&mut self, viewport: &Viewport) {
			self.ops.push(DrawOp::Configure(*viewport));
		}

		fn clear(&mut self, width: f64, height: f64) {
			self.ops.push(DrawOp::Clear { width, height });
		}

		fn fill_gradient(&mut self, gradient: &RadialGradient, _width: f64, _height: f64) {
			self.ops.push(DrawOp::Gradient(gradient.clone()));
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.ops.push(DrawOp::Circle {
				x,
				y,
				radius,
				color,
			});
		}
	}
}
