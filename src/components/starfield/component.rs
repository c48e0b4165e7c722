//! Leptos component hosting the starfield canvas.
//!
//! The component creates a full-viewport canvas, builds a [`StarfieldEngine`]
//! over it once mounted, and drives it with `requestAnimationFrame`. Window
//! listeners feed resize and pointer events to the engine; the document's
//! `visibilitychange` stops and restarts the frame chain.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use super::engine::StarfieldEngine;
use super::schedule::FrameScheduler;
use super::style::StarfieldStyle;
use super::surface::CanvasSurface;
use crate::theme::ThemeMode;

/// Engine, its canvas, and the frame chain driving them.
struct Starfield {
	engine: StarfieldEngine,
	surface: CanvasSurface,
	scheduler: FrameScheduler,
}

impl Starfield {
	fn resize(&mut self, window: &Window) {
		let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		let (w, h) = (dimension(window.inner_width()), dimension(window.inner_height()));
		self.engine
			.resize(&mut self.surface, w, h, window.device_pixel_ratio());
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Full-viewport animated star background.
///
/// Stars render only while `theme` is dark; in light mode the canvas is
/// cleared each frame and faded out via CSS opacity.
#[component]
pub fn StarfieldCanvas(#[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |started: Option<bool>| {
		if started == Some(true) {
			return true;
		}
		let Some(canvas) = canvas_ref.get() else {
			return false;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return false;
		};
		let Some(surface) = CanvasSurface::new(canvas) else {
			// No 2d context: stay blank forever.
			return true;
		};
		start(window, surface, theme);
		true
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="starfield"
			class="starfield"
			aria-hidden="true"
			style:opacity=move || theme.get().starfield_opacity()
		/>
	}
}

fn start(window: Window, surface: CanvasSurface, theme: Signal<ThemeMode>) {
	let starfield = Rc::new(RefCell::new(Starfield {
		engine: StarfieldEngine::new(StarfieldStyle::default()),
		surface,
		scheduler: FrameScheduler::default(),
	}));
	starfield.borrow_mut().resize(&window);

	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let (sf_anim, animate_inner, win_anim) = (starfield.clone(), animate.clone(), window.clone());
	*animate.borrow_mut() = Some(Closure::new(move |t: f64| {
		let mut sf = sf_anim.borrow_mut();
		let Starfield {
			engine,
			surface,
			scheduler,
		} = &mut *sf;
		scheduler.fired();
		// Polled every frame; a disposed signal means the page is going away.
		let mode = theme.try_get_untracked().unwrap_or(ThemeMode::Light);
		engine.tick(surface, t, mode);
		scheduler.reschedule(|| request_frame(&win_anim, &animate_inner));
	}));

	let (sf_resize, win_resize) = (starfield.clone(), window.clone());
	listen(&window, "resize", false, move |_| {
		sf_resize.borrow_mut().resize(&win_resize);
	});

	let sf_move = starfield.clone();
	listen(&window, "mousemove", true, move |ev| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			sf_move
				.borrow_mut()
				.engine
				.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
		}
	});

	let sf_leave = starfield.clone();
	listen(&window, "mouseleave", false, move |_| {
		sf_leave.borrow_mut().engine.pointer_left();
	});

	let sf_blur = starfield.clone();
	listen(&window, "blur", false, move |_| {
		sf_blur.borrow_mut().engine.window_blurred();
	});

	if let Some(document) = window.document() {
		let (sf_vis, win_vis, animate_vis, doc_vis) =
			(starfield.clone(), window.clone(), animate.clone(), document.clone());
		listen(&document, "visibilitychange", false, move |_| {
			let mut sf = sf_vis.borrow_mut();
			if doc_vis.hidden() {
				debug!("portfolio-sky: page hidden, pausing starfield");
				sf.scheduler.cancel(|handle| {
					let _ = win_vis.cancel_animation_frame(handle);
				});
			} else {
				debug!("portfolio-sky: page visible, resuming starfield");
				sf.scheduler.request(|| request_frame(&win_vis, &animate_vis));
			}
		});
	}

	if starfield
		.borrow_mut()
		.scheduler
		.request(|| request_frame(&window, &animate))
	{
		info!("portfolio-sky: starfield running");
	} else {
		warn!("portfolio-sky: requestAnimationFrame failed, starfield not started");
	}
}

fn request_frame(window: &Window, animate: &FrameCallback) -> Option<i32> {
	let cb = animate.borrow();
	let cb = cb.as_ref()?;
	window
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

/// Attach a listener for the lifetime of the page.
fn listen(target: &EventTarget, event: &str, passive: bool, handler: impl FnMut(Event) + 'static) {
	let cb = Closure::<dyn FnMut(Event)>::new(handler);
	let options = AddEventListenerOptions::new();
	options.set_passive(passive);
	if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
		event,
		cb.as_ref().unchecked_ref(),
		&options,
	) {
		warn!("portfolio-sky: failed to listen for '{}': {:?}", event, e);
	}
	cb.forget();
}
