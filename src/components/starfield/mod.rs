//! Animated starfield background.
//!
//! Draws a field of slowly drifting, twinkling stars on a full-viewport canvas:
//! - Population sized to the viewport area and rebuilt on every resize
//! - Backing store scaled to the device pixel ratio (clamped to 1..=2)
//! - Stars near the pointer brighten and sparkle, bright stars get a halo
//! - Rendering pauses in light mode and while the page is hidden
//!
//! The engine draws through the [`Surface`] trait, so it runs unchanged against
//! the browser canvas or a test double.
//!
//! # Example
//!
//! ```ignore
//! let theme = RwSignal::new(ThemeMode::Dark);
//! view! { <StarfieldCanvas theme=theme /> }
//! ```

mod component;
mod engine;
mod population;
mod schedule;
pub mod style;
mod surface;
mod types;

pub use component::StarfieldCanvas;
pub use engine::{FramePhase, StarfieldEngine};
pub use population::{build_stars, star_count};
pub use schedule::{FrameScheduler, RunState};
pub use style::StarfieldStyle;
pub use surface::{CanvasSurface, RadialGradient, Surface};
pub use types::{Pointer, Star, Viewport};
