//! Stroke model and rendering (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color parsed from CSS color strings
//! - [`Stroke`]: one brush or eraser gesture with frozen style
//! - [`Drawing`]: the ordered stroke store for the session
//! - [`Renderer`]: the backing store repainted from a [`Drawing`]

pub mod color;
pub mod drawing;
pub mod render;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{BLACK, Color, ColorParseError, RED, WHITE};
pub use drawing::{Drawing, Snapshot};
pub use render::{render_background, render_drawing, render_stroke, render_strokes};
pub use stroke::{Point, Stroke, StrokeKind};
pub use surface::{RenderError, Renderer};
