//! Freehand drawing surface with brush and eraser strokes.
//!
//! Strokes are recorded in logical canvas coordinates, repainted in full onto
//! a Cairo backing store whenever something visible changes, and exported as
//! PNG. Eraser strokes reveal the theme background through every stroke
//! painted before them.
//!
//! The [`Sketchpad`] ties the pieces together; the modules are public so a
//! platform layer can use the input state machine or the renderer directly.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod sketchpad;
pub mod util;

pub use config::Config;
pub use sketchpad::{DispatchOutcome, Sketchpad};
