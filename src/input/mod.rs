//! Input handling and tool state machine.
//!
//! This module translates platform pointer and control events into drawing
//! actions. It maintains the current tool (brush or eraser), the drawing
//! parameters (color, width), the background theme and the canvas geometry
//! used to map client coordinates onto the backing store.

pub mod events;
pub mod state;
pub mod theme;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{ClientPoint, EventResponse, InputEvent, PointerSample, PointerSource};
pub use state::{ExportRequest, InputState};
pub use theme::{Theme, ThemePalette};
pub use tool::Tool;
