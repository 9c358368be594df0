//! Input event types delivered by the platform layer.
//!
//! Events are plain data so a backend (browser glue, window system, or a
//! recorded JSON script) can feed them to [`InputState::handle_event`].
//!
//! [`InputState::handle_event`]: super::InputState::handle_event

use serde::{Deserialize, Serialize};

/// Which kind of device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerSource {
    /// Mouse or pen reported as a mouse
    #[default]
    Mouse,
    /// Touch screen; the platform's scroll/zoom gestures must be suppressed
    Touch,
}

/// A position in client (on-screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

/// Pointer position(s) carried by a down/move event.
///
/// Mouse samples carry exactly one contact. Touch samples carry every
/// active contact in platform order; only the first one is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    #[serde(default)]
    pub source: PointerSource,
    #[serde(default)]
    pub contacts: Vec<ClientPoint>,
}

impl PointerSample {
    /// A mouse sample at `(x, y)`.
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Mouse,
            contacts: vec![ClientPoint { x, y }],
        }
    }

    /// A touch sample with the given contacts (first = tracked).
    pub fn touch(contacts: &[(f64, f64)]) -> Self {
        Self {
            source: PointerSource::Touch,
            contacts: contacts
                .iter()
                .map(|&(x, y)| ClientPoint { x, y })
                .collect(),
        }
    }

    /// The contact that drives drawing, if any.
    pub fn primary(&self) -> Option<ClientPoint> {
        self.contacts.first().copied()
    }
}

/// Everything the drawing surface reacts to.
///
/// Serialized with an internal `type` tag in kebab-case, e.g.
/// `{"type": "pointer-down", "source": "mouse", "contacts": [{"x": 1, "y": 2}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InputEvent {
    /// Pointer pressed or touch started: begins a stroke
    PointerDown(PointerSample),
    /// Pointer moved or touch moved: extends the active stroke
    PointerMove(PointerSample),
    /// Pointer released or touch ended: finishes the active stroke
    PointerUp {
        #[serde(default)]
        source: PointerSource,
    },
    /// Flip between brush and eraser
    ToggleEraser,
    /// Remove the last completed stroke
    Undo,
    /// Remove all completed strokes
    Clear,
    /// Flip between light and dark background
    ToggleTheme,
    /// Viewport changed size (client pixels)
    Resize { width: f64, height: f64 },
    /// Save the current picture under an optional file name
    Export {
        #[serde(default)]
        file_name: Option<String>,
    },
    /// Tool control: new brush color as a CSS color string
    SetColor { color: String },
    /// Tool control: new brush width in logical pixels
    SetBrushSize { size: f64 },
}

impl InputEvent {
    /// Device that produced the event, for pointer events.
    pub fn pointer_source(&self) -> Option<PointerSource> {
        match self {
            Self::PointerDown(sample) | Self::PointerMove(sample) => Some(sample.source),
            Self::PointerUp { source } => Some(*source),
            _ => None,
        }
    }
}

/// What the platform layer should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Cancel the platform's default gesture (page scroll/zoom for touch)
    pub suppress_default: bool,
}
