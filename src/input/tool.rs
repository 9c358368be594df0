//! Drawing tool selection.

use crate::draw::StrokeKind;

/// Drawing tool selection.
///
/// The active tool decides what kind of stroke the next pointer-down starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Paints with the current color (default)
    #[default]
    Brush,
    /// Erases down to the background
    Eraser,
}

impl Tool {
    /// Kind of stroke this tool records.
    pub fn stroke_kind(self) -> StrokeKind {
        match self {
            Self::Brush => StrokeKind::Brush,
            Self::Eraser => StrokeKind::Eraser,
        }
    }

    /// The other tool.
    pub fn toggled(self) -> Self {
        match self {
            Self::Brush => Self::Eraser,
            Self::Eraser => Self::Brush,
        }
    }
}
