//! Stroke definitions: the recorded gestures that make up a drawing.

use super::color::Color;

/// A position in logical canvas space (backing-store pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How a stroke is composited onto the picture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrokeKind {
    /// Normal paint, drawn over whatever is below it
    Brush,
    /// Removes everything painted so far, revealing the background
    Eraser,
}

/// One continuous gesture from pointer-down to pointer-up.
///
/// Style attributes are frozen when the stroke begins. Points can only be
/// appended, and only while the stroke is still active in its [`Drawing`];
/// completed strokes are read-only.
///
/// [`Drawing`]: super::Drawing
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    kind: StrokeKind,
    color: Color,
    width: f64,
    points: Vec<Point>,
}

impl Stroke {
    /// Creates a stroke with no points yet.
    pub fn new(kind: StrokeKind, color: Color, width: f64) -> Self {
        Self {
            kind,
            color,
            width,
            points: Vec::new(),
        }
    }

    /// Creates a stroke from an already recorded point list.
    pub fn with_points(kind: StrokeKind, color: Color, width: f64, points: Vec<Point>) -> Self {
        Self {
            kind,
            color,
            width,
            points,
        }
    }

    pub fn kind(&self) -> StrokeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_eraser(&self) -> bool {
        self.kind == StrokeKind::Eraser
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}
