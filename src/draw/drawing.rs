//! Stroke store: the ordered history of strokes for the current session.

use super::stroke::{Point, Stroke};

/// Container for all strokes in the current drawing session.
///
/// Completed strokes are kept in paint order (first = bottom, last = top).
/// At most one stroke is active (still being drawn) at any time; it is
/// painted after every completed stroke.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    strokes: Vec<Stroke>,
    active: Option<Stroke>,
}

/// Read-only view of a [`Drawing`] in paint order.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Completed strokes, oldest first
    pub completed: &'a [Stroke],
    /// The stroke being drawn, if any
    pub active: Option<&'a Stroke>,
}

impl<'a> Snapshot<'a> {
    /// Iterates completed strokes followed by the active stroke.
    pub fn iter(self) -> impl Iterator<Item = &'a Stroke> {
        self.completed.iter().chain(self.active)
    }

    /// Number of strokes the renderer will visit.
    pub fn len(self) -> usize {
        self.completed.len() + usize::from(self.active.is_some())
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl Drawing {
    /// Creates an empty drawing.
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
            active: None,
        }
    }

    /// Appends a completed stroke on top of the others.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes the most recently completed stroke. Empty drawings are left alone.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Removes every completed stroke. The active stroke, if any, survives.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            completed: &self.strokes,
            active: self.active.as_ref(),
        }
    }

    /// Completed strokes in paint order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn active(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    /// Number of completed strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Installs a new active stroke.
    ///
    /// Returns `false` (and drops `stroke`) if another stroke is already active.
    pub fn begin(&mut self, stroke: Stroke) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(stroke);
        true
    }

    /// Appends a point to the active stroke. Returns `false` when nothing is active.
    pub fn extend_active(&mut self, point: Point) -> bool {
        match self.active.as_mut() {
            Some(stroke) => {
                stroke.push(point);
                true
            }
            None => false,
        }
    }

    /// Finishes the active stroke.
    ///
    /// A stroke with at least one point is committed; an empty one is
    /// dropped. Returns `true` if a stroke was committed.
    pub fn end_active(&mut self) -> bool {
        match self.active.take() {
            Some(stroke) if !stroke.points().is_empty() => {
                self.strokes.push(stroke);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED, StrokeKind};

    fn brush(points: &[(f64, f64)]) -> Stroke {
        Stroke::with_points(
            StrokeKind::Brush,
            RED,
            5.0,
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        )
    }

    #[test]
    fn undo_on_empty_is_a_noop() {
        let mut drawing = Drawing::new();
        assert!(drawing.undo().is_none());
        assert!(drawing.undo().is_none());
        assert!(drawing.is_empty());
    }

    #[test]
    fn undo_pops_the_most_recent_stroke() {
        let mut drawing = Drawing::new();
        drawing.commit(brush(&[(0.0, 0.0)]));
        drawing.commit(brush(&[(1.0, 1.0)]));

        let popped = drawing.undo().unwrap();
        assert_eq!(popped.points(), &[Point::new(1.0, 1.0)]);
        assert_eq!(drawing.len(), 1);
    }

    #[test]
    fn clear_keeps_the_active_stroke() {
        let mut drawing = Drawing::new();
        drawing.commit(brush(&[(0.0, 0.0)]));
        assert!(drawing.begin(Stroke::new(StrokeKind::Eraser, BLACK, 3.0)));

        drawing.clear();
        assert!(drawing.is_empty());
        assert!(drawing.active().is_some());
    }

    #[test]
    fn second_begin_is_rejected_while_active() {
        let mut drawing = Drawing::new();
        assert!(drawing.begin(brush(&[(1.0, 1.0)])));
        assert!(!drawing.begin(brush(&[(9.0, 9.0)])));
        assert_eq!(drawing.active().unwrap().points()[0], Point::new(1.0, 1.0));
    }

    #[test]
    fn empty_active_stroke_is_discarded() {
        let mut drawing = Drawing::new();
        drawing.begin(Stroke::new(StrokeKind::Eraser, BLACK, 3.0));
        assert!(!drawing.end_active());
        assert!(drawing.is_empty());
        assert!(drawing.active().is_none());
    }

    #[test]
    fn extend_without_active_stroke_is_ignored() {
        let mut drawing = Drawing::new();
        assert!(!drawing.extend_active(Point::new(3.0, 4.0)));
        assert!(!drawing.end_active());
        assert!(drawing.is_empty());
    }

    #[test]
    fn snapshot_lists_active_stroke_last() {
        let mut drawing = Drawing::new();
        drawing.commit(brush(&[(0.0, 0.0)]));
        drawing.begin(brush(&[(5.0, 5.0)]));
        drawing.extend_active(Point::new(6.0, 6.0));

        let snapshot = drawing.snapshot();
        assert_eq!(snapshot.len(), 2);
        let last = snapshot.iter().last().unwrap();
        assert_eq!(last.points().len(), 2);
    }
}
