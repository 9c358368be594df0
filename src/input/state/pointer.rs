use crate::draw::{Point, Stroke};
use crate::input::events::{ClientPoint, PointerSample};
use crate::util;

use super::InputState;

impl InputState {
    /// Processes a pointer press or touch start.
    ///
    /// # Behavior
    /// - Starts a new stroke that freezes the current tool, color and width
    /// - The first contact (if any) becomes the stroke's first point
    /// - A press while a stroke is already active is ignored
    pub fn on_pointer_down(&mut self, sample: &PointerSample) {
        if self.is_painting() {
            log::debug!("Ignoring pointer down while a stroke is active");
            return;
        }

        let mut stroke = Stroke::new(
            self.tool.stroke_kind(),
            self.current_color,
            self.current_width,
        );
        if let Some(contact) = sample.primary() {
            stroke.push(self.normalize(contact));
        }

        self.drawing.begin(stroke);
        self.needs_redraw = true;
    }

    /// Processes pointer motion.
    ///
    /// Extends the active stroke with the first contact. Motion without an
    /// active stroke (hover) is ignored.
    pub fn on_pointer_move(&mut self, sample: &PointerSample) {
        if !self.is_painting() {
            return;
        }
        let Some(contact) = sample.primary() else {
            return;
        };

        let point = self.normalize(contact);
        if self.drawing.extend_active(point) {
            self.needs_redraw = true;
        }
    }

    /// Processes pointer release or touch end.
    ///
    /// Commits the active stroke; a stroke that never received a point is
    /// dropped. Releasing without an active stroke does nothing.
    pub fn on_pointer_up(&mut self) {
        if !self.is_painting() {
            return;
        }

        if self.drawing.end_active() {
            log::debug!("Stroke committed ({} total)", self.drawing.len());
        } else {
            log::debug!("Dropped stroke without points");
        }
        self.needs_redraw = true;
    }

    /// Maps a client position into logical canvas coordinates.
    pub fn normalize(&self, contact: ClientPoint) -> Point {
        util::client_to_logical(contact.x, contact.y, &self.canvas_rect, self.canvas_size)
    }
}
