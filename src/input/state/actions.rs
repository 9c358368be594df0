use crate::input::events::{EventResponse, InputEvent, PointerSource};

use super::InputState;

impl InputState {
    /// Dispatches one input event to the matching handler.
    ///
    /// Touch events ask the platform to suppress its default gesture so
    /// that drawing with a finger does not scroll or zoom the page.
    pub fn handle_event(&mut self, event: InputEvent) -> EventResponse {
        let suppress_default = event.pointer_source() == Some(PointerSource::Touch);

        match event {
            InputEvent::PointerDown(sample) => self.on_pointer_down(&sample),
            InputEvent::PointerMove(sample) => self.on_pointer_move(&sample),
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
            InputEvent::ToggleEraser => {
                self.toggle_eraser();
            }
            InputEvent::Undo => self.undo(),
            InputEvent::Clear => self.clear(),
            InputEvent::ToggleTheme => {
                self.toggle_theme();
            }
            InputEvent::Resize { width, height } => self.update_viewport(width, height),
            InputEvent::Export { file_name } => self.request_export(file_name),
            InputEvent::SetColor { color } => {
                self.set_color(&color);
            }
            InputEvent::SetBrushSize { size } => {
                self.set_width(size);
            }
        }

        EventResponse { suppress_default }
    }
}
