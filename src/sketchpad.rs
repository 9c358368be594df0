//! The drawing session: input state plus the backing store it paints into.
//!
//! A [`Sketchpad`] is the single owner of the drawing, the theme and the
//! renderer. Platform glue feeds it [`InputEvent`]s one at a time; after
//! each event the surface is repainted in full if anything visible changed.

use crate::config::Config;
use crate::draw::{RenderError, Renderer};
use crate::export::{ExportError, ExportedImage, resolve_file_name};
use crate::input::{EventResponse, InputEvent, InputState};

/// Result of dispatching one event.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// What the platform should do with its default handling
    pub response: EventResponse,
    /// Encoded image, when the event was an export request
    pub export: Option<ExportedImage>,
}

/// A drawing surface session.
#[derive(Debug)]
pub struct Sketchpad {
    input: InputState,
    renderer: Renderer,
    default_file_name: String,
}

impl Sketchpad {
    /// Creates a session around an existing input state and paints it once.
    pub fn new(input: InputState, default_file_name: impl Into<String>) -> Result<Self, RenderError> {
        let renderer = Renderer::new(input.canvas_size())?;
        let mut pad = Self {
            input,
            renderer,
            default_file_name: default_file_name.into(),
        };
        pad.repaint()?;
        Ok(pad)
    }

    /// Creates a session using the startup values from `config`.
    pub fn from_config(config: &Config) -> Result<Self, RenderError> {
        let input = InputState::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
            config.theme.default_theme.into(),
            config.theme.palette(),
            config.canvas.layout(),
        );
        Self::new(input, config.export.default_file_name.clone())
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Mutable access for tool controls that bypass the event enum.
    ///
    /// Changes that affect the picture must set `needs_redraw`; the next
    /// dispatch (or [`Sketchpad::repaint`]) picks them up.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Handles one event and repaints if needed.
    ///
    /// Only `Export` events can fail; every other event is total. A failed
    /// repaint is logged and leaves the previous picture in place.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<DispatchOutcome, ExportError> {
        log::trace!("Dispatching {:?}", event);
        let response = self.input.handle_event(event);

        if self.input.needs_redraw {
            self.repaint_or_recover();
        }

        let export = match self.input.take_pending_export() {
            Some(request) => Some(self.export(request.file_name.as_deref())?),
            None => None,
        };

        Ok(DispatchOutcome { response, export })
    }

    /// Full repaint of the backing store from the current drawing.
    pub fn repaint(&mut self) -> Result<(), RenderError> {
        self.renderer.render(
            self.input.canvas_size(),
            self.input.drawing.snapshot(),
            self.input.background_color(),
        )?;
        self.input.needs_redraw = false;
        Ok(())
    }

    /// Repaints, keeping the current backing store if a new one cannot be
    /// allocated so later strokes are still drawn.
    fn repaint_or_recover(&mut self) {
        let Err(err) = self.repaint() else {
            return;
        };
        log::error!("Repaint failed: {}", err);

        let current = self.renderer.size();
        if self.input.canvas_size() == current {
            return;
        }
        log::warn!(
            "Keeping {}x{} backing store",
            current.width,
            current.height
        );
        self.input.restore_canvas_size(current);
        if let Err(err) = self.repaint() {
            log::error!("Repaint failed: {}", err);
        }
    }

    /// Encodes the current picture as PNG under a resolved file name.
    ///
    /// Blank or missing names fall back to the configured default base name.
    pub fn export(&mut self, file_name: Option<&str>) -> Result<ExportedImage, ExportError> {
        if self.input.needs_redraw {
            self.repaint_or_recover();
        }

        let file_name = resolve_file_name(file_name, &self.default_file_name);
        let png_data = self.renderer.encode_png()?;
        log::info!("Exported {} ({} bytes)", file_name, png_data.len());
        Ok(ExportedImage {
            file_name,
            png_data,
        })
    }

    /// Reads a pixel of the backing store as straight RGBA.
    pub fn pixel_rgba(&mut self, x: i32, y: i32) -> Result<Option<[u8; 4]>, RenderError> {
        self.renderer.pixel_rgba(x, y)
    }
}
