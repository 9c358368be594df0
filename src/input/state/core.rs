//! Drawing session state: tool settings, theme, canvas geometry and strokes.

use crate::draw::{Color, Drawing};
use crate::input::{
    theme::{Theme, ThemePalette},
    tool::Tool,
};
use crate::util::{CanvasLayout, CanvasSize, Rect};

/// Main input state containing all drawing session state.
///
/// This struct holds the drawing (all strokes), the tool parameters the
/// next stroke will freeze, the theme, and the canvas geometry used to
/// normalize pointer positions. It processes every input event and records
/// whether the surface needs to be repainted.
#[derive(Debug)]
pub struct InputState {
    /// Completed strokes plus the stroke being drawn
    pub drawing: Drawing,
    /// Color captured by the next stroke
    pub current_color: Color,
    /// Line width captured by the next stroke (logical pixels)
    pub current_width: f64,
    /// Background theme
    pub theme: Theme,
    /// Background colors per theme
    pub palette: ThemePalette,
    /// Canvas sizing policy
    pub layout: CanvasLayout,
    /// Whether the surface needs a full repaint
    pub needs_redraw: bool,
    /// Brush or eraser
    pub(super) tool: Tool,
    /// Backing-store resolution
    pub(super) canvas_size: CanvasSize,
    /// On-screen bounding rectangle of the canvas
    pub(super) canvas_rect: Rect,
    /// Export requested by the last `Export` event, waiting for the renderer
    pending_export: Option<ExportRequest>,
}

/// An export the platform asked for; carries the raw user-supplied name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub file_name: Option<String>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// The backing store starts at the layout's logical size, placed at the
    /// client origin, until the first viewport resize arrives.
    pub fn with_defaults(
        color: Color,
        width: f64,
        theme: Theme,
        palette: ThemePalette,
        layout: CanvasLayout,
    ) -> Self {
        let canvas_size = layout.logical_size;
        Self {
            drawing: Drawing::new(),
            current_color: color,
            current_width: width,
            theme,
            palette,
            layout,
            needs_redraw: true,
            tool: Tool::Brush,
            canvas_size,
            canvas_rect: Rect::at_size(0.0, 0.0, canvas_size),
            pending_export: None,
        }
    }

    /// Returns the active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Whether new strokes erase instead of paint.
    pub fn is_erasing(&self) -> bool {
        self.tool == Tool::Eraser
    }

    /// Whether a stroke is currently being drawn.
    pub fn is_painting(&self) -> bool {
        self.drawing.active().is_some()
    }

    /// Background fill for the current theme.
    pub fn background_color(&self) -> Color {
        self.theme.background_color(&self.palette)
    }

    /// Backing-store resolution the renderer should use.
    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    /// On-screen rectangle used for coordinate normalization.
    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Reports where the canvas is displayed on screen.
    ///
    /// Needed when the displayed size differs from the backing store
    /// (display scaling, device pixel ratio). Takes effect for the next
    /// pointer event; stored strokes are unaffected.
    ///
    /// Rectangles without a positive, finite size are logged and ignored.
    pub fn set_canvas_rect(&mut self, rect: Rect) -> bool {
        if Rect::new(rect.x, rect.y, rect.width, rect.height).is_none() {
            log::warn!(
                "Ignoring canvas rect {}x{} at ({}, {})",
                rect.width,
                rect.height,
                rect.x,
                rect.y
            );
            return false;
        }
        self.canvas_rect = rect;
        true
    }

    /// Falls back to a backing size the renderer could actually allocate.
    pub(crate) fn restore_canvas_size(&mut self, size: CanvasSize) {
        self.canvas_size = size;
        self.canvas_rect = Rect::at_size(self.canvas_rect.x, self.canvas_rect.y, size);
        self.needs_redraw = true;
    }

    /// Flips between brush and eraser. Strokes already recorded keep their kind.
    pub fn toggle_eraser(&mut self) -> Tool {
        self.tool = self.tool.toggled();
        log::debug!("Tool switched to {:?}", self.tool);
        self.tool
    }

    /// Flips the background theme and schedules a repaint.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.needs_redraw = true;
        log::info!("Switched to {} theme", self.theme.as_str());
        self.theme
    }

    /// Sets the color for subsequent strokes from a CSS color string.
    ///
    /// Unparseable input is logged and ignored; the previous color stays.
    pub fn set_color(&mut self, color: &str) -> bool {
        match Color::parse(color) {
            Ok(parsed) => {
                self.current_color = parsed;
                true
            }
            Err(err) => {
                log::warn!("Ignoring color change: {err}");
                false
            }
        }
    }

    /// Sets the line width for subsequent strokes.
    ///
    /// Widths that are not positive and finite are logged and ignored.
    pub fn set_width(&mut self, width: f64) -> bool {
        if width.is_finite() && width > 0.0 {
            self.current_width = width;
            true
        } else {
            log::warn!("Ignoring invalid brush width {width}");
            false
        }
    }

    /// Removes the last completed stroke (no-op when there is none).
    pub fn undo(&mut self) {
        if self.drawing.undo().is_some() {
            log::debug!("Undo: {} strokes left", self.drawing.len());
        }
        self.needs_redraw = true;
    }

    /// Removes every completed stroke.
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.needs_redraw = true;
    }

    /// Recomputes the backing-store size for a new viewport.
    ///
    /// Strokes keep their logical coordinates; they are re-traced onto the
    /// new resolution by the next repaint. The on-screen rectangle keeps its
    /// origin and takes the new size.
    pub fn update_viewport(&mut self, viewport_width: f64, viewport_height: f64) {
        if !viewport_width.is_finite() || !viewport_height.is_finite() {
            log::warn!("Ignoring resize to {viewport_width}x{viewport_height}");
            return;
        }

        let size = self.layout.fit(viewport_width, viewport_height);
        if size != self.canvas_size {
            log::debug!(
                "Canvas resized from {}x{} to {}x{}",
                self.canvas_size.width,
                self.canvas_size.height,
                size.width,
                size.height
            );
        }
        self.canvas_size = size;
        self.canvas_rect = Rect::at_size(self.canvas_rect.x, self.canvas_rect.y, size);
        self.needs_redraw = true;
    }

    /// Queues an export for the backend to fulfil after the next repaint.
    pub fn request_export(&mut self, file_name: Option<String>) {
        self.pending_export = Some(ExportRequest { file_name });
    }

    /// Takes and clears any pending export request.
    pub fn take_pending_export(&mut self) -> Option<ExportRequest> {
        self.pending_export.take()
    }
}
