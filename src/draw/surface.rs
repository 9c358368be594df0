//! Backing store: the pixel buffer the drawing is rasterized into.

use super::color::Color;
use super::drawing::Snapshot;
use super::render::render_drawing;
use crate::export::{self, ExportError};
use crate::util::CanvasSize;
use thiserror::Error;

/// Errors raised while (re)allocating or painting the backing store.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Backing store is busy: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// Owns the ARGB32 image surface and repaints it from a drawing snapshot.
///
/// The surface is a disposable cache: every call to [`Renderer::render`]
/// rebuilds the whole picture, so it can be reallocated at any time.
pub struct Renderer {
    surface: cairo::ImageSurface,
    size: CanvasSize,
}

impl Renderer {
    /// Allocates a backing store of the given size.
    pub fn new(size: CanvasSize) -> Result<Self, RenderError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size.width, size.height)?;
        Ok(Self { surface, size })
    }

    /// Current backing-store resolution.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Reallocates the surface when `size` differs from the current one.
    ///
    /// Returns `true` if a new surface was created. The old pixels are not
    /// carried over; callers repaint afterwards.
    pub fn resize(&mut self, size: CanvasSize) -> Result<bool, RenderError> {
        if size == self.size {
            return Ok(false);
        }
        self.surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size.width, size.height)?;
        self.size = size;
        log::debug!("Backing store resized to {}x{}", size.width, size.height);
        Ok(true)
    }

    /// Full repaint of the surface at `size`.
    pub fn render(
        &mut self,
        size: CanvasSize,
        snapshot: Snapshot<'_>,
        background: Color,
    ) -> Result<(), RenderError> {
        self.resize(size)?;

        let ctx = cairo::Context::new(&self.surface)?;
        render_drawing(&ctx, snapshot, background);
        drop(ctx);

        self.surface.flush();
        Ok(())
    }

    /// Encodes the current surface contents as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        export::encode_png(&self.surface)
    }

    /// Reads one pixel as straight (non-premultiplied) RGBA.
    ///
    /// Returns `Ok(None)` for coordinates outside the surface.
    pub fn pixel_rgba(&mut self, x: i32, y: i32) -> Result<Option<[u8; 4]>, RenderError> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return Ok(None);
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data()?;
        let offset = y as usize * stride + x as usize * 4;
        let Some(bytes) = data.get(offset..offset + 4) else {
            return Ok(None);
        };

        // ARGB32 is a native-endian u32 with premultiplied color.
        let value = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let a = (value >> 24) as u8;
        let unpremultiply = |c: u32| -> u8 {
            if a == 0 {
                0
            } else {
                ((c & 0xff) * 255 / u32::from(a)).min(255) as u8
            }
        };
        Ok(Some([
            unpremultiply(value >> 16),
            unpremultiply(value >> 8),
            unpremultiply(value),
            a,
        ]))
    }

    /// Underlying Cairo surface, for collaborators that blit it elsewhere.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").field("size", &self.size).finish()
    }
}
