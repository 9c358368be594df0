//! Geometry helpers: on-screen rectangles, backing-store sizing and
//! coordinate normalization.

use crate::draw::Point;

/// Largest backing-store side in pixels.
///
/// Cairo refuses image surfaces above 32767 pixels per side; this keeps a
/// full-resolution ARGB32 surface within a few hundred megabytes.
pub const MAX_CANVAS_DIMENSION: i32 = 8192;

/// Backing-store resolution in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl CanvasSize {
    /// Creates a size, clamping both dimensions to `1..=MAX_CANVAS_DIMENSION`.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.clamp(1, MAX_CANVAS_DIMENSION),
            height: height.clamp(1, MAX_CANVAS_DIMENSION),
        }
    }
}

/// Axis-aligned rectangle in client (on-screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive and finite.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        let valid = [x, y, width, height].iter().all(|v| v.is_finite());
        if !valid || width <= 0.0 || height <= 0.0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Rectangle at `(x, y)` spanning the given backing store one-to-one.
    pub fn at_size(x: f64, y: f64, size: CanvasSize) -> Self {
        Self {
            x,
            y,
            width: f64::from(size.width),
            height: f64::from(size.height),
        }
    }
}

/// Maps a client-space position into logical canvas space.
///
/// `logical = (client - rect.origin) / rect.size * backing_size`
///
/// Positions outside the rectangle are mapped linearly (and may be negative
/// or exceed the backing size); the renderer simply clips them.
pub fn client_to_logical(client_x: f64, client_y: f64, rect: &Rect, backing: CanvasSize) -> Point {
    Point {
        x: (client_x - rect.x) / rect.width * f64::from(backing.width),
        y: (client_y - rect.y) / rect.height * f64::from(backing.height),
    }
}

/// Sizing policy of the canvas inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Logical canvas size; also the initial backing-store size
    pub logical_size: CanvasSize,
    /// Largest share of the viewport width the canvas may take
    pub max_width_fraction: f64,
    /// Largest share of the viewport height the canvas may take
    pub max_height_fraction: f64,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            logical_size: CanvasSize::new(800, 500),
            max_width_fraction: 0.95,
            max_height_fraction: 0.7,
        }
    }
}

impl CanvasLayout {
    /// Width over height of the logical canvas.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.logical_size.width) / f64::from(self.logical_size.height)
    }

    /// Backing-store size for the given viewport.
    pub fn fit(&self, viewport_width: f64, viewport_height: f64) -> CanvasSize {
        fit_canvas(
            viewport_width,
            viewport_height,
            self.aspect_ratio(),
            self.max_width_fraction,
            self.max_height_fraction,
        )
    }
}

/// Computes the backing-store size for a viewport.
///
/// The canvas keeps `aspect_ratio` (width / height) and fits inside
/// `max_width_fraction` of the viewport width and `max_height_fraction` of
/// its height. The width cap is preferred; when the derived height exceeds
/// the height cap, the height cap drives the width instead. The result is
/// scaled down, keeping the ratio, so neither side exceeds
/// [`MAX_CANVAS_DIMENSION`]. Dimensions are truncated to whole pixels.
pub fn fit_canvas(
    viewport_width: f64,
    viewport_height: f64,
    aspect_ratio: f64,
    max_width_fraction: f64,
    max_height_fraction: f64,
) -> CanvasSize {
    let max_width = (viewport_width * max_width_fraction).max(0.0);
    let max_height = (viewport_height * max_height_fraction).max(0.0);

    let mut width = max_width;
    let mut height = width / aspect_ratio;

    if height > max_height {
        height = max_height;
        width = height * aspect_ratio;
    }

    let limit = f64::from(MAX_CANVAS_DIMENSION);
    let overshoot = (width / limit).max(height / limit);
    if overshoot > 1.0 {
        width /= overshoot;
        height /= overshoot;
    }

    CanvasSize::new(width as i32, height as i32)
}
