//! Data types for exporting the rendered surface.

use std::path::PathBuf;
use thiserror::Error;

/// An encoded image waiting to be handed to whoever saves it.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    /// File name including the extension (e.g. `my_drawing.png`)
    pub file_name: String,
    /// PNG bytes of the backing store at the time of the request
    pub png_data: Vec<u8>,
}

/// Errors that can occur while encoding or saving an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save drawing: {0}")]
    Save(#[from] std::io::Error),

    #[error("Invalid export file name: {}", .0.display())]
    InvalidFileName(PathBuf),
}
