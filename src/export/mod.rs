//! Exporting the rendered surface as a PNG file.
//!
//! The core only produces bytes ([`encode_png`]) and a resolved file name
//! ([`resolve_file_name`]); writing them somewhere is up to the caller,
//! with [`save_png`] covering the plain file-system case.

pub mod file;
pub mod types;

pub use file::{
    DEFAULT_FILE_NAME, EXPORT_EXTENSION, encode_png, ensure_directory_exists, expand_tilde,
    resolve_file_name, save_png,
};
pub use types::{ExportError, ExportedImage};
