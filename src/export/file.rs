//! PNG encoding and file saving for exported drawings.

use super::types::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Base name used when the user leaves the file name blank.
pub const DEFAULT_FILE_NAME: &str = "my_drawing";

/// Raster format extension appended to every export.
pub const EXPORT_EXTENSION: &str = "png";

/// Builds the export file name from whatever the user typed.
///
/// Surrounding whitespace is trimmed; a blank result falls back to
/// `default_base` (and to [`DEFAULT_FILE_NAME`] if that is blank too). The
/// fixed `.png` extension is always appended.
///
/// # Examples
///
/// ```
/// use inkboard::export::resolve_file_name;
/// assert_eq!(resolve_file_name(Some("  sketch "), "my_drawing"), "sketch.png");
/// assert_eq!(resolve_file_name(Some("   "), "my_drawing"), "my_drawing.png");
/// ```
pub fn resolve_file_name(requested: Option<&str>, default_base: &str) -> String {
    let base = requested
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| Some(default_base.trim()).filter(|name| !name.is_empty()))
        .unwrap_or(DEFAULT_FILE_NAME);
    format!("{base}.{EXPORT_EXTENSION}")
}

/// Serializes an image surface to PNG bytes.
pub fn encode_png(surface: &cairo::ImageSurface) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    surface.write_to_png(&mut buffer)?;
    Ok(buffer)
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes PNG bytes to `directory/file_name` and returns the full path.
///
/// `file_name` must be a bare file name; anything that would escape the
/// directory is rejected.
pub fn save_png(png_data: &[u8], directory: &Path, file_name: &str) -> Result<PathBuf, ExportError> {
    let name = Path::new(file_name);
    if name.file_name() != Some(name.as_os_str()) {
        return Err(ExportError::InvalidFileName(name.to_path_buf()));
    }

    let directory = ensure_directory_exists(directory)?;
    let file_path = directory.join(name);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        png_data.len()
    );

    fs::write(&file_path, png_data)?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
