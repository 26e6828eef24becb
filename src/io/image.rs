//! PNG export and hand-off to the platform image viewer

use crate::encoding::digest::Digest;
use crate::io::configuration::{OUTPUT_EXTENSION, PREVIEW_PREFIX};
use crate::io::error::{IdenticonError, Result};
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default file name for `code`: short digest hex plus the output extension
pub fn default_output_path(code: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}.{OUTPUT_EXTENSION}",
        Digest::of(code).short_hex()
    ))
}

/// Save an identicon as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| IdenticonError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| IdenticonError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::debug!(
        "wrote {}x{} identicon to {}",
        image.width(),
        image.height(),
        output_path.display()
    );
    Ok(())
}

/// Path of the temporary preview file for `code`
pub fn preview_path(code: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{PREVIEW_PREFIX}{}.{OUTPUT_EXTENSION}",
        Digest::of(code).short_hex()
    ))
}

/// Open an identicon in the platform image viewer
///
/// The image is written to a temporary PNG first; the viewer runs detached.
///
/// # Errors
///
/// Returns an error if the preview file cannot be written or the viewer
/// cannot be launched
pub fn show(image: &RgbImage, code: &str) -> Result<()> {
    let path = preview_path(code);
    save_png(image, &path)?;

    let mut command = viewer_command(&path);
    // Detached: the viewer outlives this process and is never waited on
    let _viewer = command.spawn().map_err(|e| IdenticonError::Display {
        reason: format!("could not launch viewer for '{}': {e}", path.display()),
    })?;

    log::info!("opened preview {}", path.display());
    Ok(())
}

/// Platform command that opens `path` in the default image viewer
pub fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}
