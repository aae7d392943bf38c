use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::{AppError, Result};

/// Destination for a menu image inside the output directory.
/// Only plain file names are accepted so a dataset cannot write outside it.
pub fn image_path(output_dir: &Path, filename: &str) -> Result<PathBuf> {
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(output_dir.join(filename)),
        _ => Err(AppError::FilesystemError(format!(
            "Invalid image filename '{}'",
            filename
        ))),
    }
}

/// Create `path` if absent. Returns true when the directory was created.
pub fn ensure_dir(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::create_dir_all(path)?;
    Ok(true)
}

/// Create the directory containing `file`, logging when it is new
pub fn ensure_parent_dir(file: &Path) -> Result<()> {
    let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    let created = ensure_dir(parent).map_err(|e| {
        AppError::FilesystemError(format!("Failed to create {}: {}", parent.display(), e))
    })?;
    if created {
        tracing::info!("Created folder: {}", parent.display());
    }
    Ok(())
}
