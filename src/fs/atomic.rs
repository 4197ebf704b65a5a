//! Atomic file replacement.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! Source and destination share a directory, so the rename never crosses a
//! filesystem. On crash a `.{filename}.devbranch.tmp` file may remain.

use crate::error::{DevBranchError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// Existing content at `path` is fully replaced.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(DevBranchError::MaterializeError)` - On directory, write, or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            DevBranchError::MaterializeError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Temporary file path next to the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            DevBranchError::MaterializeError(format!(
                "invalid file path '{}'",
                target.display()
            ))
        })?;

    Ok(parent.join(format!(".{}.devbranch.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let result = File::create(path).and_then(|mut file| {
        file.write_all(content)?;
        file.sync_all()
    });

    result.map_err(|e| {
        let _ = fs::remove_file(path);
        DevBranchError::MaterializeError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    // A directory in the way cannot be replaced by a file.
    if target.is_dir() {
        let _ = fs::remove_file(source);
        return Err(DevBranchError::MaterializeError(format!(
            "'{}' is a directory",
            target.display()
        )));
    }

    // rename() replaces an existing target on every platform Rust supports
    // except older Windows, where the target has to go first.
    if cfg!(windows) && target.exists() {
        let _ = fs::remove_file(target);
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        DevBranchError::MaterializeError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}
