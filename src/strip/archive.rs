// src/strip/archive.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument};

use crate::error::StripError;

/// Move `dir/name` into `dir/archive_name/`, creating the archive directory
/// on first use. Returns the archived path.
///
/// An archive directory that already exists is fine. A move that fails
/// (source gone, destination not writable) is always reported.
#[instrument(level = "info", skip(dir))]
pub fn archive_file(name: &str, dir: &Path, archive_name: &str) -> Result<PathBuf, StripError> {
    let archive_dir = dir.join(archive_name);
    ensure_dir(&archive_dir)?;

    let from = dir.join(name);
    let to = archive_dir.join(name);
    move_file(&from, &to).map_err(|source| StripError::Move {
        from: from.clone(),
        to: to.clone(),
        source,
    })?;

    debug!(to = %to.display(), "archived");
    Ok(to)
}

/// Rename, or copy then delete when `to` is on another filesystem.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(from = %from.display(), "rename crosses devices, copying");
            copy_then_remove(from, to)
        }
        other => other,
    }
}

fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    fs::remove_file(from)
}

fn ensure_dir(path: &Path) -> Result<(), StripError> {
    match fs::create_dir(path) {
        Ok(()) => {
            info!(dir = %path.display(), "created archive directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(StripError::ArchiveDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}
