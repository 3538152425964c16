// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use tracing::{debug, warn};

use super::walk::{ListFlags, build_walker};
use crate::completion::{BoxedHandler, ErrorObserver, dispatch};
use crate::error::{FsError, KitError, KitResult};
use crate::location::Location;

/// Creates `path` and any missing parents.
///
/// An already existing directory is not an error.
///
/// # Errors
///
/// Returns an error if a component cannot be created, e.g. because a file
/// is in the way.
pub fn create_dir(path: impl AsRef<Path>) -> KitResult<Location> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| KitError::fs(path, e))?;
    debug!(path = %path.display(), "created directory");
    Ok(Location::from_path(path))
}

/// Deletes `path` and everything below it, deepest entries first.
///
/// The whole tree is enumerated before anything is removed. Deletion stops
/// at the first entry that cannot be removed; entries already removed stay
/// removed and the rest stay in place. Symbolic links, including `path`
/// itself, are removed as links; their targets are left alone.
///
/// # Errors
///
/// Returns an error if `path` does not exist, the tree cannot be walked, or
/// an entry cannot be removed.
pub fn delete_dir_recursive(path: impl AsRef<Path>) -> KitResult<()> {
    let root = path.as_ref();

    // symlink_metadata so a dangling root link still counts as present
    let meta = fs::symlink_metadata(root).map_err(|e| KitError::fs(root, e))?;
    if meta.file_type().is_symlink() {
        // The walker always follows a root link; remove the link only.
        fs::remove_file(root).map_err(|e| KitError::fs(root, e))?;
        debug!(path = %root.display(), "deleted directory link");
        return Ok(());
    }

    let mut entries: Vec<(PathBuf, bool)> = Vec::new();
    for entry in build_walker(root, ListFlags::RECURSIVE).build() {
        let entry = entry.map_err(|e| FsError::Walk {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        entries.push((entry.into_path(), is_dir));
    }

    // Reverse lexical order puts every child before its parent.
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    for (entry, is_dir) in &entries {
        let removed = if *is_dir {
            fs::remove_dir(entry)
        } else {
            fs::remove_file(entry)
        };
        removed.map_err(|e| {
            warn!(path = %entry.display(), error = %e, "recursive delete stopped");
            KitError::fs(entry, e)
        })?;
    }

    debug!(path = %root.display(), entries = entries.len(), "deleted directory tree");
    Ok(())
}

/// Returns whether anything exists at `path`.
///
/// Access errors go to `observer` and count as "does not exist".
pub fn folder_exists(path: impl AsRef<Path>, observer: Option<ErrorObserver<'_>>) -> bool {
    super::file::file_exists(path, observer)
}

/// Background form of [`create_dir`]; succeeds with the created location.
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn create_dir_async(
    path: impl AsRef<Path>,
    handler: Option<BoxedHandler<Location>>,
) -> KitResult<JoinHandle<()>> {
    let path = path.as_ref().to_path_buf();
    dispatch("mkdir", handler, move || create_dir(path))
}

/// Background form of [`delete_dir_recursive`]; succeeds with the deleted
/// root.
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn delete_dir_recursive_async(
    path: impl AsRef<Path>,
    handler: Option<BoxedHandler<Location>>,
) -> KitResult<JoinHandle<()>> {
    let path = path.as_ref().to_path_buf();
    dispatch("rmdir", handler, move || {
        delete_dir_recursive(&path)?;
        Ok(Location::from_path(path))
    })
}
