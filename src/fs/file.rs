// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::io;
use std::path::Path;
use std::thread::JoinHandle;

use tracing::{debug, warn};

use crate::completion::{BoxedHandler, ErrorObserver, dispatch};
use crate::error::{KitError, KitResult};
use crate::location::Location;

/// Copies `src` to `dst`, replacing `dst` if it exists.
///
/// Copying a file onto itself (through another path or a hard link) leaves
/// it untouched.
///
/// # Errors
///
/// Returns an error if `src` cannot be read or `dst` cannot be written.
///
/// # Example
/// ```no_run
/// use fskit::fs::copy_file;
///
/// let copied = copy_file("settings.toml", "settings.toml.bak")?;
/// println!("backup at {copied}");
/// # Ok::<(), fskit::error::KitError>(())
/// ```
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> KitResult<Location> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    if is_same_file(src, dst) {
        debug!(path = %src.display(), "copy onto itself, nothing to do");
        return Ok(Location::from_path(dst));
    }

    let bytes = fs::copy(src, dst).map_err(|e| KitError::fs(src, e))?;
    debug!(src = %src.display(), dst = %dst.display(), bytes, "copied file");

    Ok(Location::from_path(dst))
}

/// Whether `src` and `dst` name the same existing file.
fn is_same_file(src: &Path, dst: &Path) -> bool {
    let (Ok(a), Ok(b)) = (fs::canonicalize(src), fs::canonicalize(dst)) else {
        return false;
    };
    if a == b {
        return true;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        if let (Ok(a), Ok(b)) = (fs::metadata(&a), fs::metadata(&b)) {
            return a.dev() == b.dev() && a.ino() == b.ino();
        }
    }
    false
}

/// Moves `src` to `dst`, replacing `dst` if it exists.
///
/// Falls back to copy-then-delete when the rename crosses filesystems.
///
/// # Errors
///
/// Returns an error if the rename fails for any other reason, or if the
/// fallback copy or delete fails.
pub fn move_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> KitResult<Location> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    match fs::rename(src, dst) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(src = %src.display(), "rename crosses devices, copying instead");
            fs::copy(src, dst).map_err(|e| KitError::fs(src, e))?;
            fs::remove_file(src).map_err(|e| KitError::fs(src, e))?;
        }
        Err(e) => return Err(KitError::fs(src, e)),
    }

    debug!(src = %src.display(), dst = %dst.display(), "moved file");
    Ok(Location::from_path(dst))
}

/// Deletes the file at `path`.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be removed.
pub fn delete_file(path: impl AsRef<Path>) -> KitResult<()> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|e| KitError::fs(path, e))?;
    debug!(path = %path.display(), "deleted file");
    Ok(())
}

/// Returns whether anything exists at `path`.
///
/// Access errors go to `observer` and count as "does not exist".
pub fn file_exists(path: impl AsRef<Path>, observer: Option<ErrorObserver<'_>>) -> bool {
    let path = path.as_ref();
    match path.try_exists() {
        Ok(exists) => exists,
        Err(e) => {
            let err = KitError::fs(path, e);
            warn!(error = %err, "existence check failed");
            if let Some(observer) = observer {
                observer(&err);
            }
            false
        }
    }
}

/// Background form of [`copy_file`]; succeeds with the destination.
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn copy_file_async(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    handler: Option<BoxedHandler<Location>>,
) -> KitResult<JoinHandle<()>> {
    let (src, dst) = (src.as_ref().to_path_buf(), dst.as_ref().to_path_buf());
    dispatch("copy", handler, move || copy_file(src, dst))
}

/// Background form of [`move_file`]; succeeds with the destination.
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn move_file_async(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    handler: Option<BoxedHandler<Location>>,
) -> KitResult<JoinHandle<()>> {
    let (src, dst) = (src.as_ref().to_path_buf(), dst.as_ref().to_path_buf());
    dispatch("move", handler, move || move_file(src, dst))
}

/// Background form of [`delete_file`]; succeeds with the deleted location.
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn delete_file_async(
    path: impl AsRef<Path>,
    handler: Option<BoxedHandler<Location>>,
) -> KitResult<JoinHandle<()>> {
    let path = path.as_ref().to_path_buf();
    dispatch("delete", handler, move || {
        delete_file(&path)?;
        Ok(Location::from_path(path))
    })
}

/// Background form of [`file_exists`].
///
/// Access errors are delivered to `on_error` instead of being folded into
/// `false`.
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn file_exists_async(
    path: impl AsRef<Path>,
    handler: Option<BoxedHandler<bool>>,
) -> KitResult<JoinHandle<()>> {
    let path = path.as_ref().to_path_buf();
    dispatch("exists", handler, move || {
        path.try_exists().map_err(|e| KitError::fs(&path, e))
    })
}
