// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::thread::JoinHandle;

use bitflags::bitflags;
use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::completion::{BoxedHandler, dispatch};
use crate::error::{FsError, KitResult};
use crate::location::Location;

bitflags! {
    /// Flags controlling what [`list_files`] returns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ListFlags: u8 {
        /// Return directories as entries too, not only regular files.
        const INCLUDE_DIRS = 0x01;

        /// Descend into subdirectories.
        const RECURSIVE = 0x02;

        /// Follow symbolic links while descending.
        const FOLLOW_LINKS = 0x04;
    }
}

impl ListFlags {
    /// Recursive listing of files, following links.
    #[must_use]
    pub const fn tree() -> Self {
        Self::RECURSIVE.union(Self::FOLLOW_LINKS)
    }
}

/// Builds a `WalkBuilder` that sees every entry, in file-name order.
pub(super) fn build_walker(root: &Path, flags: ListFlags) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    // No hidden/gitignore/ignore-file filtering: callers get the raw tree
    builder.standard_filters(false);
    builder.follow_links(flags.contains(ListFlags::FOLLOW_LINKS));
    builder.sort_by_file_name(|a, b| a.cmp(b));

    if !flags.contains(ListFlags::RECURSIVE) {
        builder.max_depth(Some(1));
    }

    builder
}

/// Lists the entries below `dir`.
///
/// Entries come back depth-first, sorted by file name within each
/// directory. `dir` itself is never part of the result. Without
/// [`ListFlags::INCLUDE_DIRS`] only regular files (after following links)
/// are returned.
///
/// # Errors
///
/// Returns an error if `dir` cannot be read or any entry fails during the
/// walk. Partial results are discarded.
///
/// # Example
/// ```no_run
/// use fskit::fs::{ListFlags, list_files};
///
/// for entry in list_files("/var/log", ListFlags::tree())? {
///     println!("{entry}");
/// }
/// # Ok::<(), fskit::error::KitError>(())
/// ```
pub fn list_files(dir: impl AsRef<Path>, flags: ListFlags) -> KitResult<Vec<Location>> {
    let root = dir.as_ref();
    let include_dirs = flags.contains(ListFlags::INCLUDE_DIRS);

    let mut entries = Vec::new();
    for entry in build_walker(root, flags).build() {
        let entry = entry.map_err(|e| {
            warn!(root = %root.display(), error = %e, "listing failed");
            FsError::Walk {
                path: root.display().to_string(),
                message: e.to_string(),
            }
        })?;

        if entry.depth() == 0 {
            // Root of a directory walk; a plain file root is not a listing.
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                continue;
            }
            return Err(FsError::Walk {
                path: root.display().to_string(),
                message: "not a directory".to_string(),
            }
            .into());
        }

        if include_dirs || entry.path().is_file() {
            entries.push(Location::from_path(entry.into_path()));
        }
    }

    debug!(root = %root.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

/// Background form of [`list_files`].
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn list_files_async(
    dir: impl AsRef<Path>,
    flags: ListFlags,
    handler: Option<BoxedHandler<Vec<Location>>>,
) -> KitResult<JoinHandle<()>> {
    let dir = dir.as_ref().to_path_buf();
    dispatch("list", handler, move || list_files(dir, flags))
}
