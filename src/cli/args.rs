// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-command arguments.

use clap::Args;
use std::path::PathBuf;

use crate::fs::ListFlags;
use crate::logging::LogLevel;

/// Arguments for `copy` and `move`.
#[derive(Debug, Clone, Args)]
pub struct TransferArgs {
    /// Existing source file.
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    /// Destination file; replaced if it exists.
    #[arg(value_name = "DST")]
    pub dst: PathBuf,
}

/// Arguments for `rm`.
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// File or directory to delete.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Deletes a directory and everything below it.
    #[arg(short, long)]
    pub recursive: bool,
}

/// Arguments for commands taking a single path.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Arguments for `ls`.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Directory to list.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Includes directories in the output.
    #[arg(short = 'd', long = "dirs")]
    pub dirs: bool,

    /// Descends into subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Does not follow symbolic links.
    #[arg(long = "no-follow")]
    pub no_follow: bool,
}

impl ListArgs {
    #[must_use]
    pub fn flags(&self) -> ListFlags {
        let mut flags = ListFlags::empty();
        flags.set(ListFlags::INCLUDE_DIRS, self.dirs);
        flags.set(ListFlags::RECURSIVE, self.recursive);
        flags.set(ListFlags::FOLLOW_LINKS, !self.no_follow);
        flags
    }
}

/// Arguments for `write`.
#[derive(Debug, Clone, Args)]
pub struct WriteArgs {
    /// Target file.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Text to write.
    #[arg(value_name = "CONTENT")]
    pub content: String,

    /// Appends instead of truncating.
    #[arg(short, long)]
    pub append: bool,
}

/// Arguments for `log`.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Record text.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Record level (info, success, fail, error, warning).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub level: LogLevel,
}
