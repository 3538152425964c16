// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for fskit using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! fskit [global options] <command>
//! version | options | configs
//! copy SRC DST | move SRC DST | rm PATH [-r]
//! exists PATH | ls [DIR] [-d] [-r] [--no-follow] | mkdir PATH
//! cat PATH | write PATH CONTENT [-a]
//! log MESSAGE [--level LEVEL]
//! ```

pub mod args;
pub mod global;


use crate::cli::args::{ListArgs, LogArgs, PathArgs, RemoveArgs, TransferArgs, WriteArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Filesystem helper kit
///
/// Small file and directory operations with an append-only record log.
#[derive(Debug, Parser)]
#[command(
    name = "fskit",
    author,
    version,
    about = "Filesystem helper kit",
    long_about = "fskit Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Copies, moves, lists and deletes files, reads and writes text,\n\
                  and appends timestamped records to a log file. Pass\n\
                  --background to run an operation on a worker thread.",
    after_help = "CONFIG FILES:\n\n\
                  fskit reads `fskit.toml` from the current directory if present,\n\
                  then every file given with --config, then FSKIT_* environment\n\
                  variables such as FSKIT_LOG__FILE_NAME. Use --no-default-config\n\
                  to skip `fskit.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Configs,

    /// Copies a file, replacing the destination.
    Copy(TransferArgs),

    /// Moves a file, replacing the destination.
    #[command(name = "move", visible_alias = "mv")]
    Move(TransferArgs),

    /// Deletes a file, or a directory tree with -r.
    Rm(RemoveArgs),

    /// Reports whether a path exists.
    Exists(PathArgs),

    /// Lists directory entries.
    Ls(ListArgs),

    /// Creates a directory and its missing parents.
    Mkdir(PathArgs),

    /// Prints a text file.
    Cat(PathArgs),

    /// Writes text to a file.
    Write(WriteArgs),

    /// Appends a record to the log file.
    Log(LogArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
