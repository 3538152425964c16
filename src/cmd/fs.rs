// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File and directory commands.

use crate::cli::args::{ListArgs, PathArgs, RemoveArgs, TransferArgs, WriteArgs};
use crate::cmd::RunContext;
use crate::error::{KitError, Result};
use crate::fs::{
    copy_file, copy_file_async, create_dir, create_dir_async, delete_dir_recursive,
    delete_dir_recursive_async, delete_file, delete_file_async, file_exists, file_exists_async,
    list_files, list_files_async, move_file, move_file_async,
};
use crate::location::Location;
use crate::persist::Store;

/// Handler for `copy`.
///
/// # Errors
///
/// Returns an error if the source cannot be copied.
pub fn run_copy_command(args: &TransferArgs, ctx: &RunContext<'_>) -> Result<()> {
    let action = format!("copy {} to {}", args.src.display(), args.dst.display());
    let dst = ctx.record(
        ctx.run(
            || copy_file(&args.src, &args.dst),
            |h| copy_file_async(&args.src, &args.dst, h),
        ),
        &action,
    )?;
    println!("{dst}");
    Ok(())
}

/// Handler for `move`.
///
/// # Errors
///
/// Returns an error if the source cannot be moved.
pub fn run_move_command(args: &TransferArgs, ctx: &RunContext<'_>) -> Result<()> {
    let action = format!("move {} to {}", args.src.display(), args.dst.display());
    let dst = ctx.record(
        ctx.run(
            || move_file(&args.src, &args.dst),
            |h| move_file_async(&args.src, &args.dst, h),
        ),
        &action,
    )?;
    println!("{dst}");
    Ok(())
}

/// Handler for `rm`.
///
/// # Errors
///
/// Returns an error if the path cannot be deleted, or if it is a directory
/// and `--recursive` was not given.
pub fn run_rm_command(args: &RemoveArgs, ctx: &RunContext<'_>) -> Result<()> {
    let path = &args.path;
    let action = format!("delete {}", path.display());
    let outcome = if args.recursive {
        ctx.run(
            || delete_dir_recursive(path).map(|()| Location::from_path(path)),
            |h| delete_dir_recursive_async(path, h),
        )
    } else if path.is_dir() {
        Err(KitError::invalid_argument(format!(
            "{} is a directory, use --recursive",
            path.display()
        )))
    } else {
        ctx.run(
            || delete_file(path).map(|()| Location::from_path(path)),
            |h| delete_file_async(path, h),
        )
    };
    ctx.record(outcome, &action)?;
    Ok(())
}

/// Handler for `exists`; prints `true` or `false`.
///
/// # Errors
///
/// Returns an error only when a background check cannot report.
pub fn run_exists_command(args: &PathArgs, ctx: &RunContext<'_>) -> Result<()> {
    let observer = |err: &KitError| eprintln!("Warning: {err}");
    let exists = ctx.run(
        || Ok(file_exists(&args.path, Some(&observer))),
        |h| file_exists_async(&args.path, h),
    )?;
    println!("{exists}");
    Ok(())
}

/// Handler for `ls`.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn run_ls_command(args: &ListArgs, ctx: &RunContext<'_>) -> Result<()> {
    let flags = args.flags();
    let entries = ctx.run(
        || list_files(&args.dir, flags),
        |h| list_files_async(&args.dir, flags, h),
    )?;
    for entry in &entries {
        println!("{entry}");
    }
    Ok(())
}

/// Handler for `mkdir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn run_mkdir_command(args: &PathArgs, ctx: &RunContext<'_>) -> Result<()> {
    let action = format!("create {}", args.path.display());
    let created = ctx.record(
        ctx.run(
            || create_dir(&args.path),
            |h| create_dir_async(&args.path, h),
        ),
        &action,
    )?;
    println!("{created}");
    Ok(())
}

/// Handler for `cat`.
///
/// # Errors
///
/// Returns an error if the file cannot be read as text.
pub fn run_cat_command(args: &PathArgs, ctx: &RunContext<'_>) -> Result<()> {
    let store = Store::new(Location::from_path(&args.path));
    let text = ctx.run(|| store.read_text(), |h| store.read_text_async(h))?;
    print!("{text}");
    Ok(())
}

/// Handler for `write`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn run_write_command(args: &WriteArgs, ctx: &RunContext<'_>) -> Result<()> {
    let store = Store::new(Location::from_path(&args.path));
    let action = format!("write {}", args.path.display());
    ctx.record(
        ctx.run(
            || store.write_text(&args.content, args.append),
            |h| store.write_text_async(args.content.clone(), args.append, h),
        ),
        &action,
    )?;
    Ok(())
}
