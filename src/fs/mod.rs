// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File and folder operations, each with a background twin.
//!
//! ```text
//! file:    copy_file()  move_file()  delete_file()  file_exists()
//! folder:  create_dir()  delete_dir_recursive()  folder_exists()
//! walk:    list_files()  ListFlags  INCLUDE_DIRS | RECURSIVE | FOLLOW_LINKS
//!
//! every op  -->  op_async(.., Some(handler))  thread per call
//! ```

pub mod file;
pub mod folder;
pub mod walk;

pub use file::{
    copy_file, copy_file_async, delete_file, delete_file_async, file_exists, file_exists_async,
    move_file, move_file_async,
};
pub use folder::{
    create_dir, create_dir_async, delete_dir_recursive, delete_dir_recursive_async, folder_exists,
};
pub use walk::{ListFlags, list_files, list_files_async};

#[cfg(test)]
mod tests;
