// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::cell::Cell;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use super::{
    ListFlags, copy_file, copy_file_async, create_dir, create_dir_async, delete_dir_recursive,
    delete_dir_recursive_async, delete_file, delete_file_async, file_exists, folder_exists,
    list_files, list_files_async, move_file, move_file_async,
};
use crate::completion::{Report, channel};
use crate::error::{ErrorKind, FsError, KitError};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn names(root: &Path, entries: &[crate::location::Location]) -> Vec<String> {
    entries
        .iter()
        .map(|l| {
            l.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn is_not_found(err: &KitError) -> bool {
    matches!(err, KitError::Fs(e) if matches!(**e, FsError::NotFound(_)))
}

#[test]
fn test_copy_file_round_trip() {
    let temp = temp_dir();
    let src = temp.path().join("src.bin");
    let dst = temp.path().join("dst.bin");
    std::fs::write(&src, b"hello\r\nworld\x00").unwrap();

    let copied = copy_file(&src, &dst).unwrap();

    assert_eq!(copied.path(), dst);
    assert_eq!(std::fs::read(&dst).unwrap(), b"hello\r\nworld\x00");
}

#[test]
fn test_copy_file_replaces_existing() {
    let temp = temp_dir();
    let src = temp.path().join("new.txt");
    let dst = temp.path().join("old.txt");
    std::fs::write(&src, "new").unwrap();
    std::fs::write(&dst, "old and longer").unwrap();

    copy_file(&src, &dst).unwrap();

    assert_eq!(std::fs::read_to_string(&dst).unwrap(), "new");
}

#[test]
fn test_copy_missing_source_reports() {
    let temp = temp_dir();
    let seen = Cell::new(false);
    let observer = |err: &KitError| {
        assert!(is_not_found(err), "{err}");
        seen.set(true);
    };

    let copied = copy_file(temp.path().join("missing"), temp.path().join("dst"))
        .report(Some(&observer));

    assert!(copied.is_none());
    assert!(seen.get());
    assert!(!temp.path().join("dst").exists());
}

#[test]
fn test_move_file_replaces_and_removes_source() {
    let temp = temp_dir();
    let src = temp.path().join("a.txt");
    let dst = temp.path().join("b.txt");
    std::fs::write(&src, "moved").unwrap();
    std::fs::write(&dst, "stale").unwrap();

    let moved = move_file(&src, &dst).unwrap();

    assert_eq!(moved.path(), dst);
    assert!(!src.exists());
    assert_eq!(std::fs::read_to_string(&dst).unwrap(), "moved");
}

#[test]
fn test_delete_then_exists_is_false() {
    let temp = temp_dir();
    let file = temp.path().join("gone.txt");
    std::fs::write(&file, "").unwrap();
    assert!(file_exists(&file, None));

    delete_file(&file).unwrap();

    assert!(!file_exists(&file, None));
    assert!(is_not_found(&delete_file(&file).unwrap_err()));
}

#[test]
fn test_exists_missing_is_not_an_error() {
    let temp = temp_dir();
    let observer = |err: &KitError| panic!("unexpected error: {err}");

    assert!(!file_exists(temp.path().join("nope"), Some(&observer)));
    assert!(folder_exists(temp.path(), Some(&observer)));
}

#[test]
fn test_list_files_flat() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join("sub")).unwrap();
    std::fs::write(temp.path().join("b.txt"), "").unwrap();
    std::fs::write(temp.path().join("a.txt"), "").unwrap();
    std::fs::write(temp.path().join(".hidden"), "").unwrap();
    std::fs::write(temp.path().join("sub/c.txt"), "").unwrap();

    let files = list_files(temp.path(), ListFlags::empty()).unwrap();
    let with_dirs = list_files(temp.path(), ListFlags::INCLUDE_DIRS).unwrap();

    assert_eq!(names(temp.path(), &files), [".hidden", "a.txt", "b.txt"]);
    assert_eq!(
        names(temp.path(), &with_dirs),
        [".hidden", "a.txt", "b.txt", "sub"]
    );
}

#[test]
fn test_list_files_recursive() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join("x/y")).unwrap();
    std::fs::write(temp.path().join("root.txt"), "").unwrap();
    std::fs::write(temp.path().join("x/one.txt"), "").unwrap();
    std::fs::write(temp.path().join("x/y/two.txt"), "").unwrap();

    let files = list_files(temp.path(), ListFlags::tree()).unwrap();
    let everything = list_files(temp.path(), ListFlags::tree() | ListFlags::INCLUDE_DIRS).unwrap();

    assert_eq!(
        names(temp.path(), &files),
        ["root.txt", "x/one.txt", "x/y/two.txt"]
    );
    assert_eq!(
        names(temp.path(), &everything),
        ["root.txt", "x", "x/one.txt", "x/y", "x/y/two.txt"]
    );
}

#[test]
fn test_list_files_missing_dir_fails() {
    let temp = temp_dir();
    let result = list_files(temp.path().join("absent"), ListFlags::tree());

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
    assert_eq!(
        list_files(temp.path().join("absent"), ListFlags::empty())
            .report(None)
            .unwrap_or_default()
            .len(),
        0
    );
}

#[test]
fn test_list_files_on_file_fails() {
    let temp = temp_dir();
    let file = temp.path().join("plain.txt");
    std::fs::write(&file, "").unwrap();

    assert!(list_files(&file, ListFlags::empty()).is_err());
}

#[test]
fn test_create_dir_nested_and_idempotent() {
    let temp = temp_dir();
    let nested = temp.path().join("a").join("b").join("c");

    let created = create_dir(&nested).unwrap();
    create_dir(&nested).unwrap();

    assert_eq!(created.path(), nested);
    assert!(nested.is_dir());
}

#[test]
fn test_create_dir_blocked_by_file() {
    let temp = temp_dir();
    let file = temp.path().join("taken");
    std::fs::write(&file, "").unwrap();

    let err = create_dir(file.join("child")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
}

#[test]
fn test_delete_dir_recursive_removes_tree() {
    let temp = temp_dir();
    let root = temp.path().join("tree");
    std::fs::create_dir_all(root.join("a/b/c")).unwrap();
    std::fs::write(root.join("top.txt"), "1").unwrap();
    std::fs::write(root.join("a/mid.txt"), "2").unwrap();
    std::fs::write(root.join("a/b/c/deep.txt"), "3").unwrap();

    delete_dir_recursive(&root).unwrap();

    assert!(!folder_exists(&root, None));
    assert!(temp.path().exists());
}

#[test]
fn test_delete_dir_recursive_missing_root() {
    let temp = temp_dir();
    let err = delete_dir_recursive(temp.path().join("nothing")).unwrap_err();
    assert!(is_not_found(&err), "{err}");
}

#[cfg(unix)]
#[test]
fn test_delete_dir_recursive_keeps_link_target() {
    let temp = temp_dir();
    let outside = temp.path().join("outside");
    let root = temp.path().join("tree");
    std::fs::create_dir(&outside).unwrap();
    std::fs::write(outside.join("keep.txt"), "").unwrap();
    std::fs::create_dir(&root).unwrap();
    std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

    delete_dir_recursive(&root).unwrap();

    assert!(!root.exists());
    assert!(outside.join("keep.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_delete_dir_recursive_root_link_removes_only_link() {
    let temp = temp_dir();
    let outside = temp.path().join("outside");
    let link = temp.path().join("link");
    std::fs::create_dir(&outside).unwrap();
    std::fs::write(outside.join("keep.txt"), "kept").unwrap();
    std::os::unix::fs::symlink(&outside, &link).unwrap();

    delete_dir_recursive(&link).unwrap();

    assert!(std::fs::symlink_metadata(&link).is_err());
    assert_eq!(
        std::fs::read_to_string(outside.join("keep.txt")).unwrap(),
        "kept"
    );
}

#[test]
fn test_copy_file_onto_itself_keeps_content() {
    let temp = temp_dir();
    let file = temp.path().join("same.txt");
    std::fs::write(&file, "precious").unwrap();

    let copied = copy_file(&file, &file).unwrap();
    let dotted = temp.path().join(".").join("same.txt");
    copy_file(&file, &dotted).unwrap();

    assert_eq!(copied.path(), file);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "precious");
}

#[cfg(unix)]
#[test]
fn test_copy_file_onto_hard_link_keeps_content() {
    let temp = temp_dir();
    let file = temp.path().join("data.txt");
    let alias = temp.path().join("alias.txt");
    std::fs::write(&file, "precious").unwrap();
    std::fs::hard_link(&file, &alias).unwrap();

    copy_file(&file, &alias).unwrap();

    assert_eq!(std::fs::read_to_string(&alias).unwrap(), "precious");
}

#[cfg(unix)]
#[test]
fn test_list_files_unreadable_subdir_fails() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    std::fs::write(temp.path().join("a.txt"), "").unwrap();
    let locked = temp.path().join("locked");
    std::fs::create_dir(&locked).unwrap();
    std::fs::write(locked.join("hidden.txt"), "").unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through mode bits; nothing to observe then.
    let privileged = std::fs::read_dir(&locked).is_ok();
    let result = list_files(temp.path(), ListFlags::tree());
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    if !privileged {
        let err = result.unwrap_err();
        assert!(matches!(err, KitError::Fs(ref e) if matches!(**e, FsError::Walk { .. })));
    }
}

#[test]
fn test_async_failures_reach_on_error() {
    let temp = temp_dir();
    let missing = temp.path().join("missing");
    let wait = Duration::from_secs(5);

    let (handler, rx) = channel();
    move_file_async(&missing, temp.path().join("dst"), Some(handler)).unwrap();
    assert!(is_not_found(&rx.recv_timeout(wait).unwrap().unwrap_err()));

    let (handler, rx) = channel();
    delete_file_async(&missing, Some(handler)).unwrap();
    assert!(is_not_found(&rx.recv_timeout(wait).unwrap().unwrap_err()));

    let (handler, rx) = channel();
    delete_dir_recursive_async(&missing, Some(handler)).unwrap();
    assert!(is_not_found(&rx.recv_timeout(wait).unwrap().unwrap_err()));

    let (handler, rx) = channel();
    list_files_async(&missing, ListFlags::empty(), Some(handler)).unwrap();
    let err = rx.recv_timeout(wait).unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
}

#[test]
fn test_copy_file_async_empty_file() {
    let temp = temp_dir();
    let src = temp.path().join("empty");
    let dst = temp.path().join("empty.copy");
    std::fs::write(&src, "").unwrap();

    let (handler, rx) = channel();
    copy_file_async(&src, &dst, Some(handler)).unwrap();

    let copied = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
    assert_eq!(copied.path(), dst);
    assert!(file_exists(&dst, None));
}

#[test]
fn test_async_without_handler_is_rejected() {
    let temp = temp_dir();
    let dir = temp.path().join("never");

    let err = create_dir_async(&dir, None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    std::thread::sleep(Duration::from_millis(50));
    assert!(!dir.exists());
}
