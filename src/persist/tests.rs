// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::cell::Cell;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use super::{
    Store, read_object, read_object_async, read_text, read_text_async, save_object,
    save_object_async, write_text, write_text_async,
};
use crate::completion::{Report, channel};
use crate::error::{ErrorKind, KitError, PersistError};
use crate::location::Location;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    visits: u32,
    tags: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Shadow {
    name: String,
    visits: u32,
    tags: Vec<String>,
}

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn sample() -> Profile {
    Profile {
        name: "drako".to_string(),
        visits: 3,
        tags: vec!["a".to_string(), "b".to_string()],
    }
}

#[test]
fn test_write_then_read_text() {
    let temp = temp_dir();
    let location = Location::new(temp.path(), "a.txt").unwrap();

    let written = write_text(&location, "hello\n", false).unwrap();

    assert_eq!(written, location);
    assert_eq!(read_text(&location).unwrap(), "hello\n");
}

#[test]
fn test_write_text_truncates_or_appends() {
    let temp = temp_dir();
    let location = Location::new(temp.path(), "log.txt").unwrap();

    write_text(&location, "first line that is long\n", false).unwrap();
    write_text(&location, "one\n", false).unwrap();
    write_text(&location, "two\n", true).unwrap();

    assert_eq!(read_text(&location).unwrap(), "one\ntwo\n");
}

#[test]
fn test_read_text_normalizes_line_endings() {
    let temp = temp_dir();
    let location = Location::new(temp.path(), "crlf.txt").unwrap();
    std::fs::write(location.path(), "a\r\nb\nc").unwrap();

    assert_eq!(read_text(&location).unwrap(), "a\nb\nc\n");
}

#[test]
fn test_read_text_missing_reports() {
    let temp = temp_dir();
    let location = Location::new(temp.path(), "absent.txt").unwrap();
    let seen = Cell::new(false);

    let content = read_text(&location).report(Some(&|err: &KitError| {
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        seen.set(true);
    }));

    assert!(content.is_none());
    assert!(seen.get());
}

#[test]
fn test_object_round_trip() {
    let temp = temp_dir();
    let location = Location::new(temp.path(), "profile.bin").unwrap();

    save_object(&location, &sample()).unwrap();
    let loaded: Profile = read_object(&location).unwrap();

    assert_eq!(loaded, sample());
}

#[test]
fn test_object_overwrite() {
    let temp = temp_dir();
    let location = Location::new(temp.path(), "n.bin").unwrap();

    save_object(&location, &"Hello, world!".to_string()).unwrap();
    save_object(&location, &"Bye".to_string()).unwrap();

    assert_eq!(read_object::<String>(&location).unwrap(), "Bye");
}

#[test]
fn test_object_type_mismatch() {
    let temp = temp_dir();
    let location = Location::new(temp.path(), "profile.bin").unwrap();
    save_object(&location, &sample()).unwrap();

    // Same shape, different type: still rejected
    let err = read_object::<Shadow>(&location).unwrap_err();
    assert!(
        matches!(&err, KitError::Persist(e) if matches!(**e, PersistError::TypeMismatch { .. })),
        "{err}"
    );
    assert_eq!(err.kind(), ErrorKind::IoFailure);

    assert!(read_object::<u64>(&location).report(None).is_none());
}

#[test]
fn test_object_garbage_is_decode_error() {
    let temp = temp_dir();
    let location = Location::new(temp.path(), "junk.bin").unwrap();
    std::fs::write(location.path(), b"\x00\x01not json").unwrap();

    let err = read_object::<String>(&location).unwrap_err();
    assert!(matches!(&err, KitError::Persist(e) if matches!(**e, PersistError::Decode { .. })));
}

#[test]
fn test_save_object_into_missing_dir_fails() {
    let temp = temp_dir();
    let location = Location::new(temp.path().join("no/such/dir"), "x.bin").unwrap();

    assert!(save_object(&location, &1_u8).is_err());
}

#[test]
fn test_store_rename_keeps_dir() {
    let temp = temp_dir();
    let mut store = Store::at(temp.path(), "first.txt").unwrap();
    store.write_text("1\n", false).unwrap();

    store.set_name("second.txt");
    store.write_text("2\n", false).unwrap();

    assert_eq!(store.location().path(), temp.path().join("second.txt"));
    assert_eq!(std::fs::read_to_string(temp.path().join("first.txt")).unwrap(), "1\n");
    assert_eq!(store.read_text().unwrap(), "2\n");
}

#[test]
fn test_store_async_round_trip() {
    let temp = temp_dir();
    let store = Store::at(temp.path(), "async.bin").unwrap();

    let (saved, saved_rx) = channel();
    store.save_object_async(sample(), Some(saved)).unwrap();
    let location = saved_rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
    assert_eq!(&location, store.location());

    let (loaded, loaded_rx) = channel::<Profile>();
    store.read_object_async(Some(loaded)).unwrap();
    assert_eq!(
        loaded_rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap(),
        sample()
    );
}

#[test]
fn test_store_async_text_and_failure() {
    let temp = temp_dir();
    let store = Store::at(temp.path(), "async.txt").unwrap();

    let (written, written_rx) = channel();
    store
        .write_text_async("This is async content.\n", false, Some(written))
        .unwrap();
    written_rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();

    let (read, read_rx) = channel();
    store.read_text_async(Some(read)).unwrap();
    assert_eq!(
        read_rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap(),
        "This is async content.\n"
    );

    let (mismatch, mismatch_rx) = channel::<u32>();
    store.read_object_async(Some(mismatch)).unwrap();
    assert!(mismatch_rx.recv_timeout(Duration::from_secs(5)).unwrap().is_err());

    let err = store.read_text_async(None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_free_async_functions() {
    let temp = temp_dir();
    let wait = Duration::from_secs(5);
    let text = Location::new(temp.path(), "notes.txt").unwrap();
    let object = Location::new(temp.path(), "profile.json").unwrap();

    let (handler, rx) = channel();
    write_text_async(&text, "a\r\nb", false, Some(handler)).unwrap();
    assert_eq!(rx.recv_timeout(wait).unwrap().unwrap(), text);

    let (handler, rx) = channel();
    read_text_async(&text, Some(handler)).unwrap();
    assert_eq!(rx.recv_timeout(wait).unwrap().unwrap(), "a\nb\n");

    let (handler, rx) = channel();
    save_object_async(&object, sample(), Some(handler)).unwrap();
    rx.recv_timeout(wait).unwrap().unwrap();

    let (handler, rx) = channel::<Profile>();
    read_object_async(&object, Some(handler)).unwrap();
    assert_eq!(rx.recv_timeout(wait).unwrap().unwrap(), sample());

    let (handler, rx) = channel::<String>();
    let absent = Location::from_path(temp.path().join("absent.txt"));
    read_text_async(&absent, Some(handler)).unwrap();
    assert_eq!(
        rx.recv_timeout(wait).unwrap().unwrap_err().kind(),
        ErrorKind::IoFailure
    );

    assert!(read_text_async(&text, None).unwrap_err().is_invalid_argument());
}
