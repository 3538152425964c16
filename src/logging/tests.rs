// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use chrono::NaiveDate;
use tempfile::TempDir;

use super::{LogLevel, Logger, Verbosity};
use crate::completion::channel;
use crate::error::ErrorKind;
use crate::location::Location;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn logger_in(temp: &TempDir) -> Logger {
    Logger::new(Location::new(temp.path(), "log.txt").unwrap())
}

#[test]
fn test_verbosity_conversion() {
    let conversions = vec![
        ("from_u8(0)", Verbosity::from_u8(0).map(Verbosity::to_filter_string)),
        ("from_u8(3)", Verbosity::from_u8(3).map(Verbosity::to_filter_string)),
        ("from_u8(5)", Verbosity::from_u8(5).map(Verbosity::to_filter_string)),
        ("from_u8(9)", Verbosity::from_u8(9).map(Verbosity::to_filter_string)),
    ];
    insta::assert_debug_snapshot!(conversions, @r#"
    [
        (
            "from_u8(0)",
            Some(
                "off",
            ),
        ),
        (
            "from_u8(3)",
            Some(
                "info",
            ),
        ),
        (
            "from_u8(5)",
            Some(
                "trace",
            ),
        ),
        (
            "from_u8(9)",
            None,
        ),
    ]
    "#);
    assert!(Verbosity::new(6).is_err());
}

#[test]
fn test_format_record_at() {
    let at = NaiveDate::from_ymd_opt(2026, 1, 31)
        .unwrap()
        .and_hms_opt(9, 5, 7)
        .unwrap();

    let record = Logger::format_record_at("Test message", LogLevel::Warning, at);

    insta::assert_snapshot!(record.trim_end(), @"[2026-01-31 09:05:07] [WARNING] Test message");
    assert!(record.ends_with('\n'));
}

#[test]
fn test_format_record_now_shape() {
    let record = Logger::format_record("Test message", LogLevel::Info);

    // "[yyyy-MM-dd HH:mm:ss] " is 22 bytes
    assert_eq!(&record[..1], "[");
    assert_eq!(&record[20..22], "] ");
    assert_eq!(&record[22..], "[INFO] Test message\n");
}

#[test]
fn test_log_level_parse() {
    let parsed: Vec<LogLevel> = ["info", "SUCCESS", "fail", "Error", "warn"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    assert_eq!(
        parsed,
        [
            LogLevel::Info,
            LogLevel::Success,
            LogLevel::Fail,
            LogLevel::Error,
            LogLevel::Warning
        ]
    );
    let err = "loud".parse::<LogLevel>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_log_appends_records() {
    let temp = temp_dir();
    let logger = logger_in(&temp);

    assert!(logger.log("first", LogLevel::Info));
    assert!(logger.info("second"));
    assert!(logger.log_error(&std::io::Error::other("Test exception")));

    let content = std::fs::read_to_string(logger.location().path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("] [INFO] first"));
    assert!(lines[1].ends_with("] [INFO] second"));
    assert!(lines[2].ends_with("] [ERROR] Test exception"));
}

#[test]
fn test_log_into_missing_dir_returns_false() {
    let temp = temp_dir();
    let logger = Logger::new(Location::new(temp.path().join("gone"), "log.txt").unwrap());

    assert!(!logger.log("lost", LogLevel::Fail));
}

#[test]
fn test_log_async() {
    let temp = temp_dir();
    let logger = logger_in(&temp);

    let (handler, rx) = channel();
    logger
        .log_async("Async log test", LogLevel::Success, Some(handler))
        .unwrap();

    let location = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
    assert_eq!(&location, logger.location());
    let content = std::fs::read_to_string(location.path()).unwrap();
    assert!(content.ends_with("] [SUCCESS] Async log test\n"));

    let err = logger.log_async("x", LogLevel::Info, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

// The only test touching the process-wide logger; keep it that way so the
// install outcome does not depend on test order.
#[test]
fn test_global_is_shared_and_install_fails_once_set() {
    let first = Logger::global();
    let second = Logger::global();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.location().path(), std::path::Path::new("log.txt"));

    let temp = temp_dir();
    let err = Logger::install(logger_in(&temp)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    insta::assert_snapshot!(err.to_string(), @"invalid argument: global logger already writes to log.txt");
    assert!(std::ptr::eq(Logger::global(), first));
    assert_eq!(Logger::global().location().path(), std::path::Path::new("log.txt"));
}
