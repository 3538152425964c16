// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Timestamped record logger.

use std::fmt;
use std::sync::OnceLock;
use std::thread::JoinHandle;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::completion::BoxedHandler;
use crate::error::{KitError, KitResult};
use crate::location::Location;
use crate::persist::Store;

/// File name used by [`Logger::global`] unless another logger is installed.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Level tag of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Success,
    Fail,
    Error,
    Warning,
}

impl LogLevel {
    /// Returns the tag written between brackets.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = KitError;

    fn from_str(s: &str) -> KitResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "fail" => Ok(Self::Fail),
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            _ => Err(KitError::invalid_argument(format!(
                "unknown log level '{s}', expected info, success, fail, error or warning"
            ))),
        }
    }
}

/// Appends `[timestamp] [LEVEL] message` lines to one file.
///
/// Appends are not serialized against each other; concurrent writers rely
/// on the operating system's append semantics.
#[derive(Debug, Clone)]
pub struct Logger {
    store: Store,
}

impl Logger {
    #[must_use]
    pub const fn new(location: Location) -> Self {
        Self {
            store: Store::new(location),
        }
    }

    /// Returns the process-wide logger, creating it on first use.
    ///
    /// Unless [`Logger::install`] ran first, it writes to
    /// [`DEFAULT_LOG_FILE_NAME`] in the working directory.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| Self::new(Location::from_path(DEFAULT_LOG_FILE_NAME)))
    }

    /// Makes `logger` the process-wide logger.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidArgument`] if the global logger already
    /// exists.
    pub fn install(logger: Self) -> KitResult<&'static Self> {
        match GLOBAL.set(logger) {
            Ok(()) => Ok(Self::global()),
            Err(_) => Err(KitError::invalid_argument(format!(
                "global logger already writes to {}",
                Self::global().location()
            ))),
        }
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        self.store.location()
    }

    /// Formats a record stamped with the current local time.
    #[must_use]
    pub fn format_record(message: &str, level: LogLevel) -> String {
        Self::format_record_at(message, level, Local::now().naive_local())
    }

    /// Formats a record stamped with `at`.
    #[must_use]
    pub fn format_record_at(message: &str, level: LogLevel, at: NaiveDateTime) -> String {
        format!("[{}] [{level}] {message}\n", at.format(TIMESTAMP_FORMAT))
    }

    /// Appends a record; returns whether the write succeeded.
    pub fn log(&self, message: &str, level: LogLevel) -> bool {
        let record = Self::format_record(message, level);
        match self.store.write_text(&record, true) {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "failed to append log record");
                false
            }
        }
    }

    /// Appends an `INFO` record.
    pub fn info(&self, message: &str) -> bool {
        self.log(message, LogLevel::Info)
    }

    /// Appends an `ERROR` record describing `error`.
    pub fn log_error(&self, error: &dyn std::error::Error) -> bool {
        self.log(&error.to_string(), LogLevel::Error)
    }

    /// Formats a record now and appends it on a background thread.
    ///
    /// # Errors
    ///
    /// Returns an error only if `handler` is `None` or the thread cannot start.
    pub fn log_async(
        &self,
        message: &str,
        level: LogLevel,
        handler: Option<BoxedHandler<Location>>,
    ) -> KitResult<JoinHandle<()>> {
        let record = Self::format_record(message, level);
        self.store.write_text_async(record, true, handler)
    }
}
