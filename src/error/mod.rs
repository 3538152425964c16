// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                KitError (~24 bytes)
//!                       |
//!   +---------+------+------+--------+----+-------+
//!   |         |      |      |        |    |       |
//!   v         v      v      v        v    v       v
//! InvalidArg  Fs  Persist Config    Io  Other
//! Box<str>   Box   Box     Box     Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Fs       NotFound, PermissionDenied, AlreadyExists, IoError, Walk
//!   Persist  Encode, Decode, TypeMismatch
//!   Config   InvalidValue
//!
//! ErrorKind:  InvalidArgument  <- InvalidArgument, Config
//!             IoFailure        <- everything else
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`KitError`].
pub type KitResult<T> = std::result::Result<T, KitError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum KitError {
    /// A caller broke an operation's contract (blank name, missing handler, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(Box<str>),

    /// Filesystem operation failed.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Object or text persistence failed.
    #[error("persist error: {0}")]
    Persist(#[from] Box<PersistError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error without a known path.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Coarse classification of a [`KitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed inputs or a violated call contract.
    InvalidArgument,
    /// Anything the filesystem layer reported.
    IoFailure,
}

impl KitError {
    /// Create a [`KitError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into().into_boxed_str())
    }

    /// Create a [`KitError::Other`].
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }

    /// Wrap an I/O error that happened while touching `path`.
    pub fn fs(path: &Path, source: std::io::Error) -> Self {
        FsError::from_io(path, source).into()
    }

    /// Returns the coarse category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::Config(_) => ErrorKind::InvalidArgument,
            Self::Fs(_) | Self::Persist(_) | Self::Io(_) | Self::Other(_) => ErrorKind::IoFailure,
        }
    }

    /// Returns `true` for contract violations.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument)
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for KitError {
                fn from(err: $error) -> Self {
                    KitError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    FsError => Fs,
    PersistError => Persist,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Target already exists and may not be replaced.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk '{path}': {message}")]
    Walk { path: String, message: String },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists(path),
            _ => Self::IoError { path, source },
        }
    }
}

// --- Persist Errors ---

/// Object persistence errors.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Value could not be serialized.
    #[error("failed to encode object for '{path}': {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes are not a readable object.
    #[error("failed to decode object from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored object has a different type than the one requested.
    #[error("type mismatch in '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
