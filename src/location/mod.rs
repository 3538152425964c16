// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path resolution and the [`Location`] handle.
//!
//! ```text
//! resolve(Some(dir), Some(name))  -->  dir/name
//! resolve(None, _)                -->  InvalidArgument
//! resolve(_, None | "  ")         -->  InvalidArgument
//!
//! set_name("b.txt"):  /data/a.txt --> /data/b.txt
//!                     a.txt       --> b.txt
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KitError, KitResult};

/// A filesystem location made of a directory component and a name component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location {
    path: PathBuf,
}

impl Location {
    /// Joins `dir` and `name` into a location.
    ///
    /// An empty `dir` is valid and yields a bare, relative name.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidArgument`] if `name` is blank.
    pub fn new(dir: impl AsRef<Path>, name: &str) -> KitResult<Self> {
        Self::resolve(Some(dir.as_ref()), Some(name))
    }

    /// Joins possibly-absent inputs into a location.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidArgument`] if `dir` is absent, or if `name`
    /// is absent or blank.
    pub fn resolve(dir: Option<&Path>, name: Option<&str>) -> KitResult<Self> {
        match (dir, name) {
            (Some(dir), Some(name)) if !name.trim().is_empty() => Ok(Self {
                path: dir.join(name),
            }),
            (None, _) => Err(KitError::invalid_argument("directory is missing")),
            (Some(_), _) => Err(KitError::invalid_argument("file name is missing or blank")),
        }
    }

    /// Wraps an already complete path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::Other`] if the platform reports no home directory.
    pub fn home() -> KitResult<Self> {
        std::env::home_dir()
            .map(Self::from_path)
            .ok_or_else(|| KitError::other("home directory is unknown"))
    }

    /// Returns `element` inside the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or `element` is blank.
    pub fn home_join(element: &str) -> KitResult<Self> {
        Self::new(Self::home()?.path, element)
    }

    /// Returns the current working directory.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::Io`] if the working directory cannot be read.
    pub fn current() -> KitResult<Self> {
        Ok(Self::from_path(std::env::current_dir()?))
    }

    /// Returns `element` inside the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read or `element`
    /// is blank.
    pub fn current_join(element: &str) -> KitResult<Self> {
        Self::new(Self::current()?.path, element)
    }

    /// Returns the full path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the directory component, if any.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    /// Returns the name component as UTF-8, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Replaces the name component, keeping the directory.
    ///
    /// Without a directory the location becomes the bare `name`.
    pub fn set_name(&mut self, name: &str) {
        self.path = match self.dir() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        };
    }

    /// Returns a copy of this location renamed to `name`.
    #[must_use]
    pub fn with_name(&self, name: &str) -> Self {
        let mut renamed = self.clone();
        renamed.set_name(name);
        renamed
    }

    /// Returns `name` inside this location.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidArgument`] if `name` is blank.
    pub fn join(&self, name: &str) -> KitResult<Self> {
        Self::new(&self.path, name)
    }

    /// Consumes the location, returning the path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for Location {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Self::from_path(path)
    }
}

impl From<&Path> for Location {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
