// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text and object persistence.
//!
//! ```text
//! write_text(loc, content, append)   append | truncate, create if absent
//! read_text(loc)                     lines joined with '\n', '\r\n' folded
//! save_object(loc, &T)               {"type": type_name::<T>(), "value": T}
//!                                    tempfile in same dir --> rename over loc
//! read_object::<T>(loc)              type tag must equal type_name::<T>()
//!
//! *_async(loc, ..., handler)         background twins of the four ops
//! Store { location }                 same ops bound to one location
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::thread::JoinHandle;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::completion::{BoxedHandler, dispatch};
use crate::error::{KitError, KitResult, PersistError};
use crate::location::Location;

/// On-disk wrapper recording which type an object file holds.
#[derive(Serialize)]
struct Envelope<'a, T> {
    #[serde(rename = "type")]
    type_name: &'a str,
    value: &'a T,
}

#[derive(Deserialize)]
struct StoredEnvelope {
    #[serde(rename = "type")]
    type_name: String,
    value: serde_json::Value,
}

/// Writes `content` to `location`, appending or truncating.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn write_text(location: &Location, content: &str, append: bool) -> KitResult<Location> {
    let path = location.path();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|e| KitError::fs(path, e))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| KitError::fs(path, e))?;

    debug!(path = %path.display(), bytes = content.len(), append, "wrote text");
    Ok(location.clone())
}

/// Reads `location` as text, terminating every line with `\n`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid UTF-8.
pub fn read_text(location: &Location) -> KitResult<String> {
    let path = location.path();
    let file = File::open(path).map_err(|e| KitError::fs(path, e))?;

    let mut content = String::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| KitError::fs(path, e))?;
        content.push_str(&line);
        content.push('\n');
    }

    debug!(path = %path.display(), bytes = content.len(), "read text");
    Ok(content)
}

/// Saves `value` to `location`, replacing any previous object.
///
/// The object is staged in a temporary file next to `location` and renamed
/// into place.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the file cannot be
/// written.
pub fn save_object<T: Serialize>(location: &Location, value: &T) -> KitResult<Location> {
    let path = location.path();
    let dir = parent_dir(path);

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| KitError::fs(dir, e))?;
    let envelope = Envelope {
        type_name: std::any::type_name::<T>(),
        value,
    };

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        serde_json::to_writer(&mut writer, &envelope).map_err(|source| PersistError::Encode {
            path: path.display().to_string(),
            source,
        })?;
        writer.flush().map_err(|e| KitError::fs(path, e))?;
    }

    staged
        .persist(path)
        .map_err(|e| KitError::fs(path, e.error))?;

    debug!(path = %path.display(), ty = envelope.type_name, "saved object");
    Ok(location.clone())
}

/// Reads an object of type `T` from `location`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or
/// [`PersistError::TypeMismatch`] if it holds a different type.
pub fn read_object<T: DeserializeOwned>(location: &Location) -> KitResult<T> {
    let path = location.path();
    let file = File::open(path).map_err(|e| KitError::fs(path, e))?;

    let decode_error = |source| PersistError::Decode {
        path: path.display().to_string(),
        source,
    };

    let stored: StoredEnvelope =
        serde_json::from_reader(BufReader::new(file)).map_err(decode_error)?;

    let expected = std::any::type_name::<T>();
    if stored.type_name != expected {
        return Err(PersistError::TypeMismatch {
            path: path.display().to_string(),
            expected: expected.to_string(),
            found: stored.type_name,
        }
        .into());
    }

    let value = serde_json::from_value(stored.value).map_err(decode_error)?;
    debug!(path = %path.display(), ty = expected, "read object");
    Ok(value)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Background form of [`write_text`]; succeeds with `location`.
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn write_text_async(
    location: &Location,
    content: impl Into<String>,
    append: bool,
    handler: Option<BoxedHandler<Location>>,
) -> KitResult<JoinHandle<()>> {
    let location = location.clone();
    let content = content.into();
    dispatch("write", handler, move || {
        write_text(&location, &content, append)
    })
}

/// Background form of [`read_text`].
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn read_text_async(
    location: &Location,
    handler: Option<BoxedHandler<String>>,
) -> KitResult<JoinHandle<()>> {
    let location = location.clone();
    dispatch("read", handler, move || read_text(&location))
}

/// Background form of [`save_object`]; takes `value` by ownership.
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn save_object_async<T>(
    location: &Location,
    value: T,
    handler: Option<BoxedHandler<Location>>,
) -> KitResult<JoinHandle<()>>
where
    T: Serialize + Send + 'static,
{
    let location = location.clone();
    dispatch("save", handler, move || save_object(&location, &value))
}

/// Background form of [`read_object`].
///
/// # Errors
///
/// Returns an error only if `handler` is `None` or the thread cannot start.
pub fn read_object_async<T>(
    location: &Location,
    handler: Option<BoxedHandler<T>>,
) -> KitResult<JoinHandle<()>>
where
    T: DeserializeOwned + Send + 'static,
{
    let location = location.clone();
    dispatch("load", handler, move || read_object::<T>(&location))
}

/// Persistence handle bound to a single [`Location`].
///
/// # Example
/// ```no_run
/// use fskit::persist::Store;
///
/// let store = Store::at("state", "counter.json")?;
/// store.save_object(&41_u32)?;
/// let next = store.read_object::<u32>()? + 1;
/// # Ok::<(), fskit::error::KitError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    location: Location,
}

impl Store {
    #[must_use]
    pub const fn new(location: Location) -> Self {
        Self { location }
    }

    /// Binds a store to `name` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidArgument`] if `name` is blank.
    pub fn at(dir: impl AsRef<Path>, name: &str) -> KitResult<Self> {
        Location::new(dir, name).map(Self::new)
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Renames the backing file name, keeping its directory.
    pub fn set_name(&mut self, name: &str) {
        self.location.set_name(name);
    }

    /// See [`write_text`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn write_text(&self, content: &str, append: bool) -> KitResult<Location> {
        write_text(&self.location, content, append)
    }

    /// See [`read_text`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid UTF-8.
    pub fn read_text(&self) -> KitResult<String> {
        read_text(&self.location)
    }

    /// See [`save_object`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or written.
    pub fn save_object<T: Serialize>(&self, value: &T) -> KitResult<Location> {
        save_object(&self.location, value)
    }

    /// See [`read_object`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, decoded, or holds another
    /// type.
    pub fn read_object<T: DeserializeOwned>(&self) -> KitResult<T> {
        read_object(&self.location)
    }

    /// Background form of [`Store::write_text`].
    ///
    /// # Errors
    ///
    /// Returns an error only if `handler` is `None` or the thread cannot start.
    pub fn write_text_async(
        &self,
        content: impl Into<String>,
        append: bool,
        handler: Option<BoxedHandler<Location>>,
    ) -> KitResult<JoinHandle<()>> {
        write_text_async(&self.location, content, append, handler)
    }

    /// Background form of [`Store::read_text`].
    ///
    /// # Errors
    ///
    /// Returns an error only if `handler` is `None` or the thread cannot start.
    pub fn read_text_async(
        &self,
        handler: Option<BoxedHandler<String>>,
    ) -> KitResult<JoinHandle<()>> {
        read_text_async(&self.location, handler)
    }

    /// Background form of [`Store::save_object`].
    ///
    /// # Errors
    ///
    /// Returns an error only if `handler` is `None` or the thread cannot start.
    pub fn save_object_async<T>(
        &self,
        value: T,
        handler: Option<BoxedHandler<Location>>,
    ) -> KitResult<JoinHandle<()>>
    where
        T: Serialize + Send + 'static,
    {
        save_object_async(&self.location, value, handler)
    }

    /// Background form of [`Store::read_object`].
    ///
    /// # Errors
    ///
    /// Returns an error only if `handler` is `None` or the thread cannot start.
    pub fn read_object_async<T>(
        &self,
        handler: Option<BoxedHandler<T>>,
    ) -> KitResult<JoinHandle<()>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        read_object_async(&self.location, handler)
    }
}

#[cfg(test)]
mod tests;
