// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered settings sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::standard(use_default, extra)
//!   fskit.toml (optional) -> extra files (required) -> FSKIT_* env
//!        |
//!   .apply_overrides([("tracing.verbosity", "4"), ...])
//!        |
//!        v
//!    build() --> Settings (validated)
//! ```
//!
//! Overrides always win, whatever order they were applied in.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat};

use super::Settings;
use crate::error::Result;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fskit.toml";

/// Prefix of environment variables read by [`SettingsLoader::standard`].
pub const ENV_PREFIX: &str = "FSKIT";

/// One configuration source, as shown by `fskit configs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// TOML file; `present` is false for a skipped optional file.
    File {
        path: PathBuf,
        required: bool,
        present: bool,
    },
    /// TOML given as a string.
    Inline,
    /// `<PREFIX>_<SECTION>__<KEY>` variables.
    Environment(String),
    /// Single key set programmatically.
    Override { key: String, value: String },
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File {
                path,
                required: true,
                ..
            } => write!(f, "[file] {}", path.display()),
            Self::File {
                path,
                present: true,
                ..
            } => write!(f, "[optional] {}", path.display()),
            Self::File { path, .. } => write!(f, "[optional] {} (absent)", path.display()),
            Self::Inline => f.write_str("[inline] <string>"),
            Self::Environment(prefix) => write!(f, "[env] {prefix}_*"),
            Self::Override { key, value } => write!(f, "[override] {key} = {value}"),
        }
    }
}

/// Collects settings sources in priority order and builds [`Settings`].
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    files: Vec<Source>,
    env_prefix: Option<String>,
    overrides: Vec<Source>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            files: Vec::new(),
            env_prefix: None,
            overrides: Vec::new(),
        }
    }

    /// Lookup used by the binary: [`DEFAULT_CONFIG_FILE`] in the working
    /// directory unless `use_default_file` is false, then every file in
    /// `extra` (each must exist), then `FSKIT_*` variables.
    #[must_use]
    pub fn standard(use_default_file: bool, extra: &[PathBuf]) -> Self {
        let mut loader = Self::new();
        if use_default_file {
            loader = loader.add_file(DEFAULT_CONFIG_FILE, false);
        }
        extra
            .iter()
            .fold(loader, |loader, path| loader.add_file(path, true))
            .with_env_prefix(ENV_PREFIX)
    }

    /// Adds a TOML file; a `required` file must exist when `build()` runs.
    #[must_use]
    pub fn add_file<P: AsRef<Path>>(mut self, path: P, required: bool) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self.files.push(Source::File {
            path: path.to_path_buf(),
            required,
            present: path.is_file(),
        });
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files.push(Source::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables, e.g.
    /// `FSKIT_LOG__FILE_NAME`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets dotted keys such as `tracing.verbosity` above every other source.
    ///
    /// String values are converted to the target type on `build()`.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is not a valid configuration path.
    pub fn apply_overrides<I, K, V>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<config::Value> + fmt::Display,
    {
        for (key, value) in overrides {
            let key = key.as_ref();
            let shown = value.to_string();
            self.builder = self
                .builder
                .set_override(key, value)
                .with_context(|| format!("invalid override for '{key}'"))?;
            self.overrides.push(Source::Override {
                key: key.to_string(),
                value: shown,
            });
        }
        Ok(self)
    }

    /// Builds and validates the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, the merged values do not fit [`Settings`], or
    /// [`Settings::validate`] rejects them.
    pub fn build(self) -> Result<Settings> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Sources from lowest to highest priority.
    pub fn sources(&self) -> impl Iterator<Item = Source> + '_ {
        self.files
            .iter()
            .cloned()
            .chain(self.env_prefix.clone().map(Source::Environment))
            .chain(self.overrides.iter().cloned())
    }

    /// Numbered, human-readable [`sources`](Self::sources).
    #[must_use]
    pub fn describe_sources(&self) -> Vec<String> {
        self.sources()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
