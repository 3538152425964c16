// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for fskit.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. fskit.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. FSKIT_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! FSKIT_LOG__DIRECTORY=/var/log/app  → log.directory = "/var/log/app"
//! FSKIT_LOG__FILE_NAME=app.log       → log.file_name = "app.log"
//! FSKIT_TRACING__VERBOSITY=4         → tracing.verbosity = 4
//! ```
//!
//! # Example
//!
//! ```toml
//! [log]
//! directory = "logs"
//! file_name = "records.txt"
//!
//! [tracing]
//! verbosity = 3
//! file = "logs/trace.log"
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, KitResult, Result};
use crate::location::Location;
use crate::logging::{DEFAULT_LOG_FILE_NAME, LogConfig, Verbosity};

use loader::SettingsLoader;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Record log target.
    pub log: LogSettings,
    /// Diagnostic output.
    pub tracing: TracingSettings,
}

/// Where [`crate::logging::Logger`] writes its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Directory of the log file; empty means the working directory.
    pub directory: PathBuf,
    /// Log file name.
    pub file_name: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            file_name: DEFAULT_LOG_FILE_NAME.to_string(),
        }
    }
}

/// `tracing` subscriber options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TracingSettings {
    /// Console verbosity (0-5).
    pub verbosity: Verbosity,
    /// Optional file receiving debug-level diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Show module paths in console output.
    pub show_target: bool,
}

impl Settings {
    /// Create a new settings builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fskit::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_file("fskit.toml", false)
    ///     .apply_overrides([("tracing.verbosity", "3")])?
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_file(path, true).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KitError::Config`] if `log.file_name` is blank.
    pub fn validate(&self) -> KitResult<()> {
        if self.log.file_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "log".to_string(),
                key: "file_name".to_string(),
                message: "file name must not be blank".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Location of the record log.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KitError::InvalidArgument`] if the file name is
    /// blank.
    pub fn log_location(&self) -> KitResult<Location> {
        Location::new(&self.log.directory, &self.log.file_name)
    }

    /// Diagnostic output configuration.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.tracing.verbosity)
            .maybe_with_log_file(self.tracing.file.clone())
            .with_show_target(self.tracing.show_target)
            .build()
    }

    /// Format settings for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = vec![
            ("log.directory", self.log.directory.display().to_string()),
            ("log.file_name", self.log.file_name.clone()),
            (
                "tracing.verbosity",
                self.tracing.verbosity.as_u8().to_string(),
            ),
            (
                "tracing.file",
                self.tracing
                    .file
                    .as_ref()
                    .map_or_else(String::new, |p| p.display().to_string()),
            ),
            ("tracing.show_target", self.tracing.show_target.to_string()),
        ];
        for (_, value) in &mut options {
            if value.is_empty() {
                *value = "(none)".to_string();
            }
        }
        options.sort_by_key(|(key, _)| *key);

        let max_key_len = options.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
