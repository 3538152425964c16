// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --trace-file FILE ← Diagnostic log file
//! --background      ← Run operations through the async wrappers
//!
//! Precedence: CLI flags > FSKIT_* env > --config > fskit.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File receiving debug-level diagnostics.
    #[arg(long = "trace-file", value_name = "FILE")]
    pub trace_file: Option<PathBuf>,

    /// Runs the operation on a background thread and waits for its outcome.
    #[arg(short = 'b', long)]
    pub background: bool,

    /// Disables loading `fskit.toml` from the working directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("tracing.verbosity", level.to_string()));
        }

        if let Some(ref path) = self.trace_file {
            overrides.push(("tracing.file", path.display().to_string()));
        }

        overrides
    }
}
