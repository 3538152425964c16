// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log command implementation for fskit.

use anyhow::bail;

use crate::cli::args::LogArgs;
use crate::cmd::RunContext;
use crate::error::Result;

/// Appends one record to the configured log file.
///
/// # Errors
///
/// Returns an error if the record could not be written.
pub fn run_log_command(args: &LogArgs, ctx: &RunContext<'_>) -> Result<()> {
    let logger = ctx.logger;
    if ctx.background {
        crate::cmd::wait_for(|h| logger.log_async(&args.message, args.level, h))?;
    } else if !logger.log(&args.message, args.level) {
        bail!("failed to append to {}", logger.location());
    }
    Ok(())
}
