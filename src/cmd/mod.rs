// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config, fs, log
//!       |
//!       +-- foreground: fs::* / persist::* directly
//!       '-- background: fs::*_async + channel handler, then wait
//! ```

pub mod config;
pub mod fs;
pub mod log;


use std::thread::JoinHandle;

use tracing::warn;

use crate::completion::{BoxedHandler, channel};
use crate::error::{KitError, KitResult};
use crate::logging::{LogLevel, Logger};

/// State shared by all command handlers.
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    /// Run operations on a background thread and wait for the handler.
    pub background: bool,
    /// Receives one record per mutating command.
    pub logger: &'a Logger,
}

impl<'a> RunContext<'a> {
    #[must_use]
    pub const fn new(logger: &'a Logger, background: bool) -> Self {
        Self { background, logger }
    }

    /// Runs `sync` in the foreground, or `start` in the background and waits
    /// for its completion.
    ///
    /// # Errors
    ///
    /// Returns the operation's error, or an error if the background thread
    /// could not start or never reported.
    pub fn run<T, S, B>(&self, sync: S, start: B) -> KitResult<T>
    where
        T: Send + 'static,
        S: FnOnce() -> KitResult<T>,
        B: FnOnce(Option<BoxedHandler<T>>) -> KitResult<JoinHandle<()>>,
    {
        if self.background {
            wait_for(start)
        } else {
            sync()
        }
    }

    /// Writes a `SUCCESS` or `FAIL` record for `outcome` and passes it on.
    pub fn record<T>(&self, outcome: KitResult<T>, action: &str) -> KitResult<T> {
        match &outcome {
            Ok(_) => self.logger.log(action, LogLevel::Success),
            Err(err) => self.logger.log(&format!("{action}: {err}"), LogLevel::Fail),
        };
        outcome
    }
}

/// Starts a background operation with a channel handler and blocks until it
/// reports.
///
/// # Errors
///
/// Returns the operation's error, or an error if the thread could not start
/// or dropped the handler without reporting.
pub fn wait_for<T, B>(start: B) -> KitResult<T>
where
    T: Send + 'static,
    B: FnOnce(Option<BoxedHandler<T>>) -> KitResult<JoinHandle<()>>,
{
    let (handler, outcome) = channel();
    let join = start(Some(handler))?;
    let result = outcome
        .recv()
        .map_err(|_| KitError::other("background operation ended without reporting"))?;
    if join.join().is_err() {
        warn!("background thread panicked after reporting");
    }
    result
}
