// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Completion callbacks and background dispatch.
//!
//! ```text
//! op_async(args, Some(handler))
//!        |
//!        +-- handler missing? --> Err(InvalidArgument)   (caller thread)
//!        |
//!        v
//! thread "fskit-<op>"  --> op(args) once
//!        |                    |
//!        |        Ok(value)   |   Err(error) / panic
//!        v                    v
//! handler.on_success(value)   handler.on_error(error)
//! ```
//!
//! Handlers are consumed by value, so each one fires at most once.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::thread::{self, JoinHandle};

use tracing::{debug, debug_span, warn};

use crate::error::{KitError, KitResult};

/// Two-case outcome notifier for a background operation.
pub trait CompletionHandler<T>: Send + 'static {
    /// Called with the operation's natural result.
    fn on_success(self: Box<Self>, result: T);

    /// Called with the error that ended the operation.
    fn on_error(self: Box<Self>, error: KitError);
}

/// Boxed handler accepted by every `*_async` operation.
pub type BoxedHandler<T> = Box<dyn CompletionHandler<T>>;

/// Optional failure callback of the synchronous operations.
pub type ErrorObserver<'a> = &'a dyn Fn(&KitError);

/// Closure-backed [`CompletionHandler`].
///
/// ```
/// use fskit::completion::{BoxedHandler, Completion};
/// use fskit::error::KitError;
/// use fskit::location::Location;
///
/// let handler: BoxedHandler<Location> = Completion::new(
///     |dst: Location| println!("copied to {dst}"),
///     |err: KitError| eprintln!("copy failed: {err}"),
/// )
/// .boxed();
/// # drop(handler);
/// ```
pub struct Completion<S, E> {
    on_success: S,
    on_error: E,
}

impl<S, E> Completion<S, E> {
    pub const fn new(on_success: S, on_error: E) -> Self {
        Self {
            on_success,
            on_error,
        }
    }

    /// Boxes this completion for an `*_async` call.
    pub fn boxed<T>(self) -> BoxedHandler<T>
    where
        Self: CompletionHandler<T>,
    {
        Box::new(self)
    }
}

impl<T, S, E> CompletionHandler<T> for Completion<S, E>
where
    S: FnOnce(T) + Send + 'static,
    E: FnOnce(KitError) + Send + 'static,
{
    fn on_success(self: Box<Self>, result: T) {
        (self.on_success)(result);
    }

    fn on_error(self: Box<Self>, error: KitError) {
        (self.on_error)(error);
    }
}

/// Handler that ignores both outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionAdapter;

impl CompletionAdapter {
    #[must_use]
    pub fn boxed<T>() -> BoxedHandler<T> {
        Box::new(Self)
    }
}

impl<T> CompletionHandler<T> for CompletionAdapter {
    fn on_success(self: Box<Self>, _result: T) {}

    fn on_error(self: Box<Self>, _error: KitError) {}
}

impl<T: Send + 'static> CompletionHandler<T> for flume::Sender<KitResult<T>> {
    fn on_success(self: Box<Self>, result: T) {
        // Receiver may be gone; the outcome then has nobody to go to.
        let _ = self.send(Ok(result));
    }

    fn on_error(self: Box<Self>, error: KitError) {
        let _ = self.send(Err(error));
    }
}

/// Creates a handler that forwards the outcome into a channel.
///
/// ```
/// use fskit::completion::channel;
/// use fskit::fs::create_dir_async;
///
/// let dir = std::env::temp_dir().join("fskit-doc-channel");
/// let (handler, outcome) = channel();
/// create_dir_async(&dir, Some(handler))?;
/// let created = outcome.recv()??;
/// assert_eq!(created.path(), dir);
/// # std::fs::remove_dir(&dir)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn channel<T: Send + 'static>() -> (BoxedHandler<T>, flume::Receiver<KitResult<T>>) {
    let (tx, rx) = flume::bounded(1);
    (Box::new(tx), rx)
}

/// Extension for turning a [`KitResult`] into the sentinel-plus-observer form.
pub trait Report<T> {
    /// Returns the success value, or hands the error to `observer` and
    /// returns `None`.
    fn report(self, observer: Option<ErrorObserver<'_>>) -> Option<T>;
}

impl<T> Report<T> for KitResult<T> {
    fn report(self, observer: Option<ErrorObserver<'_>>) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                if let Some(observer) = observer {
                    observer(&err);
                }
                None
            }
        }
    }
}

/// Runs `op` once on a new thread and routes its outcome to `handler`.
///
/// Returns as soon as the thread is spawned.
///
/// # Errors
///
/// Returns [`KitError::InvalidArgument`] if `handler` is `None`, or
/// [`KitError::Io`] if the thread cannot be spawned. In both cases `op` is
/// never run.
pub fn dispatch<T, F>(
    name: &'static str,
    handler: Option<BoxedHandler<T>>,
    op: F,
) -> KitResult<JoinHandle<()>>
where
    T: Send + 'static,
    F: FnOnce() -> KitResult<T> + Send + 'static,
{
    let handler = handler
        .ok_or_else(|| KitError::invalid_argument("completion handler must not be missing"))?;

    let join = thread::Builder::new()
        .name(format!("fskit-{name}"))
        .spawn(move || {
            let _span = debug_span!("background", op = name).entered();

            let outcome = catch_unwind(AssertUnwindSafe(op))
                .unwrap_or_else(|_| Err(KitError::other(format!("{name} panicked"))));

            match outcome {
                Ok(value) => {
                    debug!("completed");
                    handler.on_success(value);
                }
                Err(err) => {
                    warn!(error = %err, "failed");
                    handler.on_error(err);
                }
            }
        })?;

    Ok(join)
}
