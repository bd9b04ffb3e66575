//! Core traits that decouple the daemon from the operating system.
//!
//! Every concrete backend (the shell's `command -v`, `std::process`, the
//! session bus, a test harness, …) implements one of these traits.  The
//! argument processor, the [`LockObserver`](crate::observer::LockObserver)
//! and the main loop only depend on these abstractions.

use crate::command::CommandSpec;
use crate::session::SessionEvent;
use std::sync::mpsc;

/// Abstraction over command-name resolution.
///
/// An implementation might shell out to `command -v`, or it might be a
/// table-backed stub used in tests.
pub trait PathLookup {
    /// The error type produced when the lookup machinery itself fails.
    type Error: std::error::Error + Send + 'static;

    /// Resolve `name` against the search path.
    ///
    /// Returns `Ok(Some(path))` when the name resolves, `Ok(None)` when
    /// the search path has no such command, and `Err` only when the
    /// lookup could not be performed at all.
    fn resolve(&self, name: &str) -> Result<Option<String>, Self::Error>;
}

/// Abstraction over running one hook command to completion.
pub trait CommandRunner {
    /// The error type produced when the child could not be started.
    type Error: std::error::Error + Send + 'static;

    /// Run `spec`, blocking the calling thread until the child exits.
    ///
    /// The child's own exit status is not an error; only failure to start
    /// it is.
    fn run(&self, spec: &CommandSpec) -> Result<(), Self::Error>;
}

/// A source of [`SessionEvent`]s.
///
/// Implementations watch some notification transport (the session bus in
/// production, an in-memory script in tests) and forward every lock-state
/// transition into the provided [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](EventSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each observed event must be sent through `sink` exactly once, in the
///   order observed.
/// * Implementations must be [`Send`] so they can run on a dedicated
///   thread.
pub trait EventSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start watching and forward every event into `sink`.
    ///
    /// This method blocks the calling thread; spawn it on its own thread
    /// and consume the receiving end from the main loop.
    fn run(&mut self, sink: mpsc::Sender<SessionEvent>) -> Result<(), Self::Error>;
}
