//! Shell-backed [`PathLookup`] implementation.
//!
//! Resolution shells out to `command -v`, the same lookup the user's
//! interactive shell performs, so anything runnable from a prompt
//! (including an explicit `./script` path) resolves here too.

use crate::traits::PathLookup;
use std::process::{Command, Stdio};

/// Resolves command names by spawning `sh -c 'command -v -- "$0"' <name>`.
///
/// One child process per call, nothing cached.  The daemon resolves each
/// of its two hook commands exactly once, at startup.
#[derive(Debug, Default)]
pub struct ShellLookup;

/// The lookup machinery itself failed (`sh` missing or not spawnable).
#[derive(Debug, thiserror::Error)]
#[error("could not run the shell: {0}")]
pub struct ShellLookupError(#[from] std::io::Error);

impl ShellLookup {
    /// Create a new lookup handle.  No process is spawned until
    /// [`resolve`](PathLookup::resolve) is called.
    pub fn new() -> Self {
        Self
    }
}

impl PathLookup for ShellLookup {
    type Error = ShellLookupError;

    /// Spawn one `command -v` child and capture its stdout.
    ///
    /// Not-found only when the child exited non-zero *and* printed
    /// nothing; a non-zero exit with output still yields that output,
    /// trimmed of surrounding whitespace.  The child's stderr goes to the
    /// daemon's own.
    fn resolve(&self, name: &str) -> Result<Option<String>, ShellLookupError> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(r#"command -v -- "$0""#)
            .arg(name)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()?;

        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() && path.is_empty() {
            return Ok(None);
        }
        Ok(Some(path))
    }
}
