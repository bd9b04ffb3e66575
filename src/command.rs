//! Shared vocabulary types.
//!
//! [`CommandSpec`] is the one value that crosses every component
//! boundary: the argument processor produces two of them, the observer
//! holds them for the life of the process, and the runner executes them.

use std::fmt;

/// A fully resolved hook command: an executable path plus the arguments
/// passed to it verbatim.
///
/// Only the argument processor constructs these, after the name has been
/// resolved, so `path` always names something the shell could find.  Both
/// specs are created once at startup and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Resolved executable path.
    pub path: String,
    /// Positional arguments, passed through untouched.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Build a spec from a resolved path and its arguments.
    pub fn new(path: String, args: Vec<String>) -> Self {
        Self { path, args }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
