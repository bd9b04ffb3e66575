//! Session lock-state events and their sources.

pub mod dbus;

use std::fmt;

/// A lock-state transition reported by the desktop.
///
/// The desktop may report the same transition twice in a row, or one side
/// without its counterpart; consumers must treat every delivery
/// identically rather than tracking a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session was locked.
    Locked,
    /// The session was unlocked.
    Unlocked,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEvent::Locked => write!(f, "locked"),
            SessionEvent::Unlocked => write!(f, "unlocked"),
        }
    }
}
