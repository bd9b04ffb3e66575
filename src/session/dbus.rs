//! Session-bus [`EventSource`] implementation.
//!
//! Desktops announce lock state as an `ActiveChanged(boolean)` signal on
//! their screensaver interface: `org.gnome.ScreenSaver` on GNOME,
//! `org.freedesktop.ScreenSaver` elsewhere.  Rather than speaking the
//! D-Bus wire protocol itself, this source spawns `dbus-monitor
//! --session` with one match rule per interface and parses its
//! line-oriented output.
//!
//! # Wire format
//!
//! `dbus-monitor` prints one unindented header line per message followed
//! by indented argument lines:
//!
//! ```text
//! signal time=1722946 sender=:1.34 -> destination=(null destination) serial=55 path=/org/gnome/ScreenSaver; interface=org.gnome.ScreenSaver; member=ActiveChanged
//!    boolean true
//! ```
//!
//! `boolean true` means the screen locked, `boolean false` that it
//! unlocked.

use crate::session::SessionEvent;
use crate::traits::EventSource;
use log::{debug, info};
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::mpsc;

/// Interfaces whose `ActiveChanged` signal is watched.
const INTERFACES: [&str; 2] = ["org.gnome.ScreenSaver", "org.freedesktop.ScreenSaver"];

/// An [`EventSource`] that watches the session bus through a
/// `dbus-monitor` child process.
///
/// The child is spawned when [`run`](EventSource::run) is called and
/// killed when the sink closes.
#[derive(Debug, Default)]
pub struct DbusMonitorSource;

/// Errors produced by the session-bus source.
#[derive(Debug, thiserror::Error)]
pub enum DbusMonitorError {
    #[error("failed to start dbus-monitor: {0}")]
    Spawn(std::io::Error),
    #[error("dbus-monitor gave no stdout")]
    NoStdout,
    #[error("read from dbus-monitor failed: {0}")]
    Read(std::io::Error),
}

impl DbusMonitorSource {
    /// Create a new source.  Nothing is spawned until
    /// [`run`](EventSource::run) is called.
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for DbusMonitorSource {
    type Error = DbusMonitorError;

    /// Spawn `dbus-monitor` and forward lock-state transitions.
    ///
    /// This method **blocks** until the monitor's stdout closes or the
    /// sink does.  Run it on a dedicated thread.
    fn run(&mut self, sink: mpsc::Sender<SessionEvent>) -> Result<(), DbusMonitorError> {
        let mut command = Command::new("dbus-monitor");
        command.arg("--session");
        for interface in INTERFACES {
            command.arg(format!(
                "type='signal',interface='{}',member='ActiveChanged'",
                interface
            ));
        }

        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(DbusMonitorError::Spawn)?;
        let stdout = child.stdout.take().ok_or(DbusMonitorError::NoStdout)?;

        info!(
            "monitoring the session bus for ActiveChanged on {}",
            INTERFACES.join(", ")
        );

        let mut armed = false;
        for line in BufReader::new(stdout).lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(DbusMonitorError::Read(e));
                }
            };
            if let Some(event) = scan_line(&mut armed, &line) {
                debug!("signal: ActiveChanged -> {}", event);
                if sink.send(event).is_err() {
                    info!("sink closed, shutting down");
                    break;
                }
            }
        }

        let _ = child.kill();
        let _ = child.wait();
        Ok(())
    }
}

//  Output parsing

/// Feed one output line through the header/body state machine.
///
/// `armed` is true between an `ActiveChanged` header for a watched
/// interface and the argument line that follows it.
fn scan_line(armed: &mut bool, line: &str) -> Option<SessionEvent> {
    // Header lines are unindented; argument lines are indented.
    if !line.starts_with(' ') {
        *armed = is_active_changed_header(line);
        return None;
    }
    if *armed {
        // ActiveChanged carries exactly one argument.
        *armed = false;
        return parse_boolean_argument(line);
    }
    None
}

/// True if `line` is the header of an `ActiveChanged` signal on one of
/// the watched screensaver interfaces.
fn is_active_changed_header(line: &str) -> bool {
    line.starts_with("signal")
        && line.contains("member=ActiveChanged")
        && INTERFACES
            .iter()
            .any(|interface| line.contains(&format!("interface={};", interface)))
}

/// Map the signal's boolean argument line to its event.
fn parse_boolean_argument(line: &str) -> Option<SessionEvent> {
    match line.trim() {
        "boolean true" => Some(SessionEvent::Locked),
        "boolean false" => Some(SessionEvent::Unlocked),
        _ => None,
    }
}
