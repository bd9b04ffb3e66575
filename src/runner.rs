//! Child-process [`CommandRunner`] implementation.

use crate::command::CommandSpec;
use crate::traits::CommandRunner;
use log::debug;
use std::process::Command;

/// Runs hook commands as child processes with inherited stdio.
#[derive(Debug, Default)]
pub struct ProcessRunner;

/// The hook child could not be started.
///
/// Distinct from the child failing once started, which is not an error
/// at all.
#[derive(Debug, thiserror::Error)]
#[error("failed to run {path}: {source}")]
pub struct SpawnError {
    /// The resolved path that would not start.
    pub path: String,
    /// The underlying OS error.
    #[source]
    pub source: std::io::Error,
}

impl ProcessRunner {
    /// Create a new runner handle.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    type Error = SpawnError;

    /// Spawn the command and block until it exits.
    ///
    /// The child's stdout and stderr are the daemon's own.  Hooks are
    /// fire-and-forget side effects: a non-zero child exit gets a debug
    /// log line and nothing else, only failure to start the child is
    /// reported.
    fn run(&self, spec: &CommandSpec) -> Result<(), SpawnError> {
        let mut child = Command::new(&spec.path)
            .args(&spec.args)
            .spawn()
            .map_err(|e| SpawnError {
                path: spec.path.clone(),
                source: e,
            })?;

        match child.wait() {
            Ok(status) if !status.success() => {
                debug!("{} exited with {}", spec.path, status);
            }
            Ok(_) => {}
            Err(e) => debug!("wait on {} failed: {}", spec.path, e),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_arguments_and_waits_for_exit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let marker = dir.path().join("ran");
        let spec = CommandSpec::new(
            "/bin/sh".into(),
            vec![
                "-c".into(),
                r#"touch "$0""#.into(),
                marker.display().to_string(),
            ],
        );
        ProcessRunner::new().run(&spec).expect("run");
        // run() blocks until the child exits, so the marker exists now.
        assert!(marker.exists());
    }

    #[test]
    fn nonzero_child_exit_is_not_an_error() {
        let spec = CommandSpec::new("/bin/sh".into(), vec!["-c".into(), "exit 3".into()]);
        assert!(ProcessRunner::new().run(&spec).is_ok());
    }

    #[test]
    fn spawn_failure_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("vanished");
        let spec = CommandSpec::new(missing.display().to_string(), vec![]);
        let err = ProcessRunner::new().run(&spec).expect_err("must fail");
        assert_eq!(err.path, missing.display().to_string());
    }
}
