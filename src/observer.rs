//! Reacts to session events by running the configured hooks.

use crate::command::CommandSpec;
use crate::session::SessionEvent;
use crate::traits::CommandRunner;
use log::info;

/// Holds the two resolved hook commands for the life of the process and
/// runs the matching one on each [`SessionEvent`].
///
/// There is no lock/unlock toggle tracked here: two `locked` deliveries
/// in a row run the lock hook twice.  Dispatch is synchronous: the
/// runner blocks until the child exits, so hooks never overlap and
/// events arriving meanwhile queue up in the channel feeding
/// [`dispatch`](LockObserver::dispatch).
pub struct LockObserver<R: CommandRunner> {
    runner: R,
    on_lock: CommandSpec,
    on_unlock: CommandSpec,
}

impl<R: CommandRunner> LockObserver<R> {
    /// Store both hooks and announce what the daemon is waiting for.
    pub fn new(runner: R, on_lock: CommandSpec, on_unlock: CommandSpec) -> Self {
        info!(
            "waiting for the session to lock (runs: {}) or unlock (runs: {})",
            on_lock, on_unlock
        );
        Self {
            runner,
            on_lock,
            on_unlock,
        }
    }

    /// Run the hook for `event`, blocking until its child exits.
    pub fn dispatch(&self, event: SessionEvent) -> Result<(), R::Error> {
        info!("session event: {}", event);
        match event {
            SessionEvent::Locked => self.runner.run(&self.on_lock),
            SessionEvent::Unlocked => self.runner.run(&self.on_unlock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// A test double that records every spec it is asked to run.
    #[derive(Default)]
    struct RecordingRunner {
        log: RefCell<Vec<String>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock spawn failure")]
    struct MockSpawnError;

    impl CommandRunner for RecordingRunner {
        type Error = MockSpawnError;

        fn run(&self, spec: &CommandSpec) -> Result<(), MockSpawnError> {
            self.log.borrow_mut().push(spec.path.clone());
            Ok(())
        }
    }

    /// A test double that always refuses to spawn.
    struct FailingRunner;

    impl CommandRunner for FailingRunner {
        type Error = MockSpawnError;

        fn run(&self, _spec: &CommandSpec) -> Result<(), MockSpawnError> {
            Err(MockSpawnError)
        }
    }

    fn hooks() -> (CommandSpec, CommandSpec) {
        (
            CommandSpec::new("/usr/bin/onlock".into(), vec![]),
            CommandSpec::new("/usr/bin/onunlock".into(), vec!["now".into()]),
        )
    }

    #[test]
    fn lock_event_runs_the_lock_hook() {
        let (on_lock, on_unlock) = hooks();
        let observer = LockObserver::new(RecordingRunner::default(), on_lock, on_unlock);
        observer.dispatch(SessionEvent::Locked).unwrap();
        assert_eq!(*observer.runner.log.borrow(), vec!["/usr/bin/onlock"]);
    }

    #[test]
    fn unlock_event_runs_the_unlock_hook() {
        let (on_lock, on_unlock) = hooks();
        let observer = LockObserver::new(RecordingRunner::default(), on_lock, on_unlock);
        observer.dispatch(SessionEvent::Unlocked).unwrap();
        assert_eq!(*observer.runner.log.borrow(), vec!["/usr/bin/onunlock"]);
    }

    #[test]
    fn repeated_lock_events_each_run_the_hook_again() {
        // Desktops can report lock twice with no unlock in between; both
        // deliveries run the hook, in order.
        let (on_lock, on_unlock) = hooks();
        let observer = LockObserver::new(RecordingRunner::default(), on_lock, on_unlock);
        observer.dispatch(SessionEvent::Locked).unwrap();
        observer.dispatch(SessionEvent::Locked).unwrap();
        assert_eq!(
            *observer.runner.log.borrow(),
            vec!["/usr/bin/onlock", "/usr/bin/onlock"]
        );
    }

    #[test]
    fn runner_errors_propagate() {
        let (on_lock, on_unlock) = hooks();
        let observer = LockObserver::new(FailingRunner, on_lock, on_unlock);
        assert!(observer.dispatch(SessionEvent::Locked).is_err());
    }
}
