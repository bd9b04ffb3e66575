//! Entry point for the **lockhook** daemon.
//!
//! Resolves the two hook commands, installs the Ctrl-C handler, spawns
//! the session event source on a background thread, and dispatches
//! events on the main thread until interrupted.
//!
//! All terminal output goes to standard error; standard output belongs
//! to the hook children.

use lockhook::cli::{self, CliError, Invocation};
use lockhook::observer::LockObserver;
use lockhook::resolver::ShellLookup;
use lockhook::runner::ProcessRunner;
use lockhook::session::dbus::DbusMonitorSource;
use lockhook::session::SessionEvent;
use lockhook::traits::EventSource;
use log::error;
use signal_hook::consts::SIGINT;
use signal_hook::iterator::Signals;
use std::sync::mpsc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    install_interrupt_handler();

    let prog = cli::program_name();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (on_lock, on_unlock) = match cli::process(args, &ShellLookup::new()) {
        Ok(Invocation::Run { on_lock, on_unlock }) => (on_lock, on_unlock),
        Ok(Invocation::Help) => {
            cli::print_help(&prog);
            std::process::exit(0);
        }
        Ok(Invocation::Version) => {
            cli::print_version(&prog);
            std::process::exit(0);
        }
        Err(CliError::MissingArguments) => {
            // Same text as --help, but the caller got it wrong: exit 1.
            cli::print_help(&prog);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("ERROR:\n    {}", e);
            std::process::exit(1);
        }
    };

    let observer = LockObserver::new(ProcessRunner::new(), on_lock, on_unlock);

    let (event_tx, event_rx) = mpsc::channel::<SessionEvent>();
    std::thread::spawn(move || {
        let mut source = DbusMonitorSource::new();
        if let Err(e) = source.run(event_tx) {
            error!("session event source error: {}", e);
        }
    });

    // Serial dispatch: a hook child blocks the loop, and events arriving
    // meanwhile queue in the channel.
    for event in event_rx {
        if let Err(e) = observer.dispatch(event) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    error!("session event stream closed, exiting");
    std::process::exit(1);
}

/// Exit cleanly on Ctrl-C, even while a hook child is still running.
///
/// The in-flight child is neither killed nor waited for; the whole
/// process terminates immediately.
fn install_interrupt_handler() {
    let mut signals = match Signals::new([SIGINT]) {
        Ok(signals) => signals,
        Err(e) => {
            error!("failed to install the interrupt handler: {}", e);
            std::process::exit(1);
        }
    };
    std::thread::spawn(move || {
        for _ in signals.forever() {
            eprintln!("received ctrl+c, exiting...");
            std::process::exit(0);
        }
    });
}
