//! **lockhook**: run hook commands on session lock and unlock.
//!
//! The daemon takes two commands on its command line, resolves each
//! against the user's `PATH` at startup, then waits for the desktop
//! session to lock or unlock and runs the matching command inline, with
//! stdout and stderr attached to the daemon's own.  It keeps running
//! until interrupted with Ctrl-C.
//!
//! # Architecture
//!
//! The crate is organised around three traits in [`traits`]:
//!
//! * [`traits::PathLookup`] abstracts command-name resolution so the
//!   argument processor is not coupled to the shell.
//! * [`traits::CommandRunner`] abstracts child-process execution so the
//!   observer logic is testable without spawning anything.
//! * [`traits::EventSource`] abstracts the transport that delivers
//!   lock/unlock events so the main loop is not coupled to any specific
//!   OS notification mechanism.
//!
//! Concrete implementations live in [`resolver`] (`command -v` via the
//! shell), [`runner`] (`std::process`), and [`session::dbus`] (session
//! bus screensaver signals).

pub mod cli;
pub mod command;
pub mod observer;
pub mod resolver;
pub mod runner;
pub mod session;
pub mod traits;
