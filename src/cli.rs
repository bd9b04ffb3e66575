//! Command-line argument processing.
//!
//! The grammar is small but irregular: a literal `--` shields everything
//! after it from flag scanning, the help/version flags are recognized as
//! exact tokens anywhere before it, and the first effective token is the
//! lock command while every remaining token belongs to the unlock
//! command.  Parsing is a pure function from the argument vector to an
//! [`Invocation`] or a [`CliError`]; the entry point maps the outcome to
//! text and an exit code.

use crate::command::CommandSpec;
use crate::traits::PathLookup;
use std::path::Path;

/// What an argument vector asks the program to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run the daemon with the two resolved hooks.
    Run {
        on_lock: CommandSpec,
        on_unlock: CommandSpec,
    },
    /// Print the help text and exit successfully.
    Help,
    /// Print the version text and exit successfully.
    Version,
}

/// Rejected argument vectors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    /// Fewer than two tokens remained after delimiter and flag handling.
    #[error("expected a lock command and an unlock command")]
    MissingArguments,
    /// A command name did not resolve.  Carries the name as typed.
    #[error("{0} not found in PATH")]
    CommandNotFound(String),
    /// The lookup machinery itself could not run.
    #[error("could not look up {name}: {detail}")]
    Lookup { name: String, detail: String },
}

/// Parse and resolve the argument vector (everything after the program
/// name).
///
/// Flags win over commands: `lockhook ./a --help ./b` prints help.  The
/// split point is fixed after exactly one token: the lock command is
/// always a single word, everything else is the unlock command and its
/// arguments.  To pass flag-lookalike tokens to the unlock command, put
/// them after `--`.
pub fn process(
    args: Vec<String>,
    lookup: &impl PathLookup,
) -> Result<Invocation, CliError> {
    let mut working = args;

    // Everything after a literal `--` is set aside verbatim, out of reach
    // of the flag scan below.
    let tail = match working.iter().position(|arg| arg == "--") {
        Some(i) => {
            let mut tail = working.split_off(i);
            tail.remove(0);
            tail
        }
        None => Vec::new(),
    };

    if remove_token(&mut working, "--help") || remove_token(&mut working, "help") {
        return Ok(Invocation::Help);
    }
    if remove_token(&mut working, "--version")
        || remove_token(&mut working, "-V")
        || remove_token(&mut working, "version")
    {
        return Ok(Invocation::Version);
    }

    working.extend(tail);
    if working.len() < 2 {
        return Err(CliError::MissingArguments);
    }

    let rest = working.split_off(1);
    let on_lock = resolve_group(working, lookup)?;
    let on_unlock = resolve_group(rest, lookup)?;
    Ok(Invocation::Run { on_lock, on_unlock })
}

/// Remove the first exact occurrence of `token`, reporting whether one
/// was found.
fn remove_token(args: &mut Vec<String>, token: &str) -> bool {
    match args.iter().position(|arg| arg == token) {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    }
}

/// Resolve a group's leading command name and substitute the resolved
/// path, leaving the remaining tokens untouched.
fn resolve_group(
    mut group: Vec<String>,
    lookup: &impl PathLookup,
) -> Result<CommandSpec, CliError> {
    let name = group.remove(0);
    match lookup.resolve(&name) {
        Ok(Some(path)) => Ok(CommandSpec::new(path, group)),
        Ok(None) => Err(CliError::CommandNotFound(name)),
        Err(e) => Err(CliError::Lookup {
            name,
            detail: e.to_string(),
        }),
    }
}

//  Terminal text

/// Basename of `argv[0]`, falling back to the crate name.
pub fn program_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// One-line version banner.
pub fn version_line(prog: &str) -> String {
    format!("{} {}", prog, env!("CARGO_PKG_VERSION"))
}

/// Copyright notice, printed below the version and help texts.
pub const COPYRIGHT: &str = "Copyright 2025 the lockhook developers";

/// The help body, without the surrounding version and copyright lines.
pub fn help_message(prog: &str) -> String {
    format!(
        "Runs a user-specified command whenever the desktop session is locked or
unlocked, by watching the session bus for the screensaver ActiveChanged
signal.  Commands are found with `command -v` against the user's PATH
(an explicit path works too) and run with stdout and stderr attached to
{prog}'s own.

USAGE
  {prog} [OPTIONS] <on_lock_command> <on_unlock_command>
  {prog} <on_lock_command> -- <on_unlock_command> [unlock_args...]

EXAMPLE
  {prog} ./onlock ./onunlock

OPTIONS
  --version, -V, version
      Display the version information and exit.
  --help, help
      Display this help and exit."
    )
}

/// Print the full help surface (version, help body, copyright) to
/// standard error.
///
/// Shared by the `--help` branch (exit 0) and the missing-arguments
/// branch (exit 1); only the exit code differs.
pub fn print_help(prog: &str) {
    eprintln!("{}", version_line(prog));
    eprintln!();
    eprintln!("{}", help_message(prog));
    eprintln!();
    eprintln!("{}", COPYRIGHT);
}

/// Print the version surface (version, copyright) to standard error.
pub fn print_version(prog: &str) {
    eprintln!("{}", version_line(prog));
    eprintln!("{}", COPYRIGHT);
}
