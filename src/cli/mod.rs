//! Scriptable command-line entry points; running with no subcommand
//! launches the interactive shell.

pub mod commands;

pub use commands::{Cli, Commands, run};
