//! Command-line interface

pub mod commands;
pub mod display;
pub mod shell;

pub use commands::{Cli, Commands, ShellCommand, ShellError};
pub use shell::run_shell;
