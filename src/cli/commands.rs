//! CLI command definitions using clap, plus the shell's line grammar

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// In-memory task list with a terminal shell and a JSON event protocol
#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to <data dir>/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for config.yaml and storage.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Do not write the last added task to storage.json
    #[arg(long, global = true)]
    pub no_persist: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive task list (default)
    Shell,

    /// Speak the JSON-lines event protocol on stdin/stdout
    Events,

    /// Print a greeting
    Greet {
        /// Name to greet
        name: String,

        /// Greet as an already logged-in user
        #[arg(short, long)]
        logged_in: bool,
    },

    /// Print the effective configuration as YAML
    Config,
}

/// Errors from parsing a shell line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown command: {0}. Type 'help' for a list of commands.")]
    UnknownCommand(String),
    #[error("Expected a task number, got '{0}'")]
    InvalidPosition(String),
    #[error("Missing task number for '{0}'")]
    MissingPosition(String),
}

/// One line typed into the shell.
///
/// Positions are 1-based, as shown in the task table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Raw text, untrimmed; the store decides whether it is blank
    Add(String),
    Remove(usize),
    Toggle(usize),
    List,
    Help,
    Quit,
    Empty,
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line.trim_end(), ""),
        };

        match verb.to_lowercase().as_str() {
            "" => Ok(ShellCommand::Empty),
            "add" | "a" => Ok(ShellCommand::Add(rest.to_string())),
            "remove" | "rm" | "delete" | "del" => {
                parse_position(verb, rest).map(ShellCommand::Remove)
            }
            "toggle" | "done" | "t" => parse_position(verb, rest).map(ShellCommand::Toggle),
            "list" | "ls" => Ok(ShellCommand::List),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            _ => Err(ShellError::UnknownCommand(verb.to_string())),
        }
    }
}

fn parse_position(verb: &str, rest: &str) -> Result<usize, ShellError> {
    let arg = rest.trim();
    if arg.is_empty() {
        return Err(ShellError::MissingPosition(verb.to_string()));
    }
    arg.parse()
        .map_err(|_| ShellError::InvalidPosition(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_keeps_raw_text() {
        assert_eq!(
            "add Buy milk".parse::<ShellCommand>().unwrap(),
            ShellCommand::Add("Buy milk".to_string())
        );
        assert_eq!(
            "a   spaced  ".parse::<ShellCommand>().unwrap(),
            ShellCommand::Add("  spaced  ".to_string())
        );
        assert_eq!(
            "add".parse::<ShellCommand>().unwrap(),
            ShellCommand::Add(String::new())
        );
    }

    #[test]
    fn test_parse_positions() {
        assert_eq!(
            "rm 2".parse::<ShellCommand>().unwrap(),
            ShellCommand::Remove(2)
        );
        assert_eq!(
            "DELETE 1".parse::<ShellCommand>().unwrap(),
            ShellCommand::Remove(1)
        );
        assert_eq!(
            "done 3 ".parse::<ShellCommand>().unwrap(),
            ShellCommand::Toggle(3)
        );
    }

    #[test]
    fn test_parse_position_errors() {
        assert_eq!(
            "rm".parse::<ShellCommand>(),
            Err(ShellError::MissingPosition("rm".to_string()))
        );
        assert_eq!(
            "rm x".parse::<ShellCommand>(),
            Err(ShellError::InvalidPosition("x".to_string()))
        );
        assert_eq!(
            "toggle -1".parse::<ShellCommand>(),
            Err(ShellError::InvalidPosition("-1".to_string()))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("ls".parse::<ShellCommand>().unwrap(), ShellCommand::List);
        assert_eq!("help".parse::<ShellCommand>().unwrap(), ShellCommand::Help);
        assert_eq!("exit".parse::<ShellCommand>().unwrap(), ShellCommand::Quit);
        assert_eq!("   ".parse::<ShellCommand>().unwrap(), ShellCommand::Empty);
        assert!(matches!(
            "frobnicate".parse::<ShellCommand>(),
            Err(ShellError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["tasklist", "greet", "Ada", "--logged-in"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Greet {
                name: "Ada".to_string(),
                logged_in: true,
            })
        );

        let cli = Cli::try_parse_from(["tasklist", "--no-persist"]).unwrap();
        assert!(cli.no_persist);
        assert!(cli.command.is_none());
    }
}
