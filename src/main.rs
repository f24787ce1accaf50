//! tasklist CLI - interactive in-memory task list

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tasklist::cli::display::{error, greeting, success};
use tasklist::cli::{Cli, Commands, run_shell};
use tasklist::protocol::{EventServer, run_event_server};
use tasklist::{Session, SessionOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let options = SessionOptions {
        config: cli.config,
        data_dir: cli.data_dir,
        no_persist: cli.no_persist,
    };

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut session = Session::open(&options)?;
            let stdin = io::stdin();
            run_shell(&mut session, stdin.lock(), io::stdout())?;
        }

        Commands::Events => {
            let session = Session::open(&options)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;

            runtime.block_on(run_event_server(
                EventServer::new(session),
                tokio::io::BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            ))?;
        }

        Commands::Greet { name, logged_in } => {
            success(&greeting(&name, logged_in));
        }

        Commands::Config => {
            let session = Session::open(&SessionOptions {
                no_persist: true,
                ..options
            })?;
            print!("{}", serde_yaml::to_string(session.config())?);
        }
    }

    Ok(())
}
