//! tasklist event server

use clap::Parser;
use std::path::PathBuf;
use tasklist::protocol::{EventServer, run_event_server};
use tasklist::{Session, SessionOptions};

/// tasklist event server - JSON-lines task list protocol on stdio
#[derive(Parser, Debug)]
#[command(name = "tasklist-events")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to <data dir>/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for config.yaml and storage.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Do not write the last added task to storage.json
    #[arg(long)]
    no_persist: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stderr only; stdout carries the protocol
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let session = Session::open(&SessionOptions {
        config: args.config,
        data_dir: args.data_dir,
        no_persist: args.no_persist,
    })?;

    run_event_server(
        EventServer::new(session),
        tokio::io::BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    Ok(())
}
