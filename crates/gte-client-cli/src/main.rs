#![warn(clippy::all, rust_2018_idioms)]

use clap::Parser;
use gte_client_cli::{cli::Cli, commands, configuration::get_configuration};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let configuration = get_configuration()?;

    if let Err(e) = gte_client_cli::tracing::init(&args, configuration.client.log_folder()) {
        eprintln!("Failed to start tracing: {e}");
    }

    commands::run(args.command, &configuration.client).await
}
