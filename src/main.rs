mod app;
mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod pager;
mod responses;
mod store;
mod tui;
mod types;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use client::RosterClient;
use config::Config;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global output format
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/client
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "roster", &mut io::stdout());
        }
        Some(Commands::Init) => {
            commands::init::run()?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let client = RosterClient::new(config.endpoint()?);

            match command {
                Some(Commands::List(args)) => {
                    commands::list::run(&client, &config, args).await?;
                }
                Some(Commands::Browse) | None => {
                    commands::browse::run(&client, &config).await?;
                }
                Some(Commands::Completions { .. }) | Some(Commands::Init) => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
