//! `suggest` - query a string dataset from the terminal

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use clap::Parser;
use suggest_cli::{execute, AppContext, Cli};
use suggest_infra::{config, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before reading configuration from the environment
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli, dotenv.ok()).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, dotenv: Option<std::path::PathBuf>) -> anyhow::Result<Vec<String>> {
    let mut config = match &cli.config {
        Some(path) => config::load_from_file(Some(path.clone()))?,
        None => config::load_or_default()?,
    };
    if let Some(source) = cli.source {
        config.source.identifier = source;
    }

    init_tracing(&config.logging);
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let ctx = AppContext::new(config)?;
    Ok(execute(&ctx, &cli.command).await?)
}
