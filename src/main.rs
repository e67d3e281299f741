use anyhow::Context;
use clap::Parser;
use colored::*;
use std::process::ExitCode;

use run_all::cli::Cli;
use run_all::commands::{execute_run_mode, RunStatus};
use run_all::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(RunStatus::Failed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "[X]".red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<RunStatus> {
    let cli = Cli::parse();

    if cli.debug {
        eprintln!("{} {:?}", "DEBUG:".yellow(), cli);
    }

    if cli.init_config {
        let path = Config::init().context("Failed to write default configuration")?;
        eprintln!("{} Wrote {}", "[v]".green(), path.display());
        return Ok(RunStatus::Stopped);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if cli.debug {
        eprintln!("{} {:?}", "DEBUG:".yellow(), config);
    }

    let status = execute_run_mode(&cli, &config)
        .await
        .context("Run aborted")?;

    Ok(status)
}
