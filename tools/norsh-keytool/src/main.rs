//! Norsh Keytool entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use norsh_keytool::{execute, init_logging, Cli, KeytoolConfig};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = KeytoolConfig::from_env().with_overrides(cli.log_level, cli.json_logs);
    init_logging(&config).context("failed to initialize logging")?;

    let outcome = execute(cli.command, &config)?;
    println!("{}", outcome.stdout);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
