//! Notelink CLI entry point.

use clap::Parser;
use notelink::cli::args::{Cli, Commands};
use notelink::cli::output::Output;
use notelink::cli::{backup, candidates, keys, link, list, unlink};
use notelink::config::Config;
use notelink::error::{ExitStatus, LinkerError};
use notelink::vault::Vault;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(status) => ExitCode::from(status.code() as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitStatus, LinkerError> {
    let config = Config::load()?;

    let vault_path = config.resolve_vault_path(cli.vault.as_deref())?;
    let vault = Vault::open(vault_path)?;

    let output = Output::new(cli.output_format(), cli.quiet, cli.verbose);

    match &cli.command {
        Commands::Link(args) => link::run(&vault, &config, args, &output),
        Commands::Unlink(args) => unlink::run(&vault, &config, args, &output),
        Commands::Candidates(args) => {
            candidates::run(&vault, &config, args, &output)?;
            Ok(ExitStatus::Success)
        }
        Commands::Keys(args) => {
            keys::run(&vault, args, &output)?;
            Ok(ExitStatus::Success)
        }
        Commands::List(args) => {
            list::run(&vault, args, &output)?;
            Ok(ExitStatus::Success)
        }
        Commands::Backup(args) => {
            backup::run(&vault, args, &output)?;
            Ok(ExitStatus::Success)
        }
    }
}
