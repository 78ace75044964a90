#![deny(missing_docs)]

//! # Swaggen CLI
//!
//! Command line host for the Swagger annotation planner.
//!
//! Supported Commands:
//! - `candidates`: lists the members the selector offers for a snapshot.
//! - `generate`: plans annotation insertions, optionally applying them to
//!   the snapshot.

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod candidates;
mod error;
mod generate;
mod snapshot_io;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Swagger annotation planner CLI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists the annotation candidates a snapshot offers.
    Candidates(candidates::CandidatesArgs),
    /// Plans Swagger annotation insertions for a snapshot.
    Generate(generate::GenerateArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Candidates(args) => candidates::execute(args)?,
        Commands::Generate(args) => generate::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
