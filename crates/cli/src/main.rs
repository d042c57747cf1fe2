mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::RunArgs;
use commands::run;

/// Virevo: A Viral Genome Evolution Simulator
///
/// This tool simulates a population of viral genomes mutating at random,
/// generation by generation, until one matches the infectious target.
#[derive(Parser, Debug)]
#[command(name = "virevo")]
#[command(author, version, about = "Simulates viral genomes mutating toward an infectious target", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation.
    ///
    /// Executes the simulation generation by generation and reports every
    /// infection event as it happens.
    Run(Box<RunArgs>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(run_args) => {
            run::run_simulation(&run_args)?;
        }
    }

    Ok(())
}
