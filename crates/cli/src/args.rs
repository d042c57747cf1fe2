use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::defaults;

/// What to do with an individual once its genome fully matches the target.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyArg {
    /// Stop mutating it; later matrix entries stay at 1.0
    #[default]
    Freeze,
    /// Keep mutating it; it may drift away from the target again
    KeepMutating,
}

/// Output format for the fitness matrix.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable run summary only
    #[default]
    Summary,
    /// One CSV row per individual, one column per generation
    Csv,
    /// Full run record as JSON (parameters, infections, matrix)
    Json,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Population size
    #[arg(short = 'n', long, default_value_t = defaults::POPULATION_SIZE)]
    pub population_size: usize,

    /// Number of generations
    #[arg(short = 'g', long, default_value_t = defaults::GENERATIONS)]
    pub generations: usize,

    /// Genome length for the built-in scenario (all-A start, half-G
    /// half-C target)
    #[arg(short = 'l', long, default_value_t = defaults::GENOME_LENGTH)]
    pub length: usize,

    /// Explicit initial genome (e.g. "AATTGG"); overrides --length
    #[arg(long, requires = "target", conflicts_with = "length")]
    pub initial: Option<String>,

    /// Explicit target genome; must have the same length as --initial
    #[arg(long, requires = "initial")]
    pub target: Option<String>,

    /// Per-base, per-generation mutation probability
    #[arg(long, default_value_t = defaults::MUTATION_RATE)]
    pub mutation_rate: f64,

    /// Behavior after an individual reaches the target
    #[arg(long, value_enum, default_value = "freeze")]
    pub policy: PolicyArg,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Output format for the fitness matrix (summary, csv, json)
    #[arg(short = 'f', long, value_enum, default_value = "summary")]
    pub format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
