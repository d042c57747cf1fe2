use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::str::FromStr;

use virevo_sim::base::{Nucleotide, Sequence};
use virevo_sim::simulation::{ConvergencePolicy, FitnessMatrix, Simulation, SimulationBuilder};

use crate::args::{OutputFormat, PolicyArg, RunArgs};
use crate::printing::{print_run_summary, print_simulation_parameters};
use crate::utils::write_output;

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    println!("🦠 Virevo - Running Simulation");
    println!("============================================");

    let (initial, target) = resolve_genomes(args)?;

    let policy = match args.policy {
        PolicyArg::Freeze => ConvergencePolicy::Freeze,
        PolicyArg::KeepMutating => ConvergencePolicy::KeepMutating,
    };

    let mut builder = SimulationBuilder::new()
        .population_size(args.population_size)
        .generations(args.generations)
        .initial_state(initial)
        .target_state(target)
        .mutation_rate(args.mutation_rate)
        .convergence_policy(policy);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let mut sim = builder
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to initialize simulation: {e}"))?;

    print_simulation_parameters(&sim);

    println!("Running {} generations...", args.generations);

    let pb = if args.progress {
        let pb = ProgressBar::new(args.generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    for generation in 1..=args.generations {
        let events = sim
            .step()
            .map_err(|e| anyhow::anyhow!("Generation {generation}: {e}"))?;

        for event in &events {
            let notice = format!(
                "Virus has infected the cell at generation {} (individual {})",
                event.generation, event.individual
            );
            match &pb {
                Some(pb) => pb.println(&notice),
                None => println!("{notice}"),
            }
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    println!("\n✓ Simulation complete!");
    print_run_summary(&sim);

    match args.format {
        OutputFormat::Summary => {}
        OutputFormat::Csv => {
            let content = matrix_to_csv(sim.fitness_matrix());
            write_output(&content, args.output.as_ref())?;
        }
        OutputFormat::Json => {
            let content = run_to_json(&sim)?;
            write_output(&content, args.output.as_ref())?;
        }
    }

    Ok(())
}

/// Determine the initial and target genomes from the arguments.
///
/// Explicit `--initial`/`--target` strings win; otherwise the built-in
/// scenario is used (all-A start, first half G and second half C target,
/// both `--length` bases long).
fn resolve_genomes(args: &RunArgs) -> Result<(Sequence, Sequence)> {
    if let (Some(initial), Some(target)) = (&args.initial, &args.target) {
        let initial =
            Sequence::from_str(initial).map_err(|e| anyhow::anyhow!("Invalid --initial: {e}"))?;
        let target =
            Sequence::from_str(target).map_err(|e| anyhow::anyhow!("Invalid --target: {e}"))?;
        return Ok((initial, target));
    }

    let half = args.length / 2;
    let initial = Sequence::uniform(Nucleotide::A, args.length);
    let mut bases = vec![Nucleotide::G; half];
    bases.extend(std::iter::repeat(Nucleotide::C).take(args.length - half));
    let target = Sequence::from_nucleotides(bases);

    Ok((initial, target))
}

/// One header line, then one row per individual with a column per generation.
fn matrix_to_csv(matrix: &FitnessMatrix) -> String {
    let mut content = String::from("individual");
    for g in 0..matrix.generations() {
        content.push_str(&format!(",gen{g}"));
    }
    content.push('\n');

    for (i, row) in matrix.rows().enumerate() {
        content.push_str(&i.to_string());
        for value in row {
            content.push_str(&format!(",{value}"));
        }
        content.push('\n');
    }

    content
}

/// Full run record: parameters, infection events, and the fitness matrix.
fn run_to_json(sim: &Simulation) -> Result<String> {
    use serde_json::json;

    let config = sim.config();
    let record = json!({
        "population_size": config.population_size,
        "generations": config.total_generations,
        "genome_length": sim.fitness().len(),
        "mutation_rate": sim.mutation().rate(),
        "seed": config.seed,
        "infections": sim.infections(),
        "fitness": sim.fitness_matrix(),
    });

    Ok(serde_json::to_string_pretty(&record)?)
}
