use virevo_sim::base::Sequence;
use virevo_sim::simulation::{ConvergencePolicy, Simulation};

const PREVIEW_LEN: usize = 40;

/// Render a sequence for display, truncating long ones.
fn preview(seq: &Sequence) -> String {
    let s = seq.to_string();
    if s.len() <= PREVIEW_LEN {
        s
    } else {
        format!("{}… ({} bp)", &s[..PREVIEW_LEN], s.len())
    }
}

pub fn print_simulation_parameters(sim: &Simulation) {
    let config = sim.config();

    println!("\n📋 Simulation Configuration");
    println!(
        "  • Population Size: {} [-n, --population-size]",
        config.population_size
    );
    println!(
        "  • Generations: {} [-g, --generations]",
        config.total_generations
    );
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🧬 Genomes");
    println!("  • Length: {} bp", sim.fitness().len());
    if let Some(initial) = sim.population().get(0) {
        println!("  • Initial: {}", preview(initial));
    }
    println!("  • Target:  {}", preview(&sim.fitness().target().to_mutable()));

    println!("\n⚡ Evolution");
    println!(
        "  • Mutation Rate: {} per base per generation [--mutation-rate]",
        sim.mutation().rate()
    );
    let policy = match sim.policy() {
        ConvergencePolicy::Freeze => "freeze (infected genomes stop mutating)",
        ConvergencePolicy::KeepMutating => "keep-mutating (infected genomes may drift back)",
    };
    println!("  • Convergence Policy: {policy} [--policy]");
    println!();
}

pub fn print_run_summary(sim: &Simulation) {
    let matrix = sim.fitness_matrix();
    let last = matrix.generations().saturating_sub(1);

    let mut best: f64 = 0.0;
    let mut sum = 0.0;
    for i in 0..matrix.individuals() {
        if let Some(v) = matrix.get(i, last) {
            best = best.max(v);
            sum += v;
        }
    }
    let mean = sum / matrix.individuals() as f64;

    println!("\n📊 Run Summary");
    println!(
        "  • Infected individuals: {}/{}",
        sim.converged_count(),
        matrix.individuals()
    );
    match sim.infections().first() {
        Some(first) => println!(
            "  • First infection: generation {} (individual {})",
            first.generation, first.individual
        ),
        None => println!("  • First infection: none"),
    }
    println!("  • Final best fitness: {best:.4}");
    println!("  • Final mean fitness: {mean:.4}");
}
