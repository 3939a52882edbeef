use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vector_removal::{
    Algorithm, BenchConfig, EXPERIMENT_COUNT, ExperimentCell, RemovalFixture, SeededRngProvider,
    TrialOutcome, Unit, experiment_values, verify,
};

#[derive(Parser)]
#[command(name = "vector-removal")]
#[command(about = "Inspect the vector removal benchmark grid and verify its algorithms", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every experiment point with its sizes and iteration count
    Space,
    /// List the registered benchmark units
    Units,
    /// Run each algorithm on fixture data and check its output
    Verify {
        /// Only verify this experiment point
        #[arg(short, long)]
        index: Option<usize>,

        /// Fixture seed (random if omitted, printed for reproduction)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip quadratic algorithms above this destination length
        #[arg(long)]
        size_gate: Option<usize>,

        /// Number of fixtures per point
        #[arg(short, long, default_value_t = 1)]
        rounds: u64,

        /// Show a line per algorithm instead of per point
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig::from_env().context("Failed to read VECTOR_REMOVAL_* settings")?;

    match cli.command {
        Commands::Space => show_space(),
        Commands::Units => list_units(&config),
        Commands::Verify {
            index,
            seed,
            size_gate,
            rounds,
            verbose,
        } => {
            let seed = seed.or(config.seed);
            let mut config = config.with_seed(seed);
            if let Some(size_gate) = size_gate {
                config = config.with_size_gate(size_gate);
            }
            run_verify(&config, index, rounds, verbose)
        }
    }
}

fn show_space() -> Result<()> {
    let points = experiment_values();

    println!(
        "{}",
        format!("Experiment space ({} points):", points.len()).bold()
    );
    println!();
    println!(
        "{}",
        format!(
            "  {:>5}  {:>11}  {:>8}  {:>7}  {:>10}",
            "index", "destination", "fraction", "source", "iterations"
        )
        .bold()
    );

    for point in &points {
        let cell = point.cell()?;
        println!(
            "  {:>5}  {:>11}  {:>8}  {:>7}  {:>10}",
            point.index,
            cell.destination_len(),
            cell.fraction(),
            cell.source_len(),
            point.iterations
        );
    }

    Ok(())
}

fn list_units(config: &BenchConfig) -> Result<()> {
    println!("{}", format!("Units ({}):", Unit::ALL.len()).bold());
    println!();

    for unit in Unit::ALL {
        print!("  {} ", "●".bright_blue());
        print!("{}", format!("{:<24}", unit.name()).cyan().bold());

        match unit {
            Unit::Baseline => println!("{}", "randomize + cleanup only".bright_black()),
            Unit::Removal(algorithm) => {
                print!(
                    "{} semantics, {} order",
                    algorithm.semantics(),
                    algorithm.ordering()
                );
                if algorithm.is_size_gated() {
                    print!(
                        "{}",
                        format!(", skipped above {} elements", config.size_gate).yellow()
                    );
                }
                println!();
            }
        }
    }

    Ok(())
}

#[derive(Debug, Default)]
struct Tally {
    passed: usize,
    skipped: usize,
    failed: usize,
}

fn run_verify(config: &BenchConfig, index: Option<usize>, rounds: u64, verbose: bool) -> Result<()> {
    let cells = match index {
        Some(index) => vec![
            ExperimentCell::decode(index)
                .with_context(|| format!("Cannot verify point {}", index))?,
        ],
        None => (0..EXPERIMENT_COUNT)
            .map(ExperimentCell::decode)
            .collect::<Result<Vec<_>, _>>()?,
    };

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, points = cells.len(), rounds, "verifying");

    println!(
        "{}",
        format!(
            "Verifying {} algorithm(s) on {} point(s), {} round(s), seed {}",
            Algorithm::ALL.len(),
            cells.len(),
            rounds,
            seed
        )
        .bold()
    );
    println!();

    let mut tally = Tally::default();
    for round in 0..rounds {
        let provider = SeededRngProvider::new(seed.wrapping_add(round));
        let mut fixture = RemovalFixture::with_provider(provider);

        for cell in &cells {
            let mut failures = Vec::new();
            let mut skipped = 0;

            for algorithm in Algorithm::ALL {
                fixture.set_up_cell(cell);
                let mut result = Ok(());
                let outcome = Unit::Removal(algorithm).run_observed(
                    &mut fixture,
                    config,
                    |before, source, after| {
                        result = verify::check(algorithm, before, source, after);
                    },
                );

                let status = match (outcome, result) {
                    (TrialOutcome::Skipped, _) => {
                        tally.skipped += 1;
                        skipped += 1;
                        "skipped".yellow()
                    }
                    (TrialOutcome::Completed, Ok(())) => {
                        tally.passed += 1;
                        "ok".green()
                    }
                    (TrialOutcome::Completed, Err(error)) => {
                        tally.failed += 1;
                        failures.push(error);
                        "FAILED".red().bold()
                    }
                };

                if verbose {
                    println!(
                        "  point {:>2} ({:>6} / {:>6})  {:<24} {}",
                        cell.index(),
                        cell.destination_len(),
                        cell.source_len(),
                        algorithm.name(),
                        status
                    );
                }
            }

            if !verbose {
                let marker = if failures.is_empty() {
                    "✓".green()
                } else {
                    "✗".red()
                };
                print!(
                    "  {} point {:>2} ({:>6} / {:>6})",
                    marker,
                    cell.index(),
                    cell.destination_len(),
                    cell.source_len()
                );
                if skipped > 0 {
                    print!("{}", format!("  {} skipped", skipped).bright_black());
                }
                println!();
            }

            for error in &failures {
                println!("      {} {}", "→".bright_black(), error.to_string().red());
            }
        }
    }

    println!();
    println!(
        "{} passed, {} skipped, {} failed",
        tally.passed.to_string().green(),
        tally.skipped.to_string().yellow(),
        if tally.failed > 0 {
            tally.failed.to_string().red()
        } else {
            tally.failed.to_string().normal()
        }
    );

    if tally.failed > 0 {
        println!(
            "{}",
            format!("Reproduce with: vector-removal verify --seed {}", seed).bright_black()
        );
        bail!("{} check(s) failed", tally.failed);
    }

    Ok(())
}
