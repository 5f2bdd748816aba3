use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sst_cases::{
    CaseFile, RunOptions, RunReport, Status, default_case_path, load_case_file, run_cases,
};
use sst_core::{
    PlusSignCounter, PlusStrategy, format_strokes, minimum_stabilization_cost, parse_strokes,
    random_radii, random_strokes, stabilization_plan, strokes_from_parts,
};

#[derive(Parser)]
#[command(name = "sst", about = "Plus-sign counter and disc-stack stabilizer")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count plus signs painted by a stroke path
    Plus {
        /// Compact path notation, e.g. "U6 L3 D4"
        path: Option<String>,

        /// Stroke lengths, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        lengths: Option<Vec<i64>>,

        /// Direction codes, one of U/D/L/R per stroke
        #[arg(long)]
        directions: Option<String>,

        /// Segment storage: unit or sweep
        #[arg(long, default_value_t = PlusStrategy::Unit)]
        strategy: PlusStrategy,
    },

    /// Minimum cost to make disc radii strictly increasing top to bottom
    Stack {
        /// Radii from top to bottom, comma separated
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        radii: Vec<i64>,

        /// Cost per unit of inflation
        #[arg(long, allow_negative_numbers = true)]
        inflate: i64,

        /// Cost per unit of deflation
        #[arg(long, allow_negative_numbers = true)]
        deflate: i64,

        /// Also print one optimal final arrangement
        #[arg(long)]
        plan: bool,
    },

    /// Run the built-in reference vectors
    Samples {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a TOML or JSON case file (defaults to $SST_CASES)
    Run {
        file: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Override every plus case's strategy
        #[arg(long)]
        strategy: Option<PlusStrategy>,
    },

    /// Solve a seeded random instance
    Random {
        #[command(subcommand)]
        target: RandomTarget,
    },
}

#[derive(Subcommand)]
enum RandomTarget {
    /// Random stroke path, counted with both strategies
    Plus {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// Maximum stroke length
        #[arg(long, default_value_t = 1000)]
        max: u64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Random disc stack
    Stack {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// Maximum radius
        #[arg(long, default_value_t = 1_000_000)]
        max: i64,
        #[arg(long, default_value_t = 1)]
        inflate: i64,
        #[arg(long, default_value_t = 1)]
        deflate: i64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Plus {
            path,
            lengths,
            directions,
            strategy,
        } => cmd_plus(
            path.as_deref(),
            lengths.as_deref(),
            directions.as_deref(),
            *strategy,
        ),
        Commands::Stack {
            radii,
            inflate,
            deflate,
            plan,
        } => cmd_stack(radii, *inflate, *deflate, *plan),
        Commands::Samples { json } => cmd_samples(*json),
        Commands::Run {
            file,
            json,
            strategy,
        } => cmd_run(file.as_deref(), *json, *strategy),
        Commands::Random { target } => cmd_random(target),
    }
}

fn cmd_plus(
    path: Option<&str>,
    lengths: Option<&[i64]>,
    directions: Option<&str>,
    strategy: PlusStrategy,
) -> Result<()> {
    let strokes = match (path, lengths, directions) {
        (Some(path), None, None) => parse_strokes(path).context("failed to parse path")?,
        (None, Some(lengths), Some(directions)) => {
            strokes_from_parts(lengths, directions).context("invalid strokes")?
        }
        (Some(_), _, _) => bail!("give either a path or --lengths/--directions, not both"),
        (None, _, _) => bail!("give a path, or both --lengths and --directions"),
    };
    tracing::debug!("counting {} strokes with {strategy}", strokes.len());

    let count = PlusSignCounter::new(strategy)
        .count(&strokes)
        .context("failed to count plus signs")?;
    println!("{count}");
    Ok(())
}

fn cmd_stack(radii: &[i64], inflate: i64, deflate: i64, plan: bool) -> Result<()> {
    if plan {
        let plan = stabilization_plan(radii.len(), radii, inflate, deflate)
            .context("failed to stabilize stack")?;
        println!("cost:     {}", plan.cost);
        println!(
            "radii:    {}",
            plan.radii
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(",")
        );
        println!("inflated: {}", plan.inflated);
        println!("deflated: {}", plan.deflated);
    } else {
        let cost = minimum_stabilization_cost(radii.len(), radii, inflate, deflate)
            .context("failed to stabilize stack")?;
        println!("{cost}");
    }
    Ok(())
}

fn cmd_samples(json: bool) -> Result<()> {
    let report = run_cases(&CaseFile::builtin(), &RunOptions::default());
    finish_report(&report, json)
}

fn cmd_run(file: Option<&Path>, json: bool, strategy: Option<PlusStrategy>) -> Result<()> {
    let path = match file.map(Path::to_path_buf).or_else(default_case_path) {
        Some(path) => path,
        None => bail!("no case file given and SST_CASES is not set"),
    };
    let cases = load_case_file(&path)
        .with_context(|| format!("failed to load cases from {}", path.display()))?;
    if cases.is_empty() {
        tracing::warn!("{} contains no cases", path.display());
    }

    let report = run_cases(&cases, &RunOptions { strategy });
    finish_report(&report, json)
}

fn finish_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json().context("failed to serialize report")?);
    } else {
        for outcome in &report.outcomes {
            let answer = outcome
                .answer
                .map(|a| a.to_string())
                .or_else(|| outcome.error.clone())
                .unwrap_or_default();
            let expected = outcome
                .expected
                .map(|e| format!(" (expected {e})"))
                .unwrap_or_default();
            let label = match outcome.status {
                Status::Pass => "ok",
                Status::Fail => "FAIL",
                Status::Unchecked => "--",
                Status::Error => "ERROR",
            };
            println!("{label:<5} {}: {answer}{expected}", outcome.name);
        }
        let s = report.summary();
        println!(
            "passed={}, failed={}, unchecked={}, errors={}",
            s.pass, s.fail, s.unchecked, s.error
        );
    }

    if !report.all_passed() {
        let s = report.summary();
        bail!("{} case(s) failed, {} rejected", s.fail, s.error);
    }
    Ok(())
}

fn cmd_random(target: &RandomTarget) -> Result<()> {
    match *target {
        RandomTarget::Plus { count, max, seed } => {
            let strokes = random_strokes(count, max, &mut SmallRng::seed_from_u64(seed));
            tracing::debug!("path: {}", format_strokes(&strokes));

            let mut counts = Vec::new();
            for strategy in [PlusStrategy::Unit, PlusStrategy::Sweep] {
                let started = Instant::now();
                let n = PlusSignCounter::new(strategy)
                    .count(&strokes)
                    .context("failed to count plus signs")?;
                println!("{:<6} {n} ({:.1?})", strategy.as_str(), started.elapsed());
                counts.push(n);
            }
            if counts[0] != counts[1] {
                bail!("strategies disagree: {} vs {}", counts[0], counts[1]);
            }
        }
        RandomTarget::Stack {
            count,
            max,
            inflate,
            deflate,
            seed,
        } => {
            let radii = random_radii(count, max, &mut SmallRng::seed_from_u64(seed));
            let started = Instant::now();
            let cost = minimum_stabilization_cost(radii.len(), &radii, inflate, deflate)
                .context("failed to stabilize stack")?;
            println!("cost {cost} ({:.1?})", started.elapsed());
        }
    }
    Ok(())
}
