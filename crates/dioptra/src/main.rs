//! dioptra command-line interface.
//!
//! ## Usage
//!
//! ```bash
//! dioptra --z 3 --max-n 64 --max-solutions 8 --iterations 4 --exact-halving
//! dioptra --config run.toml
//! dioptra --generate-config run.toml
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dioptra::render::render_table;
use dioptra_solve::{ParallelConfig, SolveParams};
use dioptra_triples::{run_with_consumer, HalvingMode, PipelineConfig};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Enumerate quadratic-form solutions and build Pell-driven triples.
#[derive(Parser, Debug)]
#[command(name = "dioptra")]
#[command(version)]
#[command(about = "Quadratic forms, Pell samples and the triples built from them", long_about = None)]
struct Args {
    /// Modulus parameter z
    #[arg(short = 'z', long, default_value_t = 3)]
    z: u64,

    /// Sweep n = 1..=MAX_N
    #[arg(short = 'n', long, default_value_t = 64)]
    max_n: u64,

    /// Maximum number of (x, y) pairs per n
    #[arg(short = 's', long = "max-solutions", default_value_t = 8)]
    max_solutions_per_n: usize,

    /// Number of recurrence columns
    #[arg(short = 'i', long, default_value_t = 3)]
    iterations: usize,

    /// Cap the Pell sample search at this value of p
    #[arg(long)]
    pell_search_limit: Option<u64>,

    /// Keep half-integer triples instead of reporting them as errors
    #[arg(long)]
    exact_halving: bool,

    /// Run everything on the current thread
    #[arg(long)]
    sequential: bool,

    /// Configuration file path (overrides the numeric flags)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write a sample configuration file and exit
    #[arg(long)]
    generate_config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn build_config(args: &Args) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
    if let Some(path) = &args.config {
        info!("loading configuration from {}", path.display());
        return Ok(PipelineConfig::load_from_file(path)?);
    }

    let parallel = if args.sequential {
        ParallelConfig::sequential()
    } else {
        ParallelConfig::default()
    };
    let params = SolveParams::builder()
        .z(args.z)
        .max_n(args.max_n)
        .max_solutions_per_n(args.max_solutions_per_n)
        .iterations(args.iterations)
        .pell_search_limit(args.pell_search_limit)
        .parallel(parallel)
        .build()?;
    let halving = if args.exact_halving {
        HalvingMode::Exact
    } else {
        HalvingMode::Strict
    };
    Ok(PipelineConfig::new(params).with_halving(halving))
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &args.generate_config {
        PipelineConfig::default().save_to_file(path)?;
        println!("Generated sample configuration at: {}", path.display());
        return Ok(());
    }

    let config = build_config(args)?;
    run_with_consumer(&config, |table| print!("{}", render_table(table)))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
