//! list-bench binary entry point.

use clap::Parser;
use list_bench::config::ConfigLoader;
use list_bench::suite::BenchmarkSuite;
use list_bench::{logging, BenchResult};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Time appends, searches, and removals on array-backed and linked lists.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file. Defaults apply when it does not exist.
    #[arg(short, long, default_value = "list-bench.toml")]
    config: PathBuf,

    /// Override the configured warmup iteration count.
    #[arg(long)]
    warmup: Option<u64>,

    /// Override the configured measured iteration count.
    #[arg(long)]
    iterations: Option<u64>,

    /// Print the grouped summary table after the result lines.
    #[arg(long)]
    summary: bool,

    /// Print the report as JSON after the result lines.
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> BenchResult<()> {
    let loader = ConfigLoader::validated();
    let mut config = loader.load_or_default(&cli.config)?;
    if let Some(warmup) = cli.warmup {
        config.runner.warmup_iterations = warmup;
    }
    if let Some(iterations) = cli.iterations {
        config.runner.measured_iterations = iterations;
    }
    loader.validate(&config)?;

    logging::init(&config.logging)?;

    let suite = BenchmarkSuite::from_config(&config);
    let report = suite.run_all_with(|measurement| println!("{measurement}"))?;

    if cli.summary {
        println!();
        print!("{}", report.summary());
    }
    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Failed to serialize report: {}", e),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("list-bench: {e}");
            ExitCode::FAILURE
        }
    }
}
