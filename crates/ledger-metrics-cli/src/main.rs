mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::ledger::MetricsArgs;

/// Revenue, margin and working capital metrics from a ledger export
#[derive(Parser)]
#[command(
    name = "ledger-metrics",
    version,
    about = "Revenue, margin and working capital metrics from a ledger export",
    long_about = "Reads a ledger account export ({\"data\": [...]}) and reports revenue, \
                  expense, gross profit margin, net profit margin and working capital \
                  ratio with decimal precision. Without a subcommand, runs `metrics` \
                  against ./data.json or piped stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    output: OutputFormat,

    /// Log computation detail to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the five ledger metrics
    Metrics(MetricsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Metrics(args)) => commands::ledger::run_metrics(args),
        None => commands::ledger::run_metrics(MetricsArgs::default()),
        Some(Commands::Version) => {
            println!("ledger-metrics {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result.and_then(|value| output::format_output(&cli.output, &value)) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
