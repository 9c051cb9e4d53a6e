use clap::Args;
use serde_json::Value;
use tracing::{info, warn};

use ledger_metrics_core::ledger::account::LedgerInput;
use ledger_metrics_core::ledger::metrics;

use crate::input;

/// File read when neither `--input` nor piped stdin is given.
pub const DEFAULT_INPUT: &str = "data.json";

/// Arguments for the ledger metrics report
#[derive(Args, Default)]
pub struct MetricsArgs {
    /// Path to the ledger JSON export (default: ./data.json)
    #[arg(long, short)]
    pub input: Option<String>,
}

pub fn run_metrics(args: MetricsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ledger: LedgerInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        info!("reading ledger from stdin");
        serde_json::from_value(data)?
    } else {
        input::file::read_json(DEFAULT_INPUT)?
    };

    info!(records = ledger.data.len(), "ledger loaded");

    let output = metrics::calculate_ledger_metrics(&ledger)?;
    for w in &output.warnings {
        warn!("{}", w);
    }

    Ok(serde_json::to_value(output)?)
}
