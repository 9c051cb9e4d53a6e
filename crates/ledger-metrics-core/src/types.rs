use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ledger amounts. Decimal throughout; ledger exports never go through f64.
pub type Money = Decimal;

/// Ratios as decimals (0.667 = 66.7%). Percent scaling happens only at display.
pub type Rate = Decimal;

/// Envelope returned by every ledger computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub records_scanned: usize,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Wrap a result with methodology, assumptions, warnings and timing.
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    records_scanned: usize,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            records_scanned,
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
