pub mod error;
pub mod types;

#[cfg(feature = "ledger")]
pub mod ledger;

pub use error::LedgerMetricsError;
pub use types::*;

/// Standard result type for all ledger-metrics operations
pub type LedgerMetricsResult<T> = Result<T, LedgerMetricsError>;
