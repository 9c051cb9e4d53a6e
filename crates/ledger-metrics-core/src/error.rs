use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerMetricsError {
    #[error("Unrecognised {field} tag '{value}'")]
    InvalidTag { field: &'static str, value: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    #[error("Malformed ledger document: {0}")]
    SerializationError(String),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LedgerMetricsError {
    fn from(e: serde_json::Error) -> Self {
        LedgerMetricsError::SerializationError(e.to_string())
    }
}
