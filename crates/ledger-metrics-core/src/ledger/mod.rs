pub mod account;
pub mod format;
pub mod metrics;
pub mod report;
