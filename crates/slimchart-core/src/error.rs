// File: crates/slimchart-core/src/error.rs
// Summary: Error types for chart construction and drawing.

use thiserror::Error;

/// Errors surfaced by the chart API. Construction problems and bad draw data
/// are the only two failure kinds; both are fatal for the call that raised
/// them and carry no recovery path.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Invalid configuration rejected at construction or reconfiguration.
    #[error("configuration: {0}")]
    Configuration(String),

    /// Malformed chart data rejected before any drawing side effect.
    #[error("chart data: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
