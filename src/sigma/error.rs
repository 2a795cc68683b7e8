use polars::error::PolarsError;
use thiserror::Error;

/// Errors that can occur while turning a host request into a render model
#[derive(Debug, Error)]
pub enum PluginError {
    /// A referenced dimension or measure column has no entry in the source data
    #[error("column '{0}' not found in source data")]
    MissingColumn(String),

    /// Referenced columns have differing row counts
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    MisalignedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// The measure selection does not pair up with the dimension selection
    #[error("expected {expected} measure column(s) for the selected dimensions, got {actual}")]
    MeasureCountMismatch { expected: usize, actual: usize },

    /// A measure column holds non-numeric values
    #[error("measure column '{column}' is not numeric")]
    NonNumericWeight { column: String },

    /// A referenced column holds a null cell
    #[error("column '{column}' has a null value at row {row}")]
    NullValue { column: String, row: usize },

    /// The host request envelope could not be parsed
    #[error("invalid plugin request: {0}")]
    Request(String),

    /// Columnar-layer error
    #[error("data error: {0}")]
    Data(#[from] PolarsError),
}

/// Type alias for Results using PluginError
pub type Result<T> = std::result::Result<T, PluginError>;
