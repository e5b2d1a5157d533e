// src/error.rs

use thiserror::Error;

/// Everything the pipeline can fail with.
///
/// `ExternalCall` and `SchemaViolation` abort a report; `NoMatchingGeography`
/// is a caller input error and is never produced for a well-formed request.
#[derive(Debug, Error)]
pub enum AcsError {
    /// Network or service failure talking to the statistical service. Never cached.
    #[error("external call failed for {request}: {message}")]
    ExternalCall { request: String, message: String },

    /// The service answered, but not in the shape we depend on.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// A lookup by state name/FIPS or tribal-area identifier found nothing.
    #[error("no matching geography for `{0}`")]
    NoMatchingGeography(String),

    /// Zero divisor under `DivisionPolicy::Fail`.
    #[error("undefined ratio for `{column}` at {row}: total is zero")]
    UndefinedRatio { row: String, column: String },

    /// Misuse of a table operation (unknown or clashing column labels, empty table).
    #[error("invalid table operation: {0}")]
    InvalidTable(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AcsError {
    /// True for failures a caller may sensibly retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AcsError::ExternalCall { .. })
    }
}

pub type Result<T, E = AcsError> = std::result::Result<T, E>;
