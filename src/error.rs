//! Error types for parameter validation and scenario loading

use thiserror::Error;

/// Rejection of a scenario before any projection work is done
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// A field is outside the domain the engine accepts, or drives a money value past `f64`
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, or of the derived figure that overflowed
    pub fn field(&self) -> &'static str {
        match self {
            ProjectionError::InvalidParameter { field, .. } => field,
        }
    }
}

/// Failure while reading a scenario file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scenario CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Row parsed but describes an invalid scenario (line is 1-indexed, header is line 1)
    #[error("scenario on line {line} is invalid: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: ProjectionError,
    },
}
