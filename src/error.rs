use std::fmt;

use thiserror::Error;

/// Identifies which input slice a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Reference,
    Predictions,
    Weights,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Series::Reference   => "reference",
            Series::Predictions => "predictions",
            Series::Weights     => "weights",
        };
        write!(f, "{}", name)
    }
}

/// Every way an evaluation can fail.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("input series must not be empty")]
    EmptyInput,

    #[error("length mismatch: reference has {reference} values, predictions has {predictions}")]
    LengthMismatch { reference: usize, predictions: usize },

    #[error("non-finite value in {series} at index {index}")]
    NonFinite { series: Series, index: usize },

    #[error("expected {expected} sample weights, got {actual}")]
    WeightLengthMismatch { expected: usize, actual: usize },

    #[error("invalid sample weights: {0}")]
    InvalidWeights(String),

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("column '{column}', row {row}: '{value}' is not a valid number")]
    NonNumericCell { column: String, row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("failed to render report: {0}")]
    Report(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
