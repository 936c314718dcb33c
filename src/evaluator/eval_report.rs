use serde::{Serialize, Deserialize};

use crate::error::{EvalError, Result};

/// Outcome of one evaluation, ready to be logged or written next to a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    /// Metric identifier; always `"mae"`.
    pub metric: String,
    /// Number of reference/prediction pairs scored.
    pub samples: usize,
    /// The metric value.
    pub value: f64,
    /// Whether sample weights were applied.
    pub weighted: bool,
}

impl EvalReport {
    pub(crate) fn mae(samples: usize, value: f64, weighted: bool) -> Self {
        EvalReport {
            metric: "mae".to_string(),
            samples,
            value,
            weighted,
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(EvalError::Report)
    }
}
