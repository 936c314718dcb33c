use serde::{Serialize, Deserialize};

use crate::error::{EvalError, Result};
use crate::metric::non_finite::NonFinitePolicy;

/// Configuration for an `ErrorEvaluator`.
///
/// # Fields
/// - `target_column` — column holding the ground truth when scoring a `Table`
///                     (defaults to `"loss"`)
/// - `non_finite`    — how NaN / ±inf inputs are handled (defaults to `Reject`)
///
/// Every field has a default, so `{}` is a valid JSON configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub target_column: String,
    pub non_finite: NonFinitePolicy,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            target_column: "loss".to_string(),
            non_finite: NonFinitePolicy::default(),
        }
    }
}

impl EvalConfig {
    /// Reads a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<EvalConfig> {
        serde_json::from_str(json).map_err(EvalError::Config)
    }

    pub fn with_target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = column.into();
        self
    }

    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }
}
