use serde::{Serialize, Deserialize};

use crate::error::{EvalError, Result, Series};

/// Selects how NaN and ±inf inputs are treated.
///
/// - `Reject`    — fail with `EvalError::NonFinite` on the first offending value.
/// - `Propagate` — let the value flow through the arithmetic; the result may
///   itself be NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    #[default]
    Reject,
    Propagate,
}

impl NonFinitePolicy {
    /// Validates `values` under this policy. `series` names the slice in the error.
    pub fn check(self, values: &[f64], series: Series) -> Result<()> {
        if self == NonFinitePolicy::Propagate {
            return Ok(());
        }
        match values.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(EvalError::NonFinite { series, index }),
            None => Ok(()),
        }
    }
}
