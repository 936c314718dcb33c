use crate::error::{EvalError, Result, Series};
use crate::metric::non_finite::NonFinitePolicy;

pub struct MeanAbsoluteError;

impl MeanAbsoluteError {
    /// Scalar MAE: mean(|reference - predictions|)
    ///
    /// # Errors
    /// - `LengthMismatch` when the slices differ in length
    /// - `EmptyInput` when both are empty
    /// - `NonFinite` for a NaN/±inf input under `NonFinitePolicy::Reject`
    ///
    /// `Reject` only screens the inputs: finite values whose differences
    /// overflow `f64` (e.g. `f64::MAX` against `-f64::MAX`) still yield `inf`.
    pub fn evaluate(
        reference: &[f64],
        predictions: &[f64],
        policy: NonFinitePolicy,
    ) -> Result<f64> {
        check_series(reference, predictions, policy)?;

        let n = reference.len() as f64;
        let total = reference.iter().zip(predictions.iter())
            .map(|(r, p)| (r - p).abs())
            .sum::<f64>();
        Ok(total / n)
    }

    /// Weighted MAE: Σ w·|reference - predictions| / Σ w
    pub fn evaluate_weighted(
        reference: &[f64],
        predictions: &[f64],
        weights: &[f64],
        policy: NonFinitePolicy,
    ) -> Result<f64> {
        check_series(reference, predictions, policy)?;
        if weights.len() != reference.len() {
            return Err(EvalError::WeightLengthMismatch {
                expected: reference.len(),
                actual: weights.len(),
            });
        }
        policy.check(weights, Series::Weights)?;

        if let Some(i) = weights.iter().position(|w| *w < 0.0) {
            return Err(EvalError::InvalidWeights(format!(
                "weight at index {} is negative ({})",
                i, weights[i]
            )));
        }
        let weight_sum = weights.iter().sum::<f64>();
        if weight_sum == 0.0 {
            return Err(EvalError::InvalidWeights("weights sum to zero".into()));
        }

        let total = reference.iter().zip(predictions.iter()).zip(weights.iter())
            .map(|((r, p), w)| w * (r - p).abs())
            .sum::<f64>();
        Ok(total / weight_sum)
    }
}

/// Length, emptiness and finiteness checks shared by both entry points.
fn check_series(reference: &[f64], predictions: &[f64], policy: NonFinitePolicy) -> Result<()> {
    if reference.len() != predictions.len() {
        return Err(EvalError::LengthMismatch {
            reference: reference.len(),
            predictions: predictions.len(),
        });
    }
    if reference.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    policy.check(reference, Series::Reference)?;
    policy.check(predictions, Series::Predictions)
}
