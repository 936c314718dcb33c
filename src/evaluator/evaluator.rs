use log::debug;

use crate::dataset::table::Table;
use crate::error::Result;
use crate::evaluator::eval_config::EvalConfig;
use crate::evaluator::eval_report::EvalReport;
use crate::metric::mae::MeanAbsoluteError;

/// Scores regression predictions against ground truth with mean absolute error.
///
/// Holds only immutable configuration, so a single instance can be shared by
/// reference across threads.
#[derive(Debug, Clone, Default)]
pub struct ErrorEvaluator {
    config: EvalConfig,
}

impl ErrorEvaluator {
    pub fn new(config: EvalConfig) -> Self {
        ErrorEvaluator { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Mean of `|reference[i] - predictions[i]|`.
    ///
    /// # Errors
    /// - `LengthMismatch` if the slices differ in length
    /// - `EmptyInput` if both are empty
    /// - `NonFinite` if a value is NaN/±inf and the policy is `Reject`
    pub fn evaluate(&self, reference: &[f64], predictions: &[f64]) -> Result<f64> {
        let value = MeanAbsoluteError::evaluate(reference, predictions, self.config.non_finite)?;
        debug!("mae over {} samples = {}", reference.len(), value);
        Ok(value)
    }

    /// Weighted mean of `|reference[i] - predictions[i]|`, one weight per sample.
    pub fn evaluate_weighted(
        &self,
        reference: &[f64],
        predictions: &[f64],
        weights: &[f64],
    ) -> Result<f64> {
        let value = MeanAbsoluteError::evaluate_weighted(
            reference,
            predictions,
            weights,
            self.config.non_finite,
        )?;
        debug!("weighted mae over {} samples = {}", reference.len(), value);
        Ok(value)
    }

    /// Scores `predictions` against the configured target column of `table`.
    ///
    /// Blank target cells are read as NaN and so fall under the non-finite policy.
    pub fn evaluate_column(&self, table: &Table, predictions: &[f64]) -> Result<f64> {
        let reference = table.column(&self.config.target_column)?;
        debug!(
            "scoring {} predictions against column '{}'",
            predictions.len(),
            self.config.target_column
        );
        self.evaluate(&reference, predictions)
    }

    pub fn report(&self, reference: &[f64], predictions: &[f64]) -> Result<EvalReport> {
        let value = self.evaluate(reference, predictions)?;
        Ok(EvalReport::mae(reference.len(), value, false))
    }

    pub fn report_weighted(
        &self,
        reference: &[f64],
        predictions: &[f64],
        weights: &[f64],
    ) -> Result<EvalReport> {
        let value = self.evaluate_weighted(reference, predictions, weights)?;
        Ok(EvalReport::mae(reference.len(), value, true))
    }
}

/// MAE with the default configuration (non-finite inputs rejected).
pub fn mean_absolute_error(reference: &[f64], predictions: &[f64]) -> Result<f64> {
    ErrorEvaluator::default().evaluate(reference, predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, Series};
    use crate::metric::non_finite::NonFinitePolicy;

    #[test_log::test]
    fn test_concrete_scenarios() {
        let eval = ErrorEvaluator::default();
        assert_eq!(eval.evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap(), 0.0);
        assert_eq!(eval.evaluate(&[3.0, -1.0], &[1.0, -1.0]).unwrap(), 1.0);
        assert!(matches!(
            eval.evaluate(&[1.0], &[1.0, 2.0]).unwrap_err(),
            EvalError::LengthMismatch { .. }
        ));
        assert!(matches!(
            eval.evaluate(&[], &[]).unwrap_err(),
            EvalError::EmptyInput
        ));
    }

    #[test]
    fn test_free_function_matches_default_evaluator() {
        assert_eq!(mean_absolute_error(&[3.0, -1.0], &[1.0, -1.0]).unwrap(), 1.0);
        assert!(matches!(
            mean_absolute_error(&[f64::NAN], &[0.0]).unwrap_err(),
            EvalError::NonFinite { series: Series::Reference, index: 0 }
        ));
    }

    #[test_log::test]
    fn test_evaluate_column() {
        let mut table = Table::new(["id", "loss"]).unwrap();
        table.push_row(["1", "2.0"]).unwrap();
        table.push_row(["2", "4.0"]).unwrap();

        let eval = ErrorEvaluator::default();
        assert_eq!(eval.evaluate_column(&table, &[1.0, 5.0]).unwrap(), 1.0);

        let by_id = ErrorEvaluator::new(EvalConfig::default().with_target_column("id"));
        assert_eq!(by_id.evaluate_column(&table, &[1.0, 2.0]).unwrap(), 0.0);

        let missing = ErrorEvaluator::new(EvalConfig::default().with_target_column("y"));
        assert!(matches!(
            missing.evaluate_column(&table, &[1.0, 2.0]).unwrap_err(),
            EvalError::ColumnNotFound(_)
        ));
    }

    #[test]
    fn test_blank_target_cell_follows_policy() {
        let mut table = Table::new(["loss"]).unwrap();
        table.push_row(["1.0"]).unwrap();
        table.push_row([""]).unwrap();

        let strict = ErrorEvaluator::default();
        assert!(matches!(
            strict.evaluate_column(&table, &[1.0, 1.0]).unwrap_err(),
            EvalError::NonFinite { series: Series::Reference, index: 1 }
        ));

        let lenient = ErrorEvaluator::new(
            EvalConfig::default().with_non_finite(NonFinitePolicy::Propagate),
        );
        assert!(lenient.evaluate_column(&table, &[1.0, 1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_reports() {
        let eval = ErrorEvaluator::default();

        let report = eval.report(&[3.0, -1.0], &[1.0, -1.0]).unwrap();
        assert_eq!(report, EvalReport::mae(2, 1.0, false));

        let report = eval
            .report_weighted(&[3.0, -1.0], &[1.0, -1.0], &[1.0, 3.0])
            .unwrap();
        assert_eq!(report.value, 0.5);
        assert!(report.weighted);
    }
}
