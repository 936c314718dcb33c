pub mod error;
pub mod metric;
pub mod dataset;
pub mod evaluator;

// Convenience re-exports
pub use error::{EvalError, Result, Series};
pub use metric::{MeanAbsoluteError, NonFinitePolicy};
pub use dataset::Table;
pub use evaluator::{ErrorEvaluator, EvalConfig, EvalReport, mean_absolute_error};
