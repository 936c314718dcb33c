pub mod evaluator;
pub mod eval_config;
pub mod eval_report;

pub use evaluator::{ErrorEvaluator, mean_absolute_error};
pub use eval_config::EvalConfig;
pub use eval_report::EvalReport;
