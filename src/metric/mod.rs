pub mod mae;
pub mod non_finite;

pub use mae::MeanAbsoluteError;
pub use non_finite::NonFinitePolicy;
