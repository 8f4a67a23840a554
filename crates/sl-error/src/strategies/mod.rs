//! Ready-made [`ErrorStrategy`](crate::ErrorStrategy) implementations.
//!
//! - [`FnStrategy`] - one closure per role, for ad hoc metrics
//! - [`MeanSquaredError`] - regression over scalar examples
//! - [`MeanCrossEntropy`] - single-label classification over class probabilities
//!
//! The two metrics share [`MeanLoss`] as their error type, so results from
//! either can be reported the same way.

pub mod closure;
pub mod cross_entropy;
pub mod error;
pub mod mean_loss;
pub mod mean_squared;

pub use closure::*;
pub use cross_entropy::*;
pub use error::*;
pub use mean_loss::*;
pub use mean_squared::*;
