//! Metric-agnostic error accumulation for supervised learning.
//!
//! An [`ErrorEngine`] holds an ordered, immutable [`TrainingExampleSet`] and an
//! [`ErrorStrategy`]. Scoring a model folds every example through the strategy:
//! seed, then predict / per-example error / accumulate for each example in
//! order, then finalize. What any of those steps mean (mean squared error,
//! cross-entropy, something bespoke) is up to the strategy.
//!
//! ```
//! use sl_error::{ErrorEngine, MeanSquaredError};
//!
//! let strategy = MeanSquaredError::new(|slope: &f64, x: &f64| Ok(slope * x));
//! let mut engine = ErrorEngine::new(strategy, vec![(1.0, 2.0), (2.0, 4.0)]).unwrap();
//! assert_eq!(engine.compute_total_error(&1.0).unwrap().value(), 2.5);
//!
//! engine.set_training_examples(vec![(3.0, 3.0)]).unwrap();
//! assert_eq!(engine.compute_total_error(&1.0).unwrap().value(), 0.0);
//! assert_eq!(engine.strategy().installations(), 2);
//! ```

pub mod core;
pub mod data;
pub mod strategies;
pub mod utils;

pub use crate::core::*;
pub use data::*;
pub use strategies::*;
pub use utils::*;
