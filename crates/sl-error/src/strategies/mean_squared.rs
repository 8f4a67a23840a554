use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;

use crate::{ErrorStrategy, MeanLoss, TrainingExample};

/// Mean squared error over scalar examples.
///
/// Prediction is delegated to the closure given to [`new`](Self::new); the
/// metric itself is fixed: each example contributes `(expected - actual)^2`
/// and the total is divided by the number of examples. Examples render as
/// `"{input}->{expected}"`.
///
/// The change hook counts installations, which callers can use as a
/// generation number for caches keyed on the training set.
pub struct MeanSquaredError<M: ?Sized, F> {
    predict: F,
    installations: AtomicUsize,
    _model: PhantomData<fn(&M)>,
}

impl<M: ?Sized, F> MeanSquaredError<M, F>
where
    F: Fn(&M, &f64) -> Result<f64>,
{
    pub fn new(predict: F) -> Self {
        Self {
            predict,
            installations: AtomicUsize::new(0),
            _model: PhantomData,
        }
    }

    /// How many training sets the owning engine has installed so far.
    pub fn installations(&self) -> usize {
        self.installations.load(Ordering::Relaxed)
    }
}

impl<M: ?Sized, F> fmt::Debug for MeanSquaredError<M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeanSquaredError")
            .field("installations", &self.installations.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl<M: ?Sized, F> ErrorStrategy for MeanSquaredError<M, F>
where
    F: Fn(&M, &f64) -> Result<f64>,
{
    type Model = M;
    type Input = f64;
    type Output = f64;
    type Prediction = f64;
    type SlError = MeanLoss;

    fn example_error(&self, expected: &f64, actual: &f64) -> Result<MeanLoss> {
        Ok(MeanLoss::single((expected - actual).powi(2)))
    }

    fn predict(&self, model: &M, input: &f64, _expected: Option<&f64>) -> Result<f64> {
        (self.predict)(model, input)
    }

    fn on_training_examples_changed(&self) -> Result<()> {
        self.installations.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn example_to_string(&self, example: &TrainingExample<f64, f64>) -> Result<String> {
        Ok(format!("{}->{}", example.input, example.expected))
    }

    fn before_accumulation(&self, _model: &M) -> Result<MeanLoss> {
        Ok(MeanLoss::default())
    }

    fn accumulate(&self, total: MeanLoss, example_error: MeanLoss) -> Result<MeanLoss> {
        Ok(total.merge(example_error))
    }

    fn finalize(&self, total: MeanLoss, _model: &M) -> Result<MeanLoss> {
        Ok(total.finalized())
    }
}
