use std::fmt;
use std::marker::PhantomData;

use anyhow::Result;

use crate::{ErrorStrategy, MeanLoss, StrategyError, TrainingExample};

/// Mean cross-entropy for single-label classification.
///
/// The prediction closure returns a probability per class; the expected
/// output is the index of the correct class. Each example contributes
/// `-ln(p[class])`, and the total is divided by the number of examples.
///
/// Probabilities are taken as given: nothing is clamped or renormalized, so a
/// zero probability on the correct class yields an infinite loss.
pub struct MeanCrossEntropy<M: ?Sized, I, F> {
    predict: F,
    _marker: PhantomData<(fn(&M), fn(&I))>,
}

impl<M: ?Sized, I, F> MeanCrossEntropy<M, I, F>
where
    F: Fn(&M, &I) -> Result<Vec<f64>>,
{
    pub fn new(predict: F) -> Self {
        Self {
            predict,
            _marker: PhantomData,
        }
    }
}

impl<M: ?Sized, I, F> fmt::Debug for MeanCrossEntropy<M, I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeanCrossEntropy").finish_non_exhaustive()
    }
}

impl<M: ?Sized, I: fmt::Debug, F> ErrorStrategy for MeanCrossEntropy<M, I, F>
where
    F: Fn(&M, &I) -> Result<Vec<f64>>,
{
    type Model = M;
    type Input = I;
    type Output = usize;
    type Prediction = Vec<f64>;
    type SlError = MeanLoss;

    fn example_error(&self, expected: &usize, actual: &Vec<f64>) -> Result<MeanLoss> {
        let class = *expected;
        let probability = *actual.get(class).ok_or(StrategyError::ClassOutOfRange {
            class,
            classes: actual.len(),
        })?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(StrategyError::InvalidProbability { class, probability }.into());
        }

        Ok(MeanLoss::single(-probability.ln()))
    }

    fn predict(&self, model: &M, input: &I, _expected: Option<&usize>) -> Result<Vec<f64>> {
        (self.predict)(model, input)
    }

    fn on_training_examples_changed(&self) -> Result<()> {
        Ok(())
    }

    fn example_to_string(&self, example: &TrainingExample<I, usize>) -> Result<String> {
        Ok(format!("{:?}->class {}", example.input, example.expected))
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

#[cfg(test)]
mod tests {
    use super::*;

    type Classifier = fn(&(), &&'static str) -> Result<Vec<f64>>;

    fn uniform(_model: &(), _token: &&'static str) -> Result<Vec<f64>> {
        Ok(vec![0.5, 0.5])
    }

    fn strategy() -> MeanCrossEntropy<(), &'static str, Classifier> {
        MeanCrossEntropy::new(uniform as Classifier)
    }

    #[test]
    fn test_certain_prediction_has_zero_loss() {
        let loss = strategy().example_error(&0, &vec![1.0, 0.0]).unwrap();
        assert_eq!(loss.sum, 0.0);
    }

    #[test]
    fn test_loss_is_negative_log_of_true_class() {
        let loss = strategy().example_error(&1, &vec![0.5, 0.5]).unwrap();
        assert!((loss.sum - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_probability_is_infinite() {
        let loss = strategy().example_error(&1, &vec![1.0, 0.0]).unwrap();
        assert!(loss.sum.is_infinite());
    }

    #[test]
    fn test_out_of_range_class_is_rejected() {
        let err = strategy().example_error(&3, &vec![0.5, 0.5]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StrategyError>(),
            Some(&StrategyError::ClassOutOfRange {
                class: 3,
                classes: 2
            })
        );
    }

    #[test]
    fn test_invalid_probability_is_rejected() {
        let err = strategy().example_error(&0, &vec![1.5, -0.5]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StrategyError>(),
            Some(StrategyError::InvalidProbability { class: 0, .. })
        ));
    }
}
