use std::fmt;

use anyhow::Result;

use crate::{ErrorStrategy, TrainingExample};

type ExampleErrorFn<O, P, E> = Box<dyn Fn(&O, &P) -> Result<E> + Send + Sync>;
type PredictFn<M, I, O, P> = Box<dyn Fn(&M, &I, Option<&O>) -> Result<P> + Send + Sync>;
type ChangedFn = Box<dyn Fn() -> Result<()> + Send + Sync>;
type ExampleToStringFn<I, O> = Box<dyn Fn(&TrainingExample<I, O>) -> Result<String> + Send + Sync>;
type BeforeAccumulationFn<M, E> = Box<dyn Fn(&M) -> Result<E> + Send + Sync>;
type AccumulateFn<E> = Box<dyn Fn(E, E) -> Result<E> + Send + Sync>;
type FinalizeFn<M, E> = Box<dyn Fn(E, &M) -> Result<E> + Send + Sync>;

/// An [`ErrorStrategy`] assembled from seven closures, one per role.
///
/// Handy for one-off metrics and tests where a dedicated type would be
/// overkill. Type parameters: model `M`, input `I`, expected output `O`,
/// prediction `P`, error `E`.
///
/// ```
/// use sl_error::{ErrorEngine, FnStrategy};
///
/// let count = 2.0;
/// let strategy = FnStrategy::new(
///     |expected: &f64, actual: &f64| Ok((expected - actual).powi(2)),
///     |slope: &f64, x: &f64, _expected: Option<&f64>| Ok(slope * x),
///     || Ok(()),
///     |example| Ok(format!("{}->{}", example.input, example.expected)),
///     |_model| Ok(0.0),
///     |sum, error| Ok(sum + error),
///     move |sum, _model| Ok(sum / count),
/// );
///
/// let engine = ErrorEngine::new(strategy, vec![(1.0, 2.0), (2.0, 4.0)]).unwrap();
/// assert_eq!(engine.compute_total_error(&1.0).unwrap(), 2.5);
/// assert_eq!(engine.training_examples_to_string().unwrap(), "1->2\n2->4");
/// ```
pub struct FnStrategy<M: ?Sized, I, O, P, E> {
    example_error: ExampleErrorFn<O, P, E>,
    predict: PredictFn<M, I, O, P>,
    on_training_examples_changed: ChangedFn,
    example_to_string: ExampleToStringFn<I, O>,
    before_accumulation: BeforeAccumulationFn<M, E>,
    accumulate: AccumulateFn<E>,
    finalize: FinalizeFn<M, E>,
}

impl<M: ?Sized, I, O, P, E> FnStrategy<M, I, O, P, E> {
    /// Arguments follow the order of the roles in [`ErrorStrategy`]'s
    /// documentation: example error, predict, change hook, example rendering,
    /// accumulator seed, accumulate, finalize.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        example_error: impl Fn(&O, &P) -> Result<E> + Send + Sync + 'static,
        predict: impl Fn(&M, &I, Option<&O>) -> Result<P> + Send + Sync + 'static,
        on_training_examples_changed: impl Fn() -> Result<()> + Send + Sync + 'static,
        example_to_string: impl Fn(&TrainingExample<I, O>) -> Result<String>
        + Send
        + Sync
        + 'static,
        before_accumulation: impl Fn(&M) -> Result<E> + Send + Sync + 'static,
        accumulate: impl Fn(E, E) -> Result<E> + Send + Sync + 'static,
        finalize: impl Fn(E, &M) -> Result<E> + Send + Sync + 'static,
    ) -> Self {
        Self {
            example_error: Box::new(example_error),
            predict: Box::new(predict),
            on_training_examples_changed: Box::new(on_training_examples_changed),
            example_to_string: Box::new(example_to_string),
            before_accumulation: Box::new(before_accumulation),
            accumulate: Box::new(accumulate),
            finalize: Box::new(finalize),
        }
    }
}

impl<M: ?Sized, I, O, P, E> fmt::Debug for FnStrategy<M, I, O, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy").finish_non_exhaustive()
    }
}

impl<M: ?Sized, I, O, P, E> ErrorStrategy for FnStrategy<M, I, O, P, E> {
    type Model = M;
    type Input = I;
    type Output = O;
    type Prediction = P;
    type SlError = E;

    fn example_error(&self, expected: &O, actual: &P) -> Result<E> {
        (self.example_error)(expected, actual)
    }

    fn predict(&self, model: &M, input: &I, expected: Option<&O>) -> Result<P> {
        (self.predict)(model, input, expected)
    }

    fn on_training_examples_changed(&self) -> Result<()> {
        (self.on_training_examples_changed)()
    }

    fn example_to_string(&self, example: &TrainingExample<I, O>) -> Result<String> {
        (self.example_to_string)(example)
    }

    fn before_accumulation(&self, model: &M) -> Result<E> {
        (self.before_accumulation)(model)
    }

    fn accumulate(&self, total: E, example_error: E) -> Result<E> {
        (self.accumulate)(total, example_error)
    }

    fn finalize(&self, total: E, model: &M) -> Result<E> {
        (self.finalize)(total, model)
    }
}
