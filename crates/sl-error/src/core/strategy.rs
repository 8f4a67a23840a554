use anyhow::Result;

use crate::TrainingExample;

/// The pluggable half of an [`ErrorEngine`](crate::ErrorEngine): every decision
/// about what "error" means lives here.
///
/// The engine owns one strategy for its whole lifetime and drives it through a
/// fixed sequence. For each call to
/// [`compute_total_error`](crate::ErrorEngine::compute_total_error):
///
/// 1. [`before_accumulation`](Self::before_accumulation) seeds the accumulator.
/// 2. For every example, in set order: [`predict`](Self::predict), then
///    [`example_error`](Self::example_error), then [`accumulate`](Self::accumulate).
/// 3. [`finalize`](Self::finalize) post-processes the accumulator.
///
/// [`on_training_examples_changed`](Self::on_training_examples_changed) runs once
/// every time the engine installs a training set, and
/// [`example_to_string`](Self::example_to_string) backs
/// [`training_examples_to_string`](crate::ErrorEngine::training_examples_to_string).
///
/// Every method is fallible. The engine never retries or swallows a failure;
/// whatever error a method returns is what the engine's caller receives.
///
/// Swapping one strategy for another (mean squared error for cross-entropy,
/// say) changes the metric without touching the engine.
pub trait ErrorStrategy {
    /// The thing being scored. Only ever borrowed immutably.
    type Model: ?Sized;
    /// First half of a [`TrainingExample`].
    type Input;
    /// Second half of a [`TrainingExample`]: the expected output.
    type Output;
    /// What [`predict`](Self::predict) produces; compared against `Output`.
    type Prediction;
    /// Per-example error, running accumulator and final result.
    type SlError;

    /// Error contribution of a single example.
    fn example_error(
        &self,
        expected: &Self::Output,
        actual: &Self::Prediction,
    ) -> Result<Self::SlError>;

    /// Runs the model on one input.
    ///
    /// During a fold `expected` is always `Some`, so implementations may use it
    /// (feeding the true previous step back in, for instance) or ignore it.
    fn predict(
        &self,
        model: &Self::Model,
        input: &Self::Input,
        expected: Option<&Self::Output>,
    ) -> Result<Self::Prediction>;

    /// Called after every installation of a training set, including the first.
    fn on_training_examples_changed(&self) -> Result<()>;

    /// Renders one example as a single line of human-readable text.
    fn example_to_string(
        &self,
        example: &TrainingExample<Self::Input, Self::Output>,
    ) -> Result<String>;

    /// Seed of the fold.
    fn before_accumulation(&self, model: &Self::Model) -> Result<Self::SlError>;

    /// Folds one example's error into the running total.
    fn accumulate(
        &self,
        total: Self::SlError,
        example_error: Self::SlError,
    ) -> Result<Self::SlError>;

    /// Post-processes the total once every example has been folded in.
    fn finalize(&self, total: Self::SlError, model: &Self::Model) -> Result<Self::SlError>;
}
