use std::fmt;

use anyhow::Result;
use tracing::{debug, trace};

use crate::core::ErrorStrategy;
use crate::utils::truncate;
use crate::TrainingExampleSet;

const RENDER_PREVIEW_CHARS: usize = 80;

/// Scores models against a fixed, ordered set of training examples.
///
/// An engine is configured exactly once, at construction, with an
/// [`ErrorStrategy`] and an initial [`TrainingExampleSet`]. After that the set
/// can be swapped wholesale with [`set_training_examples`](Self::set_training_examples)
/// and any number of models can be scored with
/// [`compute_total_error`](Self::compute_total_error).
///
/// There is no unconfigured state: a value of this type only exists once
/// [`new`](Self::new) has succeeded. To reconfigure, build a new engine
/// (use [`into_parts`](Self::into_parts) to get the old pieces back).
///
/// ```
/// use anyhow::Result;
/// use sl_error::{ErrorEngine, MeanSquaredError};
///
/// fn main() -> Result<()> {
///     let strategy = MeanSquaredError::new(|slope: &f64, x: &f64| Ok(slope * x));
///     let engine = ErrorEngine::new(strategy, vec![(1.0, 2.0), (2.0, 4.0)])?;
///
///     assert_eq!(engine.compute_total_error(&2.0)?.value(), 0.0);
///     assert_eq!(engine.compute_total_error(&1.0)?.value(), 2.5);
///     Ok(())
/// }
/// ```
pub struct ErrorEngine<S: ErrorStrategy> {
    strategy: S,
    training_examples: TrainingExampleSet<S::Input, S::Output>,
}

impl<S: ErrorStrategy> ErrorEngine<S> {
    /// Configures an engine and installs `initial_examples`.
    ///
    /// Installation goes through the same path as
    /// [`set_training_examples`](Self::set_training_examples), so the strategy's
    /// change hook runs exactly once before this returns. If the hook fails, the
    /// error is returned and no engine is built.
    #[tracing::instrument(name = "sl_error.engine.new", level = "debug", skip_all)]
    pub fn new(
        strategy: S,
        initial_examples: impl Into<TrainingExampleSet<S::Input, S::Output>>,
    ) -> Result<Self> {
        let mut engine = Self {
            strategy,
            training_examples: TrainingExampleSet::empty(),
        };
        engine.set_training_examples(initial_examples)?;
        debug!(
            examples = engine.training_examples.len(),
            "error engine configured"
        );
        Ok(engine)
    }

    /// Replaces the whole training set, then notifies the strategy.
    ///
    /// Handles to the previous set obtained through
    /// [`training_examples`](Self::training_examples) keep seeing the old
    /// examples. The new set is installed before the hook runs, so it stays
    /// installed even if the hook fails.
    #[tracing::instrument(
        name = "sl_error.engine.set_training_examples",
        level = "debug",
        skip_all
    )]
    pub fn set_training_examples(
        &mut self,
        examples: impl Into<TrainingExampleSet<S::Input, S::Output>>,
    ) -> Result<()> {
        let examples = examples.into();
        let previous = self.training_examples.len();
        self.training_examples = examples;
        trace!(
            previous,
            current = self.training_examples.len(),
            "training examples replaced"
        );

        self.strategy.on_training_examples_changed()
    }

    /// Folds the current training set into a single error value for `model`.
    ///
    /// Starting from `before_accumulation(model)`, each example in set order
    /// contributes `example_error(expected, predict(model, input, Some(expected)))`
    /// through `accumulate`, and the total goes through `finalize` last. With no
    /// examples this is `finalize(before_accumulation(model), model)`.
    ///
    /// The first strategy call that fails stops the fold; its error is returned
    /// as-is.
    #[tracing::instrument(
        name = "sl_error.engine.compute_total_error",
        level = "debug",
        skip(self, model),
        fields(examples = self.training_examples.len())
    )]
    pub fn compute_total_error(&self, model: &S::Model) -> Result<S::SlError> {
        let strategy = &self.strategy;

        let mut total = strategy.before_accumulation(model)?;
        for (index, example) in self.training_examples.iter().enumerate() {
            let actual = strategy.predict(model, &example.input, Some(&example.expected))?;
            let error = strategy.example_error(&example.expected, &actual)?;
            total = strategy.accumulate(total, error)?;
            trace!(index, "example folded");
        }

        let total = strategy.finalize(total, model)?;
        debug!("total error computed");
        Ok(total)
    }

    /// Scores each model in turn, one full fold per model.
    ///
    /// Results are in the same order as `models`. Stops at the first failure.
    #[tracing::instrument(
        name = "sl_error.engine.compute_total_errors",
        level = "debug",
        skip_all,
        fields(examples = self.training_examples.len())
    )]
    pub fn compute_total_errors<'a>(
        &self,
        models: impl IntoIterator<Item = &'a S::Model>,
    ) -> Result<Vec<S::SlError>>
    where
        S::Model: 'a,
    {
        let totals = models
            .into_iter()
            .map(|model| self.compute_total_error(model))
            .collect::<Result<Vec<_>>>()?;
        debug!(models = totals.len(), "batch scored");
        Ok(totals)
    }

    /// Renders every example with the strategy, one per line, in set order.
    #[tracing::instrument(
        name = "sl_error.engine.training_examples_to_string",
        level = "trace",
        skip(self),
        fields(examples = self.training_examples.len())
    )]
    pub fn training_examples_to_string(&self) -> Result<String> {
        let rendered = self
            .training_examples
            .iter()
            .map(|example| self.strategy.example_to_string(example))
            .collect::<Result<Vec<_>>>()?
            .join("\n");
        trace!(
            preview = truncate(&rendered, RENDER_PREVIEW_CHARS),
            "training examples rendered"
        );
        Ok(rendered)
    }

    /// The currently installed set. Clone it to keep a snapshot.
    pub fn training_examples(&self) -> &TrainingExampleSet<S::Input, S::Output> {
        &self.training_examples
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn into_parts(self) -> (S, TrainingExampleSet<S::Input, S::Output>) {
        (self.strategy, self.training_examples)
    }
}

impl<S> fmt::Debug for ErrorEngine<S>
where
    S: ErrorStrategy + fmt::Debug,
    S::Input: fmt::Debug,
    S::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorEngine")
            .field("strategy", &self.strategy)
            .field("training_examples", &self.training_examples)
            .finish()
    }
}
