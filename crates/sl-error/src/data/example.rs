use serde::{Deserialize, Serialize};

/// One labeled `(input, expected)` pair.
///
/// Both halves are opaque to the engine: it only hands them to the
/// [`ErrorStrategy`](crate::ErrorStrategy) that knows what they mean.
///
/// ```
/// use sl_error::TrainingExample;
///
/// let example = TrainingExample::from((1.0, 2.0));
/// assert_eq!(example.input(), &1.0);
/// assert_eq!(example.expected(), &2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingExample<I, O> {
    pub input: I,
    pub expected: O,
}

impl<I, O> TrainingExample<I, O> {
    pub fn new(input: I, expected: O) -> Self {
        Self { input, expected }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn expected(&self) -> &O {
        &self.expected
    }

    pub fn into_parts(self) -> (I, O) {
        (self.input, self.expected)
    }
}

impl<I, O> From<(I, O)> for TrainingExample<I, O> {
    fn from((input, expected): (I, O)) -> Self {
        Self::new(input, expected)
    }
}
