use serde::{Deserialize, Serialize};

/// Running sum of per-example losses that finalizes into a mean.
///
/// Used as the `SlError` of [`MeanSquaredError`](crate::MeanSquaredError) and
/// [`MeanCrossEntropy`](crate::MeanCrossEntropy). A single example's error is a
/// `MeanLoss` with `count == 1`; [`merge`](Self::merge) adds them up and
/// [`finalized`](Self::finalized) fills in `mean`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanLoss {
    pub sum: f64,
    pub count: usize,
    /// Set by [`finalized`](Self::finalized); `None` before that, and for an
    /// empty fold.
    pub mean: Option<f64>,
}

impl MeanLoss {
    pub fn single(loss: f64) -> Self {
        Self {
            sum: loss,
            count: 1,
            mean: None,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            count: self.count + other.count,
            mean: None,
        }
    }

    pub fn finalized(self) -> Self {
        Self {
            mean: (self.count > 0).then(|| self.sum / self.count as f64),
            ..self
        }
    }

    /// The mean, or `0.0` when nothing was folded in (or not finalized yet).
    pub fn value(&self) -> f64 {
        self.mean.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_then_finalize() {
        let total = MeanLoss::default()
            .merge(MeanLoss::single(1.0))
            .merge(MeanLoss::single(4.0))
            .finalized();

        assert_eq!(total.sum, 5.0);
        assert_eq!(total.count, 2);
        assert_eq!(total.mean, Some(2.5));
        assert_eq!(total.value(), 2.5);
    }

    #[test]
    fn test_empty_finalize_has_no_mean() {
        let total = MeanLoss::default().finalized();
        assert_eq!(total.mean, None);
        assert_eq!(total.value(), 0.0);
    }
}
