use thiserror::Error;

/// Failures raised by the bundled strategies.
///
/// They travel to the engine's caller inside an [`anyhow::Error`]; use
/// `downcast_ref::<StrategyError>()` to match on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    /// The expected class index does not exist in the predicted distribution.
    #[error("class {class} is out of range for a prediction over {classes} classes")]
    ClassOutOfRange { class: usize, classes: usize },

    #[error("probability {probability} for class {class} is outside [0, 1]")]
    InvalidProbability { class: usize, probability: f64 },
}
