use thiserror::Error;

use crate::support::capacity::DegenerateModelError;

use super::InputField;

/// Errors that can occur while solving for a balance point.
///
/// Every variant is recoverable: the caller reports it and may solve again
/// with corrected inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BalanceError {
    /// A numeric field is missing, not a number, or not finite.
    #[error("please enter a valid number for {field}")]
    InvalidInput {
        /// First offending field, in input order.
        field: InputField,
    },

    /// The capacity curves cannot produce a unique balance point.
    #[error("cannot compute a balance point: {0}")]
    Degenerate(#[from] DegenerateModelError),

    /// The plotting range holds more samples than the solver will produce.
    #[error("chart range {start} °F to {end} °F is too wide to sample")]
    SampleRange {
        /// First sampled temperature (°F).
        start: f64,

        /// Last sampled temperature (°F).
        end: f64,
    },
}
