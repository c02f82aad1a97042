use thiserror::Error;

/// Reasons a linear capacity model or its intersection cannot be formed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DegenerateModelError {
    /// Both calibration points sit at the same temperature.
    #[error("calibration points share the same temperature ({temperature} °F)")]
    CoincidentTemperatures {
        /// The shared temperature.
        temperature: f64,
    },

    /// The evaporator reference temperature difference is zero.
    #[error("reference temperature difference must be non-zero")]
    ZeroReferenceTd,

    /// The calibration data produced a non-finite slope or intercept.
    #[error("calibration data produced a non-finite curve")]
    NonFinite,

    /// The two curves never meet at a single finite temperature.
    #[error("capacity curves are parallel (slopes {slope} and {other_slope}); no unique balance point")]
    ParallelCurves {
        /// Slope of the first curve.
        slope: f64,

        /// Slope of the second curve.
        other_slope: f64,
    },
}
