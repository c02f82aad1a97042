//! Balance point of a condensing unit paired with an evaporator.
//!
//! [`BalancePoint`] is the [`twine_core::Model`] adapter; [`solve`] is the
//! same calculation as a plain function. The computation lives in the
//! internal `core` module.
//!
//! # Example
//!
//! ```
//! use refrig_balance::models::refrigeration::balance_point::{
//!     BalanceConfig, HumidityBand, SystemInputs, solve,
//! };
//!
//! let inputs = SystemInputs {
//!     box_temp: 55.0,
//!     evaporator_reference_capacity: 12_000.0,
//!     suction_temp_1: 35.0,
//!     capacity_1: 9_000.0,
//!     suction_temp_2: 40.0,
//!     capacity_2: 10_200.0,
//!     evaporator_secondary: None,
//! };
//!
//! let result = solve(&inputs, &BalanceConfig::default()).unwrap();
//! assert_eq!(result.suction_temp, 45.4);
//! assert_eq!(result.capacity, 11_500.0);
//! assert_eq!(result.td, 9.6);
//! assert_eq!(result.humidity, HumidityBand::EightyToEightyFive);
//! ```

mod core;

pub use self::core::{
    BalanceConfig, BalanceError, BalanceResult, CHART_MARGIN, CurveSample, DEFAULT_REFERENCE_TD,
    EvaporatorModel, HumidityBand, InputField, MAX_CURVE_SAMPLES, OperatingPoint, RawInputs,
    SystemInputs, TdRating, solve,
};

use twine_core::Model;

/// Balance-point model with a fixed solver configuration.
///
/// ```
/// use refrig_balance::models::refrigeration::balance_point::{BalancePoint, SystemInputs};
/// use twine_core::Model;
///
/// let model = BalancePoint::default();
/// let inputs = SystemInputs {
///     box_temp: 55.0,
///     evaporator_reference_capacity: 12_000.0,
///     suction_temp_1: 35.0,
///     capacity_1: 9_000.0,
///     suction_temp_2: 35.0,
///     capacity_2: 10_200.0,
///     evaporator_secondary: None,
/// };
///
/// // Both ratings at the same suction temperature cannot define a curve.
/// assert!(model.call(&inputs).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalancePoint {
    config: BalanceConfig,
}

impl BalancePoint {
    /// Creates a model using the given configuration.
    #[must_use]
    pub fn new(config: BalanceConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }
}

impl Model for BalancePoint {
    type Input = SystemInputs;
    type Output = BalanceResult;
    type Error = BalanceError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve(input, &self.config)
    }
}
