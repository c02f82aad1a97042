//! Linear capacity curves.
//!
//! Refrigeration catalogs rate each component at a handful of operating
//! points. Between and around those points the capacity is treated as linear
//! in temperature, which is all the balance-point calculation needs.
//!
//! A [`LinearCapacityModel`] is built either:
//!
//! - through two [`CalibrationPoint`]s ([`LinearCapacityModel::through`]),
//!   as for a condensing unit rated at two suction temperatures, or
//! - from a single rating that is proportional to the coil temperature
//!   difference ([`LinearCapacityModel::proportional`]), as for an evaporator.
//!
//! Evaluation with [`LinearCapacityModel::capacity_at`] is unrestricted;
//! extrapolating past the calibration points is expected.
//!
//! # Example
//!
//! ```
//! use approx::assert_relative_eq;
//! use refrig_balance::support::capacity::{CalibrationPoint, LinearCapacityModel};
//!
//! # fn main() -> Result<(), refrig_balance::support::capacity::DegenerateModelError> {
//! let unit = LinearCapacityModel::through(
//!     CalibrationPoint::new(35.0, 9_000.0),
//!     CalibrationPoint::new(40.0, 10_200.0),
//! )?;
//! let evaporator = LinearCapacityModel::proportional(12_000.0, 10.0, 55.0)?;
//!
//! let suction_temp = unit.intersection(&evaporator)?;
//! assert_relative_eq!(unit.capacity_at(suction_temp), 11_500.0, epsilon = 1e-9);
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::DegenerateModelError;

use crate::support::constraint::{ConstraintError, Finite, NonZero};

/// A rated capacity at a known temperature.
///
/// The temperature is whatever the curve is indexed by: a suction temperature
/// for condensing units, or a coil temperature difference for evaporator
/// ratings before reprojection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    /// Temperature in °F (or a temperature difference in °F).
    pub temperature: f64,

    /// Capacity in BTU/h.
    pub capacity: f64,
}

impl CalibrationPoint {
    /// Creates a calibration point.
    #[must_use]
    pub fn new(temperature: f64, capacity: f64) -> Self {
        Self {
            temperature,
            capacity,
        }
    }
}

/// Capacity as a linear function of temperature: `slope * t + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCapacityModel {
    slope: f64,
    intercept: f64,
}

impl LinearCapacityModel {
    /// Builds the line passing through two calibration points.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateModelError::CoincidentTemperatures`] if both points
    /// share a temperature, or [`DegenerateModelError::NonFinite`] if the
    /// points produce a non-finite slope or intercept.
    pub fn through(a: CalibrationPoint, b: CalibrationPoint) -> Result<Self, DegenerateModelError> {
        if a.temperature == b.temperature {
            return Err(DegenerateModelError::CoincidentTemperatures {
                temperature: a.temperature,
            });
        }

        let slope = (b.capacity - a.capacity) / (b.temperature - a.temperature);
        let intercept = a.capacity - slope * a.temperature;
        Self::checked(slope, intercept)
    }

    /// Builds an evaporator curve in suction-temperature space.
    ///
    /// The evaporator capacity is taken as proportional to the coil
    /// temperature difference, `TD = box_temp - suction_temp`, with
    /// `reference_capacity` delivered at `reference_td`. The resulting line
    /// has slope `-(reference_capacity / reference_td)` and reaches zero
    /// capacity at the box temperature.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateModelError::ZeroReferenceTd`] if `reference_td` is
    /// zero, or [`DegenerateModelError::NonFinite`] if the inputs produce a
    /// non-finite slope or intercept.
    pub fn proportional(
        reference_capacity: f64,
        reference_td: f64,
        box_temp: f64,
    ) -> Result<Self, DegenerateModelError> {
        let reference_td = NonZero::new(reference_td).map_err(|err| match err {
            ConstraintError::Zero => DegenerateModelError::ZeroReferenceTd,
            _ => DegenerateModelError::NonFinite,
        })?;

        let factor = reference_capacity / reference_td.into_inner();
        Self::checked(-factor, factor * box_temp)
    }

    /// Reprojects a curve indexed by coil TD into suction-temperature space.
    ///
    /// `self` must describe capacity as a function of `TD`. The returned
    /// model describes the same capacity as a function of suction temperature
    /// for the given box temperature.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateModelError::NonFinite`] if the reprojected
    /// intercept overflows.
    pub fn reproject_td(self, box_temp: f64) -> Result<Self, DegenerateModelError> {
        Self::checked(-self.slope, self.intercept + self.slope * box_temp)
    }

    /// Capacity (BTU/h) at the given temperature.
    #[must_use]
    pub fn capacity_at(&self, temperature: f64) -> f64 {
        self.slope * temperature + self.intercept
    }

    /// Temperature at which this curve meets `other`.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateModelError::ParallelCurves`] if the slopes are
    /// equal or the intersection is not a finite temperature.
    pub fn intersection(&self, other: &Self) -> Result<f64, DegenerateModelError> {
        let parallel = || DegenerateModelError::ParallelCurves {
            slope: self.slope,
            other_slope: other.slope,
        };

        if self.slope == other.slope {
            return Err(parallel());
        }

        let temperature = (other.intercept - self.intercept) / (self.slope - other.slope);
        Finite::new(temperature)
            .map(|t| t.into_inner())
            .map_err(|_| parallel())
    }

    /// Rate of change of capacity with temperature (BTU/h per °F).
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Capacity at zero temperature (BTU/h).
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    fn checked(slope: f64, intercept: f64) -> Result<Self, DegenerateModelError> {
        let slope = Finite::new(slope).map_err(|_| DegenerateModelError::NonFinite)?;
        let intercept = Finite::new(intercept).map_err(|_| DegenerateModelError::NonFinite)?;
        Ok(Self {
            slope: slope.into_inner(),
            intercept: intercept.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn unit_curve() -> LinearCapacityModel {
        LinearCapacityModel::through(
            CalibrationPoint::new(35.0, 9_000.0),
            CalibrationPoint::new(40.0, 10_200.0),
        )
        .unwrap()
    }

    #[test]
    fn line_passes_through_both_points() {
        let a = CalibrationPoint::new(35.0, 8_640.0);
        let b = CalibrationPoint::new(40.0, 9_910.0);
        let model = LinearCapacityModel::through(a, b).unwrap();

        assert_relative_eq!(model.capacity_at(a.temperature), a.capacity);
        assert_relative_eq!(model.capacity_at(b.temperature), b.capacity);
    }

    #[test]
    fn point_order_does_not_matter() {
        let a = CalibrationPoint::new(35.0, 9_000.0);
        let b = CalibrationPoint::new(40.0, 10_200.0);
        let forward = LinearCapacityModel::through(a, b).unwrap();
        let reverse = LinearCapacityModel::through(b, a).unwrap();

        assert_relative_eq!(forward.slope(), reverse.slope());
        assert_relative_eq!(forward.intercept(), reverse.intercept());
    }

    #[test]
    fn unit_coefficients() {
        let model = unit_curve();
        assert_relative_eq!(model.slope(), 240.0);
        assert_relative_eq!(model.intercept(), 600.0);
    }

    #[test]
    fn extrapolates_beyond_calibration_range() {
        let model = unit_curve();
        assert_relative_eq!(model.capacity_at(20.0), 5_400.0);
        assert_relative_eq!(model.capacity_at(50.0), 12_600.0);
    }

    #[test]
    fn coincident_temperatures_are_degenerate() {
        let result = LinearCapacityModel::through(
            CalibrationPoint::new(35.0, 9_000.0),
            CalibrationPoint::new(35.0, 10_200.0),
        );
        assert_eq!(
            result,
            Err(DegenerateModelError::CoincidentTemperatures { temperature: 35.0 })
        );
    }

    #[test]
    fn non_finite_calibration_data_is_rejected() {
        let result = LinearCapacityModel::through(
            CalibrationPoint::new(35.0, f64::NAN),
            CalibrationPoint::new(40.0, 10_200.0),
        );
        assert_eq!(result, Err(DegenerateModelError::NonFinite));
    }

    #[test]
    fn proportional_evaporator() {
        let model = LinearCapacityModel::proportional(12_000.0, 10.0, 55.0).unwrap();

        assert_relative_eq!(model.slope(), -1_200.0);
        assert_relative_eq!(model.intercept(), 66_000.0);

        // Rated capacity at a 10 °F TD, nothing at zero TD.
        assert_relative_eq!(model.capacity_at(45.0), 12_000.0);
        assert_relative_eq!(model.capacity_at(55.0), 0.0);
        // Proportional at 15 °F TD.
        assert_relative_eq!(model.capacity_at(40.0), 18_000.0);
    }

    #[test]
    fn zero_reference_td_is_degenerate() {
        assert_eq!(
            LinearCapacityModel::proportional(12_000.0, 0.0, 55.0),
            Err(DegenerateModelError::ZeroReferenceTd)
        );
    }

    #[test]
    fn nan_reference_td_is_not_reported_as_zero() {
        assert_eq!(
            LinearCapacityModel::proportional(12_000.0, f64::NAN, 55.0),
            Err(DegenerateModelError::NonFinite)
        );
    }

    #[test]
    fn reprojected_td_curve() {
        // 12,000 BTU/h at 10 °F TD and 17,000 BTU/h at 15 °F TD.
        let by_td = LinearCapacityModel::through(
            CalibrationPoint::new(10.0, 12_000.0),
            CalibrationPoint::new(15.0, 17_000.0),
        )
        .unwrap();
        let by_suction = by_td.reproject_td(55.0).unwrap();

        assert_relative_eq!(by_suction.slope(), -1_000.0);
        assert_relative_eq!(by_suction.capacity_at(45.0), 12_000.0);
        assert_relative_eq!(by_suction.capacity_at(40.0), 17_000.0);
    }

    #[test]
    fn proportional_matches_reprojected_origin_line() {
        let by_td = LinearCapacityModel::through(
            CalibrationPoint::new(0.0, 0.0),
            CalibrationPoint::new(10.0, 12_000.0),
        )
        .unwrap();

        assert_eq!(
            by_td.reproject_td(55.0).unwrap(),
            LinearCapacityModel::proportional(12_000.0, 10.0, 55.0).unwrap()
        );
    }

    #[test]
    fn intersection_balances_capacities() {
        let unit = unit_curve();
        let evaporator = LinearCapacityModel::proportional(12_000.0, 10.0, 55.0).unwrap();

        let t = unit.intersection(&evaporator).unwrap();
        assert_relative_eq!(t, 65_400.0 / 1_440.0);
        assert_relative_eq!(
            unit.capacity_at(t),
            evaporator.capacity_at(t),
            max_relative = 1e-12
        );

        // Symmetric in its arguments.
        assert_relative_eq!(evaporator.intersection(&unit).unwrap(), t);
    }

    #[test]
    fn parallel_curves_have_no_intersection() {
        let unit = LinearCapacityModel::through(
            CalibrationPoint::new(35.0, 12_000.0),
            CalibrationPoint::new(40.0, 6_000.0),
        )
        .unwrap();
        let evaporator = LinearCapacityModel::proportional(12_000.0, 10.0, 55.0).unwrap();

        assert_eq!(
            unit.intersection(&evaporator),
            Err(DegenerateModelError::ParallelCurves {
                slope: -1_200.0,
                other_slope: -1_200.0,
            })
        );
    }
}
