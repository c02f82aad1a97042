use uom::si::f64::{Power, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    capacity::LinearCapacityModel,
    units::{interval_from_fahrenheit, power_from_btu_per_hour, temperature_from_fahrenheit},
};

use super::{CurveSample, HumidityBand};

/// The unrounded intersection of the two capacity curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Balanced saturated suction temperature (°F).
    pub suction_temp: f64,

    /// Balanced capacity (BTU/h).
    pub capacity: f64,

    /// Coil temperature difference, box minus suction (°F).
    pub td: f64,
}

impl OperatingPoint {
    /// Balanced suction temperature as a quantity.
    #[must_use]
    pub fn suction_temperature(&self) -> ThermodynamicTemperature {
        temperature_from_fahrenheit(self.suction_temp)
    }

    /// Balanced capacity as a quantity.
    #[must_use]
    pub fn capacity_power(&self) -> Power {
        power_from_btu_per_hour(self.capacity)
    }

    /// Coil temperature difference as a quantity.
    #[must_use]
    pub fn temperature_difference(&self) -> TemperatureInterval {
        interval_from_fahrenheit(self.td)
    }
}

/// Outcome of a balance-point solve.
///
/// The scalar fields are rounded for display: temperatures to 0.1 °F and
/// capacity to the nearest BTU/h. The exact values are kept in
/// [`operating_point`](Self::operating_point), and `curve_samples` are never
/// rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResult {
    /// Balanced suction temperature (°F, 1 decimal).
    pub suction_temp: f64,

    /// Balanced capacity (BTU/h, whole number).
    pub capacity: f64,

    /// Balanced coil TD (°F, 1 decimal).
    pub td: f64,

    /// Humidity regime implied by the unrounded TD.
    pub humidity: HumidityBand,

    /// Both curves sampled at whole degrees for plotting.
    pub curve_samples: Vec<CurveSample>,

    /// Unrounded balance point.
    pub operating_point: OperatingPoint,

    /// Condensing-unit capacity vs. suction temperature.
    pub unit_curve: LinearCapacityModel,

    /// Evaporator capacity vs. suction temperature.
    pub evaporator_curve: LinearCapacityModel,
}

impl BalanceResult {
    pub(super) fn new(
        operating_point: OperatingPoint,
        unit_curve: LinearCapacityModel,
        evaporator_curve: LinearCapacityModel,
        curve_samples: Vec<CurveSample>,
    ) -> Self {
        Self {
            suction_temp: round_to_tenth(operating_point.suction_temp),
            capacity: operating_point.capacity.round(),
            td: round_to_tenth(operating_point.td),
            humidity: HumidityBand::from_td(operating_point.td),
            curve_samples,
            operating_point,
            unit_curve,
            evaporator_curve,
        }
    }

    /// Index of the curve sample where a chart should mark the balance point.
    ///
    /// This is the sample at the displayed suction temperature rounded to a
    /// whole degree, with halves rounded up (-3.5 marks -3). Returns `None`
    /// only if that sample is missing, which the solver's sampling range
    /// rules out.
    #[must_use]
    pub fn balance_marker(&self) -> Option<usize> {
        let marker = (self.suction_temp + 0.5).floor();
        self.curve_samples
            .iter()
            .position(|sample| sample.temperature == marker)
    }
}

/// Rounds to one decimal place, ties away from zero.
///
/// The decision is made on the exact value, not on `value * 10.0`: the
/// product can round onto a `.5` tie that `value` itself never reaches
/// (41.549999... scales to exactly 415.5).
fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    let floor = scaled.floor();

    if scaled - floor == 0.5 {
        // Exact error of the product; its sign breaks false ties.
        let residual = value.mul_add(10.0, -scaled);
        if residual > 0.0 {
            return (floor + 1.0) / 10.0;
        }
        if residual < 0.0 {
            return floor / 10.0;
        }
    }

    scaled.round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        power::watt, temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn rounding_helpers() {
        assert_relative_eq!(round_to_tenth(45.416_666), 45.4);
        assert_relative_eq!(round_to_tenth(9.583_333), 9.6);
        assert_relative_eq!(round_to_tenth(-3.06), -3.1);
    }

    #[test]
    fn rounding_decides_ties_on_the_exact_value() {
        // Just below a tie, although `value * 10.0` lands exactly on one.
        assert_eq!(41.55 * 10.0, 415.5);
        assert_eq!(round_to_tenth(41.55), 41.5);
        assert_eq!(round_to_tenth(42.15), 42.1);
        assert_eq!(round_to_tenth(-41.55), -41.5);

        // Exactly representable ties round away from zero.
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(-0.25), -0.3);
        assert_eq!(round_to_tenth(12.75), 12.8);
    }

    #[test]
    fn marker_rounds_half_degrees_up() {
        let curve = LinearCapacityModel::proportional(12_000.0, 10.0, 0.0).unwrap();
        let curve_samples = [-5.0, -4.0, -3.0, -2.0]
            .map(|temperature| CurveSample {
                temperature,
                evaporator_capacity: curve.capacity_at(temperature),
                unit_capacity: 0.0,
            })
            .to_vec();
        let operating_point = OperatingPoint {
            suction_temp: -3.5,
            capacity: 42_000.0,
            td: 3.5,
        };

        let result = BalanceResult::new(operating_point, curve, curve, curve_samples);

        assert_eq!(result.suction_temp, -3.5);
        assert_eq!(result.balance_marker(), Some(2));
    }

    #[test]
    fn operating_point_quantities() {
        let point = OperatingPoint {
            suction_temp: 32.0,
            capacity: 12_000.0,
            td: 18.0,
        };

        assert_relative_eq!(
            point.suction_temperature().get::<degree_celsius>(),
            0.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            point.capacity_power().get::<watt>(),
            3_516.852_842,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            point.temperature_difference().get::<delta_kelvin>(),
            10.0,
            epsilon = 1e-9
        );
    }
}
