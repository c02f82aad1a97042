//! Conversions between [`uom`] quantities and the refrigeration working frame.
//!
//! Condensing-unit and evaporator catalogs are published in degrees Fahrenheit
//! and BTU per hour, and the balance-point arithmetic is carried out directly
//! in those units so that results match the catalog figures without
//! round-tripping through SI.
//!
//! This module is the typed boundary: callers holding [`uom`] quantities
//! convert them here before building inputs, and convert results back out.
//!
//! ```
//! use approx::assert_relative_eq;
//! use refrig_balance::support::units::{btu_per_hour, power_from_btu_per_hour};
//! use uom::si::{f64::Power, power::kilowatt};
//!
//! let capacity = Power::new::<kilowatt>(3.0);
//! assert_relative_eq!(btu_per_hour(capacity), 10_236.424_899, epsilon = 1e-6);
//! assert_relative_eq!(
//!     power_from_btu_per_hour(btu_per_hour(capacity)).get::<kilowatt>(),
//!     3.0,
//!     epsilon = 1e-12
//! );
//! ```

use uom::si::{
    f64::{Power, TemperatureInterval, ThermodynamicTemperature},
    power::watt,
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
    thermodynamic_temperature::degree_fahrenheit,
};

/// International Table BTU per hour in one watt.
pub const BTU_PER_HOUR_PER_WATT: f64 = 3.412_141_633_127_942;

/// Returns a power expressed in BTU per hour.
#[must_use]
pub fn btu_per_hour(power: Power) -> f64 {
    power.get::<watt>() * BTU_PER_HOUR_PER_WATT
}

/// Builds a power from a value in BTU per hour.
#[must_use]
pub fn power_from_btu_per_hour(value: f64) -> Power {
    Power::new::<watt>(value / BTU_PER_HOUR_PER_WATT)
}

/// Returns an absolute temperature expressed in degrees Fahrenheit.
#[must_use]
pub fn fahrenheit(temperature: ThermodynamicTemperature) -> f64 {
    temperature.get::<degree_fahrenheit>()
}

/// Builds an absolute temperature from a value in degrees Fahrenheit.
#[must_use]
pub fn temperature_from_fahrenheit(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_fahrenheit>(value)
}

/// Returns a temperature difference expressed in Fahrenheit degrees.
#[must_use]
pub fn fahrenheit_interval(interval: TemperatureInterval) -> f64 {
    interval.get::<delta_fahrenheit>()
}

/// Builds a temperature difference from a value in Fahrenheit degrees.
#[must_use]
pub fn interval_from_fahrenheit(value: f64) -> TemperatureInterval {
    TemperatureInterval::new::<delta_fahrenheit>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn celsius_catalog_temperatures() {
        let box_temp = ThermodynamicTemperature::new::<degree_celsius>(13.0);
        assert_relative_eq!(fahrenheit(box_temp), 55.4, epsilon = 1e-9);

        let suction = temperature_from_fahrenheit(32.0);
        assert_relative_eq!(suction.get::<degree_celsius>(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn intervals_scale_without_offset() {
        let td = TemperatureInterval::new::<delta_kelvin>(5.0);
        assert_relative_eq!(fahrenheit_interval(td), 9.0, epsilon = 1e-9);
        assert_relative_eq!(
            interval_from_fahrenheit(18.0).get::<delta_kelvin>(),
            10.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn one_ton_of_refrigeration() {
        // 12,000 BTU/h is one ton, about 3.517 kW.
        let ton = power_from_btu_per_hour(12_000.0);
        assert_relative_eq!(ton.get::<watt>(), 3_516.852_842, epsilon = 1e-6);
    }
}
