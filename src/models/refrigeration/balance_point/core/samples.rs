use crate::support::capacity::LinearCapacityModel;

use super::BalanceError;

/// Temperature margin (°F) added on each side of the plotted range.
pub const CHART_MARGIN: f64 = 10.0;

/// Upper bound on the number of curve samples produced by one solve.
pub const MAX_CURVE_SAMPLES: usize = 10_000;

/// Both capacity curves evaluated at one suction temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Suction temperature (°F), always a whole degree.
    pub temperature: f64,

    /// Evaporator capacity at this temperature (BTU/h).
    pub evaporator_capacity: f64,

    /// Condensing-unit capacity at this temperature (BTU/h).
    pub unit_capacity: f64,
}

/// Samples both curves at each whole degree covering `temperatures`.
///
/// The range runs from `floor(min - CHART_MARGIN)` to `ceil(max + CHART_MARGIN)`
/// inclusive, in 1 °F steps.
pub(super) fn sample_curves(
    unit: &LinearCapacityModel,
    evaporator: &LinearCapacityModel,
    temperatures: [f64; 3],
) -> Result<Vec<CurveSample>, BalanceError> {
    let min = temperatures.into_iter().fold(f64::INFINITY, f64::min);
    let max = temperatures.into_iter().fold(f64::NEG_INFINITY, f64::max);

    let start = (min - CHART_MARGIN).floor();
    let end = (max + CHART_MARGIN).ceil();

    let count = end - start + 1.0;
    if !(count.is_finite() && count <= MAX_CURVE_SAMPLES as f64) {
        return Err(BalanceError::SampleRange { start, end });
    }

    Ok((0..count as usize)
        .map(|step| {
            let temperature = start + step as f64;
            CurveSample {
                temperature,
                evaporator_capacity: evaporator.capacity_at(temperature),
                unit_capacity: unit.capacity_at(temperature),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::capacity::CalibrationPoint;

    fn curves() -> (LinearCapacityModel, LinearCapacityModel) {
        let unit = LinearCapacityModel::through(
            CalibrationPoint::new(35.0, 9_000.0),
            CalibrationPoint::new(40.0, 10_200.0),
        )
        .unwrap();
        let evaporator = LinearCapacityModel::proportional(12_000.0, 10.0, 55.0).unwrap();
        (unit, evaporator)
    }

    #[test]
    fn covers_margin_around_all_temperatures() {
        let (unit, evaporator) = curves();
        let samples = sample_curves(&unit, &evaporator, [35.0, 40.0, 45.4]).unwrap();

        assert_eq!(samples.len(), 32);
        assert_relative_eq!(samples[0].temperature, 25.0);
        assert_relative_eq!(samples[31].temperature, 56.0);
        assert!(
            samples
                .windows(2)
                .all(|pair| pair[1].temperature - pair[0].temperature == 1.0)
        );
    }

    #[test]
    fn evaluates_both_curves() {
        let (unit, evaporator) = curves();
        let samples = sample_curves(&unit, &evaporator, [35.0, 40.0, 40.0]).unwrap();

        let at_45 = samples.iter().find(|s| s.temperature == 45.0).unwrap();
        assert_relative_eq!(at_45.unit_capacity, 11_400.0);
        assert_relative_eq!(at_45.evaporator_capacity, 12_000.0);
    }

    #[test]
    fn whole_degree_bounds_are_not_widened() {
        let (unit, evaporator) = curves();
        let samples = sample_curves(&unit, &evaporator, [40.0, 35.0, 38.0]).unwrap();

        assert_relative_eq!(samples.first().unwrap().temperature, 25.0);
        assert_relative_eq!(samples.last().unwrap().temperature, 50.0);
    }

    #[test]
    fn refuses_unbounded_ranges() {
        let (unit, evaporator) = curves();
        assert_eq!(
            sample_curves(&unit, &evaporator, [35.0, 40.0, 1.0e9]),
            Err(BalanceError::SampleRange {
                start: 25.0,
                end: 1.0e9 + 10.0,
            })
        );
    }
}
