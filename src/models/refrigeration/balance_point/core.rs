//! Condensing-unit / evaporator balance-point solving.
//!
//! A condensing unit delivers more capacity as its suction temperature
//! rises, while an evaporator delivers less, because its coil temperature
//! difference to the box air shrinks. The system settles where the two
//! capacities are equal. Both curves are linear in suction temperature, so
//! the balance point is a closed-form line intersection.

mod config;
mod error;
mod humidity;
mod inputs;
mod results;
mod samples;

pub use config::{BalanceConfig, DEFAULT_REFERENCE_TD, EvaporatorModel};
pub use error::BalanceError;
pub use humidity::HumidityBand;
pub use inputs::{InputField, RawInputs, SystemInputs, TdRating};
pub use results::{BalanceResult, OperatingPoint};
pub use samples::{CHART_MARGIN, CurveSample, MAX_CURVE_SAMPLES};

use tracing::{debug, warn};

/// Solves for the balance point of a condensing unit and an evaporator.
///
/// The solve is a pure function of its arguments: identical inputs always
/// produce identical results, and a failed solve leaves nothing behind.
///
/// # Errors
///
/// Returns [`BalanceError::InvalidInput`] for a non-finite field,
/// [`BalanceError::Degenerate`] when the curves cannot be built or do not
/// intersect, and [`BalanceError::SampleRange`] when the balance point lies
/// too far from the ratings to plot.
pub fn solve(inputs: &SystemInputs, config: &BalanceConfig) -> Result<BalanceResult, BalanceError> {
    match solve_unlogged(inputs, config) {
        Ok(result) => {
            debug!(
                suction_temp = result.operating_point.suction_temp,
                capacity = result.operating_point.capacity,
                td = result.operating_point.td,
                humidity = %result.humidity,
                samples = result.curve_samples.len(),
                "balance point solved"
            );
            Ok(result)
        }
        Err(err) => {
            warn!(error = %err, ?inputs, "balance point rejected");
            Err(err)
        }
    }
}

fn solve_unlogged(
    inputs: &SystemInputs,
    config: &BalanceConfig,
) -> Result<BalanceResult, BalanceError> {
    inputs.validate(config)?;

    let unit = inputs.unit_curve()?;
    let evaporator = inputs.evaporator_curve(config)?;

    let suction_temp = unit.intersection(&evaporator)?;
    let operating_point = OperatingPoint {
        suction_temp,
        capacity: unit.capacity_at(suction_temp),
        td: inputs.box_temp - suction_temp,
    };

    let curve_samples = samples::sample_curves(
        &unit,
        &evaporator,
        [inputs.suction_temp_1, inputs.suction_temp_2, suction_temp],
    )?;

    Ok(BalanceResult::new(
        operating_point,
        unit,
        evaporator,
        curve_samples,
    ))
}
