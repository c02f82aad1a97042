//! Picks a condensing unit and evaporator for a small wine cellar and prints
//! the estimated balance point for each evaporator model.
//!
//! Run with `RUST_LOG=debug` to see the solver's tracing events.

use refrig_balance::models::refrigeration::{
    balance_point::{BalanceConfig, BalancePoint, CurveSample, SystemInputs},
    selection::{
        CondensingUnit, Evaporator, MatchPolicy, SelectionQuery, select_condensing_units,
        select_evaporators,
    },
};
use tracing_subscriber::{EnvFilter, fmt};
use twine_core::Model;

const BOX_TEMP_F: f64 = 55.0;
const LOAD_BTUH: f64 = 9_500.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let units = condensing_units();
    let evaporators = evaporators();

    let mut query = SelectionQuery::new(LOAD_BTUH, "R448")?;
    query.ambient = MatchPolicy::exact("90");
    query.evaporator_style = MatchPolicy::from_form_value("all");

    let unit_matches = select_condensing_units(&units, &query);
    let evaporator_matches = select_evaporators(&evaporators, &query);

    println!("Condensing units for {LOAD_BTUH} BTU/h:");
    for unit in &unit_matches {
        println!(
            "  {:<10} {:>7} BTU/h  {:?}",
            unit.model,
            unit.capacity_40,
            query.fit(unit.capacity_40)
        );
    }
    println!("Evaporators:");
    for evaporator in &evaporator_matches {
        println!(
            "  {:<10} {:>7} BTU/h  {}",
            evaporator.model, evaporator.capacity, evaporator.style
        );
    }

    let (Some(unit), Some(evaporator)) = (unit_matches.first(), evaporator_matches.first()) else {
        println!("No matching pair.");
        return Ok(());
    };

    let inputs = SystemInputs::from_selection(unit, evaporator, BOX_TEMP_F);
    for (label, config) in [
        ("proportional", BalanceConfig::default()),
        ("two-point", BalanceConfig::default().two_point()),
    ] {
        println!("\n{} + {} ({label} evaporator model)", unit.model, evaporator.model);
        match BalancePoint::new(config).call(&inputs) {
            Ok(result) => {
                println!("  Balanced SST:      {:.1} °F", result.suction_temp);
                println!("  Balanced capacity: {:.0} BTU/h", result.capacity);
                println!("  Balanced TD:       {:.1} °F", result.td);
                println!("  Humidity estimate: {}", result.humidity);
                print_curves(&result.curve_samples, result.balance_marker());
            }
            Err(err) => println!("  Error: {err}"),
        }
    }

    Ok(())
}

fn print_curves(samples: &[CurveSample], marker: Option<usize>) {
    println!("  {:>6} {:>12} {:>12}", "SST", "evaporator", "unit");
    for (index, sample) in samples.iter().enumerate() {
        let flag = if Some(index) == marker { " <- balance" } else { "" };
        println!(
            "  {:>6.0} {:>12.0} {:>12.0}{flag}",
            sample.temperature, sample.evaporator_capacity, sample.unit_capacity
        );
    }
}

fn condensing_units() -> Vec<CondensingUnit> {
    vec![
        CondensingUnit {
            model: "WC-075".into(),
            capacity_40: 8_900.0,
            capacity_35: 7_800.0,
            refrigerant: "R448".into(),
            ambient: "90".into(),
            voltage: "115".into(),
            ..CondensingUnit::default()
        },
        CondensingUnit {
            model: "WC-100".into(),
            capacity_40: 10_200.0,
            capacity_35: 9_000.0,
            refrigerant: "R448".into(),
            ambient: "90".into(),
            voltage: "230".into(),
            required_addons: vec!["Low ambient kit".into(), "NONE".into()],
            ..CondensingUnit::default()
        },
        CondensingUnit {
            model: "WC-100H".into(),
            capacity_40: 9_600.0,
            capacity_35: 8_500.0,
            refrigerant: "R448".into(),
            ambient: "110".into(),
            voltage: "230".into(),
            ..CondensingUnit::default()
        },
    ]
}

fn evaporators() -> Vec<Evaporator> {
    vec![
        Evaporator {
            model: "EC-110".into(),
            capacity: 11_400.0,
            capacity_10td: 7_600.0,
            refrigerant: "R448".into(),
            style: "CEILING MOUNT".into(),
            ..Evaporator::default()
        },
        Evaporator {
            model: "ED-170".into(),
            capacity: 17_000.0,
            capacity_10td: 12_000.0,
            refrigerant: "R448".into(),
            style: "DUCTED HORIZ".into(),
            ..Evaporator::default()
        },
    ]
}
