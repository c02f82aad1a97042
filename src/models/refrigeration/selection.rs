//! Component selection from condensing-unit and evaporator catalogs.
//!
//! Catalog rows are filtered against a [`SelectionQuery`]: rated capacity
//! must fall within a window around the required load, and categorical
//! fields are matched with a [`MatchPolicy`]. Matches come back largest
//! first. A chosen pair is turned into balance-point inputs with
//! [`SystemInputs::from_selection`].
//!
//! Catalogs are plain slices owned by the caller; nothing here keeps a
//! notion of the current selection.

mod catalog;
mod policy;

pub use catalog::{
    CondensingUnit, Evaporator, NOMINAL_EVAPORATOR_TD, RATED_SUCTION_HIGH, RATED_SUCTION_LOW,
};
pub use policy::MatchPolicy;

use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::debug;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::balance_point::{SystemInputs, TdRating};

/// Smallest acceptable rated capacity, as a fraction of the required load.
pub const CAPACITY_WINDOW_LOW: f64 = 0.9;

/// Largest acceptable rated capacity, as a fraction of the required load.
pub const CAPACITY_WINDOW_HIGH: f64 = 1.25;

/// Errors from building a [`SelectionQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The required load is zero, negative, or not a number.
    #[error("required capacity is invalid: {0}")]
    Capacity(#[from] ConstraintError),

    /// No refrigerant was chosen.
    #[error("refrigerant is required")]
    MissingRefrigerant,
}

/// Whether a component's rating meets the required load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityFit {
    /// Rated at or above the required load.
    Meets,
    /// Inside the selection window but below the required load.
    Below,
}

/// Search criteria for a condensing unit and evaporator pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionQuery {
    required_capacity: Constrained<f64, StrictlyPositive>,
    refrigerant: MatchPolicy,

    /// Condensing-unit design ambient.
    pub ambient: MatchPolicy,

    /// Condensing-unit supply voltage.
    pub voltage: MatchPolicy,

    /// Evaporator mounting style.
    pub evaporator_style: MatchPolicy,
}

impl SelectionQuery {
    /// Creates a query for a load (BTU/h) on a given refrigerant.
    ///
    /// Ambient, voltage and style start unrestricted.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Capacity`] if the load is not strictly
    /// positive, or [`SelectionError::MissingRefrigerant`] if the refrigerant
    /// is blank.
    pub fn new(required_capacity: f64, refrigerant: &str) -> Result<Self, SelectionError> {
        let required_capacity = StrictlyPositive::new(required_capacity)?;
        if refrigerant.trim().is_empty() {
            return Err(SelectionError::MissingRefrigerant);
        }

        Ok(Self {
            required_capacity,
            refrigerant: MatchPolicy::exact(refrigerant.trim()),
            ambient: MatchPolicy::Any,
            voltage: MatchPolicy::Any,
            evaporator_style: MatchPolicy::Any,
        })
    }

    /// Required load (BTU/h).
    #[must_use]
    pub fn required_capacity(&self) -> f64 {
        *self.required_capacity.as_ref()
    }

    /// Rated capacities accepted for this load.
    #[must_use]
    pub fn capacity_window(&self) -> RangeInclusive<f64> {
        let load = self.required_capacity();
        (load * CAPACITY_WINDOW_LOW)..=(load * CAPACITY_WINDOW_HIGH)
    }

    /// Classifies a rated capacity against the required load.
    #[must_use]
    pub fn fit(&self, rated_capacity: f64) -> CapacityFit {
        if rated_capacity >= self.required_capacity() {
            CapacityFit::Meets
        } else {
            CapacityFit::Below
        }
    }

    fn accepts_unit(&self, unit: &CondensingUnit) -> bool {
        self.capacity_window().contains(&unit.capacity_40)
            && self.refrigerant.matches(&unit.refrigerant)
            && self.ambient.matches(&unit.ambient)
            && self.voltage.matches(&unit.voltage)
    }

    fn accepts_evaporator(&self, evaporator: &Evaporator) -> bool {
        self.capacity_window().contains(&evaporator.capacity)
            && self.refrigerant.matches(&evaporator.refrigerant)
            && self.evaporator_style.matches(&evaporator.style)
    }
}

/// Condensing units matching the query, largest nominal capacity first.
#[must_use]
pub fn select_condensing_units<'a>(
    catalog: &'a [CondensingUnit],
    query: &SelectionQuery,
) -> Vec<&'a CondensingUnit> {
    let mut matches: Vec<_> = catalog.iter().filter(|u| query.accepts_unit(u)).collect();
    matches.sort_by(|a, b| b.capacity_40.total_cmp(&a.capacity_40));

    debug!(
        catalog = catalog.len(),
        matches = matches.len(),
        load = query.required_capacity(),
        "condensing units selected"
    );
    matches
}

/// Evaporators matching the query, largest nominal capacity first.
#[must_use]
pub fn select_evaporators<'a>(
    catalog: &'a [Evaporator],
    query: &SelectionQuery,
) -> Vec<&'a Evaporator> {
    let mut matches: Vec<_> = catalog
        .iter()
        .filter(|e| query.accepts_evaporator(e))
        .collect();
    matches.sort_by(|a, b| b.capacity.total_cmp(&a.capacity));

    debug!(
        catalog = catalog.len(),
        matches = matches.len(),
        load = query.required_capacity(),
        "evaporators selected"
    );
    matches
}

impl SystemInputs {
    /// Builds balance-point inputs for a selected pair.
    ///
    /// The unit contributes its 35 °F and 40 °F suction ratings. The
    /// evaporator's 10 °F TD rating is the reference capacity and its nominal
    /// rating becomes the secondary rating at [`NOMINAL_EVAPORATOR_TD`].
    #[must_use]
    pub fn from_selection(unit: &CondensingUnit, evaporator: &Evaporator, box_temp: f64) -> Self {
        Self {
            box_temp,
            evaporator_reference_capacity: evaporator.capacity_10td,
            suction_temp_1: RATED_SUCTION_LOW,
            capacity_1: unit.capacity_35,
            suction_temp_2: RATED_SUCTION_HIGH,
            capacity_2: unit.capacity_40,
            evaporator_secondary: Some(TdRating {
                td: NOMINAL_EVAPORATOR_TD,
                capacity: evaporator.capacity,
            }),
        }
    }
}
