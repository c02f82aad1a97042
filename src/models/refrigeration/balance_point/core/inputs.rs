//! Solver inputs and their validation.

use std::fmt;

use uom::si::f64::{Power, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    capacity::{CalibrationPoint, DegenerateModelError, LinearCapacityModel},
    constraint::Finite,
    units::{btu_per_hour, fahrenheit, fahrenheit_interval},
};

use super::{BalanceConfig, BalanceError, EvaporatorModel};

/// Names a numeric input field.
///
/// Variants are declared in validation order, so the first invalid field
/// reported is always deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputField {
    /// Box (storage space) temperature.
    BoxTemp,
    /// Evaporator capacity at the reference TD.
    EvaporatorReferenceCapacity,
    /// First condensing-unit rating temperature.
    SuctionTemp1,
    /// Condensing-unit capacity at the first rating temperature.
    Capacity1,
    /// Second condensing-unit rating temperature.
    SuctionTemp2,
    /// Condensing-unit capacity at the second rating temperature.
    Capacity2,
    /// TD of the evaporator's secondary rating.
    EvaporatorSecondaryTd,
    /// Capacity of the evaporator's secondary rating.
    EvaporatorSecondaryCapacity,
}

impl InputField {
    /// Human-readable field name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BoxTemp => "box temperature",
            Self::EvaporatorReferenceCapacity => "evaporator reference capacity",
            Self::SuctionTemp1 => "suction temperature 1",
            Self::Capacity1 => "capacity 1",
            Self::SuctionTemp2 => "suction temperature 2",
            Self::Capacity2 => "capacity 2",
            Self::EvaporatorSecondaryTd => "evaporator secondary TD",
            Self::EvaporatorSecondaryCapacity => "evaporator secondary capacity",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An evaporator capacity rating at a given coil temperature difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TdRating {
    /// Coil temperature difference (°F).
    pub td: f64,

    /// Capacity at that TD (BTU/h).
    pub capacity: f64,
}

/// Ratings for one condensing unit and one evaporator, plus the box temperature.
///
/// Temperatures are in °F and capacities in BTU/h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemInputs {
    /// Storage (box) air temperature.
    pub box_temp: f64,

    /// Evaporator capacity at the reference TD (see [`BalanceConfig::reference_td`]).
    pub evaporator_reference_capacity: f64,

    /// First condensing-unit rating suction temperature.
    pub suction_temp_1: f64,

    /// Condensing-unit capacity at `suction_temp_1`.
    pub capacity_1: f64,

    /// Second condensing-unit rating suction temperature.
    pub suction_temp_2: f64,

    /// Condensing-unit capacity at `suction_temp_2`.
    pub capacity_2: f64,

    /// Additional evaporator rating, used only by [`EvaporatorModel::TwoPoint`].
    pub evaporator_secondary: Option<TdRating>,
}

impl SystemInputs {
    /// Builds inputs from typed quantities.
    ///
    /// Values are converted to °F and BTU/h; `unit_ratings` pairs each
    /// suction temperature with the condensing-unit capacity there.
    #[must_use]
    pub fn from_quantities(
        box_temp: ThermodynamicTemperature,
        evaporator_reference_capacity: Power,
        unit_ratings: [(ThermodynamicTemperature, Power); 2],
    ) -> Self {
        let [(suction_temp_1, capacity_1), (suction_temp_2, capacity_2)] = unit_ratings;
        Self {
            box_temp: fahrenheit(box_temp),
            evaporator_reference_capacity: btu_per_hour(evaporator_reference_capacity),
            suction_temp_1: fahrenheit(suction_temp_1),
            capacity_1: btu_per_hour(capacity_1),
            suction_temp_2: fahrenheit(suction_temp_2),
            capacity_2: btu_per_hour(capacity_2),
            evaporator_secondary: None,
        }
    }

    /// Returns these inputs with a secondary evaporator rating given as quantities.
    #[must_use]
    pub fn with_secondary_quantity(self, td: TemperatureInterval, capacity: Power) -> Self {
        Self {
            evaporator_secondary: Some(TdRating {
                td: fahrenheit_interval(td),
                capacity: btu_per_hour(capacity),
            }),
            ..self
        }
    }

    /// Parses inputs from form text.
    ///
    /// Each field is trimmed and thousands separators are removed before
    /// parsing, so `" 10,200 "` reads as `10200`.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidInput`] naming the first field that is
    /// empty, non-numeric, or not finite. A secondary rating with only one of
    /// its two fields filled in is reported against the missing field.
    pub fn parse(raw: &RawInputs<'_>) -> Result<Self, BalanceError> {
        let box_temp = parse_field(InputField::BoxTemp, raw.box_temp)?;
        let evaporator_reference_capacity = parse_field(
            InputField::EvaporatorReferenceCapacity,
            raw.evaporator_reference_capacity,
        )?;
        let suction_temp_1 = parse_field(InputField::SuctionTemp1, raw.suction_temp_1)?;
        let capacity_1 = parse_field(InputField::Capacity1, raw.capacity_1)?;
        let suction_temp_2 = parse_field(InputField::SuctionTemp2, raw.suction_temp_2)?;
        let capacity_2 = parse_field(InputField::Capacity2, raw.capacity_2)?;

        let evaporator_secondary =
            match (raw.evaporator_secondary_td, raw.evaporator_secondary_capacity) {
                (None, None) => None,
                (td, capacity) => Some(TdRating {
                    td: parse_field(InputField::EvaporatorSecondaryTd, td.unwrap_or_default())?,
                    capacity: parse_field(
                        InputField::EvaporatorSecondaryCapacity,
                        capacity.unwrap_or_default(),
                    )?,
                }),
            };

        Ok(Self {
            box_temp,
            evaporator_reference_capacity,
            suction_temp_1,
            capacity_1,
            suction_temp_2,
            capacity_2,
            evaporator_secondary,
        })
    }

    /// Checks that every field the configuration uses is finite.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidInput`] naming the first offending field.
    pub fn validate(&self, config: &BalanceConfig) -> Result<(), BalanceError> {
        let fields = [
            (InputField::BoxTemp, self.box_temp),
            (
                InputField::EvaporatorReferenceCapacity,
                self.evaporator_reference_capacity,
            ),
            (InputField::SuctionTemp1, self.suction_temp_1),
            (InputField::Capacity1, self.capacity_1),
            (InputField::SuctionTemp2, self.suction_temp_2),
            (InputField::Capacity2, self.capacity_2),
        ];
        for (field, value) in fields {
            check_finite(field, value)?;
        }

        if config.evaporator == EvaporatorModel::TwoPoint {
            let secondary = self.secondary_rating()?;
            check_finite(InputField::EvaporatorSecondaryTd, secondary.td)?;
            check_finite(InputField::EvaporatorSecondaryCapacity, secondary.capacity)?;
        }

        Ok(())
    }

    /// Condensing-unit capacity as a function of suction temperature.
    ///
    /// # Errors
    ///
    /// Returns a [`DegenerateModelError`] if both ratings share a suction temperature.
    pub fn unit_curve(&self) -> Result<LinearCapacityModel, DegenerateModelError> {
        LinearCapacityModel::through(
            CalibrationPoint::new(self.suction_temp_1, self.capacity_1),
            CalibrationPoint::new(self.suction_temp_2, self.capacity_2),
        )
    }

    /// Evaporator capacity as a function of suction temperature.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidInput`] if the two-point model is
    /// selected without a secondary rating, or [`BalanceError::Degenerate`]
    /// if the ratings cannot define a line.
    pub fn evaporator_curve(
        &self,
        config: &BalanceConfig,
    ) -> Result<LinearCapacityModel, BalanceError> {
        let curve = match config.evaporator {
            EvaporatorModel::Proportional => LinearCapacityModel::proportional(
                self.evaporator_reference_capacity,
                config.reference_td,
                self.box_temp,
            )?,
            EvaporatorModel::TwoPoint => {
                let secondary = self.secondary_rating()?;
                LinearCapacityModel::through(
                    CalibrationPoint::new(config.reference_td, self.evaporator_reference_capacity),
                    CalibrationPoint::new(secondary.td, secondary.capacity),
                )?
                .reproject_td(self.box_temp)?
            }
        };
        Ok(curve)
    }

    fn secondary_rating(&self) -> Result<TdRating, BalanceError> {
        self.evaporator_secondary
            .ok_or(BalanceError::InvalidInput {
                field: InputField::EvaporatorSecondaryTd,
            })
    }
}

/// Form text for [`SystemInputs::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawInputs<'a> {
    /// Box temperature (°F).
    pub box_temp: &'a str,

    /// Evaporator capacity at the reference TD (BTU/h).
    pub evaporator_reference_capacity: &'a str,

    /// First condensing-unit rating temperature (°F).
    pub suction_temp_1: &'a str,

    /// Condensing-unit capacity at `suction_temp_1` (BTU/h).
    pub capacity_1: &'a str,

    /// Second condensing-unit rating temperature (°F).
    pub suction_temp_2: &'a str,

    /// Condensing-unit capacity at `suction_temp_2` (BTU/h).
    pub capacity_2: &'a str,

    /// Secondary evaporator rating TD (°F), if given.
    pub evaporator_secondary_td: Option<&'a str>,

    /// Secondary evaporator rating capacity (BTU/h), if given.
    pub evaporator_secondary_capacity: Option<&'a str>,
}

fn parse_field(field: InputField, text: &str) -> Result<f64, BalanceError> {
    let cleaned: String = text.trim().chars().filter(|&c| c != ',').collect();
    let value = cleaned
        .parse::<f64>()
        .map_err(|_| BalanceError::InvalidInput { field })?;
    check_finite(field, value)
}

fn check_finite(field: InputField, value: f64) -> Result<f64, BalanceError> {
    Finite::new(value)
        .map(|v| v.into_inner())
        .map_err(|_| BalanceError::InvalidInput { field })
}
