/// Lower suction temperature at which condensing units are rated (°F).
pub const RATED_SUCTION_LOW: f64 = 35.0;

/// Upper suction temperature at which condensing units are rated (°F).
pub const RATED_SUCTION_HIGH: f64 = 40.0;

/// Coil TD at which an evaporator's nominal capacity is published (°F).
pub const NOMINAL_EVAPORATOR_TD: f64 = 15.0;

/// A condensing unit catalog row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CondensingUnit {
    /// Manufacturer model number.
    pub model: String,

    /// Capacity at 40 °F suction (BTU/h). This is the nominal rating.
    pub capacity_40: f64,

    /// Capacity at 35 °F suction (BTU/h).
    pub capacity_35: f64,

    /// Refrigerant designation, e.g. `"R448A"`.
    pub refrigerant: String,

    /// Design ambient temperature label, e.g. `"90"`.
    pub ambient: String,

    /// Electrical supply, e.g. `"208-230/1/60"`.
    pub voltage: String,

    /// Compressor type, if the catalog lists one.
    pub compressor: Option<String>,

    /// Add-on columns as published, placeholders included. See [`Self::addons`].
    pub required_addons: Vec<String>,

    /// Free-form catalog remarks.
    pub notes: Option<String>,
}

/// An evaporator catalog row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaporator {
    /// Manufacturer model number.
    pub model: String,

    /// Nominal capacity at [`NOMINAL_EVAPORATOR_TD`] (BTU/h).
    pub capacity: f64,

    /// Capacity at a 10 °F TD (BTU/h).
    pub capacity_10td: f64,

    /// Refrigerant designation, e.g. `"R448A"`.
    pub refrigerant: String,

    /// Mounting style, e.g. `"CEILING MOUNT"`.
    pub style: String,

    /// Add-on columns as published, placeholders included. See [`Self::addons`].
    pub required_addons: Vec<String>,

    /// Free-form catalog remarks.
    pub notes: Option<String>,
}

impl CondensingUnit {
    /// Add-ons that must be ordered with this unit.
    pub fn addons(&self) -> impl Iterator<Item = &str> {
        real_addons(&self.required_addons)
    }
}

impl Evaporator {
    /// Add-ons that must be ordered with this evaporator.
    pub fn addons(&self) -> impl Iterator<Item = &str> {
        real_addons(&self.required_addons)
    }
}

/// Skips blank add-on columns and the `none` placeholder.
fn real_addons(addons: &[String]) -> impl Iterator<Item = &str> {
    addons
        .iter()
        .map(|addon| addon.trim())
        .filter(|addon| !addon.is_empty() && !addon.eq_ignore_ascii_case("none"))
}
