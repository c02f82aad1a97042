/// Evaporator temperature difference at which catalogs give the reference rating (°F).
pub const DEFAULT_REFERENCE_TD: f64 = 10.0;

/// How the evaporator capacity curve is extrapolated from its ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaporatorModel {
    /// Capacity proportional to TD, from the single reference rating.
    #[default]
    Proportional,

    /// Capacity linear in TD through the reference rating and the
    /// secondary rating carried by [`SystemInputs::evaporator_secondary`].
    ///
    /// [`SystemInputs::evaporator_secondary`]: super::SystemInputs::evaporator_secondary
    TwoPoint,
}

/// Solver configuration for balance-point calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceConfig {
    /// Temperature difference (°F) at which the evaporator reference
    /// capacity is rated.
    pub reference_td: f64,

    /// Evaporator curve construction.
    pub evaporator: EvaporatorModel,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            reference_td: DEFAULT_REFERENCE_TD,
            evaporator: EvaporatorModel::Proportional,
        }
    }
}

impl BalanceConfig {
    /// Returns this configuration with the two-point evaporator model selected.
    #[must_use]
    pub fn two_point(self) -> Self {
        Self {
            evaporator: EvaporatorModel::TwoPoint,
            ..self
        }
    }
}
