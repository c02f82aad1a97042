use std::fmt;

/// Expected relative humidity in the storage space.
///
/// The coil temperature difference governs how much moisture the evaporator
/// pulls from the air: a small TD keeps the room humid, which is what wine
/// storage wants. Variants are ordered from most to least humid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HumidityBand {
    /// Above 90% RH (TD below 7 °F).
    AboveNinety,
    /// About 90% RH (TD 7 to 9 °F).
    Ninety,
    /// 80 to 85% RH (TD above 9, up to 12 °F).
    EightyToEightyFive,
    /// 65 to 80% RH (TD above 12, up to 16 °F).
    SixtyFiveToEighty,
    /// 50 to 65% RH (TD above 16, up to 22 °F).
    FiftyToSixtyFive,
    /// Below 50% RH (TD above 22 °F).
    BelowFifty,
}

impl HumidityBand {
    /// All bands, most humid first.
    pub const ALL: [Self; 6] = [
        Self::AboveNinety,
        Self::Ninety,
        Self::EightyToEightyFive,
        Self::SixtyFiveToEighty,
        Self::FiftyToSixtyFive,
        Self::BelowFifty,
    ];

    /// Classifies a balanced coil temperature difference (°F).
    ///
    /// Thresholds are checked from most to least humid and the first match
    /// wins. Only the first band is exclusive of its upper bound.
    /// Anything not below 22 °F, including `NaN`, is [`Self::BelowFifty`].
    ///
    /// ```
    /// use refrig_balance::models::refrigeration::balance_point::HumidityBand;
    ///
    /// assert_eq!(HumidityBand::from_td(7.0), HumidityBand::Ninety);
    /// assert_eq!(HumidityBand::from_td(9.6), HumidityBand::EightyToEightyFive);
    /// assert_eq!(HumidityBand::from_td(9.6).label(), "80-85%");
    /// ```
    #[must_use]
    pub fn from_td(td: f64) -> Self {
        if td < 7.0 {
            Self::AboveNinety
        } else if td <= 9.0 {
            Self::Ninety
        } else if td <= 12.0 {
            Self::EightyToEightyFive
        } else if td <= 16.0 {
            Self::SixtyFiveToEighty
        } else if td <= 22.0 {
            Self::FiftyToSixtyFive
        } else {
            Self::BelowFifty
        }
    }

    /// Display label, as shown next to the results.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AboveNinety => ">90%",
            Self::Ninety => "90%",
            Self::EightyToEightyFive => "80-85%",
            Self::SixtyFiveToEighty => "65-80%",
            Self::FiftyToSixtyFive => "50-65%",
            Self::BelowFifty => "<50%",
        }
    }
}

impl fmt::Display for HumidityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        let cases = [
            (-5.0, HumidityBand::AboveNinety),
            (6.99, HumidityBand::AboveNinety),
            (7.0, HumidityBand::Ninety),
            (9.0, HumidityBand::Ninety),
            (9.01, HumidityBand::EightyToEightyFive),
            (12.0, HumidityBand::EightyToEightyFive),
            (12.5, HumidityBand::SixtyFiveToEighty),
            (16.0, HumidityBand::SixtyFiveToEighty),
            (16.1, HumidityBand::FiftyToSixtyFive),
            (22.0, HumidityBand::FiftyToSixtyFive),
            (22.01, HumidityBand::BelowFifty),
            (400.0, HumidityBand::BelowFifty),
        ];

        for (td, expected) in cases {
            assert_eq!(HumidityBand::from_td(td), expected, "td={td}");
        }
    }

    #[test]
    fn total_over_extreme_values() {
        assert_eq!(
            HumidityBand::from_td(f64::NEG_INFINITY),
            HumidityBand::AboveNinety
        );
        assert_eq!(HumidityBand::from_td(f64::INFINITY), HumidityBand::BelowFifty);
        assert_eq!(HumidityBand::from_td(f64::NAN), HumidityBand::BelowFifty);
    }

    #[test]
    fn drier_as_td_grows() {
        let mut previous = HumidityBand::from_td(-10.0);
        for step in 0..=400 {
            let td = -10.0 + f64::from(step) * 0.1;
            let band = HumidityBand::from_td(td);
            assert!(band >= previous, "band went back at td={td}");
            previous = band;
        }
        assert_eq!(previous, HumidityBand::BelowFifty);
    }

    #[test]
    fn every_band_is_reachable() {
        let reached: Vec<_> = [0.0, 8.0, 10.0, 14.0, 20.0, 30.0]
            .into_iter()
            .map(HumidityBand::from_td)
            .collect();
        assert_eq!(reached, HumidityBand::ALL);
    }
}
