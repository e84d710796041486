//! Named orbital/seasonal phases derived from the day of year.

use std::fmt;

/// Seasonal phase of the orbit.
///
/// Derived from `floor(day_of_year)` with fixed integer boundaries. A handful
/// of single boundary days (5, 96, 187, 278) match no range and fall through
/// to [`SeasonalPhase::InOrbit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeasonalPhase {
    VernalEquinox,
    Spring,
    SummerSolstice,
    Summer,
    AutumnalEquinox,
    Autumn,
    WinterSolstice,
    Winter,
    /// Fallback for days between ranges.
    InOrbit,
}

impl SeasonalPhase {
    /// All phases, in orbit order with the fallback last.
    pub const ALL: [SeasonalPhase; 9] = [
        SeasonalPhase::VernalEquinox,
        SeasonalPhase::Spring,
        SeasonalPhase::SummerSolstice,
        SeasonalPhase::Summer,
        SeasonalPhase::AutumnalEquinox,
        SeasonalPhase::Autumn,
        SeasonalPhase::WinterSolstice,
        SeasonalPhase::Winter,
        SeasonalPhase::InOrbit,
    ];

    /// Phase for a (fractional) day of year in `[0, 365.25)`.
    pub fn from_day_of_year(day_of_year: f64) -> Self {
        Self::from_day(day_of_year.floor() as i64)
    }

    /// Phase for a whole day of year. First matching range wins.
    pub fn from_day(d: i64) -> Self {
        if (0..5).contains(&d) || d >= 360 {
            SeasonalPhase::VernalEquinox
        } else if (6..86).contains(&d) {
            SeasonalPhase::Spring
        } else if (86..96).contains(&d) {
            SeasonalPhase::SummerSolstice
        } else if (97..177).contains(&d) {
            SeasonalPhase::Summer
        } else if (177..187).contains(&d) {
            SeasonalPhase::AutumnalEquinox
        } else if (188..268).contains(&d) {
            SeasonalPhase::Autumn
        } else if (268..278).contains(&d) {
            SeasonalPhase::WinterSolstice
        } else if (279..360).contains(&d) {
            SeasonalPhase::Winter
        } else {
            SeasonalPhase::InOrbit
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            SeasonalPhase::VernalEquinox => "Vernal Equinox",
            SeasonalPhase::Spring => "Spring",
            SeasonalPhase::SummerSolstice => "Summer Solstice",
            SeasonalPhase::Summer => "Summer",
            SeasonalPhase::AutumnalEquinox => "Autumnal Equinox",
            SeasonalPhase::Autumn => "Autumn",
            SeasonalPhase::WinterSolstice => "Winter Solstice",
            SeasonalPhase::Winter => "Winter",
            SeasonalPhase::InOrbit => "In Orbit",
        }
    }

    /// One-line explanation shown next to the label (northern hemisphere).
    pub fn description(self) -> &'static str {
        match self {
            SeasonalPhase::VernalEquinox => "Day and night are about equal length.",
            SeasonalPhase::Spring => "Days grow longer than nights.",
            SeasonalPhase::SummerSolstice => "Longest day of the year.",
            SeasonalPhase::Summer => "Long days, the sun stands high.",
            SeasonalPhase::AutumnalEquinox => "Day and night are equal again.",
            SeasonalPhase::Autumn => "Nights grow longer than days.",
            SeasonalPhase::WinterSolstice => "Shortest day of the year.",
            SeasonalPhase::Winter => "Short days, the sun stands low.",
            SeasonalPhase::InOrbit => "Between seasons.",
        }
    }

    /// Equinoxes and solstices.
    pub fn is_turning_point(self) -> bool {
        matches!(
            self,
            SeasonalPhase::VernalEquinox
                | SeasonalPhase::SummerSolstice
                | SeasonalPhase::AutumnalEquinox
                | SeasonalPhase::WinterSolstice
        )
    }
}

impl fmt::Display for SeasonalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
