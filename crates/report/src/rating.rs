//! Qualitative banding of a footprint total, with the reference figures a
//! reader needs to place their number in context.

use serde::Serialize;

/// Worldwide average footprint (kg CO2e per person per year).
pub const GLOBAL_AVERAGE_KG_PER_YEAR: f64 = 4800.0;

/// Paris Agreement aligned per-person target (kg CO2e per year).
pub const PARIS_TARGET_KG_PER_YEAR: f64 = 2300.0;

/// Upper bound of the Excellent band (kg CO2e per year).
const EXCELLENT_BELOW: f64 = 3000.0;

/// Upper bound of the Good band (kg CO2e per year).
const GOOD_BELOW: f64 = 5000.0;

/// Upper bound of the Above Average band (kg CO2e per year).
const ABOVE_AVERAGE_BELOW: f64 = 8000.0;

/// Where a yearly total lands relative to global and sustainable levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FootprintRating {
    Excellent,
    Good,
    AboveAverage,
    HighImpact,
}

impl FootprintRating {
    /// Band a yearly total (kg CO2e). Bounds are exclusive at the top, so
    /// exactly 3000 already counts as Good.
    pub fn for_total(total_kg: f64) -> Self {
        if total_kg < EXCELLENT_BELOW {
            FootprintRating::Excellent
        } else if total_kg < GOOD_BELOW {
            FootprintRating::Good
        } else if total_kg < ABOVE_AVERAGE_BELOW {
            FootprintRating::AboveAverage
        } else {
            FootprintRating::HighImpact
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FootprintRating::Excellent => "Excellent",
            FootprintRating::Good => "Good",
            FootprintRating::AboveAverage => "Above Average",
            FootprintRating::HighImpact => "High Impact",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FootprintRating::Excellent => "Well below global average",
            FootprintRating::Good => "Close to sustainable levels",
            FootprintRating::AboveAverage => "Higher than global average",
            FootprintRating::HighImpact => "Significantly above sustainable levels",
        }
    }
}
