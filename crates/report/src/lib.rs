//! Presentation layer over the estimation engine: a serializable report
//! payload for machine consumers and a plain-text rendering for terminals.

pub mod rating;
pub mod text;

use engine::{FootprintResult, ReductionStrategy};
use serde::Serialize;

use crate::rating::{FootprintRating, GLOBAL_AVERAGE_KG_PER_YEAR, PARIS_TARGET_KG_PER_YEAR};

/// Strategies counted toward the combined-impact figure.
const COMBINED_IMPACT_TOP_N: usize = 3;

/// What adopting the top-ranked strategies together would achieve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedImpact {
    /// How many strategies were counted (up to three, fewer if the list is
    /// shorter).
    pub strategies_counted: usize,
    /// Summed estimated savings (kg CO2e per year).
    pub savings: f64,
    /// Savings as a share of the total footprint (0-100). Zero when the total
    /// is not positive.
    pub share_of_total: f64,
}

/// Joint payoff of adopting the first three strategies in the list.
///
/// The list is expected in ranked order, as [`engine::generate_strategies`]
/// returns it.
pub fn combined_impact(strategies: &[ReductionStrategy], total_kg: f64) -> CombinedImpact {
    let counted = strategies.len().min(COMBINED_IMPACT_TOP_N);
    let savings: f64 = strategies[..counted].iter().map(|s| s.savings).sum();
    CombinedImpact {
        strategies_counted: counted,
        savings,
        share_of_total: if total_kg > 0.0 {
            savings / total_kg * 100.0
        } else {
            0.0
        },
    }
}

/// A complete report for one household, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub result: FootprintResult,
    pub rating: FootprintRating,
    /// Human-readable rating, e.g. "Above Average".
    pub rating_label: &'static str,
    /// One-line explanation of the rating.
    pub rating_description: &'static str,
    /// Reference figure: worldwide average (kg CO2e per year).
    pub global_average_kg: f64,
    /// Reference figure: Paris-aligned target (kg CO2e per year).
    pub paris_target_kg: f64,
    /// Top strategies, highest savings first.
    pub strategies: Vec<ReductionStrategy>,
    pub combined_impact: CombinedImpact,
}

impl Report {
    /// Assemble a report, keeping the first `top` strategies for display.
    ///
    /// The combined impact is always measured over the head of the full
    /// ranked list, independent of `top`.
    pub fn build(result: &FootprintResult, strategies: &[ReductionStrategy], top: usize) -> Self {
        let rating = FootprintRating::for_total(result.total);
        Report {
            result: result.clone(),
            rating,
            rating_label: rating.label(),
            rating_description: rating.description(),
            global_average_kg: GLOBAL_AVERAGE_KG_PER_YEAR,
            paris_target_kg: PARIS_TARGET_KG_PER_YEAR,
            strategies: strategies.iter().take(top).cloned().collect(),
            combined_impact: combined_impact(strategies, result.total),
        }
    }
}
