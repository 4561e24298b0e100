//! Reduction strategies: concrete actions ranked by estimated yearly savings.
//!
//! The catalog is fixed. Seven strategies always apply; three more switch on
//! when a category total crosses its threshold. Savings are a fixed fraction
//! of the category total, so the ordering adapts to the household's profile.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::footprint::{Category, FootprintResult};

/// Transport total (kg CO2e per year) above which a vehicle switch is
/// recommended.
pub const VEHICLE_SWITCH_THRESHOLD: f64 = 2000.0;

/// Energy total (kg CO2e per year) above which rooftop solar is recommended.
pub const SOLAR_THRESHOLD: f64 = 3000.0;

/// Diet total (kg CO2e per year) above which halving meat consumption is
/// recommended.
pub const MEAT_REDUCTION_THRESHOLD: f64 = 2500.0;

/// How hard a strategy is to adopt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// One recommended action with its estimated payoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionStrategy {
    pub category: Category,
    /// What to do.
    pub action: String,
    /// What it achieves, in rough percentage terms.
    pub impact: String,
    pub difficulty: Difficulty,
    /// Estimated kg CO2e avoided per year if adopted.
    pub savings: f64,
}

/// Build the strategy list for a computed footprint, sorted by savings,
/// largest first. Ties keep catalog order, so output is deterministic.
pub fn generate_strategies(result: &FootprintResult) -> Vec<ReductionStrategy> {
    let mut strategies = Vec::with_capacity(10);

    transport_strategies(result, &mut strategies);
    energy_strategies(result, &mut strategies);
    diet_strategies(result, &mut strategies);
    consumption_strategies(result, &mut strategies);

    strategies.sort_by(|a, b| b.savings.partial_cmp(&a.savings).unwrap_or(Ordering::Equal));
    strategies
}

fn transport_strategies(result: &FootprintResult, strategies: &mut Vec<ReductionStrategy>) {
    if result.transport > VEHICLE_SWITCH_THRESHOLD {
        strategies.push(ReductionStrategy {
            category: Category::Transport,
            action: "Switch to electric or hybrid vehicle".into(),
            impact: "Reduce transport emissions by 50-75%".into(),
            difficulty: Difficulty::Hard,
            savings: result.transport * 0.6,
        });
    }

    strategies.push(ReductionStrategy {
        category: Category::Transport,
        action: "Use public transport 2 days per week".into(),
        impact: "Reduce car emissions by 30%".into(),
        difficulty: Difficulty::Medium,
        savings: result.transport * 0.3,
    });

    strategies.push(ReductionStrategy {
        category: Category::Transport,
        action: "Work from home 1-2 days per week".into(),
        impact: "Reduce commute emissions by 20-40%".into(),
        difficulty: Difficulty::Easy,
        savings: result.transport * 0.25,
    });
}

fn energy_strategies(result: &FootprintResult, strategies: &mut Vec<ReductionStrategy>) {
    if result.energy > SOLAR_THRESHOLD {
        strategies.push(ReductionStrategy {
            category: Category::Energy,
            action: "Install solar panels".into(),
            impact: "Reduce electricity emissions by 80%".into(),
            difficulty: Difficulty::Hard,
            savings: result.energy * 0.8,
        });
    }

    strategies.push(ReductionStrategy {
        category: Category::Energy,
        action: "Switch to LED bulbs and efficient appliances".into(),
        impact: "Reduce electricity use by 20%".into(),
        difficulty: Difficulty::Easy,
        savings: result.energy * 0.2,
    });

    strategies.push(ReductionStrategy {
        category: Category::Energy,
        action: "Improve home insulation".into(),
        impact: "Reduce heating emissions by 30%".into(),
        difficulty: Difficulty::Medium,
        savings: result.energy * 0.3,
    });
}

fn diet_strategies(result: &FootprintResult, strategies: &mut Vec<ReductionStrategy>) {
    if result.diet > MEAT_REDUCTION_THRESHOLD {
        strategies.push(ReductionStrategy {
            category: Category::Diet,
            action: "Reduce meat consumption by half".into(),
            impact: "Lower diet emissions by 30-40%".into(),
            difficulty: Difficulty::Medium,
            savings: result.diet * 0.35,
        });
    }

    strategies.push(ReductionStrategy {
        category: Category::Diet,
        action: "Choose local and seasonal produce".into(),
        impact: "Reduce food transport emissions by 15%".into(),
        difficulty: Difficulty::Easy,
        savings: result.diet * 0.15,
    });
}

fn consumption_strategies(result: &FootprintResult, strategies: &mut Vec<ReductionStrategy>) {
    strategies.push(ReductionStrategy {
        category: Category::Consumption,
        action: "Buy second-hand clothes and electronics".into(),
        impact: "Reduce consumption emissions by 50%".into(),
        difficulty: Difficulty::Easy,
        savings: result.consumption * 0.5,
    });

    strategies.push(ReductionStrategy {
        category: Category::Consumption,
        action: "Repair instead of replacing items".into(),
        impact: "Extend product lifespan and reduce waste".into(),
        difficulty: Difficulty::Easy,
        savings: result.consumption * 0.3,
    });
}
