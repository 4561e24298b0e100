//! Footprint aggregation: turn one lifestyle record into per-category annual
//! totals, a grand total, and a percentage breakdown.
//!
//! Everything here is pure arithmetic over the input and a factor table. No
//! I/O, no shared state, no rounding: presentation layers decide how to round.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::factors::{EmissionFactors, EMISSION_FACTORS};
use crate::input::{Consumption, Diet, Energy, FootprintInput, Transport};

/// Weeks per year, used to annualize weekly mileage.
const WEEKS_PER_YEAR: f64 = 52.0;

/// Months per year, used to annualize monthly electricity use.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Assumed distance covered per flight hour (miles).
const MILES_PER_FLIGHT_HOUR: f64 = 500.0;

/// The clothing factor is priced per this many dollars of monthly spend.
const CLOTHING_SPEND_UNIT: f64 = 100.0;

/// The recreation factor is priced per this many dollars of monthly spend.
const RECREATION_SPEND_UNIT: f64 = 1000.0;

/// The four lifestyle categories every estimate is broken down into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Transport,
    Energy,
    Diet,
    Consumption,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Energy,
        Category::Diet,
        Category::Consumption,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Energy => "Energy",
            Category::Diet => "Diet",
            Category::Consumption => "Consumption",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One category's slice of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    /// kg CO2e per year attributed to this category.
    pub emissions: f64,
    /// Share of the grand total (0-100). Zero for every category when the
    /// total is not positive, so displays never see NaN.
    pub percentage: f64,
}

/// The computed footprint: category totals, grand total, and breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    /// Transport emissions (kg CO2e per year).
    pub transport: f64,
    /// Home energy emissions (kg CO2e per year).
    pub energy: f64,
    /// Dietary emissions (kg CO2e per year).
    pub diet: f64,
    /// Goods and services emissions (kg CO2e per year).
    pub consumption: f64,
    /// Sum of the four categories (kg CO2e per year).
    pub total: f64,
    /// Per-category shares in [`Category::ALL`] order.
    pub breakdown: Vec<CategoryShare>,
}

impl FootprintResult {
    /// Assemble a result from the four category totals, deriving the grand
    /// total and the percentage breakdown.
    pub fn from_totals(transport: f64, energy: f64, diet: f64, consumption: f64) -> Self {
        let total = transport + energy + diet + consumption;
        let share = |category: Category, emissions: f64| CategoryShare {
            category,
            emissions,
            percentage: if total > 0.0 {
                emissions / total * 100.0
            } else {
                0.0
            },
        };
        FootprintResult {
            transport,
            energy,
            diet,
            consumption,
            total,
            breakdown: vec![
                share(Category::Transport, transport),
                share(Category::Energy, energy),
                share(Category::Diet, diet),
                share(Category::Consumption, consumption),
            ],
        }
    }
}

/// Estimate a household's annual footprint using the built-in factor table.
pub fn compute_footprint(input: &FootprintInput) -> FootprintResult {
    compute_footprint_with(&EMISSION_FACTORS, input)
}

/// Estimate a household's annual footprint against a specific factor table.
pub fn compute_footprint_with(
    factors: &EmissionFactors,
    input: &FootprintInput,
) -> FootprintResult {
    FootprintResult::from_totals(
        transport_emissions(factors, &input.transport),
        energy_emissions(factors, &input.energy),
        diet_emissions(factors, &input.diet),
        consumption_emissions(factors, &input.consumption),
    )
}

/// Car miles, transit miles, and flights, annualized.
fn transport_emissions(factors: &EmissionFactors, transport: &Transport) -> f64 {
    // An unknown fuel key zeroes the car term rather than erroring.
    let car_factor = factors
        .vehicle_factor(transport.car_type.key())
        .unwrap_or(0.0);
    let car = transport.miles_per_week * WEEKS_PER_YEAR * car_factor;

    // Transit miles are always priced at the bus factor, whatever the mode.
    let transit = transport.public_transport_miles * WEEKS_PER_YEAR * factors.public_transport.bus;

    let flights = f64::from(transport.flights_per_year)
        * transport.avg_flight_hours
        * MILES_PER_FLIGHT_HOUR
        * factors.aviation.domestic;

    car + transit + flights
}

/// Monthly electricity (annualized) plus heating fuel as reported.
fn energy_emissions(factors: &EmissionFactors, energy: &Energy) -> f64 {
    let electricity = energy.electricity_kwh * MONTHS_PER_YEAR * factors.electricity;

    // Heating usage is applied as reported, with no yearly multiplier. An
    // unknown fuel key zeroes the heating term.
    let heating_factor = factors
        .heating_factor(energy.heating_type.key())
        .unwrap_or(0.0);
    let heating = energy.heating_usage * heating_factor;

    electricity + heating
}

/// Whole-year dietary footprint, falling back to the average diet for unknown
/// patterns.
fn diet_emissions(factors: &EmissionFactors, diet: &Diet) -> f64 {
    factors
        .diet_factor(diet.pattern.key())
        .unwrap_or(factors.diet.average)
}

/// Clothing and recreation spend (per spend unit) plus electronics purchases.
fn consumption_emissions(factors: &EmissionFactors, consumption: &Consumption) -> f64 {
    let clothing =
        consumption.clothing_shopping / CLOTHING_SPEND_UNIT * factors.consumption.clothing;
    let electronics =
        f64::from(consumption.electronics_per_year) * factors.consumption.electronics;
    let recreation =
        consumption.recreation_spending / RECREATION_SPEND_UNIT * factors.consumption.recreation;
    clothing + electronics + recreation
}
