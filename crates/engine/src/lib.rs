//! Household carbon footprint estimation and reduction planning.
//!
//! Four modules, evaluated leaf-first:
//! - [`factors`]: the emission-factor table (kg CO2e per unit of activity).
//! - [`input`]: the lifestyle record a household fills in.
//! - [`footprint`]: pure aggregation of a lifestyle record into category
//!   totals and a percentage breakdown.
//! - [`strategies`]: reduction actions ranked by estimated yearly savings.
//!
//! [`compute_footprint`] and [`generate_strategies`] are referentially
//! transparent: same input, same output, no side effects.

pub mod factors;
pub mod footprint;
pub mod input;
pub mod strategies;


pub use factors::{EmissionFactors, FactorError, EMISSION_FACTORS};
pub use footprint::{
    compute_footprint, compute_footprint_with, Category, CategoryShare, FootprintResult,
};
pub use input::{
    Consumption, Diet, DietPattern, Energy, FootprintInput, HeatingFuel, Transport, VehicleFuel,
};
pub use strategies::{generate_strategies, Difficulty, ReductionStrategy};
