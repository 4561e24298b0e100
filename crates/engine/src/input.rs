//! Lifestyle input record: what a household reports about itself.
//!
//! The wire format is camelCase JSON. Fuel and diet fields are open-ended:
//! unknown strings deserialize into an `Other` variant instead of failing, and
//! the aggregation step decides what an unmatched key is worth.

use serde::{Deserialize, Serialize};

/// Vehicle fuel type. Unknown keys are carried as [`VehicleFuel::Other`] and
/// contribute nothing to the car term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleFuel {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
    Other(String),
}

impl VehicleFuel {
    /// The factor-table key this fuel maps to.
    pub fn key(&self) -> &str {
        match self {
            VehicleFuel::Gasoline => "gasoline",
            VehicleFuel::Diesel => "diesel",
            VehicleFuel::Hybrid => "hybrid",
            VehicleFuel::Electric => "electric",
            VehicleFuel::Other(key) => key,
        }
    }
}

impl From<String> for VehicleFuel {
    fn from(key: String) -> Self {
        match key.as_str() {
            "gasoline" => VehicleFuel::Gasoline,
            "diesel" => VehicleFuel::Diesel,
            "hybrid" => VehicleFuel::Hybrid,
            "electric" => VehicleFuel::Electric,
            _ => VehicleFuel::Other(key),
        }
    }
}

impl From<&str> for VehicleFuel {
    fn from(key: &str) -> Self {
        VehicleFuel::from(key.to_owned())
    }
}

impl From<VehicleFuel> for String {
    fn from(fuel: VehicleFuel) -> Self {
        fuel.key().to_owned()
    }
}

/// Home heating fuel. Unknown keys are carried as [`HeatingFuel::Other`] and
/// zero the heating term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeatingFuel {
    Gas,
    Oil,
    Electric,
    Other(String),
}

impl HeatingFuel {
    /// The factor-table key this fuel maps to.
    pub fn key(&self) -> &str {
        match self {
            HeatingFuel::Gas => "gas",
            HeatingFuel::Oil => "oil",
            HeatingFuel::Electric => "electric",
            HeatingFuel::Other(key) => key,
        }
    }
}

impl From<String> for HeatingFuel {
    fn from(key: String) -> Self {
        match key.as_str() {
            "gas" => HeatingFuel::Gas,
            "oil" => HeatingFuel::Oil,
            "electric" => HeatingFuel::Electric,
            _ => HeatingFuel::Other(key),
        }
    }
}

impl From<&str> for HeatingFuel {
    fn from(key: &str) -> Self {
        HeatingFuel::from(key.to_owned())
    }
}

impl From<HeatingFuel> for String {
    fn from(fuel: HeatingFuel) -> Self {
        fuel.key().to_owned()
    }
}

/// Eating pattern. Unknown keys are carried as [`DietPattern::Other`] and fall
/// back to the average-diet footprint, never to zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietPattern {
    MeatHeavy,
    Average,
    Vegetarian,
    Vegan,
    Other(String),
}

impl DietPattern {
    /// The factor-table key this pattern maps to (camelCase, matching the wire
    /// format).
    pub fn key(&self) -> &str {
        match self {
            DietPattern::MeatHeavy => "meatHeavy",
            DietPattern::Average => "average",
            DietPattern::Vegetarian => "vegetarian",
            DietPattern::Vegan => "vegan",
            DietPattern::Other(key) => key,
        }
    }
}

impl From<String> for DietPattern {
    fn from(key: String) -> Self {
        match key.as_str() {
            "meatHeavy" => DietPattern::MeatHeavy,
            "average" => DietPattern::Average,
            "vegetarian" => DietPattern::Vegetarian,
            "vegan" => DietPattern::Vegan,
            _ => DietPattern::Other(key),
        }
    }
}

impl From<&str> for DietPattern {
    fn from(key: &str) -> Self {
        DietPattern::from(key.to_owned())
    }
}

impl From<DietPattern> for String {
    fn from(pattern: DietPattern) -> Self {
        pattern.key().to_owned()
    }
}

/// Weekly travel habits plus yearly flights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    pub car_type: VehicleFuel,
    /// Miles driven per week.
    pub miles_per_week: f64,
    /// Transit miles per week.
    pub public_transport_miles: f64,
    /// Flights taken per year.
    pub flights_per_year: u32,
    /// Average duration of one flight (hours).
    pub avg_flight_hours: f64,
}

/// Household energy use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Energy {
    /// Electricity use per month (kWh).
    pub electricity_kwh: f64,
    pub heating_type: HeatingFuel,
    /// Heating fuel use in the fuel's own unit (therms, gallons, or kWh).
    /// Applied as reported, not annualized.
    pub heating_usage: f64,
    /// Home size (square feet). Collected for context; no emission term reads
    /// it today.
    pub home_size: f64,
}

/// Eating pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diet {
    #[serde(rename = "type")]
    pub pattern: DietPattern,
}

/// Monthly spending and yearly purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumption {
    /// Clothing spend per month (dollars).
    pub clothing_shopping: f64,
    /// Electronic devices purchased per year.
    pub electronics_per_year: u32,
    /// Recreation spend per month (dollars).
    pub recreation_spending: f64,
}

/// One household's complete lifestyle record.
///
/// `Default` is a plausible mid-range profile, useful as a starting point for
/// partial construction with struct update syntax:
///
/// ```
/// use engine::input::{FootprintInput, Transport, VehicleFuel};
///
/// let input = FootprintInput {
///     transport: Transport {
///         car_type: VehicleFuel::Electric,
///         miles_per_week: 40.0,
///         ..Transport::default()
///     },
///     ..FootprintInput::default()
/// };
/// assert_eq!(input.energy.electricity_kwh, 900.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintInput {
    pub transport: Transport,
    pub energy: Energy,
    pub diet: Diet,
    pub consumption: Consumption,
}

impl Default for Transport {
    fn default() -> Self {
        Transport {
            car_type: VehicleFuel::Gasoline,
            miles_per_week: 100.0,
            public_transport_miles: 0.0,
            flights_per_year: 0,
            avg_flight_hours: 0.0,
        }
    }
}

impl Default for Energy {
    fn default() -> Self {
        Energy {
            electricity_kwh: 900.0,
            heating_type: HeatingFuel::Gas,
            heating_usage: 150.0,
            home_size: 1500.0,
        }
    }
}

impl Default for Diet {
    fn default() -> Self {
        Diet {
            pattern: DietPattern::Average,
        }
    }
}

impl Default for Consumption {
    fn default() -> Self {
        Consumption {
            clothing_shopping: 100.0,
            electronics_per_year: 0,
            recreation_spending: 500.0,
        }
    }
}

impl Default for FootprintInput {
    fn default() -> Self {
        FootprintInput {
            transport: Transport::default(),
            energy: Energy::default(),
            diet: Diet::default(),
            consumption: Consumption::default(),
        }
    }
}

impl FootprintInput {
    /// An all-zero record with known fuel keys, for baselines and tests.
    pub fn zeroed() -> Self {
        FootprintInput {
            transport: Transport {
                car_type: VehicleFuel::Gasoline,
                miles_per_week: 0.0,
                public_transport_miles: 0.0,
                flights_per_year: 0,
                avg_flight_hours: 0.0,
            },
            energy: Energy {
                electricity_kwh: 0.0,
                heating_type: HeatingFuel::Gas,
                heating_usage: 0.0,
                home_size: 0.0,
            },
            diet: Diet {
                pattern: DietPattern::Average,
            },
            consumption: Consumption {
                clothing_shopping: 0.0,
                electronics_per_year: 0,
                recreation_spending: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_keys_round_trip_known_variants() {
        assert_eq!(VehicleFuel::from("gasoline"), VehicleFuel::Gasoline);
        assert_eq!(VehicleFuel::Gasoline.key(), "gasoline");
        assert_eq!(HeatingFuel::from("oil"), HeatingFuel::Oil);
        assert_eq!(HeatingFuel::Oil.key(), "oil");
        assert_eq!(DietPattern::from("meatHeavy"), DietPattern::MeatHeavy);
        assert_eq!(DietPattern::MeatHeavy.key(), "meatHeavy");
    }

    #[test]
    fn test_unknown_keys_become_other() {
        let fuel = VehicleFuel::from("cng");
        assert_eq!(fuel, VehicleFuel::Other("cng".to_owned()));
        assert_eq!(fuel.key(), "cng");

        // Case matters: "Gasoline" is not a known key.
        assert_eq!(
            VehicleFuel::from("Gasoline"),
            VehicleFuel::Other("Gasoline".to_owned())
        );

        assert_eq!(
            DietPattern::from("pescatarian"),
            DietPattern::Other("pescatarian".to_owned())
        );
    }

    #[test]
    fn test_input_deserializes_camel_case_wire_format() {
        let json = r#"{
            "transport": {
                "carType": "electric",
                "milesPerWeek": 80,
                "publicTransportMiles": 15,
                "flightsPerYear": 2,
                "avgFlightHours": 3
            },
            "energy": {
                "electricityKwh": 600,
                "heatingType": "oil",
                "heatingUsage": 40,
                "homeSize": 900
            },
            "diet": { "type": "vegetarian" },
            "consumption": {
                "clothingShopping": 50,
                "electronicsPerYear": 1,
                "recreationSpending": 200
            }
        }"#;
        let input: FootprintInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.transport.car_type, VehicleFuel::Electric);
        assert_eq!(input.transport.miles_per_week, 80.0);
        assert_eq!(input.transport.flights_per_year, 2);
        assert_eq!(input.energy.heating_type, HeatingFuel::Oil);
        assert_eq!(input.diet.pattern, DietPattern::Vegetarian);
        assert_eq!(input.consumption.electronics_per_year, 1);
    }

    #[test]
    fn test_unknown_fuel_string_survives_deserialization() {
        let json = r#"{ "carType": "cng", "milesPerWeek": 10,
            "publicTransportMiles": 0, "flightsPerYear": 0, "avgFlightHours": 0 }"#;
        let transport: Transport = serde_json::from_str(json).unwrap();
        assert_eq!(transport.car_type, VehicleFuel::Other("cng".to_owned()));
    }

    #[test]
    fn test_serialization_uses_wire_keys() {
        let input = FootprintInput::default();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"carType\":\"gasoline\""), "got: {json}");
        assert!(json.contains("\"electricityKwh\":900.0"), "got: {json}");
        assert!(json.contains("\"type\":\"average\""), "got: {json}");
        assert!(json.contains("\"clothingShopping\":100.0"), "got: {json}");
    }

    #[test]
    fn test_default_profile_values() {
        let input = FootprintInput::default();
        assert_eq!(input.transport.car_type, VehicleFuel::Gasoline);
        assert_eq!(input.transport.miles_per_week, 100.0);
        assert_eq!(input.transport.flights_per_year, 0);
        assert_eq!(input.energy.electricity_kwh, 900.0);
        assert_eq!(input.energy.heating_type, HeatingFuel::Gas);
        assert_eq!(input.energy.heating_usage, 150.0);
        assert_eq!(input.diet.pattern, DietPattern::Average);
        assert_eq!(input.consumption.clothing_shopping, 100.0);
        assert_eq!(input.consumption.recreation_spending, 500.0);
    }

    #[test]
    fn test_zeroed_profile_is_all_zero() {
        let input = FootprintInput::zeroed();
        assert_eq!(input.transport.miles_per_week, 0.0);
        assert_eq!(input.energy.electricity_kwh, 0.0);
        assert_eq!(input.energy.heating_usage, 0.0);
        assert_eq!(input.consumption.clothing_shopping, 0.0);
        assert_eq!(input.consumption.recreation_spending, 0.0);
    }
}
