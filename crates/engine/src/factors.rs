//! Emission factor table: the fixed conversion constants behind every estimate.
//!
//! All factors are kg CO2e per unit of activity. The built-in values live in
//! [`EMISSION_FACTORS`]; callers that need regional overrides deserialize a
//! partial JSON table on top of the defaults and validate it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-mile vehicle factors by fuel type (kg CO2e per mile driven).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarFactors {
    pub gasoline: f64,
    pub diesel: f64,
    pub hybrid: f64,
    pub electric: f64,
}

/// Per-passenger-mile transit factors by mode (kg CO2e per mile).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicTransportFactors {
    pub bus: f64,
    pub train: f64,
    pub subway: f64,
}

/// Per-passenger-mile aviation factors by haul (kg CO2e per mile flown).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AviationFactors {
    pub domestic: f64,
    pub international: f64,
}

/// Home heating factors by fuel (kg CO2e per therm, gallon, or kWh).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatingFactors {
    /// Natural gas (kg CO2e per therm).
    pub gas: f64,
    /// Heating oil (kg CO2e per gallon).
    pub oil: f64,
    /// Electric resistance heating (kg CO2e per kWh).
    pub electric: f64,
}

/// Whole-year dietary footprints by eating pattern (kg CO2e per year).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DietFactors {
    pub meat_heavy: f64,
    pub average: f64,
    pub vegetarian: f64,
    pub vegan: f64,
}

/// Goods and services factors (kg CO2e per spend unit or per item).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionFactors {
    /// Per $100 of monthly clothing spend, annualized.
    pub clothing: f64,
    /// Per electronic device purchased per year.
    pub electronics: f64,
    /// No aggregation term reads this today; kept so custom tables can carry it.
    pub furniture: f64,
    /// Per $1000 of monthly recreation spend, annualized.
    pub recreation: f64,
}

/// The full conversion table used by the aggregation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmissionFactors {
    pub car: CarFactors,
    pub public_transport: PublicTransportFactors,
    pub aviation: AviationFactors,
    /// Grid electricity (kg CO2e per kWh).
    pub electricity: f64,
    pub heating: HeatingFactors,
    pub diet: DietFactors,
    pub consumption: ConsumptionFactors,
}

/// Built-in emission factors.
pub const EMISSION_FACTORS: EmissionFactors = EmissionFactors {
    car: CarFactors {
        gasoline: 0.411,
        diesel: 0.457,
        hybrid: 0.206,
        electric: 0.089,
    },
    public_transport: PublicTransportFactors {
        bus: 0.089,
        train: 0.045,
        subway: 0.056,
    },
    aviation: AviationFactors {
        domestic: 0.255,
        international: 0.298,
    },
    electricity: 0.424,
    heating: HeatingFactors {
        gas: 5.3,
        oil: 10.15,
        electric: 0.424,
    },
    diet: DietFactors {
        meat_heavy: 3287.0,
        average: 2224.0,
        vegetarian: 1608.0,
        vegan: 1449.0,
    },
    consumption: ConsumptionFactors {
        clothing: 442.0,
        electronics: 300.0,
        furniture: 200.0,
        recreation: 184.0,
    },
};

impl Default for CarFactors {
    fn default() -> Self {
        EMISSION_FACTORS.car
    }
}

impl Default for PublicTransportFactors {
    fn default() -> Self {
        EMISSION_FACTORS.public_transport
    }
}

impl Default for AviationFactors {
    fn default() -> Self {
        EMISSION_FACTORS.aviation
    }
}

impl Default for HeatingFactors {
    fn default() -> Self {
        EMISSION_FACTORS.heating
    }
}

impl Default for DietFactors {
    fn default() -> Self {
        EMISSION_FACTORS.diet
    }
}

impl Default for ConsumptionFactors {
    fn default() -> Self {
        EMISSION_FACTORS.consumption
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        EMISSION_FACTORS
    }
}

impl EmissionFactors {
    /// Per-mile factor for a vehicle fuel key, or `None` for an unknown key.
    pub fn vehicle_factor(&self, key: &str) -> Option<f64> {
        match key {
            "gasoline" => Some(self.car.gasoline),
            "diesel" => Some(self.car.diesel),
            "hybrid" => Some(self.car.hybrid),
            "electric" => Some(self.car.electric),
            _ => None,
        }
    }

    /// Per-unit factor for a heating fuel key, or `None` for an unknown key.
    pub fn heating_factor(&self, key: &str) -> Option<f64> {
        match key {
            "gas" => Some(self.heating.gas),
            "oil" => Some(self.heating.oil),
            "electric" => Some(self.heating.electric),
            _ => None,
        }
    }

    /// Yearly dietary footprint for an eating-pattern key, or `None` for an
    /// unknown key. Callers fall back to [`DietFactors::average`] on a miss.
    pub fn diet_factor(&self, key: &str) -> Option<f64> {
        match key {
            "meatHeavy" => Some(self.diet.meat_heavy),
            "average" => Some(self.diet.average),
            "vegetarian" => Some(self.diet.vegetarian),
            "vegan" => Some(self.diet.vegan),
            _ => None,
        }
    }

    /// Check that every factor is a strictly positive, finite number.
    ///
    /// The built-in table always passes; this guards tables deserialized from
    /// user-supplied JSON.
    pub fn validate(&self) -> Result<(), FactorError> {
        for (category, subtype, value) in self.entries() {
            if !value.is_finite() {
                return Err(FactorError::NotFinite { category, subtype });
            }
            if value <= 0.0 {
                return Err(FactorError::NotPositive {
                    category,
                    subtype,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Every factor in the table as (category, subtype, value) rows.
    fn entries(&self) -> [(&'static str, &'static str, f64); 21] {
        [
            ("car", "gasoline", self.car.gasoline),
            ("car", "diesel", self.car.diesel),
            ("car", "hybrid", self.car.hybrid),
            ("car", "electric", self.car.electric),
            ("publicTransport", "bus", self.public_transport.bus),
            ("publicTransport", "train", self.public_transport.train),
            ("publicTransport", "subway", self.public_transport.subway),
            ("aviation", "domestic", self.aviation.domestic),
            ("aviation", "international", self.aviation.international),
            ("electricity", "kwh", self.electricity),
            ("heating", "gas", self.heating.gas),
            ("heating", "oil", self.heating.oil),
            ("heating", "electric", self.heating.electric),
            ("diet", "meatHeavy", self.diet.meat_heavy),
            ("diet", "average", self.diet.average),
            ("diet", "vegetarian", self.diet.vegetarian),
            ("diet", "vegan", self.diet.vegan),
            ("consumption", "clothing", self.consumption.clothing),
            ("consumption", "electronics", self.consumption.electronics),
            ("consumption", "furniture", self.consumption.furniture),
            ("consumption", "recreation", self.consumption.recreation),
        ]
    }
}

/// A custom factor table failed validation.
#[derive(Debug, Error, PartialEq)]
pub enum FactorError {
    #[error("emission factor {category}.{subtype} is not a finite number")]
    NotFinite {
        category: &'static str,
        subtype: &'static str,
    },
    #[error("emission factor {category}.{subtype} must be positive, got {value}")]
    NotPositive {
        category: &'static str,
        subtype: &'static str,
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        assert!(EMISSION_FACTORS.validate().is_ok());
    }

    #[test]
    fn test_builtin_spot_values() {
        assert_eq!(EMISSION_FACTORS.car.gasoline, 0.411);
        assert_eq!(EMISSION_FACTORS.public_transport.bus, 0.089);
        assert_eq!(EMISSION_FACTORS.aviation.domestic, 0.255);
        assert_eq!(EMISSION_FACTORS.electricity, 0.424);
        assert_eq!(EMISSION_FACTORS.heating.oil, 10.15);
        assert_eq!(EMISSION_FACTORS.diet.vegan, 1449.0);
        assert_eq!(EMISSION_FACTORS.consumption.furniture, 200.0);
    }

    #[test]
    fn test_vehicle_factor_known_keys() {
        assert_eq!(EMISSION_FACTORS.vehicle_factor("gasoline"), Some(0.411));
        assert_eq!(EMISSION_FACTORS.vehicle_factor("diesel"), Some(0.457));
        assert_eq!(EMISSION_FACTORS.vehicle_factor("hybrid"), Some(0.206));
        assert_eq!(EMISSION_FACTORS.vehicle_factor("electric"), Some(0.089));
    }

    #[test]
    fn test_vehicle_factor_unknown_key_is_none() {
        assert_eq!(EMISSION_FACTORS.vehicle_factor("cng"), None);
        assert_eq!(EMISSION_FACTORS.vehicle_factor(""), None);
        // Keys are case-sensitive.
        assert_eq!(EMISSION_FACTORS.vehicle_factor("Gasoline"), None);
    }

    #[test]
    fn test_heating_factor_lookup() {
        assert_eq!(EMISSION_FACTORS.heating_factor("gas"), Some(5.3));
        assert_eq!(EMISSION_FACTORS.heating_factor("electric"), Some(0.424));
        assert_eq!(EMISSION_FACTORS.heating_factor("wood"), None);
    }

    #[test]
    fn test_diet_factor_uses_camel_case_keys() {
        assert_eq!(EMISSION_FACTORS.diet_factor("meatHeavy"), Some(3287.0));
        assert_eq!(EMISSION_FACTORS.diet_factor("meat_heavy"), None);
        assert_eq!(EMISSION_FACTORS.diet_factor("pescatarian"), None);
    }

    #[test]
    fn test_partial_json_override_keeps_other_defaults() {
        let table: EmissionFactors =
            serde_json::from_str(r#"{ "electricity": 0.233, "car": { "gasoline": 0.35 } }"#)
                .unwrap();
        assert_eq!(table.electricity, 0.233);
        assert_eq!(table.car.gasoline, 0.35);
        // Untouched fields keep the built-in values.
        assert_eq!(table.car.diesel, 0.457);
        assert_eq!(table.heating.gas, 5.3);
        assert_eq!(table.diet.meat_heavy, 3287.0);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_empty_json_override_equals_builtin() {
        let table: EmissionFactors = serde_json::from_str("{}").unwrap();
        assert_eq!(table, EMISSION_FACTORS);
    }

    #[test]
    fn test_validate_rejects_zero_and_negative() {
        let mut table = EMISSION_FACTORS;
        table.heating.oil = 0.0;
        assert_eq!(
            table.validate(),
            Err(FactorError::NotPositive {
                category: "heating",
                subtype: "oil",
                value: 0.0,
            })
        );

        let mut table = EMISSION_FACTORS;
        table.diet.vegan = -1.0;
        assert!(matches!(
            table.validate(),
            Err(FactorError::NotPositive { category: "diet", subtype: "vegan", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut table = EMISSION_FACTORS;
        table.electricity = f64::NAN;
        assert_eq!(
            table.validate(),
            Err(FactorError::NotFinite {
                category: "electricity",
                subtype: "kwh",
            })
        );

        let mut table = EMISSION_FACTORS;
        table.car.hybrid = f64::INFINITY;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_error_messages_name_the_offending_entry() {
        let mut table = EMISSION_FACTORS;
        table.consumption.recreation = -5.0;
        let err = table.validate().unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("consumption.recreation"),
            "error should name the entry, got: {msg}"
        );
        assert!(msg.contains("-5"), "error should include the value, got: {msg}");
    }
}
