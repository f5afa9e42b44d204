//! Mass units and the pound/kilogram boundary.
//!
//! Every formula works in kilograms. Inputs given in pounds are converted
//! once on the way in, and solved weights are converted back on the way out.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Kilograms per avoirdupois pound (exact by definition).
pub const KG_PER_LB: f64 = 0.45359237;

/// Unit the caller entered weights in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Kilograms,
    Pounds,
}

impl MassUnit {
    /// Short upper-case label shown next to weights.
    pub fn label(&self) -> &'static str {
        match self {
            MassUnit::Kilograms => "KG",
            MassUnit::Pounds => "LBS",
        }
    }

    /// Converts a value in this unit to kilograms.
    pub fn to_kilograms(&self, value: f64) -> f64 {
        match self {
            MassUnit::Kilograms => value,
            MassUnit::Pounds => pounds_to_kilograms(value),
        }
    }

    /// Converts a value in kilograms to this unit.
    pub fn from_kilograms(&self, kilograms: f64) -> f64 {
        match self {
            MassUnit::Kilograms => kilograms,
            MassUnit::Pounds => kilograms_to_pounds(kilograms),
        }
    }
}

impl FromStr for MassUnit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(MassUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(MassUnit::Pounds),
            _ => Err(InputError::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Converts pounds to kilograms.
pub fn pounds_to_kilograms(pounds: f64) -> f64 {
    pounds * KG_PER_LB
}

/// Converts kilograms to pounds.
pub fn kilograms_to_pounds(kilograms: f64) -> f64 {
    kilograms / KG_PER_LB
}
