//! Patient context supplied by the caller.
//!
//! Every field is independently optional. Absence is data, not an error: the
//! prompt assembler renders an explicit "Not provided" marker instead of
//! dropping the field or inventing a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gender options offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("unrecognized gender '{0}': expected Male, Female or Other")]
pub struct InvalidGender(String);

impl FromStr for Gender {
    type Err = InvalidGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "Other" => Ok(Self::Other),
            _ => Err(InvalidGender(s.to_string())),
        }
    }
}

/// Structured patient fields collected by the intake form.
///
/// The caller validates types and ranges (age 0-120, non-negative weight);
/// completeness is not validated anywhere — missing fields flow into the
/// prompt as explicit markers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientContext {
    pub name: Option<String>,
    /// Age in years.
    pub age: Option<u32>,
    /// Weight in kilograms.
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
    /// Pre-existing conditions, allergies, past significant events.
    pub history: Option<String>,
}
