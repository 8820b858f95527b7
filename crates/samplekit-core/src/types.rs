use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Selector for the first-name list to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    /// Pick the female or male list with equal odds, then a name within it.
    #[default]
    Any,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "female" => Some(Self::Female),
            "male" => Some(Self::Male),
            "any" => Some(Self::Any),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            Error::InvalidValue(format!(
                "unknown gender '{value}' (expected female, male or any)"
            ))
        })
    }
}

/// Vehicle domain selecting one of the bundled make/model catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Aeroplane,
    Boat,
    Bus,
    Car,
    Motorcycle,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 5] = [
        VehicleKind::Aeroplane,
        VehicleKind::Boat,
        VehicleKind::Bus,
        VehicleKind::Car,
        VehicleKind::Motorcycle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aeroplane => "aeroplane",
            Self::Boat => "boat",
            Self::Bus => "bus",
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
