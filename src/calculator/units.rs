use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// GB in one TB. All stored values use GB as the base unit.
pub(crate) const GB_PER_TB: f64 = 1024.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum UnitError {
    #[error("bad unit: {0:?} (expected GB or TB)")]
    BadUnit(String),
}

/// Display unit for a capacity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum Unit {
    #[default]
    Gb,
    Tb,
}

impl Unit {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Gb => "GB",
            Self::Tb => "TB",
        }
    }

    const fn gb_per_unit(self) -> f64 {
        match self {
            Self::Gb => 1.0,
            Self::Tb => GB_PER_TB,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GB" => Ok(Self::Gb),
            "TB" => Ok(Self::Tb),
            _ => Err(UnitError::BadUnit(s.to_string())),
        }
    }
}

/// Convert a value expressed in `unit` to GB.
pub(crate) fn to_base(value: f64, unit: Unit) -> f64 {
    value * unit.gb_per_unit()
}

/// Convert a GB value to `unit`.
pub(crate) fn from_base(value_gb: f64, unit: Unit) -> f64 {
    value_gb / unit.gb_per_unit()
}
