//! Labor time unit.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`LaborTimeUnit`] from an unknown string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid labor time unit: {0}")]
pub struct LaborTimeUnitParseError(pub String);

/// Unit a product's labor time is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LaborTimeUnit {
    #[default]
    Hours,
    Minutes,
}

impl LaborTimeUnit {
    /// Convert an amount of time in this unit to hours.
    ///
    /// Not rounded.
    #[must_use]
    pub fn to_hours(self, amount: Decimal) -> Decimal {
        match self {
            Self::Hours => amount,
            Self::Minutes => amount / Decimal::from(60),
        }
    }
}

impl fmt::Display for LaborTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours => write!(f, "hours"),
            Self::Minutes => write!(f, "minutes"),
        }
    }
}

impl std::str::FromStr for LaborTimeUnit {
    type Err = LaborTimeUnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hours" | "hour" | "h" => Ok(Self::Hours),
            "minutes" | "minute" | "min" => Ok(Self::Minutes),
            _ => Err(LaborTimeUnitParseError(s.to_owned())),
        }
    }
}
