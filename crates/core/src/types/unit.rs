//! Units of measure for ingredient prices and recipe quantities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`Unit`] from an unknown string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown unit of measure: {0}")]
pub struct UnitParseError(pub String);

/// Physical dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Mass,
    Volume,
    Count,
}

/// Unit vocabulary used by the ingredient catalog and recipe lines.
///
/// Stored records carry the lowercase symbol (`"g"`, `"kg"`, ...). Anything
/// outside the vocabulary deserializes to [`Unit::Unrecognized`] so a single
/// bad record never fails a whole catalog load; such a unit has no conversion
/// path to any other unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Grams.
    G,
    /// Kilograms.
    Kg,
    /// Millilitres.
    Ml,
    /// Litres.
    L,
    /// Discrete pieces (eggs, boxes, labels).
    Unit,
    /// Pounds.
    Lb,
    /// Ounces. Used both as a mass ounce and as a fluid ounce.
    Oz,
    /// A unit string outside the vocabulary.
    #[serde(other)]
    Unrecognized,
}

impl Unit {
    /// Every unit in the vocabulary, excluding [`Unit::Unrecognized`].
    pub const ALL: [Self; 7] = [
        Self::G,
        Self::Kg,
        Self::Ml,
        Self::L,
        Self::Unit,
        Self::Lb,
        Self::Oz,
    ];

    /// Lowercase symbol as stored in catalog records.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Kg => "kg",
            Self::Ml => "ml",
            Self::L => "l",
            Self::Unit => "unit",
            Self::Lb => "lb",
            Self::Oz => "oz",
            Self::Unrecognized => "?",
        }
    }

    /// Dimensions this unit can measure.
    ///
    /// `oz` reports both mass and volume.
    #[must_use]
    pub const fn dimensions(self) -> &'static [Dimension] {
        match self {
            Self::G | Self::Kg | Self::Lb => &[Dimension::Mass],
            Self::Ml | Self::L => &[Dimension::Volume],
            Self::Oz => &[Dimension::Mass, Dimension::Volume],
            Self::Unit => &[Dimension::Count],
            Self::Unrecognized => &[],
        }
    }

    /// Whether the unit belongs to the known vocabulary.
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl std::str::FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" => Ok(Self::G),
            "kg" => Ok(Self::Kg),
            "ml" => Ok(Self::Ml),
            "l" => Ok(Self::L),
            "unit" => Ok(Self::Unit),
            "lb" => Ok(Self::Lb),
            "oz" => Ok(Self::Oz),
            _ => Err(UnitParseError(s.to_owned())),
        }
    }
}
