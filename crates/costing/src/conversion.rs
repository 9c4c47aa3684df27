//! Quantity conversion between units of measure.
//!
//! Supported pairs work in both directions:
//!
//! | from | to | factor |
//! |------|----|--------|
//! | kg   | g  | 1000 |
//! | l    | ml | 1000 |
//! | g    | lb | 0.00220462 |
//! | g    | oz | 0.035274 |
//! | ml   | oz | 0.033814 |
//!
//! Converting a unit to itself is a no-op. Any other pair has no conversion
//! path: the quantity passes through unchanged and the result is flagged
//! with `applied == false` so callers can surface likely data-entry mistakes.
//!
//! Quantities are never rounded here. Rounding happens where a cost is
//! produced.

use hornero_core::Unit;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::warn;

/// Direct pairs: one `from` equals `factor` of `to`.
const DIRECT_FACTORS: [(Unit, Unit, Decimal); 5] = [
    (Unit::Kg, Unit::G, dec!(1000)),
    (Unit::L, Unit::Ml, dec!(1000)),
    (Unit::G, Unit::Lb, dec!(0.00220462)),
    (Unit::G, Unit::Oz, dec!(0.035274)),
    (Unit::Ml, Unit::Oz, dec!(0.033814)),
];

/// How a quantity gets from one unit to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Path {
    Identity,
    Multiply(Decimal),
    Divide(Decimal),
}

fn path(from: Unit, to: Unit) -> Option<Path> {
    if from == to {
        return Some(Path::Identity);
    }

    DIRECT_FACTORS.iter().find_map(|&(a, b, factor)| {
        if (a, b) == (from, to) {
            Some(Path::Multiply(factor))
        } else if (a, b) == (to, from) {
            Some(Path::Divide(factor))
        } else {
            None
        }
    })
}

/// Result of converting a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Quantity expressed in the target unit.
    pub quantity: Decimal,
    /// `false` when no conversion path existed and the quantity was passed
    /// through as if it were already in the target unit.
    pub applied: bool,
}

/// Multiplier taking a quantity in `from` to `to`, if a path exists.
#[must_use]
pub fn conversion_factor(from: Unit, to: Unit) -> Option<Decimal> {
    path(from, to).map(|path| match path {
        Path::Identity => Decimal::ONE,
        Path::Multiply(factor) => factor,
        Path::Divide(factor) => Decimal::ONE / factor,
    })
}

/// Whether `from` can be converted to `to`.
#[must_use]
pub fn is_convertible(from: Unit, to: Unit) -> bool {
    path(from, to).is_some()
}

/// Convert `quantity` from `from` into `to`, or `None` if the converted
/// quantity does not fit in a [`Decimal`].
///
/// Unsupported pairs are not an error here: they pass the quantity through
/// with [`Conversion::applied`] set to `false`.
#[must_use]
pub fn try_convert(quantity: Decimal, from: Unit, to: Unit) -> Option<Conversion> {
    let converted = match path(from, to) {
        Some(Path::Identity) => quantity,
        Some(Path::Multiply(factor)) => quantity.checked_mul(factor)?,
        Some(Path::Divide(factor)) => quantity.checked_div(factor)?,
        None => {
            warn!(
                from = %from,
                to = %to,
                quantity = %quantity,
                "No conversion path between units, using quantity as-is"
            );
            return Some(Conversion {
                quantity,
                applied: false,
            });
        }
    };

    Some(Conversion {
        quantity: converted,
        applied: true,
    })
}

/// Convert `quantity` from `from` into `to`.
///
/// Unsupported pairs pass the quantity through unchanged with
/// [`Conversion::applied`] set to `false`. A conversion whose result would
/// overflow is treated the same way.
#[must_use]
pub fn convert(quantity: Decimal, from: Unit, to: Unit) -> Conversion {
    try_convert(quantity, from, to).unwrap_or_else(|| {
        warn!(
            from = %from,
            to = %to,
            quantity = %quantity,
            "Converted quantity out of range, using quantity as-is"
        );
        Conversion {
            quantity,
            applied: false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Decimal, expected: Decimal) {
        let tolerance = dec!(0.000000001);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_grams_to_kilograms() {
        let result = convert(dec!(200), Unit::G, Unit::Kg);
        assert_eq!(result.quantity, dec!(0.2));
        assert!(result.applied);
    }

    #[test]
    fn test_litres_to_millilitres() {
        assert_eq!(convert(dec!(1.5), Unit::L, Unit::Ml).quantity, dec!(1500));
    }

    #[test]
    fn test_grams_to_pounds_and_back() {
        let pounds = convert(dec!(1000), Unit::G, Unit::Lb);
        assert_eq!(pounds.quantity, dec!(2.20462));

        let grams = convert(dec!(1), Unit::Lb, Unit::G);
        assert_close(grams.quantity, dec!(453.592909435639702080177)); // 1 / 0.00220462
    }

    #[test]
    fn test_ounce_depends_on_source_dimension() {
        assert_eq!(convert(dec!(100), Unit::G, Unit::Oz).quantity, dec!(3.5274));
        assert_eq!(convert(dec!(100), Unit::Ml, Unit::Oz).quantity, dec!(3.3814));
    }

    #[test]
    fn test_identity_is_exact() {
        for unit in Unit::ALL {
            let result = convert(dec!(123.456789), unit, unit);
            assert_eq!(result.quantity, dec!(123.456789));
            assert!(result.applied);
        }
    }

    #[test]
    fn test_out_of_range_conversion_passes_through() {
        let huge = Decimal::MAX / dec!(10);

        assert_eq!(try_convert(huge, Unit::Kg, Unit::G), None);
        assert_eq!(try_convert(huge, Unit::Lb, Unit::G), None);

        let result = convert(huge, Unit::Kg, Unit::G);
        assert_eq!(result.quantity, huge);
        assert!(!result.applied);

        let result = convert(huge, Unit::G, Unit::Kg);
        assert!(result.applied);
        assert!(result.quantity < huge);
    }

    #[test]
    fn test_unsupported_pair_passes_through() {
        let result = convert(dec!(3), Unit::Kg, Unit::Lb);
        assert_eq!(result.quantity, dec!(3));
        assert!(!result.applied);

        let result = convert(dec!(2), Unit::Unit, Unit::G);
        assert_eq!(result.quantity, dec!(2));
        assert!(!result.applied);
    }

    #[test]
    fn test_unrecognized_unit_has_no_path() {
        assert!(!is_convertible(Unit::Unrecognized, Unit::G));
        assert!(!convert(dec!(5), Unit::G, Unit::Unrecognized).applied);
    }

    #[test]
    fn test_conversion_factor_is_reciprocal() {
        assert_eq!(conversion_factor(Unit::Kg, Unit::G), Some(dec!(1000)));
        assert_eq!(conversion_factor(Unit::G, Unit::Kg), Some(dec!(0.001)));
        assert_eq!(conversion_factor(Unit::Oz, Unit::Lb), None);
    }
}
