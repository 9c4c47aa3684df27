//! Cost of one ingredient usage.

use hornero_core::{Unit, round_money};
use rust_decimal::Decimal;
use serde::Serialize;

use tracing::warn;

use crate::conversion::try_convert;
use crate::model::Ingredient;

/// Cost of one recipe line, priced from the ingredient's current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineCost {
    /// Quantity expressed in the ingredient's pricing unit.
    pub converted_quantity: Decimal,
    /// `price * converted_quantity`, rounded to cents.
    pub cost: Decimal,
    /// `false` when the line's unit could not be converted to the
    /// ingredient's unit and the quantity was used as-is.
    pub conversion_applied: bool,
}

/// Cost of using `quantity` (in `unit`) of `ingredient`.
///
/// `unit` of `None` means the quantity is already in the ingredient's unit.
/// Returns `None` for a non-positive quantity, or when the converted quantity
/// or the cost does not fit in a [`Decimal`]. Either excludes the line from
/// recipe totals.
#[must_use]
pub fn line_cost(ingredient: &Ingredient, quantity: Decimal, unit: Option<Unit>) -> Option<LineCost> {
    if quantity <= Decimal::ZERO {
        return None;
    }

    let from = unit.unwrap_or(ingredient.unit);
    let priced = try_convert(quantity, from, ingredient.unit).and_then(|conversion| {
        ingredient
            .price
            .checked_mul(conversion.quantity)
            .map(|cost| (conversion, cost))
    });
    let Some((conversion, cost)) = priced else {
        warn!(
            ingredient_id = %ingredient.id,
            quantity = %quantity,
            unit = %from,
            "Line cost out of range, excluding line"
        );
        return None;
    };

    Some(LineCost {
        converted_quantity: conversion.quantity,
        cost: round_money(cost),
        conversion_applied: conversion.applied,
    })
}

/// Monetary cost of using `quantity` (in `unit`) of `ingredient`.
///
/// Zero for a missing ingredient, a non-positive quantity or an out-of-range
/// cost.
#[must_use]
pub fn ingredient_cost(ingredient: Option<&Ingredient>, quantity: Decimal, unit: Unit) -> Decimal {
    ingredient
        .and_then(|ingredient| line_cost(ingredient, quantity, Some(unit)))
        .map_or(Decimal::ZERO, |line| line.cost)
}
