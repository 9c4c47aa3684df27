//! Recipe cost aggregation.
//!
//! Two sourcing strategies exist and are deliberately kept apart:
//!
//! - [`CachedCost`] sums the `total_cost` stored on each line when the recipe
//!   was saved. Totals stay at their historical value when ingredient prices
//!   change. Dashboard roll-ups use this.
//! - [`RecomputedCost`] prices every line from the ingredient's current price.
//!   The recipe editor uses this.
//!
//! Lines whose ingredient no longer exists are skipped by both.

use hornero_core::{IngredientId, Unit};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::conversion::is_convertible;
use crate::ingredient_cost::line_cost;
use crate::model::{Ingredient, IngredientCatalog, RecipeLine};

/// Display row for one costed recipe line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientDetail {
    pub ingredient_id: IngredientId,
    pub name: String,
    /// Quantity as entered on the recipe line.
    pub quantity: Decimal,
    /// Unit the quantity was entered in.
    pub unit: Unit,
    /// Price per ingredient unit used for this line.
    pub unit_price: Decimal,
    pub cost: Decimal,
    pub conversion_applied: bool,
}

/// Ingredient cost of one recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeCost {
    /// Sum of line costs. Not re-rounded after summation.
    pub total_ingredient_cost: Decimal,
    pub ingredient_details: Vec<IngredientDetail>,
}

/// Strategy for costing a resolved recipe line.
pub trait CostSource {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Cost one line whose ingredient resolved. `None` excludes the line.
    fn cost_line(&self, line: &RecipeLine, ingredient: &Ingredient) -> Option<IngredientDetail>;

    /// Cost every resolvable line of a recipe.
    ///
    /// A line whose cost would push the total past the [`Decimal`] range is
    /// left out.
    fn aggregate(&self, lines: &[RecipeLine], catalog: &IngredientCatalog) -> RecipeCost {
        let mut recipe = RecipeCost::default();

        for line in lines {
            let Some(ingredient) = catalog.get(&line.ingredient_id) else {
                debug!(
                    ingredient_id = %line.ingredient_id,
                    source = self.name(),
                    "Skipping recipe line with unresolved ingredient"
                );
                continue;
            };
            let Some(detail) = self.cost_line(line, ingredient) else {
                continue;
            };
            match recipe.total_ingredient_cost.checked_add(detail.cost) {
                Some(total) => {
                    recipe.total_ingredient_cost = total;
                    recipe.ingredient_details.push(detail);
                }
                None => warn!(
                    ingredient_id = %line.ingredient_id,
                    source = self.name(),
                    cost = %detail.cost,
                    "Recipe total out of range, excluding line"
                ),
            }
        }

        recipe
    }
}

/// Trusts each line's stored `total_cost` verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachedCost;

impl CostSource for CachedCost {
    fn name(&self) -> &'static str {
        "cached"
    }

    fn cost_line(&self, line: &RecipeLine, ingredient: &Ingredient) -> Option<IngredientDetail> {
        let unit = line.unit.unwrap_or(ingredient.unit);
        Some(IngredientDetail {
            ingredient_id: ingredient.id.clone(),
            name: ingredient.name.clone(),
            quantity: line.quantity,
            unit,
            unit_price: line.unit_cost.unwrap_or(ingredient.price),
            cost: line.total_cost,
            conversion_applied: is_convertible(unit, ingredient.unit),
        })
    }
}

/// Prices each line from the ingredient's current price.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecomputedCost;

impl CostSource for RecomputedCost {
    fn name(&self) -> &'static str {
        "recomputed"
    }

    fn cost_line(&self, line: &RecipeLine, ingredient: &Ingredient) -> Option<IngredientDetail> {
        let Some(cost) = line_cost(ingredient, line.quantity, line.unit) else {
            debug!(
                ingredient_id = %line.ingredient_id,
                quantity = %line.quantity,
                "Skipping recipe line with non-positive quantity"
            );
            return None;
        };

        Some(IngredientDetail {
            ingredient_id: ingredient.id.clone(),
            name: ingredient.name.clone(),
            quantity: line.quantity,
            unit: line.unit.unwrap_or(ingredient.unit),
            unit_price: ingredient.price,
            cost: cost.cost,
            conversion_applied: cost.conversion_applied,
        })
    }
}

/// Sum the cached line totals of every resolvable line.
#[must_use]
pub fn aggregate_cached_cost(lines: &[RecipeLine], catalog: &IngredientCatalog) -> RecipeCost {
    CachedCost.aggregate(lines, catalog)
}

/// Re-price every resolvable line from current ingredient prices.
#[must_use]
pub fn aggregate_recomputed_cost(lines: &[RecipeLine], catalog: &IngredientCatalog) -> RecipeCost {
    RecomputedCost.aggregate(lines, catalog)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::from_ingredients(&[
            Ingredient {
                id: IngredientId::new("flour"),
                name: "Harina 000".to_owned(),
                price: dec!(1.2),
                unit: Unit::Kg,
                stock: Decimal::ZERO,
                min_stock: Decimal::ZERO,
            },
            Ingredient {
                id: IngredientId::new("milk"),
                name: "Leche".to_owned(),
                price: dec!(1.1),
                unit: Unit::L,
                stock: Decimal::ZERO,
                min_stock: Decimal::ZERO,
            },
        ])
    }

    fn line(id: &str, quantity: Decimal, unit: Unit, total_cost: Decimal) -> RecipeLine {
        RecipeLine {
            ingredient_id: IngredientId::new(id),
            quantity,
            unit: Some(unit),
            unit_cost: None,
            total_cost,
        }
    }

    #[test]
    fn test_recomputed_prices_from_catalog() {
        let lines = [
            line("flour", dec!(500), Unit::G, dec!(9)),
            line("milk", dec!(250), Unit::Ml, dec!(9)),
        ];
        let recipe = aggregate_recomputed_cost(&lines, &catalog());

        // 0.60 + 0.28 (0.275 rounded half-up)
        assert_eq!(recipe.total_ingredient_cost, dec!(0.88));
        assert_eq!(recipe.ingredient_details.len(), 2);
        let names: Vec<&str> = recipe.ingredient_details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Harina 000", "Leche"]);
    }

    #[test]
    fn test_cached_trusts_stored_totals() {
        let lines = [
            line("flour", dec!(500), Unit::G, dec!(0.55)),
            line("milk", dec!(250), Unit::Ml, dec!(0.25)),
        ];
        let recipe = aggregate_cached_cost(&lines, &catalog());

        assert_eq!(recipe.total_ingredient_cost, dec!(0.80));
        assert!(recipe.ingredient_details.iter().all(|d| d.unit_price > Decimal::ZERO));
    }

    #[test]
    fn test_orphaned_lines_are_skipped_by_both() {
        let lines = [
            line("flour", dec!(1000), Unit::G, dec!(1.2)),
            line("deleted-ingredient", dec!(3), Unit::Unit, dec!(4)),
        ];

        for recipe in [
            aggregate_cached_cost(&lines, &catalog()),
            aggregate_recomputed_cost(&lines, &catalog()),
        ] {
            assert_eq!(recipe.total_ingredient_cost, dec!(1.2));
            assert_eq!(recipe.ingredient_details.len(), 1);
        }
    }

    #[test]
    fn test_recomputed_skips_zero_quantity() {
        let lines = [line("flour", Decimal::ZERO, Unit::G, dec!(5))];

        assert!(aggregate_recomputed_cost(&lines, &catalog()).ingredient_details.is_empty());
        assert_eq!(aggregate_cached_cost(&lines, &catalog()).total_ingredient_cost, dec!(5));
    }

    #[test]
    fn test_total_is_not_rerounded() {
        let lines = [
            line("flour", dec!(1), Unit::G, dec!(0.333)),
            line("milk", dec!(1), Unit::Ml, dec!(0.333)),
        ];
        assert_eq!(aggregate_cached_cost(&lines, &catalog()).total_ingredient_cost, dec!(0.666));
    }

    #[test]
    fn test_cached_flags_unconvertible_units() {
        let lines = [
            line("flour", dec!(500), Unit::G, dec!(0.6)),
            line("milk", dec!(2), Unit::Unit, dec!(0.5)),
        ];
        let recipe = aggregate_cached_cost(&lines, &catalog());

        let flags: Vec<bool> = recipe
            .ingredient_details
            .iter()
            .map(|detail| detail.conversion_applied)
            .collect();
        assert_eq!(flags, [true, false]);
        assert_eq!(recipe.total_ingredient_cost, dec!(1.1));
    }

    #[test]
    fn test_line_overflowing_the_total_is_excluded() {
        let lines = [
            line("flour", dec!(1), Unit::Kg, Decimal::MAX),
            line("milk", dec!(1), Unit::L, dec!(1)),
        ];
        let recipe = aggregate_cached_cost(&lines, &catalog());

        assert_eq!(recipe.ingredient_details.len(), 1);
        assert_eq!(recipe.ingredient_details[0].name, "Harina 000");
        assert_eq!(recipe.total_ingredient_cost, Decimal::MAX);
    }

    #[test]
    fn test_recomputed_excludes_out_of_range_line() {
        let lines = [
            line("flour", Decimal::MAX, Unit::Kg, Decimal::ZERO),
            line("milk", dec!(500), Unit::Ml, Decimal::ZERO),
        ];
        let recipe = aggregate_recomputed_cost(&lines, &catalog());

        assert_eq!(recipe.ingredient_details.len(), 1);
        assert_eq!(recipe.total_ingredient_cost, dec!(0.55));
    }

    #[test]
    fn test_empty_recipe() {
        let recipe = aggregate_recomputed_cost(&[], &catalog());
        assert_eq!(recipe, RecipeCost::default());
    }
}
