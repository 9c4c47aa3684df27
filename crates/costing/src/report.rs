//! Full cost breakdown and price suggestion for one product.

use hornero_core::{ProductId, ProfitTier, Rentability};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::labor::{LaborCost, labor_cost};
use crate::model::{IngredientCatalog, Product};
use crate::pricing::{MarginSource, PriceSuggestion, suggest_price};
use crate::recipe::{CostSource, RecipeCost};

/// Cost breakdown and pricing of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCostReport {
    pub product_id: ProductId,
    pub product_name: String,
    /// Name of the [`CostSource`] used for ingredient costs.
    pub cost_source: &'static str,
    pub recipe: RecipeCost,
    pub labor: LaborCost,
    /// Ingredient cost plus labor and overheads.
    pub total_production_cost: Decimal,
    pub pricing: PriceSuggestion,
    pub tier: ProfitTier,
    pub rentability: Rentability,
}

/// Cost and price one product.
#[must_use]
pub fn product_cost_report(
    product: &Product,
    catalog: &IngredientCatalog,
    source: &dyn CostSource,
    margin: MarginSource,
) -> ProductCostReport {
    let recipe = source.aggregate(&product.ingredients, catalog);
    let labor = labor_cost(&product.labor);
    let total_production_cost = recipe
        .total_ingredient_cost
        .checked_add(labor.total_labor_cost)
        .unwrap_or_else(|| {
            warn!(
                product_id = %product.id,
                "Production cost out of range, reporting zero"
            );
            Decimal::ZERO
        });
    let pricing = suggest_price(total_production_cost, margin.resolve(product.profit_margin));

    ProductCostReport {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        cost_source: source.name(),
        recipe,
        labor,
        total_production_cost,
        tier: pricing.tier(),
        rentability: pricing.rentability(),
        pricing,
    }
}

#[cfg(test)]
mod tests {
    use hornero_core::{IngredientId, LaborTimeUnit, Unit};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::model::{Ingredient, LaborInputs, Overheads, RecipeLine};
    use crate::recipe::{CachedCost, RecomputedCost};

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::from_ingredients(&[Ingredient {
            id: IngredientId::new("chocolate"),
            name: "Chocolate semiamargo".to_owned(),
            price: dec!(12),
            unit: Unit::Kg,
            stock: Decimal::ZERO,
            min_stock: Decimal::ZERO,
        }])
    }

    fn brownie() -> Product {
        Product {
            id: ProductId::new("brownie"),
            name: "Brownie".to_owned(),
            category: Some("tortas".to_owned()),
            ingredients: vec![RecipeLine {
                ingredient_id: IngredientId::new("chocolate"),
                quantity: dec!(250),
                unit: Some(Unit::G),
                unit_cost: Some(dec!(10)),
                total_cost: dec!(2.5),
            }],
            labor: LaborInputs {
                labor_time: dec!(30),
                labor_time_unit: LaborTimeUnit::Minutes,
                labor_cost_per_hour: dec!(10),
                overheads: Overheads {
                    packaging: dec!(1),
                    ..Default::default()
                },
            },
            profit_margin: dec!(60),
        }
    }

    #[test]
    fn test_recomputed_report() {
        let report =
            product_cost_report(&brownie(), &catalog(), &RecomputedCost, MarginSource::Product);

        // 3.00 ingredients + 5.00 labor + 1.00 packaging
        assert_eq!(report.recipe.total_ingredient_cost, dec!(3));
        assert_eq!(report.total_production_cost, dec!(9));
        assert_eq!(report.pricing.suggested_price, dec!(14.4));
        assert_eq!(report.tier, ProfitTier::Healthy);
        assert_eq!(report.cost_source, "recomputed");
    }

    #[test]
    fn test_cached_report_with_override() {
        let report = product_cost_report(
            &brownie(),
            &catalog(),
            &CachedCost,
            MarginSource::Override(dec!(20)),
        );

        assert_eq!(report.total_production_cost, dec!(8.5));
        assert_eq!(report.pricing.profit_margin_percent, dec!(20));
        assert_eq!(report.pricing.suggested_price, dec!(10.2));
        assert_eq!(report.rentability, Rentability::Revisar);
    }

    #[test]
    fn test_out_of_range_quantity_does_not_panic() {
        let mut product = brownie();
        if let Some(line) = product.ingredients.first_mut() {
            line.quantity = Decimal::MAX;
            line.unit = Some(Unit::Kg);
        }

        let report =
            product_cost_report(&product, &catalog(), &RecomputedCost, MarginSource::Product);

        assert!(report.recipe.ingredient_details.is_empty());
        assert_eq!(report.total_production_cost, dec!(6));
    }

    #[test]
    fn test_out_of_range_total_reports_zero() {
        let mut product = brownie();
        if let Some(line) = product.ingredients.first_mut() {
            line.total_cost = Decimal::MAX;
        }

        let report =
            product_cost_report(&product, &catalog(), &CachedCost, MarginSource::Product);

        assert_eq!(report.recipe.total_ingredient_cost, Decimal::MAX);
        assert_eq!(report.total_production_cost, Decimal::ZERO);
        assert_eq!(report.pricing.suggested_price, Decimal::ZERO);
        assert_eq!(report.tier, ProfitTier::NeedsReview);
    }
}
