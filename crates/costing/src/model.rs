//! Fully-defaulted engine inputs.
//!
//! Every numeric field here is present. Stored records with optional fields
//! are turned into these types once, by [`crate::normalize`], so the cost
//! formulas never deal with absent values.

use std::collections::HashMap;

use hornero_core::{IngredientId, LaborTimeUnit, ProductId, Unit, checked_sum};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable raw material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient ID.
    pub id: IngredientId,
    /// Display name.
    pub name: String,
    /// Cost per one `unit`.
    pub price: Decimal,
    /// Unit the price is quoted in.
    pub unit: Unit,
    /// Quantity on hand. Not used by cost calculations.
    pub stock: Decimal,
    /// Reorder threshold. Not used by cost calculations.
    pub min_stock: Decimal,
}

/// One ingredient's usage inside a product recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeLine {
    /// Weak reference to an [`Ingredient`]; may not resolve.
    pub ingredient_id: IngredientId,
    /// Amount consumed, in `unit`.
    pub quantity: Decimal,
    /// Unit of `quantity`. `None` means the ingredient's own unit.
    pub unit: Option<Unit>,
    /// Unit price cached when the recipe was saved.
    pub unit_cost: Option<Decimal>,
    /// Line cost cached when the recipe was saved.
    pub total_cost: Decimal,
}

/// Flat per-product overhead add-ons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overheads {
    pub utilities: Decimal,
    pub equipment: Decimal,
    pub packaging: Decimal,
    pub additional_costs: Decimal,
}

impl Overheads {
    /// Sum of all overhead add-ons, or `None` if it overflows.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        checked_sum([
            self.utilities,
            self.equipment,
            self.packaging,
            self.additional_costs,
        ])
    }
}

/// Labor time, labor rate and overheads for producing one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborInputs {
    /// Time spent, in `labor_time_unit`.
    pub labor_time: Decimal,
    pub labor_time_unit: LaborTimeUnit,
    /// Labor rate per hour.
    pub labor_cost_per_hour: Decimal,
    pub overheads: Overheads,
}

/// A sellable recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Catalog category, display only.
    pub category: Option<String>,
    /// Recipe lines. Order is display-only.
    pub ingredients: Vec<RecipeLine>,
    pub labor: LaborInputs,
    /// Product's own margin, in percent (30 means 30%).
    pub profit_margin: Decimal,
}

/// Owned id-indexed snapshot of the ingredient master list.
///
/// Built by cloning, so later edits to the source list do not affect a
/// calculation already holding the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientCatalog {
    by_id: HashMap<IngredientId, Ingredient>,
}

impl IngredientCatalog {
    /// Snapshot a slice of ingredients.
    ///
    /// When two ingredients share an id the later one wins.
    #[must_use]
    pub fn from_ingredients(ingredients: &[Ingredient]) -> Self {
        ingredients.iter().cloned().collect()
    }

    /// Look up an ingredient by id.
    #[must_use]
    pub fn get(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.by_id.get(id)
    }

    /// Number of distinct ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl FromIterator<Ingredient> for IngredientCatalog {
    fn from_iter<T: IntoIterator<Item = Ingredient>>(iter: T) -> Self {
        Self {
            by_id: iter
                .into_iter()
                .map(|ingredient| (ingredient.id.clone(), ingredient))
                .collect(),
        }
    }
}
