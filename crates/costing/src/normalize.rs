//! Boundary step from stored records to engine inputs.
//!
//! Absent numbers become zero, an absent labor time unit becomes hours.

use hornero_core::{IngredientId, LaborTimeUnit, ProductId, Unit};
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::NormalizeError;
use crate::model::{Ingredient, LaborInputs, Overheads, Product, RecipeLine};
use crate::record::{IngredientRecord, ProductRecord, RecipeLineRecord};

fn required_id(id: Option<String>, kind: &'static str) -> Result<String, NormalizeError> {
    id.filter(|id| !id.trim().is_empty())
        .ok_or(NormalizeError::MissingId { kind })
}

/// Normalize a stored ingredient.
///
/// An ingredient without a unit is treated as priced per [`Unit::Unit`].
///
/// # Errors
///
/// Returns [`NormalizeError::MissingId`] if the record has no id.
pub fn normalize_ingredient(record: IngredientRecord) -> Result<Ingredient, NormalizeError> {
    let id = required_id(record.id, "ingredient")?;

    Ok(Ingredient {
        name: record.name.unwrap_or_else(|| id.clone()),
        id: IngredientId::new(id),
        price: record.price.unwrap_or_default(),
        unit: record.unit.unwrap_or(Unit::Unit),
        stock: record.stock.unwrap_or_default(),
        min_stock: record.min_stock.unwrap_or_default(),
    })
}

/// Normalize a recipe line.
///
/// A line without an ingredient reference keeps an empty id, which never
/// resolves and is therefore skipped like any other orphaned line.
#[must_use]
pub fn normalize_recipe_line(record: RecipeLineRecord) -> RecipeLine {
    RecipeLine {
        ingredient_id: IngredientId::new(record.ingredient_id.unwrap_or_default()),
        quantity: record.quantity.unwrap_or_default(),
        unit: record.unit,
        unit_cost: record.unit_cost,
        total_cost: record.total_cost.unwrap_or_default(),
    }
}

fn labor_time(record: &ProductRecord) -> (Decimal, LaborTimeUnit) {
    let unit = match record.labor_time_unit.as_deref() {
        None => LaborTimeUnit::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(
                product_id = record.id.as_deref().unwrap_or_default(),
                labor_time_unit = raw,
                "Unknown labor time unit, assuming hours"
            );
            LaborTimeUnit::default()
        }),
    };

    match (record.labor_time, record.labor_hours) {
        (Some(time), _) => (time, unit),
        (None, Some(hours)) => (hours, LaborTimeUnit::Hours),
        (None, None) => (Decimal::ZERO, unit),
    }
}

/// Normalize a stored product and its recipe.
///
/// # Errors
///
/// Returns [`NormalizeError::MissingId`] if the record has no id.
pub fn normalize_product(record: ProductRecord) -> Result<Product, NormalizeError> {
    let (labor_time, labor_time_unit) = labor_time(&record);
    let id = required_id(record.id, "product")?;

    Ok(Product {
        name: record.name.unwrap_or_else(|| id.clone()),
        id: ProductId::new(id),
        category: record.category,
        ingredients: record
            .ingredients
            .unwrap_or_default()
            .into_iter()
            .map(normalize_recipe_line)
            .collect(),
        labor: LaborInputs {
            labor_time,
            labor_time_unit,
            labor_cost_per_hour: record.labor_cost.unwrap_or_default(),
            overheads: Overheads {
                utilities: record.utilities.unwrap_or_default(),
                equipment: record.equipment.unwrap_or_default(),
                packaging: record.packaging.unwrap_or_default(),
                additional_costs: record.additional_costs.unwrap_or_default(),
            },
        },
        profit_margin: record.profit_margin.unwrap_or_default(),
    })
}

/// Normalize a batch of stored ingredients.
///
/// # Errors
///
/// Fails on the first record without an id.
pub fn normalize_ingredients(
    records: impl IntoIterator<Item = IngredientRecord>,
) -> Result<Vec<Ingredient>, NormalizeError> {
    records.into_iter().map(normalize_ingredient).collect()
}

/// Normalize a batch of stored products.
///
/// # Errors
///
/// Fails on the first record without an id.
pub fn normalize_products(
    records: impl IntoIterator<Item = ProductRecord>,
) -> Result<Vec<Product>, NormalizeError> {
    records.into_iter().map(normalize_product).collect()
}
