//! Stored record shapes, as exported by the document store.
//!
//! Every field is optional. Field names follow the stored camelCase keys.
//! Use [`crate::normalize`] to turn these into engine inputs.

use hornero_core::Unit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored ingredient document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub unit: Option<Unit>,
    pub stock: Option<Decimal>,
    pub min_stock: Option<Decimal>,
}

/// A recipe line embedded in a stored product document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeLineRecord {
    pub ingredient_id: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit: Option<Unit>,
    pub unit_cost: Option<Decimal>,
    pub total_cost: Option<Decimal>,
}

/// A stored product document.
///
/// Older documents store labor time as `laborHours`; newer ones use
/// `laborTime` together with `laborTimeUnit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<RecipeLineRecord>>,
    pub labor_time: Option<Decimal>,
    pub labor_hours: Option<Decimal>,
    /// Kept as text so an unknown spelling defaults instead of failing the load.
    pub labor_time_unit: Option<String>,
    /// Labor rate per hour.
    pub labor_cost: Option<Decimal>,
    pub utilities: Option<Decimal>,
    pub equipment: Option<Decimal>,
    pub packaging: Option<Decimal>,
    pub additional_costs: Option<Decimal>,
    pub profit_margin: Option<Decimal>,
}
