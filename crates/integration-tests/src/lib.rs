//! Integration tests for Hornero.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hornero-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `unit_conversion` - Conversion pairs, identity and pass-through
//! - `recipe_costing` - Line costs and cached/recomputed aggregation
//! - `pricing` - Labor, overheads, margin model and classification
//! - `portfolio` - Catalog summary, determinism and dashboard recompute
//!
//! # Fixtures
//!
//! `fixtures/` holds document-store shaped exports. The helpers below parse
//! and normalize them the same way the CLI does.

#![cfg_attr(not(test), forbid(unsafe_code))]

use hornero_costing::{
    Ingredient, IngredientCatalog, IngredientRecord, Product, ProductRecord, normalize_ingredients,
    normalize_products,
};

const INGREDIENTS_JSON: &str = include_str!("../fixtures/ingredients.json");
const INGREDIENTS_YAML: &str = include_str!("../fixtures/ingredients.yaml");
const PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");

/// Ingredient master list from `fixtures/ingredients.json`.
///
/// # Panics
///
/// Panics if the fixture is malformed.
#[must_use]
pub fn fixture_ingredients() -> Vec<Ingredient> {
    let records: Vec<IngredientRecord> =
        serde_json::from_str(INGREDIENTS_JSON).expect("ingredients.json fixture is valid JSON");
    normalize_ingredients(records).expect("ingredients.json fixture records have ids")
}

/// Ingredient list from `fixtures/ingredients.yaml`.
///
/// # Panics
///
/// Panics if the fixture is malformed.
#[must_use]
pub fn fixture_yaml_ingredients() -> Vec<Ingredient> {
    let records: Vec<IngredientRecord> =
        serde_yaml::from_str(INGREDIENTS_YAML).expect("ingredients.yaml fixture is valid YAML");
    normalize_ingredients(records).expect("ingredients.yaml fixture records have ids")
}

/// Product list from `fixtures/products.json`.
///
/// # Panics
///
/// Panics if the fixture is malformed.
#[must_use]
pub fn fixture_products() -> Vec<Product> {
    let records: Vec<ProductRecord> =
        serde_json::from_str(PRODUCTS_JSON).expect("products.json fixture is valid JSON");
    normalize_products(records).expect("products.json fixture records have ids")
}

/// Catalog snapshot of [`fixture_ingredients`].
#[must_use]
pub fn fixture_catalog() -> IngredientCatalog {
    IngredientCatalog::from_ingredients(&fixture_ingredients())
}

/// Find a fixture product by id.
///
/// # Panics
///
/// Panics if no fixture product has that id.
#[must_use]
pub fn fixture_product(id: &str) -> Product {
    fixture_products()
        .into_iter()
        .find(|product| product.id.as_str() == id)
        .unwrap_or_else(|| panic!("no fixture product {id}"))
}
