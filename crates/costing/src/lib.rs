//! Hornero Costing - recipe cost roll-up and price suggestion.
//!
//! Turns a product's recipe, the ingredient master list and labor/overhead
//! inputs into a cost breakdown and a suggested sale price under a
//! profit-margin model.
//!
//! # Architecture
//!
//! Every operation is a pure, synchronous function of its explicit inputs.
//! The crate performs no I/O and reads no configuration; the global margin
//! and electricity rate are passed in by the caller. Data fetched from the
//! document store enters through [`record`] and is defaulted once by
//! [`normalize`] so the formulas only see complete values.
//!
//! Bad data degrades instead of failing:
//! - recipe lines whose ingredient no longer exists are skipped
//! - absent numbers count as zero, an absent labor time unit as hours
//! - unit pairs without a conversion path use the quantity as-is and are
//!   flagged with `conversion_applied == false`
//! - a zero production cost reports a zero profit percentage
//! - amounts too large for a `Decimal` are logged and left out of totals
//!   instead of panicking
//!
//! # Modules
//!
//! - [`conversion`] - Unit conversion
//! - [`ingredient_cost`] - Cost of one ingredient usage
//! - [`recipe`] - Cached and recomputed recipe aggregation
//! - [`labor`] - Labor and overhead cost
//! - [`utility`] - Oven electricity estimate
//! - [`pricing`] - Margin-based price suggestion
//! - [`report`] - Per-product report
//! - [`portfolio`] - Catalog-wide summary
//! - [`dashboard`] - Summary kept in sync with changing inputs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod conversion;
pub mod dashboard;
pub mod error;
pub mod ingredient_cost;
pub mod labor;
pub mod model;
pub mod normalize;
pub mod portfolio;
pub mod pricing;
pub mod record;
pub mod recipe;
pub mod report;
pub mod utility;

pub use conversion::{Conversion, conversion_factor, convert, is_convertible, try_convert};
pub use dashboard::{CostDashboard, DEFAULT_GLOBAL_MARGIN};
pub use error::NormalizeError;
pub use ingredient_cost::{LineCost, ingredient_cost, line_cost};
pub use labor::{LaborCost, labor_cost};
pub use model::{Ingredient, IngredientCatalog, LaborInputs, Overheads, Product, RecipeLine};
pub use normalize::{
    normalize_ingredient, normalize_ingredients, normalize_product, normalize_products,
    normalize_recipe_line,
};
pub use portfolio::{PortfolioReport, PortfolioSummary, summarize};
pub use pricing::{MarginSource, PriceSuggestion, suggest_price};
pub use record::{IngredientRecord, ProductRecord, RecipeLineRecord};
pub use recipe::{
    CachedCost, CostSource, IngredientDetail, RecipeCost, RecomputedCost, aggregate_cached_cost,
    aggregate_recomputed_cost,
};
pub use report::{ProductCostReport, product_cost_report};
pub use utility::{ElectricityRate, UtilityEstimate, electricity_cost};
