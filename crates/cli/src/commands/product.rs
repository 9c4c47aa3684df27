//! Cost breakdown and price suggestion for a single product.
//!
//! # Usage
//!
//! ```bash
//! # Recipe-editor view: current ingredient prices, product's own margin
//! hornero product medialunas --ingredients ingredients.json --products products.json
//!
//! # Stored line totals, global margin override
//! hornero product medialunas --ingredients ingredients.json --products products.json --cached --margin 30
//! ```

use std::io::Write;
use std::path::Path;

use hornero_core::{ProductId, format_money};
use hornero_costing::{
    CachedCost, CostSource, IngredientCatalog, MarginSource, ProductCostReport, RecomputedCost,
    product_cost_report,
};
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{OutputFormat, load, write_json};

/// Print the cost report of product `id`.
///
/// # Errors
///
/// Returns an error if an export cannot be loaded, the product does not
/// exist, or stdout cannot be written.
pub async fn run(
    id: &str,
    ingredients_path: &Path,
    products_path: &Path,
    cached: bool,
    margin: Option<Decimal>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let ingredients = load::ingredients(ingredients_path).await?;
    let products = load::products(products_path).await?;

    let product_id = ProductId::new(id);
    let product = products
        .iter()
        .find(|product| product.id == product_id)
        .ok_or_else(|| format!("Product not found: {id}"))?;

    let catalog = IngredientCatalog::from_ingredients(&ingredients);
    let source: &dyn CostSource = if cached { &CachedCost } else { &RecomputedCost };
    let margin = margin.map_or(MarginSource::Product, MarginSource::Override);

    let report = product_cost_report(product, &catalog, source, margin);
    info!(
        product_id = %report.product_id,
        cost_source = report.cost_source,
        "Computed product cost report"
    );

    let skipped = product
        .ingredients
        .len()
        .saturating_sub(report.recipe.ingredient_details.len());
    if skipped > 0 {
        warn!(
            product_id = %report.product_id,
            skipped,
            "Some recipe lines were left out (unresolved ingredient or zero quantity)"
        );
    }

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Table => write_table(&mut out, &report)?,
    }
    Ok(())
}

/// Render a product report as plain text.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn write_table(out: &mut impl Write, report: &ProductCostReport) -> std::io::Result<()> {
    writeln!(out, "{} ({})", report.product_name, report.product_id)?;
    writeln!(out, "Ingredient costs ({}):", report.cost_source)?;
    for detail in &report.recipe.ingredient_details {
        let flag = if detail.conversion_applied {
            ""
        } else {
            "  [unit not converted]"
        };
        writeln!(
            out,
            "  {:<26} {:>10} {:<5} @ {:>10} = {:>10}{flag}",
            detail.name,
            detail.quantity,
            detail.unit,
            format_money(detail.unit_price),
            format_money(detail.cost),
        )?;
    }
    writeln!(
        out,
        "  {:<26} {:>43}",
        "Ingredients total",
        format_money(report.recipe.total_ingredient_cost)
    )?;

    let labor = &report.labor;
    writeln!(
        out,
        "Labor ({} h):            {}",
        labor.hours_worked.normalize(),
        format_money(labor.labor_cost_total)
    )?;
    writeln!(
        out,
        "Overheads:               {}",
        format_money(labor.overhead_total)
    )?;
    writeln!(
        out,
        "Total production cost:   {}",
        format_money(report.total_production_cost)
    )?;
    writeln!(out)?;

    let pricing = &report.pricing;
    writeln!(
        out,
        "Margin:                  {}%",
        pricing.profit_margin_percent
    )?;
    writeln!(
        out,
        "Suggested price:         {}",
        format_money(pricing.suggested_price)
    )?;
    writeln!(out, "Profit:                  {}", format_money(pricing.profit))?;
    writeln!(
        out,
        "Profit percentage:       {}% ({}, {})",
        format_money(pricing.profit_percentage),
        report.tier,
        report.rentability
    )?;
    Ok(())
}
