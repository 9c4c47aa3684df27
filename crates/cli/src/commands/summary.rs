//! Catalog-wide cost summary.
//!
//! # Usage
//!
//! ```bash
//! hornero summary --ingredients ingredients.json --products products.json --margin 35
//! ```

use std::io::Write;
use std::path::Path;

use hornero_core::format_money;
use hornero_costing::{CostDashboard, PortfolioReport};
use rust_decimal::Decimal;
use tracing::info;

use super::{OutputFormat, load, write_json};

/// Print the portfolio summary for the given exports at `margin`.
///
/// # Errors
///
/// Returns an error if an export cannot be loaded or stdout cannot be written.
pub async fn run(
    ingredients_path: &Path,
    products_path: &Path,
    margin: Decimal,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let ingredients = load::ingredients(ingredients_path).await?;
    let products = load::products(products_path).await?;

    let dashboard = CostDashboard::new(products, &ingredients, margin);
    info!(
        products = dashboard.summary().product_count,
        global_margin = %margin,
        "Computed portfolio summary"
    );

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => write_json(&mut out, dashboard.report())?,
        OutputFormat::Table => write_table(&mut out, dashboard.report())?,
    }
    Ok(())
}

/// Render a portfolio report as a plain-text table.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn write_table(out: &mut impl Write, report: &PortfolioReport) -> std::io::Result<()> {
    writeln!(out, "Global margin: {}%", report.global_margin)?;
    writeln!(
        out,
        "{:<28} {:>12} {:>12} {:>9}  {:<12} {}",
        "Product", "Cost", "Price", "Margin", "Tier", "Label"
    )?;
    for product in &report.products {
        writeln!(
            out,
            "{:<28} {:>12} {:>12} {:>8}%  {:<12} {}",
            product.product_name,
            format_money(product.total_production_cost),
            format_money(product.pricing.suggested_price),
            format_money(product.pricing.profit_percentage),
            product.tier,
            product.rentability,
        )?;
    }

    let summary = &report.summary;
    writeln!(out)?;
    writeln!(out, "Products:               {}", summary.product_count)?;
    writeln!(
        out,
        "Total production cost:  {}",
        format_money(summary.total_production_cost)
    )?;
    writeln!(
        out,
        "Total suggested revenue: {}",
        format_money(summary.total_suggested_revenue)
    )?;
    writeln!(
        out,
        "Average profit margin:  {}%",
        format_money(summary.average_profit_margin)
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hornero_core::{IngredientId, ProductId, Unit};
    use hornero_costing::{Ingredient, LaborInputs, Product, RecipeLine};
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_table_lists_products_and_totals() {
        let ingredients = [Ingredient {
            id: IngredientId::new("flour"),
            name: "Harina".to_owned(),
            price: dec!(1),
            unit: Unit::Kg,
            stock: Decimal::ZERO,
            min_stock: Decimal::ZERO,
        }];
        let products = vec![Product {
            id: ProductId::new("pan"),
            name: "Pan casero".to_owned(),
            category: None,
            ingredients: vec![RecipeLine {
                ingredient_id: IngredientId::new("flour"),
                quantity: dec!(1),
                unit: Some(Unit::Kg),
                unit_cost: None,
                total_cost: dec!(10),
            }],
            labor: LaborInputs::default(),
            profit_margin: dec!(10),
        }];
        let dashboard = CostDashboard::new(products, &ingredients, dec!(30));

        let mut buf = Vec::new();
        write_table(&mut buf, dashboard.report()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Pan casero"));
        assert!(text.contains("13.00"));
        assert!(text.contains("Rentable"));
        assert!(text.contains("Average profit margin:  30.00%"));
    }
}
