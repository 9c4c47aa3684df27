//! Catalog-wide cost and revenue summary for the dashboard.
//!
//! Every product is priced with the same global margin and cached ingredient
//! costs. The summary is a pure function of its inputs.

use hornero_core::checked_sum;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::model::{IngredientCatalog, Product};
use crate::pricing::MarginSource;
use crate::recipe::CachedCost;
use crate::report::{ProductCostReport, product_cost_report};

fn sum_or_zero(values: impl Iterator<Item = Decimal>, figure: &'static str) -> Decimal {
    checked_sum(values).unwrap_or_else(|| {
        warn!(figure, "Portfolio total out of range, reporting zero");
        Decimal::ZERO
    })
}

/// Aggregate figures across the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    pub product_count: usize,
    /// Sum of per-product production costs.
    pub total_production_cost: Decimal,
    /// Sum of per-product suggested prices.
    pub total_suggested_revenue: Decimal,
    /// Unweighted mean of per-product profit percentages; zero for an empty catalog.
    pub average_profit_margin: Decimal,
}

impl PortfolioSummary {
    /// Aggregate already computed product reports.
    ///
    /// A total too large for a [`Decimal`] is reported as zero.
    #[must_use]
    pub fn from_reports(reports: &[ProductCostReport]) -> Self {
        let product_count = reports.len();
        let total_production_cost = sum_or_zero(
            reports.iter().map(|r| r.total_production_cost),
            "total_production_cost",
        );
        let total_suggested_revenue = sum_or_zero(
            reports.iter().map(|r| r.pricing.suggested_price),
            "total_suggested_revenue",
        );
        let average_profit_margin = if product_count == 0 {
            Decimal::ZERO
        } else {
            sum_or_zero(
                reports.iter().map(|r| r.pricing.profit_percentage),
                "average_profit_margin",
            ) / Decimal::from(product_count)
        };

        Self {
            product_count,
            total_production_cost,
            total_suggested_revenue,
            average_profit_margin,
        }
    }
}

/// Per-product reports together with their summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioReport {
    pub global_margin: Decimal,
    pub summary: PortfolioSummary,
    pub products: Vec<ProductCostReport>,
}

/// Price every product at `global_margin` and summarize.
#[must_use]
pub fn summarize(
    products: &[Product],
    catalog: &IngredientCatalog,
    global_margin: Decimal,
) -> PortfolioReport {
    let margin = MarginSource::Override(global_margin);
    let reports: Vec<ProductCostReport> = products
        .iter()
        .map(|product| product_cost_report(product, catalog, &CachedCost, margin))
        .collect();
    let summary = PortfolioSummary::from_reports(&reports);

    debug!(
        products = summary.product_count,
        ingredients = catalog.len(),
        global_margin = %global_margin,
        "Portfolio summary recomputed"
    );

    PortfolioReport {
        global_margin,
        summary,
        products: reports,
    }
}
