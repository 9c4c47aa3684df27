//! Dashboard state that keeps the portfolio summary in sync with its inputs.
//!
//! The dashboard owns snapshots of the product and ingredient lists. Any
//! change to products, ingredients or the global margin recomputes the
//! summary from scratch, so the same inputs always yield the same output.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{Ingredient, IngredientCatalog, Product};
use crate::portfolio::{PortfolioReport, PortfolioSummary, summarize};

/// Global margin used when none is configured.
pub const DEFAULT_GLOBAL_MARGIN: Decimal = dec!(30);

/// Products, ingredients and global margin with their current summary.
#[derive(Debug, Clone)]
pub struct CostDashboard {
    products: Vec<Product>,
    catalog: IngredientCatalog,
    global_margin: Decimal,
    report: PortfolioReport,
}

impl CostDashboard {
    /// Build a dashboard from owned snapshots.
    #[must_use]
    pub fn new(products: Vec<Product>, ingredients: &[Ingredient], global_margin: Decimal) -> Self {
        let catalog = IngredientCatalog::from_ingredients(ingredients);
        let report = summarize(&products, &catalog, global_margin);
        Self {
            products,
            catalog,
            global_margin,
            report,
        }
    }

    /// Replace the product list and recompute.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute();
    }

    /// Replace the ingredient list and recompute.
    pub fn set_ingredients(&mut self, ingredients: &[Ingredient]) {
        self.catalog = IngredientCatalog::from_ingredients(ingredients);
        self.recompute();
    }

    /// Change the global margin override and recompute.
    ///
    /// Stored product margins are left as they are.
    pub fn set_global_margin(&mut self, global_margin: Decimal) {
        self.global_margin = global_margin;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.report = summarize(&self.products, &self.catalog, self.global_margin);
    }

    #[must_use]
    pub const fn global_margin(&self) -> Decimal {
        self.global_margin
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub const fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn summary(&self) -> &PortfolioSummary {
        &self.report.summary
    }

    #[must_use]
    pub const fn report(&self) -> &PortfolioReport {
        &self.report
    }
}

impl Default for CostDashboard {
    fn default() -> Self {
        Self::new(Vec::new(), &[], DEFAULT_GLOBAL_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use hornero_core::{IngredientId, ProductId, Unit};

    use super::*;
    use crate::model::{LaborInputs, RecipeLine};

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_owned(),
            category: None,
            ingredients: vec![RecipeLine {
                ingredient_id: IngredientId::new("yeast"),
                quantity: dec!(10),
                unit: Some(Unit::G),
                unit_cost: None,
                total_cost: dec!(2),
            }],
            labor: LaborInputs::default(),
            profit_margin: dec!(50),
        }
    }

    fn yeast() -> Ingredient {
        Ingredient {
            id: IngredientId::new("yeast"),
            name: "Levadura".to_owned(),
            price: dec!(200),
            unit: Unit::Kg,
            stock: Decimal::ZERO,
            min_stock: Decimal::ZERO,
        }
    }

    #[test]
    fn test_default_dashboard_is_empty() {
        let dashboard = CostDashboard::default();
        assert_eq!(dashboard.global_margin(), dec!(30));
        assert_eq!(dashboard.summary(), &PortfolioSummary::default());
    }

    #[test]
    fn test_margin_change_recomputes() {
        let mut dashboard = CostDashboard::new(vec![product("pan")], &[yeast()], dec!(30));
        assert_eq!(dashboard.summary().total_suggested_revenue, dec!(2.6));

        dashboard.set_global_margin(dec!(50));
        assert_eq!(dashboard.summary().total_suggested_revenue, dec!(3));
        assert_eq!(dashboard.summary().average_profit_margin, dec!(50));
    }

    #[test]
    fn test_ingredient_removal_recomputes() {
        let mut dashboard = CostDashboard::new(vec![product("pan")], &[yeast()], dec!(30));
        assert_eq!(dashboard.summary().total_production_cost, dec!(2));

        dashboard.set_ingredients(&[]);
        assert_eq!(dashboard.summary().total_production_cost, Decimal::ZERO);
    }

    #[test]
    fn test_product_change_recomputes() {
        let mut dashboard = CostDashboard::new(Vec::new(), &[yeast()], dec!(30));
        dashboard.set_products(vec![product("pan"), product("bizcocho")]);
        assert_eq!(dashboard.summary().product_count, 2);
        assert_eq!(dashboard.products().len(), 2);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut dashboard = CostDashboard::new(vec![product("pan")], &[yeast()], dec!(30));
        let before = dashboard.report().clone();
        dashboard.set_global_margin(dec!(30));
        assert_eq!(dashboard.report(), &before);
    }
}
