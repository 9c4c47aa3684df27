//! Margin-based price suggestion.

use hornero_core::{ProfitTier, Rentability, round_money};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

/// Where the profit margin for a calculation comes from.
///
/// Exactly one source applies per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSource {
    /// The product's own stored `profit_margin`.
    Product,
    /// A session-wide override, in percent. Stored products are not changed.
    Override(Decimal),
}

impl MarginSource {
    /// Margin percent to use for a product whose own margin is `product_margin`.
    #[must_use]
    pub const fn resolve(self, product_margin: Decimal) -> Decimal {
        match self {
            Self::Product => product_margin,
            Self::Override(margin) => margin,
        }
    }
}

/// Suggested sale price and profitability. Values keep full precision;
/// use [`PriceSuggestion::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceSuggestion {
    pub total_production_cost: Decimal,
    pub profit_margin_percent: Decimal,
    /// `total_production_cost * (1 + margin / 100)`.
    pub suggested_price: Decimal,
    /// `suggested_price - total_production_cost`.
    pub profit: Decimal,
    /// `profit / total_production_cost * 100`, or zero for a zero cost.
    pub profit_percentage: Decimal,
}

impl PriceSuggestion {
    /// Three-band tier of the profit percentage.
    #[must_use]
    pub fn tier(&self) -> ProfitTier {
        ProfitTier::classify(self.profit_percentage)
    }

    /// Rentable / Revisar label of the profit percentage.
    #[must_use]
    pub fn rentability(&self) -> Rentability {
        Rentability::classify(self.profit_percentage)
    }

    /// Copy with every amount rounded to cents.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            total_production_cost: round_money(self.total_production_cost),
            profit_margin_percent: self.profit_margin_percent,
            suggested_price: round_money(self.suggested_price),
            profit: round_money(self.profit),
            profit_percentage: round_money(self.profit_percentage),
        }
    }
}

/// Suggest a sale price for `total_production_cost` at `profit_margin_percent`.
///
/// A zero cost, or a price too large for a [`Decimal`], yields zero price,
/// profit and profit percentage.
#[must_use]
pub fn suggest_price(total_production_cost: Decimal, profit_margin_percent: Decimal) -> PriceSuggestion {
    let priced = Decimal::ONE
        .checked_add(profit_margin_percent / Decimal::ONE_HUNDRED)
        .and_then(|factor| factor.checked_mul(total_production_cost))
        .and_then(|price| {
            price
                .checked_sub(total_production_cost)
                .map(|profit| (price, profit))
        });
    let Some((suggested_price, profit)) = priced else {
        warn!(
            total_production_cost = %total_production_cost,
            profit_margin_percent = %profit_margin_percent,
            "Suggested price out of range, reporting zero"
        );
        return PriceSuggestion {
            total_production_cost,
            profit_margin_percent,
            suggested_price: Decimal::ZERO,
            profit: Decimal::ZERO,
            profit_percentage: Decimal::ZERO,
        };
    };

    let profit_percentage = if total_production_cost > Decimal::ZERO {
        profit
            .checked_div(total_production_cost)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or_default()
    } else {
        Decimal::ZERO
    };

    PriceSuggestion {
        total_production_cost,
        profit_margin_percent,
        suggested_price,
        profit,
        profit_percentage,
    }
}
