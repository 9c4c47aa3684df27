//! Profitability classifications shown next to product cost reports.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Three-band profitability tier driving dashboard colour coding.
///
/// Bands are inclusive on their lower bound:
/// - `>= 50` is [`ProfitTier::Healthy`]
/// - `30 <= p < 50` is [`ProfitTier::Warning`]
/// - `< 30` is [`ProfitTier::NeedsReview`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitTier {
    Healthy,
    Warning,
    NeedsReview,
}

impl ProfitTier {
    /// Lower bound (inclusive) of the healthy band, in percent.
    pub const HEALTHY_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

    /// Lower bound (inclusive) of the warning band, in percent.
    pub const WARNING_THRESHOLD: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

    /// Classify a profit percentage.
    #[must_use]
    pub fn classify(profit_percentage: Decimal) -> Self {
        if profit_percentage >= Self::HEALTHY_THRESHOLD {
            Self::Healthy
        } else if profit_percentage >= Self::WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::NeedsReview
        }
    }
}

impl std::fmt::Display for ProfitTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::NeedsReview => "needs_review",
        })
    }
}

/// Binary profitable / needs-review label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rentability {
    Rentable,
    Revisar,
}

impl Rentability {
    /// Minimum profit percentage (inclusive) for [`Rentability::Rentable`].
    pub const THRESHOLD: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

    /// Label a profit percentage.
    #[must_use]
    pub fn classify(profit_percentage: Decimal) -> Self {
        if profit_percentage >= Self::THRESHOLD {
            Self::Rentable
        } else {
            Self::Revisar
        }
    }

    /// Label text as shown to operators.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rentable => "Rentable",
            Self::Revisar => "Revisar",
        }
    }
}

impl std::fmt::Display for Rentability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}
