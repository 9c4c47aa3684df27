//! Decimal rounding for money and energy amounts.
//!
//! Costs are rounded half-up at the cent boundary. Electricity costs per unit
//! are usually sub-cent and keep four places instead.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for monetary amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Decimal places for per-unit electricity costs.
pub const ENERGY_DECIMAL_PLACES: u32 = 4;

/// Round a monetary amount to cents, midpoint away from zero.
#[inline]
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Round an electricity cost to four decimal places, midpoint away from zero.
#[inline]
#[must_use]
pub fn round_energy(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(ENERGY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum amounts, or `None` if the total does not fit in a [`Decimal`].
#[must_use]
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values.into_iter().try_fold(Decimal::ZERO, Decimal::checked_add)
}

/// Format a monetary amount with exactly two decimal places.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}
