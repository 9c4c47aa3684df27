//! Oven electricity estimate used to pre-fill a product's utilities cost.
//!
//! The estimate never replaces an operator-entered value on its own:
//! [`UtilityEstimate::prefill`] only fills a blank field and
//! [`UtilityEstimate::apply`] is the explicit overwrite.

use hornero_core::round_energy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::Overheads;
use crate::record::ProductRecord;

/// Electricity price per kWh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElectricityRate(Decimal);

impl ElectricityRate {
    /// Rate of the reference deployment.
    pub const DEFAULT: Self = Self(dec!(0.1782));

    #[must_use]
    pub const fn new(per_kwh: Decimal) -> Self {
        Self(per_kwh)
    }

    #[must_use]
    pub const fn per_kwh(self) -> Decimal {
        self.0
    }
}

impl Default for ElectricityRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Electricity used and its cost for one production run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UtilityEstimate {
    /// Energy consumed. Not rounded.
    pub kwh: Decimal,
    /// Cost of `kwh` at the given rate, rounded to four places.
    pub electricity_cost: Decimal,
}

impl UtilityEstimate {
    /// Estimate electricity for an oven drawing `oven_consumption_kw` for
    /// `production_time_minutes`.
    ///
    /// An estimate too large for a [`Decimal`] is reported as zero.
    #[must_use]
    pub fn compute(
        oven_consumption_kw: Decimal,
        production_time_minutes: Decimal,
        rate: ElectricityRate,
    ) -> Self {
        let estimate = oven_consumption_kw
            .checked_mul(production_time_minutes / Decimal::from(60))
            .and_then(|kwh| kwh.checked_mul(rate.per_kwh()).map(|cost| (kwh, cost)));

        match estimate {
            Some((kwh, cost)) => Self {
                kwh,
                electricity_cost: round_energy(cost),
            },
            None => {
                warn!(
                    oven_consumption_kw = %oven_consumption_kw,
                    production_time_minutes = %production_time_minutes,
                    "Electricity estimate out of range, reporting zero"
                );
                Self {
                    kwh: Decimal::ZERO,
                    electricity_cost: Decimal::ZERO,
                }
            }
        }
    }

    /// Value to show in a utilities field: the entered value if any,
    /// otherwise the estimate.
    #[must_use]
    pub fn prefill(&self, entered: Option<Decimal>) -> Decimal {
        entered.unwrap_or(self.electricity_cost)
    }

    /// Fill a stored product's utilities only when it has none.
    ///
    /// Returns `true` if the record was changed.
    pub fn prefill_record(&self, record: &mut ProductRecord) -> bool {
        if record.utilities.is_some() {
            return false;
        }
        record.utilities = Some(self.electricity_cost);
        true
    }

    /// Overwrite the utilities overhead with the estimate.
    pub fn apply(&self, overheads: &mut Overheads) {
        overheads.utilities = self.electricity_cost;
    }
}

/// Electricity cost, rounded to four places.
#[must_use]
pub fn electricity_cost(
    oven_consumption_kw: Decimal,
    production_time_minutes: Decimal,
    rate: ElectricityRate,
) -> Decimal {
    UtilityEstimate::compute(oven_consumption_kw, production_time_minutes, rate).electricity_cost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_kw_oven_for_ten_minutes() {
        // 2 kW * 1/6 h = 0.333... kWh, * 0.1782 = 0.0594
        let estimate = UtilityEstimate::compute(dec!(2), dec!(10), ElectricityRate::DEFAULT);
        assert_eq!(estimate.electricity_cost, dec!(0.0594));
    }

    #[test]
    fn test_custom_rate() {
        let cost = electricity_cost(dec!(3.5), dec!(60), ElectricityRate::new(dec!(0.25)));
        assert_eq!(cost, dec!(0.875));
    }

    #[test]
    fn test_prefill_keeps_entered_value() {
        let estimate = UtilityEstimate::compute(dec!(2), dec!(10), ElectricityRate::DEFAULT);
        assert_eq!(estimate.prefill(Some(dec!(0.5))), dec!(0.5));
        assert_eq!(estimate.prefill(None), dec!(0.0594));
    }

    #[test]
    fn test_prefill_record_only_fills_blank() {
        let estimate = UtilityEstimate::compute(dec!(2), dec!(10), ElectricityRate::DEFAULT);

        let mut blank = ProductRecord::default();
        assert!(estimate.prefill_record(&mut blank));
        assert_eq!(blank.utilities, Some(dec!(0.0594)));

        let mut entered = ProductRecord {
            utilities: Some(dec!(0.3)),
            ..Default::default()
        };
        assert!(!estimate.prefill_record(&mut entered));
        assert_eq!(entered.utilities, Some(dec!(0.3)));
    }

    #[test]
    fn test_apply_overwrites() {
        let estimate = UtilityEstimate::compute(dec!(2), dec!(10), ElectricityRate::DEFAULT);
        let mut overheads = Overheads {
            utilities: dec!(1),
            ..Default::default()
        };
        estimate.apply(&mut overheads);
        assert_eq!(overheads.utilities, dec!(0.0594));
    }

    #[test]
    fn test_out_of_range_estimate_is_zero() {
        let estimate =
            UtilityEstimate::compute(Decimal::MAX, dec!(600), ElectricityRate::DEFAULT);
        assert_eq!(estimate.kwh, Decimal::ZERO);
        assert_eq!(estimate.electricity_cost, Decimal::ZERO);
    }
}
