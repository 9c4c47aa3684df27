//! Labor and overhead cost of producing one unit.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::model::LaborInputs;

/// Non-ingredient production cost. Values are not rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LaborCost {
    pub hours_worked: Decimal,
    /// `hours_worked * labor_cost_per_hour`.
    pub labor_cost_total: Decimal,
    /// Sum of the flat overhead add-ons.
    pub overhead_total: Decimal,
    /// `labor_cost_total + overhead_total`.
    pub total_labor_cost: Decimal,
}

fn or_zero(amount: Option<Decimal>, component: &'static str) -> Decimal {
    amount.unwrap_or_else(|| {
        warn!(component, "Labor cost component out of range, counting it as zero");
        Decimal::ZERO
    })
}

/// Compute labor and overhead cost.
///
/// A component too large for a [`Decimal`] counts as zero.
#[must_use]
pub fn labor_cost(inputs: &LaborInputs) -> LaborCost {
    let hours_worked = inputs.labor_time_unit.to_hours(inputs.labor_time);
    let labor_cost_total = or_zero(
        hours_worked.checked_mul(inputs.labor_cost_per_hour),
        "labor_cost_total",
    );
    let overhead_total = or_zero(inputs.overheads.total(), "overhead_total");

    LaborCost {
        hours_worked,
        labor_cost_total,
        overhead_total,
        total_labor_cost: or_zero(
            labor_cost_total.checked_add(overhead_total),
            "total_labor_cost",
        ),
    }
}
