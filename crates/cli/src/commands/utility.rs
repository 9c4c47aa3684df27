//! Oven electricity estimate.
//!
//! # Usage
//!
//! ```bash
//! hornero utility --kw 2.5 --minutes 40
//! hornero utility --kw 2.5 --minutes 40 --rate 0.21
//! ```

use std::io::Write;

use hornero_costing::{ElectricityRate, UtilityEstimate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{OutputFormat, write_json};

#[derive(Debug, Serialize)]
struct UtilityOutput {
    oven_consumption_kw: Decimal,
    production_time_minutes: Decimal,
    rate_per_kwh: Decimal,
    #[serde(flatten)]
    estimate: UtilityEstimate,
}

/// Print the electricity cost of running an oven.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run(
    oven_consumption_kw: Decimal,
    production_time_minutes: Decimal,
    rate: ElectricityRate,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let estimate = UtilityEstimate::compute(oven_consumption_kw, production_time_minutes, rate);

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => write_json(
            &mut out,
            &UtilityOutput {
                oven_consumption_kw,
                production_time_minutes,
                rate_per_kwh: rate.per_kwh(),
                estimate,
            },
        )?,
        OutputFormat::Table => write_table(&mut out, &estimate, rate)?,
    }
    Ok(())
}

fn write_table(
    out: &mut impl Write,
    estimate: &UtilityEstimate,
    rate: ElectricityRate,
) -> std::io::Result<()> {
    writeln!(out, "Energy:           {} kWh", estimate.kwh.round_dp(4))?;
    writeln!(out, "Rate:             {} per kWh", rate.per_kwh())?;
    writeln!(out, "Electricity cost: {}", estimate.electricity_cost)
}
