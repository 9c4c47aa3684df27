//! Unit conversion lookup.
//!
//! # Usage
//!
//! ```bash
//! hornero convert 250 g kg
//! ```

use std::io::Write;

use hornero_core::Unit;
use hornero_costing::{Conversion, convert};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::{OutputFormat, write_json};

#[derive(Debug, Serialize)]
struct ConversionOutput {
    from: Unit,
    to: Unit,
    input: Decimal,
    #[serde(flatten)]
    result: Conversion,
}

/// Print `quantity` converted from `from` to `to`.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run(
    quantity: Decimal,
    from: Unit,
    to: Unit,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert(quantity, from, to);
    if !result.applied {
        warn!(%from, %to, "Units are not convertible; quantity shown unchanged");
    }

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => write_json(
            &mut out,
            &ConversionOutput {
                from,
                to,
                input: quantity,
                result,
            },
        )?,
        OutputFormat::Table => write_line(&mut out, quantity, from, to, result)?,
    }
    Ok(())
}

fn write_line(
    out: &mut impl Write,
    quantity: Decimal,
    from: Unit,
    to: Unit,
    result: Conversion,
) -> std::io::Result<()> {
    let note = if result.applied { "" } else { " (not converted)" };
    writeln!(
        out,
        "{quantity} {from} = {} {to}{note}",
        result.quantity.normalize()
    )
}
