//! Core types for Hornero.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod labor;
pub mod money;
pub mod status;
pub mod unit;

pub use id::*;
pub use labor::{LaborTimeUnit, LaborTimeUnitParseError};
pub use money::{
    ENERGY_DECIMAL_PLACES, MONEY_DECIMAL_PLACES, checked_sum, format_money, round_energy,
    round_money,
};
pub use status::{ProfitTier, Rentability};
pub use unit::{Dimension, Unit, UnitParseError};
