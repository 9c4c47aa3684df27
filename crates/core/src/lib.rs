//! Hornero Core - Shared types library.
//!
//! This crate provides common types used across all Hornero components:
//! - `costing` - Recipe cost roll-up and price suggestion engine
//! - `cli` - Command-line tools for inspecting catalog exports
//!
//! # Architecture
//!
//! The core crate contains only types and small pure helpers - no I/O, no
//! document store access, no configuration loading. This keeps it lightweight
//! and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, units of measure, money rounding and profitability tiers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
