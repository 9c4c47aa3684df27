//! Errors raised while turning stored records into engine inputs.
//!
//! The engine itself never fails on data shape: unresolved references,
//! missing numbers and unsupported conversions degrade to skip/zero/pass
//! through. Only records that cannot be identified at all are rejected.

use thiserror::Error;

/// A stored record that cannot be normalized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The record has no usable id.
    #[error("{kind} record is missing an id")]
    MissingId {
        /// Record kind (`ingredient` or `product`).
        kind: &'static str,
    },
}
