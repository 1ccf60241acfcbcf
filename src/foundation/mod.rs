//! Shared value types, errors and numeric helpers.

pub mod core;
pub mod error;
pub(crate) mod math;
