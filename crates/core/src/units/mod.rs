//! Unit systems and the conversion operation.
//!
//! A [`UnitSystem`] is one currency's table of named denominations with
//! their scale factors relative to the atomic unit (satoshi, wei, drop).
//! The atomic unit is indivisible on-chain, so every conversion enforces
//! that the amount expressed in atomic units is a whole number.

pub mod convert;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use error::{ConvertError, UnitSystemError};
pub use types::{Scale, Unit, UnitSystem};
