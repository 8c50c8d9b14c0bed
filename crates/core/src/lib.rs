//! Exact cryptocurrency unit conversion.
//!
//! This crate contains pure conversion logic with ZERO web or filesystem
//! dependencies. All arithmetic is performed on arbitrary-precision
//! rationals; binary floating point is banned by workspace lints because
//! unit ratios span up to 18 decimal orders of magnitude (ETH to wei).
//!
//! # Modules
//!
//! - `decimal` - Exact decimal literal parsing and rendering
//! - `units` - Unit systems, scale factors, and the conversion operation
//! - `registry` - Currency code to unit system lookup and configuration

pub mod decimal;
pub mod registry;
pub mod units;

pub use decimal::ParseDecimalError;
pub use registry::{Registry, RegistryError, UnitsConfig};
pub use units::{ConvertError, Unit, UnitSystem, UnitSystemError};
