//! Deserializable shapes for unit table configuration.
//!
//! The engine defines only the shape it expects; where the data comes
//! from (embedded JSON, a file, an environment layer) is the caller's
//! concern. Scale factors are decimal strings so that tables never pass
//! through floating point on their way in.

use serde::Deserialize;

/// Top-level unit table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitsConfig {
    /// Supported currencies, in display order.
    pub currencies: Vec<CurrencyConfig>,
}

/// One currency's unit table.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code, e.g. `BTC`.
    pub code: String,
    /// Denominations in display order, smallest to largest.
    pub units: Vec<UnitConfig>,
}

/// One denomination entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitConfig {
    /// Unit name, e.g. `satoshi`.
    pub name: String,
    /// Atomic units per one of this unit, as a decimal literal.
    pub scale: String,
}
