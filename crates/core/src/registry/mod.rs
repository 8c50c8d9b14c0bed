//! Currency code to unit system lookup.
//!
//! Replaces the dynamic capability probing of ad-hoc converter
//! collections with an explicit registry built once from configuration
//! data and read-only afterwards. Concurrent lookups need no locking.

pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;

use crate::units::UnitSystem;

pub use config::{CurrencyConfig, UnitConfig, UnitsConfig};
pub use error::RegistryError;

/// Built-in unit tables for the nine supported currencies.
const BUILTIN_UNITS: &str = include_str!("units.json");

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    let config: UnitsConfig =
        serde_json::from_str(BUILTIN_UNITS).expect("built-in unit tables parse");
    Registry::from_config(config).expect("built-in unit tables are valid")
});

/// The registry of built-in unit tables, parsed and validated once.
#[must_use]
pub fn builtin() -> &'static Registry {
    &BUILTIN
}

/// An ordered, immutable mapping from currency code to [`UnitSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    systems: Vec<UnitSystem>,
}

impl Registry {
    /// Builds and validates a registry from configuration data.
    ///
    /// Currency codes are folded to uppercase and must be unique; the
    /// insertion order of currencies and of their units is preserved.
    pub fn from_config(config: UnitsConfig) -> Result<Self, RegistryError> {
        let mut systems: Vec<UnitSystem> = Vec::with_capacity(config.currencies.len());
        for currency in config.currencies {
            let code = currency.code.to_ascii_uppercase();
            if systems.iter().any(|system| system.code() == code) {
                return Err(RegistryError::DuplicateCurrency(code));
            }

            let mut units = Vec::with_capacity(currency.units.len());
            for unit in currency.units {
                let scale = crate::decimal::parse_decimal(&unit.scale).map_err(|_| {
                    RegistryError::InvalidScale {
                        code: code.clone(),
                        unit: unit.name.clone(),
                        literal: unit.scale.clone(),
                    }
                })?;
                units.push((unit.name, scale));
            }

            let system = UnitSystem::new(code.as_str(), units)
                .map_err(|source| RegistryError::InvalidSystem {
                    code: code.clone(),
                    source,
                })?;
            systems.push(system);
        }
        Ok(Self { systems })
    }

    /// Case-insensitive lookup of a currency's unit system.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&UnitSystem> {
        self.systems
            .iter()
            .find(|system| system.code().eq_ignore_ascii_case(code))
    }

    /// True if the currency code has a unit table.
    #[must_use]
    pub fn is_supported(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Currency codes in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.systems.iter().map(UnitSystem::code)
    }

    /// All unit systems in registration order.
    #[must_use]
    pub fn systems(&self) -> &[UnitSystem] {
        &self.systems
    }
}
