//! Error types for registry construction.

use thiserror::Error;

use crate::units::UnitSystemError;

/// Errors raised while building a [`super::Registry`] from configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two currencies share a code after case folding.
    #[error("Duplicate currency code: {0}")]
    DuplicateCurrency(String),

    /// A scale factor literal is not a decimal number.
    #[error("Invalid scale factor {literal:?} for unit {unit} of {code}")]
    InvalidScale {
        /// Currency code of the offending table.
        code: String,
        /// Unit whose scale factor failed to parse.
        unit: String,
        /// The rejected literal.
        literal: String,
    },

    /// A currency's unit table failed validation.
    #[error("Invalid unit system for {code}")]
    InvalidSystem {
        /// Currency code of the offending table.
        code: String,
        /// The underlying table validation failure.
        #[source]
        source: UnitSystemError,
    },
}

impl RegistryError {
    /// Returns the stable error code for caller-side mapping.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateCurrency(_) => "DUPLICATE_CURRENCY",
            Self::InvalidScale { .. } => "INVALID_SCALE",
            Self::InvalidSystem { .. } => "INVALID_UNIT_SYSTEM",
        }
    }
}
