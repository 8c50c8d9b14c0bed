//! Error types for unit table construction and conversion.

use thiserror::Error;

/// Errors raised while building a [`super::UnitSystem`] table.
///
/// These are configuration-load failures: a table that passes
/// construction can never produce an inexact or panicking conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitSystemError {
    /// The unit table contains no denominations.
    #[error("Unit system {0} has no units")]
    Empty(String),

    /// Two denominations share a name after case folding.
    #[error("Duplicate unit name: {0}")]
    DuplicateUnit(String),

    /// A scale factor is zero or negative.
    #[error("Scale factor for {0} must be positive")]
    NonPositiveScale(String),

    /// A scale factor would make some conversion result a
    /// non-terminating decimal.
    #[error("Scale factor for {0} does not divide a power of ten")]
    NonTerminatingScale(String),

    /// No denomination has scale factor 1.
    #[error("Unit system {0} has no unit with scale factor 1")]
    NoAtomicUnit(String),

    /// More than one denomination has scale factor 1.
    #[error("Unit system {code} has more than one atomic unit: {first} and {second}")]
    MultipleAtomicUnits {
        /// Currency code of the offending table.
        code: String,
        /// First unit found with scale factor 1.
        first: String,
        /// Second unit found with scale factor 1.
        second: String,
    },
}

impl UnitSystemError {
    /// Returns the stable error code for caller-side mapping.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Empty(_) => "EMPTY_UNIT_SYSTEM",
            Self::DuplicateUnit(_) => "DUPLICATE_UNIT",
            Self::NonPositiveScale(_) => "NON_POSITIVE_SCALE",
            Self::NonTerminatingScale(_) => "NON_TERMINATING_SCALE",
            Self::NoAtomicUnit(_) => "NO_ATOMIC_UNIT",
            Self::MultipleAtomicUnits { .. } => "MULTIPLE_ATOMIC_UNITS",
        }
    }
}

/// Errors raised by a single conversion call.
///
/// Conversion is a pure computation with no transient failure modes, so
/// every variant is terminal: the engine never retries or partially
/// recovers. The caller maps these onto the offending input field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The amount string is not a well-formed decimal literal.
    #[error("Unsupported value: {0:?} is not a decimal number")]
    InvalidAmount(String),

    /// The named unit is not part of the currency's table.
    #[error("Unsupported unit: {0}")]
    UnknownUnit(String),

    /// The exact result is not a whole number of the atomic unit.
    #[error("Unsupported decimal points: {unit} must be an integer")]
    FractionalAtomicUnit {
        /// Name of the currency's atomic unit.
        unit: String,
    },
}

impl ConvertError {
    /// Returns the stable error code for caller-side mapping.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::UnknownUnit(_) => "UNKNOWN_UNIT",
            Self::FractionalAtomicUnit { .. } => "FRACTIONAL_ATOMIC_UNIT",
        }
    }
}
