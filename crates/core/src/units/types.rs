//! Unit system data model and construction-time validation.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, pow};

use crate::decimal::factor_out;

use super::error::UnitSystemError;

/// A positive scale factor: how many atomic units equal one of a unit.
///
/// Alongside the exact rational factor, the exact decimal reciprocal
/// (`recip_mantissa * 10^-recip_exponent`) is precomputed so conversions
/// render without any division at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    factor: BigRational,
    recip_mantissa: BigInt,
    recip_exponent: u32,
}

/// Why a scale factor was rejected. Mapped to a named unit by
/// [`UnitSystem::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScaleInvalid {
    NotPositive,
    NonTerminating,
}

impl Scale {
    /// Validates a scale factor and precomputes its decimal reciprocal.
    ///
    /// The factor's reduced numerator must contain only the prime
    /// factors 2 and 5. Anything else (say a unit worth 3 atomic units)
    /// would make some conversion results non-terminating decimals,
    /// which this engine refuses to round.
    pub(crate) fn new(factor: BigRational) -> Result<Self, ScaleInvalid> {
        if !factor.is_positive() {
            return Err(ScaleInvalid::NotPositive);
        }
        let (twos, rest) = factor_out(factor.numer().magnitude(), 2);
        let (fives, rest) = factor_out(&rest, 5);
        if !rest.is_one() {
            return Err(ScaleInvalid::NonTerminating);
        }
        let exponent = twos.max(fives);
        let recip_mantissa = factor.denom()
            * pow(BigInt::from(2), (exponent - twos) as usize)
            * pow(BigInt::from(5), (exponent - fives) as usize);
        Ok(Self {
            factor,
            recip_mantissa,
            recip_exponent: exponent,
        })
    }

    /// The scale factor as an exact rational.
    #[must_use]
    pub fn factor(&self) -> &BigRational {
        &self.factor
    }

    /// True for the atomic unit's scale factor of exactly 1.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.factor.is_one()
    }

    pub(crate) fn recip_mantissa(&self) -> &BigInt {
        &self.recip_mantissa
    }

    pub(crate) fn recip_exponent(&self) -> u32 {
        self.recip_exponent
    }
}

/// One named denomination within a unit system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Canonical (lowercase) unit name.
    pub name: String,
    /// Atomic units per one of this unit.
    pub scale: Scale,
}

/// One currency's complete table of denominations.
///
/// Units keep their insertion order: built-in tables list denominations
/// smallest to largest, so callers populating selection controls can
/// treat the first unit as the atomic denomination and the last as the
/// whole coin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSystem {
    code: String,
    units: Vec<Unit>,
    atomic: usize,
}

impl UnitSystem {
    /// Builds a unit system from `(name, scale factor)` pairs.
    ///
    /// The currency code is folded to uppercase and unit names to
    /// lowercase. Rejects empty tables, duplicate names after case
    /// folding, non-positive or non-terminating scale factors, and
    /// tables without exactly one unit of scale factor 1.
    pub fn new(
        code: impl Into<String>,
        units: Vec<(String, BigRational)>,
    ) -> Result<Self, UnitSystemError> {
        let code = code.into().to_ascii_uppercase();
        if units.is_empty() {
            return Err(UnitSystemError::Empty(code));
        }

        let mut built: Vec<Unit> = Vec::with_capacity(units.len());
        let mut atomic: Option<usize> = None;
        for (name, factor) in units {
            let name = name.to_ascii_lowercase();
            if built.iter().any(|unit| unit.name == name) {
                return Err(UnitSystemError::DuplicateUnit(name));
            }
            let scale = Scale::new(factor).map_err(|invalid| match invalid {
                ScaleInvalid::NotPositive => UnitSystemError::NonPositiveScale(name.clone()),
                ScaleInvalid::NonTerminating => UnitSystemError::NonTerminatingScale(name.clone()),
            })?;
            if scale.is_identity() {
                if let Some(first) = atomic {
                    return Err(UnitSystemError::MultipleAtomicUnits {
                        code,
                        first: built[first].name.clone(),
                        second: name,
                    });
                }
                atomic = Some(built.len());
            }
            built.push(Unit { name, scale });
        }
        let atomic = atomic.ok_or_else(|| UnitSystemError::NoAtomicUnit(code.clone()))?;

        Ok(Self {
            code,
            units: built,
            atomic,
        })
    }

    /// Canonical (uppercase) currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// All denominations in table order.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The indivisible base denomination (scale factor 1).
    #[must_use]
    pub fn atomic_unit(&self) -> &Unit {
        &self.units[self.atomic]
    }

    /// Case-insensitive lookup of a denomination by name.
    #[must_use]
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units
            .iter()
            .find(|unit| unit.name.eq_ignore_ascii_case(name))
    }
}
