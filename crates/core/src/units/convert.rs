//! The conversion operation.
//!
//! One generic algorithm parameterized by the unit table; currencies
//! contribute data, never code paths.

use crate::decimal::{format_scaled, parse_decimal};

use super::error::ConvertError;
use super::types::UnitSystem;

impl UnitSystem {
    /// Converts a decimal amount between two denominations of this
    /// currency, exactly.
    ///
    /// Unit names are matched case-insensitively. The result is the
    /// mathematically exact value rendered as a canonical decimal
    /// string; amounts that do not come out to a whole number of the
    /// atomic unit are rejected rather than rounded. Negative amounts
    /// convert sign-preservingly; whether they are meaningful is the
    /// caller's decision.
    pub fn convert(&self, amount: &str, from: &str, to: &str) -> Result<String, ConvertError> {
        let value = parse_decimal(amount)
            .map_err(|_| ConvertError::InvalidAmount(amount.to_string()))?;
        let from_unit = self
            .unit(from)
            .ok_or_else(|| ConvertError::UnknownUnit(from.to_string()))?;
        let to_unit = self
            .unit(to)
            .ok_or_else(|| ConvertError::UnknownUnit(to.to_string()))?;

        // The atomic-unit equivalent decides integrality for every call,
        // including from == to: a fractional satoshi stays invalid even
        // when no movement between denominations happens.
        let atomic = value * from_unit.scale.factor();
        if !atomic.is_integer() {
            return Err(ConvertError::FractionalAtomicUnit {
                unit: self.atomic_unit().name.clone(),
            });
        }

        let mantissa = atomic.to_integer() * to_unit.scale.recip_mantissa();
        Ok(format_scaled(&mantissa, to_unit.scale.recip_exponent()))
    }
}
