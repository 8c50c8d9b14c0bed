//! Exact decimal literal parsing and rendering.
//!
//! CRITICAL: Amounts travel as strings and are parsed into
//! `num_rational::BigRational`, never into floating point. A satoshi
//! count must survive a round trip through every denomination bit-exact.

use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{Zero, pow};
use thiserror::Error;

/// The input string is not a well-formed decimal literal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("not a decimal literal")]
pub struct ParseDecimalError;

/// Parses an optionally-signed decimal literal into an exact rational.
///
/// Accepted grammar: optional leading `-`, decimal digits, at most one
/// `.`, and at least one digit overall. `.1`, `1.`, and `-0.5` are all
/// valid; the empty string, a bare sign or dot, thousands separators,
/// and exponent notation are not.
pub fn parse_decimal(input: &str) -> Result<BigRational, ParseDecimalError> {
    let unsigned = input.strip_prefix('-');
    let negative = unsigned.is_some();
    let unsigned = unsigned.unwrap_or(input);

    let mut mantissa = BigInt::zero();
    let mut fraction_len = 0usize;
    let mut seen_point = false;
    let mut seen_digit = false;
    for byte in unsigned.bytes() {
        match byte {
            b'0'..=b'9' => {
                mantissa = mantissa * 10u32 + u32::from(byte - b'0');
                seen_digit = true;
                if seen_point {
                    fraction_len += 1;
                }
            }
            b'.' if !seen_point => seen_point = true,
            _ => return Err(ParseDecimalError),
        }
    }
    if !seen_digit {
        return Err(ParseDecimalError);
    }
    if negative {
        mantissa = -mantissa;
    }
    Ok(BigRational::new(mantissa, pow(BigInt::from(10), fraction_len)))
}

/// Renders `mantissa * 10^-exponent` as a canonical decimal string.
///
/// No exponent notation, no trailing fractional zeros, a single leading
/// `0` before the point for |value| < 1, and `0` for zero.
pub(crate) fn format_scaled(mantissa: &BigInt, exponent: u32) -> String {
    let digits = mantissa.magnitude().to_string();
    let exponent = exponent as usize;
    let (int_part, frac_part) = if digits.len() > exponent {
        let split = digits.len() - exponent;
        (&digits[..split], digits[split..].to_string())
    } else {
        ("0", format!("{digits:0>exponent$}"))
    };
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + frac_part.len() + 2);
    if mantissa.sign() == Sign::Minus {
        out.push('-');
    }
    out.push_str(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Divides out `factor` from `value` as often as possible, returning the
/// multiplicity and the remaining cofactor.
pub(crate) fn factor_out(value: &BigUint, factor: u32) -> (u32, BigUint) {
    let factor = BigUint::from(factor);
    let mut count = 0;
    let mut value = value.clone();
    while !value.is_zero() && (&value % &factor).is_zero() {
        value /= &factor;
        count += 1;
    }
    (count, value)
}
