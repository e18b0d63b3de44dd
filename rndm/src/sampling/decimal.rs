//! Fixed-point decimals
//!
//! A decimal is held as integer `units` and a declared `precision`, meaning
//! `units / 10^precision`. Text is the only way in: `"0.000"` keeps its
//! three places even though it is numerically zero.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::error::RngError;

/// Exact decimal value with a declared number of fractional digits
///
/// # Example
/// ```
/// use rndm::FixedDecimal;
///
/// let d: FixedDecimal = "-1.250".parse().unwrap();
/// assert_eq!(d.precision(), 3);
/// assert_eq!(d.to_string(), "-1.250");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedDecimal {
    units: BigInt,
    precision: u32,
}

impl FixedDecimal {
    pub fn new(units: BigInt, precision: u32) -> Self {
        Self { units, precision }
    }

    /// Scaled integer value, `value * 10^precision`
    pub fn units(&self) -> &BigInt {
        &self.units
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Nearest `f64`
    pub fn to_f64(&self) -> f64 {
        // Display output is always valid float syntax
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl FromStr for FixedDecimal {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let precision = decimal_places(s)?;
        Ok(Self {
            units: scaled_units(s, precision)?,
            precision,
        })
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.units.is_negative() {
            f.write_str("-")?;
        }
        let magnitude = self.units.abs();
        if self.precision == 0 {
            return write!(f, "{}", magnitude);
        }

        let scale = BigInt::from(10u8).pow(self.precision);
        let whole = &magnitude / &scale;
        let frac = &magnitude % &scale;
        write!(
            f,
            "{}.{:0>width$}",
            whole,
            frac.to_string(),
            width = self.precision as usize
        )
    }
}

/// `[+-]digits[.digits]` split into its parts
struct Literal<'a> {
    negative: bool,
    whole: &'a str,
    frac: &'a str,
}

fn split_literal(text: &str) -> Result<Literal<'_>, RngError> {
    let invalid = || RngError::InvalidNumber(text.to_string());

    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (whole, frac) = match body.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (body, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !all_digits(whole) || !all_digits(frac) {
        return Err(invalid());
    }

    Ok(Literal {
        negative,
        whole,
        frac,
    })
}

/// Number of fractional digits written in `text`, trailing zeros included
pub(crate) fn decimal_places(text: &str) -> Result<u32, RngError> {
    let literal = split_literal(text)?;
    u32::try_from(literal.frac.len()).map_err(|_| RngError::InvalidNumber(text.to_string()))
}

/// `text` as an integer count of `10^-precision` units
///
/// The fractional digits are right-padded with zeros or truncated to exactly
/// `precision` digits. Truncation drops digits, so it rounds toward zero.
pub(crate) fn scaled_units(text: &str, precision: u32) -> Result<BigInt, RngError> {
    let literal = split_literal(text)?;
    let p = precision as usize;

    let frac_digits: String = literal
        .frac
        .chars()
        .chain(std::iter::repeat('0'))
        .take(p)
        .collect();

    let whole = parse_digits(literal.whole, text)?;
    let frac = parse_digits(&frac_digits, text)?;
    let units = whole * BigInt::from(10u8).pow(precision) + frac;

    Ok(if literal.negative { -units } else { units })
}

fn parse_digits(digits: &str, text: &str) -> Result<BigInt, RngError> {
    if digits.is_empty() {
        return Ok(BigInt::zero());
    }
    BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| RngError::InvalidNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_zeros_kept_as_precision() {
        assert_eq!(decimal_places("0.000").unwrap(), 3);
        assert_eq!(decimal_places("12").unwrap(), 0);
        assert_eq!(decimal_places("5.").unwrap(), 0);
        assert_eq!(decimal_places(".25").unwrap(), 2);
    }

    #[test]
    fn test_scaled_units_pad_and_truncate() {
        assert_eq!(scaled_units("1.5", 3).unwrap(), BigInt::from(1500));
        assert_eq!(scaled_units("-1.239", 2).unwrap(), BigInt::from(-123));
        assert_eq!(scaled_units("-0.5", 1).unwrap(), BigInt::from(-5));
        assert_eq!(scaled_units("+7", 2).unwrap(), BigInt::from(700));
        assert_eq!(scaled_units(".5", 1).unwrap(), BigInt::from(5));
    }

    #[test]
    fn test_malformed_literals_rejected() {
        for bad in ["", "-", ".", "1.2.3", "abc", "1e5", " 1", "--1", "1,5", "NaN"] {
            assert!(
                matches!(scaled_units(bad, 2), Err(RngError::InvalidNumber(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_display_pads_fraction() {
        assert_eq!(FixedDecimal::new(BigInt::from(5), 3).to_string(), "0.005");
        assert_eq!(FixedDecimal::new(BigInt::from(-150), 2).to_string(), "-1.50");
        assert_eq!(FixedDecimal::new(BigInt::from(42), 0).to_string(), "42");
    }

    #[test]
    fn test_to_f64_exact_for_short_values() {
        let d: FixedDecimal = "0.866".parse().unwrap();
        assert_eq!(d.to_f64(), 0.866);
    }
}
