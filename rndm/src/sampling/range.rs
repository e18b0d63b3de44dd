//! `time_based_random`: uniform values between two bounds
//!
//! # Modes
//!
//! - **Integer**: both bounds are integers → integer result
//! - **Decimal**: anything else → [`FixedDecimal`] result
//!
//! Decimal bounds are converted from their text form to scaled integers,
//! so `"0.1"` means exactly one tenth and never `0.1000000000000000055...`.

use std::borrow::Cow;
use std::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use super::decimal::{decimal_places, scaled_units, FixedDecimal};
use crate::core::time::Clock;
use crate::error::RngError;
use crate::rng::SplitMix64;

/// One end of a sampling range
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Integer(BigInt),
    Float(f64),
    /// Decimal literal, `[+-]digits[.digits]`
    Text(String),
    Decimal(FixedDecimal),
}

impl Bound {
    pub fn is_integer(&self) -> bool {
        matches!(self, Bound::Integer(_))
    }

    fn text(&self) -> Result<Cow<'_, str>, RngError> {
        match self {
            Bound::Integer(value) => Ok(Cow::Owned(value.to_string())),
            Bound::Float(value) => float_text(*value).map(Cow::Owned),
            Bound::Text(text) => Ok(Cow::Borrowed(text.as_str())),
            Bound::Decimal(value) => Ok(Cow::Owned(value.to_string())),
        }
    }
}

/// Default text of a float: shortest round-trip digits, at least one
/// fractional digit
fn float_text(value: f64) -> Result<String, RngError> {
    if !value.is_finite() {
        return Err(RngError::InvalidNumber(value.to_string()));
    }
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    Ok(text)
}

macro_rules! bound_from_int {
    ($($t:ident)*) => {
        $(
            impl From<$t> for Bound {
                fn from(value: $t) -> Self {
                    Bound::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

bound_from_int!(u8 u16 u32 u64 usize u128 i8 i16 i32 i64 isize i128);

impl From<BigInt> for Bound {
    fn from(value: BigInt) -> Self {
        Bound::Integer(value)
    }
}

impl From<&BigInt> for Bound {
    fn from(value: &BigInt) -> Self {
        Bound::Integer(value.clone())
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Bound::Float(value)
    }
}

impl From<f32> for Bound {
    // Widening to f64 would print f32 rounding noise as extra digits
    fn from(value: f32) -> Self {
        if !value.is_finite() {
            return Bound::Float(value as f64);
        }
        let mut text = value.to_string();
        if !text.contains('.') {
            text.push_str(".0");
        }
        Bound::Text(text)
    }
}

impl From<&str> for Bound {
    fn from(value: &str) -> Self {
        Bound::Text(value.to_string())
    }
}

impl From<String> for Bound {
    fn from(value: String) -> Self {
        Bound::Text(value)
    }
}

impl From<FixedDecimal> for Bound {
    fn from(value: FixedDecimal) -> Self {
        Bound::Decimal(value)
    }
}

/// Result of [`SplitMix64::time_based_random`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample {
    Integer(BigInt),
    Decimal(FixedDecimal),
}

impl Sample {
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Sample::Integer(value) => Some(value),
            Sample::Decimal(_) => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&FixedDecimal> {
        match self {
            Sample::Decimal(value) => Some(value),
            Sample::Integer(_) => None,
        }
    }

    /// Integer result as `i64`, if it is one and fits
    pub fn to_i64(&self) -> Option<i64> {
        self.as_integer().and_then(ToPrimitive::to_i64)
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Sample::Integer(value) => value.to_f64().unwrap_or(f64::NAN),
            Sample::Decimal(value) => value.to_f64(),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Integer(value) => write!(f, "{}", value),
            Sample::Decimal(value) => write!(f, "{}", value),
        }
    }
}

impl<C: Clock> SplitMix64<C> {
    /// Uniform value between `min_value` and `max_value`
    ///
    /// # Arguments
    /// * `inclusive` - Whether `max_value` itself can be returned
    /// * `precision` - Fractional digits in decimal mode; defaults to the
    ///   most digits written in either bound
    ///
    /// # Errors
    /// * [`RngError::InvalidRange`] if the range holds no value
    /// * [`RngError::InvalidNumber`] for a malformed or non-finite bound
    ///
    /// # Example
    /// ```
    /// use rndm::SplitMix64;
    ///
    /// let mut rng = SplitMix64::new(12345, 3);
    /// let x = rng.time_based_random("0.000", "0.999", true, Some(3)).unwrap();
    /// assert_eq!(x.to_string(), "0.866");
    ///
    /// let die = rng.time_based_random(1, 6, true, None).unwrap();
    /// assert!((1..=6).contains(&die.to_i64().unwrap()));
    /// ```
    pub fn time_based_random(
        &mut self,
        min_value: impl Into<Bound>,
        max_value: impl Into<Bound>,
        inclusive: bool,
        precision: Option<u32>,
    ) -> Result<Sample, RngError> {
        let min_value = min_value.into();
        let max_value = max_value.into();
        let extra = BigInt::from(u8::from(inclusive));

        if let (Bound::Integer(lo), Bound::Integer(hi)) = (&min_value, &max_value) {
            let idx = self.index_in(hi - lo + &extra)?;
            return Ok(Sample::Integer(lo + idx));
        }

        let min_text = min_value.text()?;
        let max_text = max_value.text()?;
        let p = match precision {
            Some(p) => p,
            None => decimal_places(&min_text)?.max(decimal_places(&max_text)?),
        };

        let lo = scaled_units(&min_text, p)?;
        let hi = scaled_units(&max_text, p)?;
        let idx = self.index_in(&hi - &lo + &extra)?;
        Ok(Sample::Decimal(FixedDecimal::new(lo + idx, p)))
    }

    fn index_in(&mut self, size: BigInt) -> Result<BigInt, RngError> {
        if size.sign() != Sign::Plus {
            return Err(RngError::InvalidRange { size });
        }
        self.uniform_below(&size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_text_forms() {
        assert_eq!(float_text(0.1).unwrap(), "0.1");
        assert_eq!(float_text(1.0).unwrap(), "1.0");
        assert_eq!(float_text(-2.5).unwrap(), "-2.5");
        assert_eq!(float_text(1e-7).unwrap(), "0.0000001");
        assert!(float_text(f64::NAN).is_err());
        assert!(float_text(f64::INFINITY).is_err());
    }

    #[test]
    fn test_f32_bound_keeps_short_text() {
        assert_eq!(Bound::from(0.1f32), Bound::Text("0.1".into()));
        assert_eq!(Bound::from(3f32), Bound::Text("3.0".into()));
    }

    #[test]
    fn test_mixed_bounds_fall_through_to_decimal() {
        let mut rng = SplitMix64::new(5, 0);
        let x = rng.time_based_random(0, 1.5, true, None).unwrap();
        let d = x.as_decimal().expect("decimal mode");
        assert_eq!(d.precision(), 1);
        assert!(d.units() >= &BigInt::from(0) && d.units() <= &BigInt::from(15));
    }

    #[test]
    fn test_string_integers_use_decimal_mode() {
        let mut rng = SplitMix64::new(5, 0);
        let x = rng.time_based_random("1", "3", true, None).unwrap();
        assert_eq!(x.as_decimal().map(FixedDecimal::precision), Some(0));
    }
}
