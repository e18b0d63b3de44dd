//! Seed material
//!
//! Any integer is accepted as a seed or stream id. It is reduced modulo
//! 2^64 (two's complement for negatives) before it reaches the mixer.

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use super::mix::mix64;
use crate::core::time::ClockReading;

/// Explicit seed value, reduced to 64 bits
///
/// # Example
/// ```
/// use rndm::Seed;
///
/// assert_eq!(Seed::from(-1i64).value(), u64::MAX);
/// assert_eq!(Seed::from(1u128 << 64).value(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(u64);

/// Identifier of a logical, independent output sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamId(u64);

macro_rules! impl_word64 {
    ($name:ident) => {
        impl $name {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<BigInt> for $name {
            fn from(value: BigInt) -> Self {
                Self(reduce_bigint(&value))
            }
        }

        impl From<&BigInt> for $name {
            fn from(value: &BigInt) -> Self {
                Self(reduce_bigint(value))
            }
        }

        impl_word64!(@cast $name: u8 u16 u32 u64 usize u128 i8 i16 i32 i64 isize i128);
    };
    (@cast $name:ident: $($t:ident)*) => {
        $(
            impl From<$t> for $name {
                // `as` truncates to the low 64 bits, which is reduction modulo 2^64
                fn from(value: $t) -> Self {
                    Self(value as u64)
                }
            }
        )*
    };
}

impl_word64!(Seed);
impl_word64!(StreamId);

fn reduce_bigint(value: &BigInt) -> u64 {
    let (sign, digits) = value.to_u64_digits();
    let low = digits.first().copied().unwrap_or(0);
    match sign {
        Sign::Minus => low.wrapping_neg(),
        _ => low,
    }
}

/// Seed derived from a wall-clock reading
pub fn time_seed64(reading: &ClockReading) -> u64 {
    mix64(reading.encode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_seed_two_complement() {
        assert_eq!(Seed::from(-7i32).value(), (-7i64) as u64);
        assert_eq!(StreamId::from(-3i64).value(), u64::MAX - 2);
    }

    #[test]
    fn test_bigint_reduction_matches_primitive_casts() {
        let big = BigInt::from(-12345i64);
        assert_eq!(Seed::from(&big), Seed::from(-12345i64));

        let huge = (BigInt::from(1u8) << 200) + BigInt::from(99u8);
        assert_eq!(Seed::from(huge).value(), 99);

        let negative_huge = -((BigInt::from(1u8) << 130u32) + BigInt::from(5u8));
        assert_eq!(Seed::from(negative_huge).value(), 5u64.wrapping_neg());
    }

    #[test]
    fn test_time_seed_mixes_encoding() {
        let reading = ClockReading::new(2026, 10, 14, 17, 34, 0, 123);
        assert_eq!(time_seed64(&reading), 13797621743473300851);
    }
}
