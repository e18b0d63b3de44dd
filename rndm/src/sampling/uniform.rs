//! Unbiased integers below a bound
//!
//! Draw `bit_length(n)` bits, keep the draw if it is below `n`, otherwise
//! draw again. Every value in `[0, n)` is exactly equally likely and the
//! expected number of draws is below 2.

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::core::time::Clock;
use crate::error::RngError;
use crate::rng::SplitMix64;

impl<C: Clock> SplitMix64<C> {
    /// Uniform integer in `[0, n)`
    ///
    /// Bounds wider than 64 bits are sampled through [`SplitMix64::randbits`];
    /// narrower bounds consume exactly the same words on a single-word path.
    ///
    /// # Errors
    /// [`RngError::InvalidArgument`] if `n <= 0`.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use rndm::SplitMix64;
    ///
    /// let mut rng = SplitMix64::new(12345, 1);
    /// let r = rng.uniform_below(&BigInt::from(7)).unwrap();
    /// assert!(r >= BigInt::from(0) && r < BigInt::from(7));
    /// ```
    pub fn uniform_below(&mut self, n: &BigInt) -> Result<BigInt, RngError> {
        if n.sign() != Sign::Plus {
            return Err(RngError::InvalidArgument(format!(
                "n must be positive, got {}",
                n
            )));
        }

        if let Some(bound) = n.to_u64() {
            return Ok(BigInt::from(self.below_u64(bound)));
        }

        let bound = n.magnitude();
        let k = bound.bits();
        loop {
            let r = self.draw_bits(k);
            if &r < bound {
                return Ok(BigInt::from(r));
            }
        }
    }

    /// Uniform `u64` in `[0, n)`
    ///
    /// # Errors
    /// [`RngError::InvalidArgument`] if `n == 0`.
    pub fn uniform_below_u64(&mut self, n: u64) -> Result<u64, RngError> {
        if n == 0 {
            return Err(RngError::InvalidArgument("n must be positive, got 0".into()));
        }
        Ok(self.below_u64(n))
    }

    // n > 0
    fn below_u64(&mut self, n: u64) -> u64 {
        let k = 64 - n.leading_zeros();
        loop {
            let r = self.top_bits(k);
            if r < n {
                return r;
            }
        }
    }
}
