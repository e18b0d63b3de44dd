//! SplitMix64 finalizer

/// Golden-ratio increment applied to the state on every step
pub const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
pub const M1: u64 = 0xBF58_476D_1CE4_E5B9;
pub const M2: u64 = 0x94D0_49BB_1331_11EB;

/// Diffuse the bits of `x`
///
/// Three xor-shift-right rounds with two odd-constant multiplies, all
/// modulo 2^64. Pure and total.
///
/// # Example
/// ```
/// use rndm::mix64;
///
/// assert_eq!(mix64(0), 0);
/// assert_eq!(mix64(1), 6238072747940578789);
/// ```
#[inline]
pub fn mix64(x: u64) -> u64 {
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(M1);
    z = (z ^ (z >> 27)).wrapping_mul(M2);
    z ^ (z >> 31)
}
