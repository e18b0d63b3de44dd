//! SplitMix64 bit engine
//!
//! One 64-bit state word advanced by a fixed odd increment, each step's
//! output passed through the [`mix64`] finalizer.
//!
//! # Algorithm
//!
//! ```text
//! state  = state + GAMMA          (mod 2^64)
//! output = mix64(state)
//! ```
//!
//! # Determinism
//!
//! Same seed and stream id → same sequence. Seeding from the clock is the
//! only source of non-determinism, and the clock is injectable.

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::mix::{mix64, GAMMA};
use super::seed::{time_seed64, Seed, StreamId};
use crate::core::time::{Clock, SystemClock};
use crate::error::RngError;

/// Seedable SplitMix64 generator with a logical stream id
///
/// A state of zero means "not yet seeded"; the first draw then seeds from
/// the clock. Seeding never leaves the state at zero.
///
/// # Example
/// ```
/// use rndm::SplitMix64;
///
/// let mut rng = SplitMix64::new(12345, 1);
/// assert_eq!(rng.next_u64(), 9623713495117758223);
/// let bits = rng.randbits(100).unwrap();
/// assert!(bits.bits() <= 100);
/// ```
#[derive(Debug, Clone)]
pub struct SplitMix64<C: Clock = SystemClock> {
    state: u64,
    stream_id: u64,
    clock: C,
}

/// Saved generator position (for checkpointing/replay)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngSnapshot {
    pub state: u64,
    pub stream_id: u64,
}

impl SplitMix64<SystemClock> {
    /// Create a generator from an explicit seed and stream id
    ///
    /// # Example
    /// ```
    /// use rndm::SplitMix64;
    ///
    /// let rng = SplitMix64::new(12345, 1);
    /// assert_eq!(rng.state(), 2899208192185403997);
    /// ```
    pub fn new(seed: impl Into<Seed>, stream_id: impl Into<StreamId>) -> Self {
        let mut rng = Self::unseeded();
        rng.reseed(Some(seed.into()), Some(stream_id.into()));
        rng
    }

    /// Create a generator seeded from the current local time
    pub fn from_time(stream_id: impl Into<StreamId>) -> Self {
        let mut rng = Self::unseeded();
        rng.reseed(None, Some(stream_id.into()));
        rng
    }

    /// Generator that seeds itself from the clock on first draw
    pub const fn unseeded() -> Self {
        Self {
            state: 0,
            stream_id: 0,
            clock: SystemClock,
        }
    }

    /// Recreate a generator at a saved position
    pub fn from_snapshot(snapshot: RngSnapshot) -> Self {
        let mut rng = Self::unseeded();
        rng.restore(snapshot);
        rng
    }
}

impl Default for SplitMix64<SystemClock> {
    fn default() -> Self {
        Self::unseeded()
    }
}

impl<C: Clock> SplitMix64<C> {
    /// Unseeded generator reading time from `clock`, stream id 0
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: 0,
            stream_id: 0,
            clock,
        }
    }

    /// Reseed the generator
    ///
    /// - `stream_id` given → it replaces the current stream id first
    /// - `seed` given → base is `mix64(seed)`, otherwise the time seed
    ///
    /// The new state is `mix64(base ^ mix64(stream_id))`, remapped to 1 if
    /// that is zero. Returns the new state.
    ///
    /// # Example
    /// ```
    /// use rndm::{Seed, SplitMix64, StreamId};
    ///
    /// let mut rng = SplitMix64::unseeded();
    /// let state = rng.reseed(Some(Seed::from(0)), Some(StreamId::from(0)));
    /// assert_eq!(state, 1);
    /// ```
    pub fn reseed(&mut self, seed: Option<Seed>, stream_id: Option<StreamId>) -> u64 {
        if let Some(id) = stream_id {
            self.stream_id = id.value();
        }

        let base = match seed {
            Some(seed) => mix64(seed.value()),
            None => time_seed64(&self.clock.now()),
        };

        let combined = mix64(base ^ mix64(self.stream_id));
        self.state = if combined == 0 { 1 } else { combined };

        debug!(
            "reseeded generator: stream_id={} explicit_seed={} state={:#018x}",
            self.stream_id,
            seed.is_some(),
            self.state
        );
        self.state
    }

    /// Switch stream and reseed from the clock
    ///
    /// Two calls with the same id inside the same millisecond land on the
    /// same state.
    pub fn set_stream_id(&mut self, stream_id: impl Into<StreamId>) {
        self.stream_id = stream_id.into().value();
        self.reseed(None, None);
    }

    /// Get current internal state (0 while unseeded)
    pub fn state(&self) -> u64 {
        self.state
    }

    pub fn stream_id(&self) -> u64 {
        self.stream_id
    }

    pub fn is_seeded(&self) -> bool {
        self.state != 0
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Capture state and stream id
    pub fn snapshot(&self) -> RngSnapshot {
        RngSnapshot {
            state: self.state,
            stream_id: self.stream_id,
        }
    }

    /// Jump back to a saved position
    pub fn restore(&mut self, snapshot: RngSnapshot) {
        self.state = snapshot.state;
        self.stream_id = snapshot.stream_id;
    }

    /// Generate next random u64 value
    ///
    /// Seeds from the clock first if the generator was never seeded.
    pub fn next_u64(&mut self) -> u64 {
        if self.state == 0 {
            trace!("generator unseeded, seeding from clock");
            self.reseed(None, None);
        }

        self.state = self.state.wrapping_add(GAMMA);
        mix64(self.state)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits of one word.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Integer made of exactly `k` random bits, in `[0, 2^k)`
    ///
    /// Each 64-bit word contributes its top `min(64, remaining)` bits, most
    /// significant chunk first. `k = 0` returns 0 without drawing.
    ///
    /// # Errors
    /// [`RngError::InvalidArgument`] if `k < 0`.
    pub fn randbits(&mut self, k: i64) -> Result<BigUint, RngError> {
        let k = u64::try_from(k).map_err(|_| {
            RngError::InvalidArgument(format!("bit count must be >= 0, got {}", k))
        })?;
        Ok(self.draw_bits(k))
    }

    pub(crate) fn draw_bits(&mut self, k: u64) -> BigUint {
        let mut out = BigUint::zero();
        let mut filled = 0u64;

        while filled < k {
            let take = (k - filled).min(64) as u32;
            out = (out << take) | BigUint::from(self.top_bits(take));
            filled += take as u64;
        }

        out
    }

    /// Top `k` bits of one word, `1 <= k <= 64`
    #[inline]
    pub(crate) fn top_bits(&mut self, k: u32) -> u64 {
        debug_assert!((1..=64).contains(&k));
        self.next_u64() >> (64 - k)
    }
}
