//! Process-wide generator
//!
//! One shared [`SplitMix64`] behind a mutex, for callers that want module
//! level functions instead of carrying a generator around. It starts
//! unseeded and seeds itself from the clock on first draw.
//!
//! Each call takes the lock on its own. Use [`with_generator`] when a
//! sequence of calls must not interleave with other threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use num_bigint::BigUint;

use crate::error::RngError;
use crate::rng::{Seed, SplitMix64, StreamId};
use crate::sampling::{Bound, Sample};

static GENERATOR: Mutex<SplitMix64> = Mutex::new(SplitMix64::unseeded());

// A panic while holding the lock cannot leave a half-written state word,
// so a poisoned lock is still usable.
fn lock() -> MutexGuard<'static, SplitMix64> {
    GENERATOR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` with exclusive access to the shared generator
///
/// # Example
/// ```
/// use rndm::{with_generator, SplitMix64};
///
/// let first = with_generator(|rng| {
///     rng.reseed(Some(12345.into()), Some(1.into()));
///     rng.next_u64()
/// });
/// assert_eq!(first, SplitMix64::new(12345, 1).next_u64());
/// ```
pub fn with_generator<R>(f: impl FnOnce(&mut SplitMix64) -> R) -> R {
    f(&mut lock())
}

/// Reseed the shared generator, see [`SplitMix64::reseed`]
pub fn reseed(seed: Option<Seed>, stream_id: Option<StreamId>) -> u64 {
    lock().reseed(seed, stream_id)
}

/// Switch the shared generator's stream, see [`SplitMix64::set_stream_id`]
pub fn set_stream_id(stream_id: impl Into<StreamId>) {
    lock().set_stream_id(stream_id);
}

pub fn randbits(k: i64) -> Result<BigUint, RngError> {
    lock().randbits(k)
}

/// See [`SplitMix64::time_based_random`]
pub fn time_based_random(
    min_value: impl Into<Bound>,
    max_value: impl Into<Bound>,
    inclusive: bool,
    precision: Option<u32>,
) -> Result<Sample, RngError> {
    lock().time_based_random(min_value, max_value, inclusive, precision)
}
