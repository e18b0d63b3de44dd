//! rndm - lightweight non-cryptographic random number utilities
//!
//! A SplitMix64 generator with reseedable logical streams and unbiased
//! range sampling over integer and decimal bounds.
//!
//! # Architecture
//!
//! - **core**: Wall-clock collaborator used for time-based seeding
//! - **rng**: Mixer, seeding and the 64-bit bit engine
//! - **sampling**: Rejection-sampled integers, fixed-point decimals, `time_based_random`
//! - **config**: Serializable generator configuration
//! - **global**: Process-wide convenience wrapper around one generator
//!
//! # Critical Invariants
//!
//! 1. Generator state is never observably zero once seeded
//! 2. No modulo reduction anywhere on the sampling path
//! 3. Decimal bounds never pass through binary floating point
//!
//! NOT cryptographically secure. Never use it where an adversary must not
//! predict the output.

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod global;
pub mod rng;
pub mod sampling;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig};
pub use crate::core::time::{Clock, ClockReading, FixedClock, SystemClock};
pub use error::RngError;
pub use global::{randbits, reseed, set_stream_id, time_based_random, with_generator};
pub use rng::{mix64, time_seed64, RngSnapshot, Seed, SplitMix64, StreamId};
pub use sampling::{Bound, FixedDecimal, Sample};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
