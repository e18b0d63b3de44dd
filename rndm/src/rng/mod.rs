//! Deterministic random number generation
//!
//! SplitMix64: a linear state increment followed by a fixed bit-mixing
//! finalizer. Layered as mixer, seeding and bit engine.
//! NOT cryptographically secure.

mod mix;
mod seed;
mod splitmix;

pub use mix::{mix64, GAMMA, M1, M2};
pub use seed::{time_seed64, Seed, StreamId};
pub use splitmix::{RngSnapshot, SplitMix64};
