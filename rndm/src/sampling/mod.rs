//! Range sampling on top of the bit engine
//!
//! - **uniform**: Exact uniform integers in `[0, n)` by rejection sampling
//! - **decimal**: Fixed-point decimals with a declared precision
//! - **range**: `time_based_random` over integer and decimal bounds
//!
//! No modulo reduction is used anywhere in this module.

mod decimal;
mod range;
mod uniform;

pub use decimal::FixedDecimal;
pub use range::{Bound, Sample};
