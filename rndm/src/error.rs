//! Generator error taxonomy
//!
//! Every error is a caller-correctable usage mistake, raised before any
//! state mutation or entropy consumption.

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RngError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range: size {size} must be positive")]
    InvalidRange { size: BigInt },

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}
