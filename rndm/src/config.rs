//! Generator configuration
//!
//! Loaded from JSON or from the environment:
//!
//! - `RNDM_SEED`: explicit seed (unset → seed from the clock)
//! - `RNDM_STREAM_ID`: stream id (unset → 0)

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{Seed, SplitMix64, StreamId};

pub const SEED_VAR: &str = "RNDM_SEED";
pub const STREAM_ID_VAR: &str = "RNDM_STREAM_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// How to construct a generator
///
/// # Example
/// ```
/// use rndm::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json_str(r#"{"seed": 12345, "stream_id": 1}"#).unwrap();
/// let rng = config.build();
/// assert_eq!(rng.state(), 2899208192185403997);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Explicit seed; `None` seeds from the local clock
    pub seed: Option<u64>,
    pub stream_id: u64,
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!("loaded generator config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Read `RNDM_SEED` and `RNDM_STREAM_ID`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`GeneratorConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            seed: parse_var(&lookup, SEED_VAR)?,
            stream_id: parse_var(&lookup, STREAM_ID_VAR)?.unwrap_or(0),
        };
        debug!("loaded generator config from environment: {:?}", config);
        Ok(config)
    }

    pub fn build(&self) -> SplitMix64 {
        let mut rng = SplitMix64::unseeded();
        rng.reseed(
            self.seed.map(Seed::from),
            Some(StreamId::from(self.stream_id)),
        );
        rng
    }
}

// Accepts unsigned or negative decimal values; negatives wrap modulo 2^64
fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    value
        .parse::<u64>()
        .or_else(|_| value.parse::<i64>().map(|v| v as u64))
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { var, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config = GeneratorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.stream_id, 0);
    }

    #[test]
    fn test_negative_env_seed_wraps() {
        let config = GeneratorConfig::from_lookup(|var| match var {
            SEED_VAR => Some("-7".to_string()),
            STREAM_ID_VAR => Some(" 3 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.seed, Some((-7i64) as u64));
        assert_eq!(config.stream_id, 3);
    }

    #[test]
    fn test_unparsable_env_rejected() {
        let err = GeneratorConfig::from_lookup(|var| {
            (var == STREAM_ID_VAR).then(|| "stream-one".to_string())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                var: STREAM_ID_VAR,
                ..
            }
        ));
    }
}
