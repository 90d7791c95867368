//! Seed configuration
//!
//! Lets callers choose between a reproducible fixed seed and an
//! entropy-seeded generator from a config file.

use serde::{Deserialize, Serialize};

use crate::error::RandomError;
use crate::rng::Random;

/// How a generator should be seeded
///
/// # Example
/// ```
/// use seeded_random::SeedConfig;
///
/// let config = SeedConfig::from_json(r#"{"mode": "fixed", "seed": 42}"#).unwrap();
/// let rng = config.build();
/// assert_eq!(rng.seed(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SeedConfig {
    /// Reproducible sequence from a known seed
    Fixed { seed: i64 },

    /// Seed from time and process state (not reproducible)
    #[default]
    Entropy,
}

impl SeedConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        serde_json::from_str(json).map_err(|e| {
            RandomError::Serialization(format!("Seed config parse failed: {}", e))
        })
    }

    /// Create a generator according to this config
    pub fn build(&self) -> Random {
        match *self {
            SeedConfig::Fixed { seed } => Random::new(seed),
            SeedConfig::Entropy => Random::from_entropy(),
        }
    }

    /// Whether generators built from this config are reproducible
    pub fn is_deterministic(&self) -> bool {
        matches!(self, SeedConfig::Fixed { .. })
    }
}
