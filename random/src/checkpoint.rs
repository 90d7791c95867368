//! Checkpoint - Save/Load Generator State
//!
//! A snapshot captures the seed together with a SHA256 checksum, so a
//! corrupted or hand-edited snapshot is rejected instead of silently
//! replaying a different sequence.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::error::RandomError;
use crate::rng::Random;

/// Saved generator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomSnapshot {
    /// Seed at time of snapshot
    pub seed: i64,

    /// SHA256 of the seed's little-endian bytes (hex)
    pub checksum: String,
}

/// Compute the hex SHA256 checksum stored alongside a seed
pub fn compute_seed_checksum(seed: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    format!("{:x}", hasher.finalize())
}

impl RandomSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, RandomError> {
        serde_json::to_string(self).map_err(|e| {
            RandomError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Parse from a JSON string (does not validate the checksum)
    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        serde_json::from_str(json).map_err(|e| {
            RandomError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }

    /// Check that the stored checksum matches the seed
    pub fn validate(&self) -> Result<(), RandomError> {
        let expected = compute_seed_checksum(self.seed);
        if expected != self.checksum {
            warn!(seed = self.seed, "rejecting random snapshot with bad checksum");
            return Err(RandomError::ChecksumMismatch {
                expected,
                actual: self.checksum.clone(),
            });
        }
        Ok(())
    }
}

impl Random {
    /// Capture the current state
    ///
    /// # Example
    /// ```
    /// use seeded_random::Random;
    ///
    /// let mut rng = Random::new(2024);
    /// rng.next_int();
    ///
    /// let snapshot = rng.snapshot();
    /// let mut restored = Random::restore(&snapshot).unwrap();
    /// assert_eq!(rng.next_int(), restored.next_int());
    /// ```
    pub fn snapshot(&self) -> RandomSnapshot {
        RandomSnapshot {
            seed: self.seed(),
            checksum: compute_seed_checksum(self.seed()),
        }
    }

    /// Recreate a generator from a validated snapshot
    pub fn restore(snapshot: &RandomSnapshot) -> Result<Self, RandomError> {
        snapshot.validate()?;
        Ok(Random::new(snapshot.seed))
    }
}
