//! Seeded Random - deterministic pseudo-random numbers
//!
//! Reproducible sequences of integers, floats, booleans, large integers and
//! raw bytes from a 64-bit seed.
//!
//! # Architecture
//!
//! - **rng**: The generator, entropy reseeding and per-thread shared instances
//! - **config**: Seed configuration (fixed or entropy)
//! - **checkpoint**: Save/restore of generator state
//! - **error**: Errors for the fallible surfaces
//!
//! # Critical Invariants
//!
//! 1. Same seed + same calls = same outputs, on every platform
//! 2. Range-limited draws are unbiased
//! 3. Not cryptographically secure

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::RandomSnapshot;
pub use config::SeedConfig;
pub use error::RandomError;
pub use rng::{
    with_system_random, EntropySample, EntropySource, LargeInteger, Random, SystemEntropy,
};
