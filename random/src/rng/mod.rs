//! Deterministic random number generation
//!
//! Uses a 48-bit linear congruential generator for reproducible sequences.
//! Per-thread shared instances are available through [`with_system_random`].

mod entropy;
mod large;
mod lcg;
mod system;

pub use entropy::{EntropySample, EntropySource, SystemEntropy};
pub use large::LargeInteger;
pub use lcg::Random;
pub use system::with_system_random;
