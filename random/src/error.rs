//! Errors for the fallible surfaces (config parsing, snapshots)
//!
//! Generation itself never returns errors: bad bounds are programmer errors
//! and panic.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RandomError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}
