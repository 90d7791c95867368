//! Environmental entropy for reseeding
//!
//! Reseeding reads wall-clock time, a monotonic clock, a process-wide counter
//! and the generator's own address. The sources sit behind [`EntropySource`]
//! so the mixing step can be driven by a fixed sample in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Process-wide reseed counter; two reseeds in the same clock tick still differ.
static RESEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One reading of every entropy input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntropySample {
    /// Nanoseconds since the Unix epoch (0 if the clock is before it)
    pub wall_clock_nanos: i64,
    /// Nanoseconds since the first sample taken in this process
    pub monotonic_nanos: i64,
    /// Value of a counter that increases on every sample
    pub counter: i64,
    /// Identity of the generator being reseeded (its address)
    pub identity: i64,
}

/// Source of non-deterministic reseeding input
///
/// Implementations must not block and must not fail; an unavailable input
/// is reported as zero.
pub trait EntropySource {
    /// Take a sample on behalf of the generator identified by `identity`
    fn sample(&self, identity: i64) -> EntropySample;
}

/// Entropy from the system clocks and a process-wide counter
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn sample(&self, identity: i64) -> EntropySample {
        EntropySample {
            wall_clock_nanos: wall_clock_nanos(),
            monotonic_nanos: monotonic_nanos(),
            counter: RESEED_COUNTER.fetch_add(1, Ordering::Relaxed) as i64,
            identity,
        }
    }
}

fn wall_clock_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as i64)
        .unwrap_or(0)
}

fn monotonic_nanos() -> i64 {
    static PROCESS_START: OnceLock<Instant> = OnceLock::new();
    PROCESS_START.get_or_init(Instant::now).elapsed().as_nanos() as i64
}
