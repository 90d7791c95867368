//! 48-bit linear congruential generator
//!
//! The state transition is the classic `seed = (seed * 0x5DEECE66D + 0xB) mod 2^48`
//! recurrence. Every output is derived from the high bits of the state right
//! after a transition, so the low (short-period) bits never leak out directly.
//!
//! # Determinism
//!
//! Same seed → same sequence of values, on every platform. All arithmetic is
//! wrapping 64-bit integer arithmetic; overflow is part of the algorithm.
//!
//! NOT suitable for secrets or key material.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{trace, warn};

use super::entropy::{EntropySource, SystemEntropy};
use super::large::LargeInteger;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const STATE_MASK: u64 = (1 << 48) - 1;

/// Deterministic pseudo-random number generator
///
/// # Example
/// ```
/// use seeded_random::Random;
///
/// let mut rng = Random::new(12345);
/// let value = rng.next_int();
/// let die = rng.next_int_in(1..7); // [1, 7)
/// assert!((1..7).contains(&die));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Random {
    /// Entire generator state. Only the low 48 bits feed the next transition.
    seed: i64,
    #[serde(skip)]
    is_system_random: bool,
}

impl Random {
    /// Create a generator with an explicit seed
    ///
    /// # Example
    /// ```
    /// use seeded_random::Random;
    ///
    /// let mut a = Random::new(42);
    /// let mut b = Random::new(42);
    /// assert_eq!(a.next_int(), b.next_int());
    /// ```
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            is_system_random: false,
        }
    }

    /// Create a generator seeded from the current time and process state
    ///
    /// The resulting sequence is not reproducible between runs.
    pub fn from_entropy() -> Self {
        let mut rng = Self::new(1);
        rng.set_seed_randomly();
        rng
    }

    /// Self-seeded generator flagged as a thread's shared instance.
    pub(crate) fn system() -> Self {
        let mut rng = Self::from_entropy();
        rng.is_system_random = true;
        rng
    }

    /// Whether this is a thread's shared system generator
    pub fn is_system_random(&self) -> bool {
        self.is_system_random
    }

    /// Get current seed (for snapshot/replay)
    ///
    /// # Example
    /// ```
    /// use seeded_random::Random;
    ///
    /// let mut rng = Random::new(7);
    /// rng.next_int();
    ///
    /// // Later, recreate the generator from this seed
    /// let mut replay = Random::new(rng.seed());
    /// assert_eq!(rng.next_int(), replay.next_int());
    /// ```
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Reset the generator to a given seed
    ///
    /// Reseeding a thread's system generator is allowed but logged, since
    /// other code on the same thread shares that sequence.
    pub fn set_seed(&mut self, new_seed: i64) {
        if self.is_system_random {
            warn!(new_seed, "set_seed called on a shared system random generator");
        }
        self.seed = new_seed;
    }

    /// Fold a value into the current seed
    ///
    /// The new seed depends on both the previous state and `value`; it is
    /// only equal to `value` when the mixing draw happens to be zero.
    ///
    /// # Example
    /// ```
    /// use seeded_random::Random;
    ///
    /// let mut combined = Random::new(1);
    /// combined.combine_seed(99);
    /// assert_ne!(combined.seed(), 99);
    /// ```
    pub fn combine_seed(&mut self, value: i64) {
        let mixed = self.next_i64() ^ value;
        self.seed ^= mixed;
    }

    /// Reseed from wall-clock time, a process-wide counter and this
    /// generator's address, convolved with the previous seed
    ///
    /// Repeated calls keep accumulating entropy rather than resetting it.
    pub fn set_seed_randomly(&mut self) {
        self.set_seed_randomly_from(&SystemEntropy);
    }

    /// Reseed from an explicit entropy source
    pub fn set_seed_randomly_from<E: EntropySource + ?Sized>(&mut self, source: &E) {
        let identity = self as *const Self as usize as i64;
        let sample = source.sample(identity);

        self.combine_seed(sample.counter ^ sample.identity);
        self.combine_seed(sample.monotonic_nanos);
        self.combine_seed(sample.wall_clock_nanos);

        trace!(seed = self.seed, "reseeded from entropy");
    }

    /// Generate the next random 32-bit integer over the full `i32` range
    pub fn next_int(&mut self) -> i32 {
        let next = (self.seed as u64)
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & STATE_MASK;
        self.seed = next as i64;
        (next >> 16) as i32
    }

    /// Top 31 bits of a draw, always non-negative.
    fn next_non_negative(&mut self) -> i32 {
        ((self.next_int() as u32) >> 1) as i32
    }

    /// Generate random value in range [0, max_value)
    ///
    /// Powers of two take a shift of the high bits; every other bound uses
    /// rejection sampling so no value is favoured.
    ///
    /// # Panics
    /// Panics if `max_value <= 0`
    ///
    /// # Example
    /// ```
    /// use seeded_random::Random;
    ///
    /// let mut rng = Random::new(42);
    /// let digit = rng.next_int_below(10);
    /// assert!((0..10).contains(&digit));
    /// ```
    pub fn next_int_below(&mut self, max_value: i32) -> i32 {
        assert!(max_value > 0, "max_value must be positive");

        if max_value & (max_value - 1) == 0 {
            let bits = i64::from(self.next_non_negative());
            return ((i64::from(max_value) * bits) >> 31) as i32;
        }

        loop {
            let bits = self.next_non_negative();
            let value = bits % max_value;
            // Reject draws from the final partial block below i32::MAX
            if (bits - value).checked_add(max_value - 1).is_some() {
                return value;
            }
        }
    }

    /// Generate random value in range [start, end)
    ///
    /// # Panics
    /// Panics if `range.start >= range.end`
    pub fn next_int_in(&mut self, range: Range<i32>) -> i32 {
        assert!(
            range.start < range.end,
            "range start must be less than range end"
        );

        let span = range.end.wrapping_sub(range.start);
        if span > 0 {
            return range.start + self.next_int_below(span);
        }

        // Span wider than i32::MAX: more than half of all draws land inside.
        loop {
            let value = self.next_int();
            if range.contains(&value) {
                return value;
            }
        }
    }

    /// Generate the next random 64-bit integer over the full `i64` range
    ///
    /// Consumes two draws: the first becomes the high word.
    pub fn next_i64(&mut self) -> i64 {
        let high = u64::from(self.next_int() as u32);
        let low = u64::from(self.next_int() as u32);
        ((high << 32) | low) as i64
    }

    /// Generate random f32 in range [0.0, 1.0)
    pub fn next_float(&mut self) -> f32 {
        let bits = (self.next_int() as u32) >> 8;
        bits as f32 / (1u32 << 24) as f32
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Two draws supply the 53 mantissa bits.
    ///
    /// # Example
    /// ```
    /// use seeded_random::Random;
    ///
    /// let mut rng = Random::new(12345);
    /// let probability = rng.next_double();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_double(&mut self) -> f64 {
        let high = u64::from((self.next_int() as u32) >> 6);
        let low = u64::from((self.next_int() as u32) >> 5);
        ((high << 27) | low) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Generate a random boolean from the parity of a draw
    pub fn next_bool(&mut self) -> bool {
        self.next_int().count_ones() & 1 == 1
    }

    /// Generate a value in range [0, maximum) of any [`LargeInteger`] width
    ///
    /// Fills as many bits as `maximum` occupies and retries while the
    /// candidate is out of range, so every value is equally likely.
    ///
    /// # Panics
    /// Panics if `maximum` is zero
    ///
    /// # Example
    /// ```
    /// use seeded_random::Random;
    ///
    /// let mut rng = Random::new(3);
    /// let max = 1u128 << 100;
    /// assert!(rng.next_large_number(&max) < max);
    /// ```
    pub fn next_large_number<T: LargeInteger>(&mut self, maximum: &T) -> T {
        let num_bits = maximum.bit_len();
        assert!(num_bits > 0, "maximum must be positive");

        loop {
            let mut candidate = T::zero();
            self.fill_bits(&mut candidate, 0, num_bits);
            if candidate < *maximum {
                return candidate;
            }
        }
    }

    /// Fill a byte buffer with random data
    ///
    /// Each 4-byte chunk receives one draw in little-endian order. A
    /// trailing partial chunk takes the leading bytes of one further draw.
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) {
        let mut chunks = buffer.chunks_exact_mut(4);
        for chunk in chunks.by_ref() {
            chunk.copy_from_slice(&self.next_int().to_le_bytes());
        }

        let remainder = chunks.into_remainder();
        if !remainder.is_empty() {
            let last = self.next_int().to_le_bytes();
            let len = remainder.len();
            remainder.copy_from_slice(&last[..len]);
        }
    }

    /// Randomise bits `[start_bit, start_bit + num_bits)` of `value`
    ///
    /// Bits outside the range are left untouched. Leading bits up to the next
    /// 32-bit boundary come from single boolean draws, whole words from one
    /// integer draw each (bit `i` of the draw lands at word offset `i`), and
    /// the remaining tail from boolean draws, highest bit first.
    pub fn fill_bits<T: LargeInteger>(
        &mut self,
        value: &mut T,
        start_bit: usize,
        num_bits: usize,
    ) {
        let mut start = start_bit;
        let mut remaining = num_bits;

        while start % 32 != 0 && remaining > 0 {
            let bit = self.next_bool();
            value.set_bit(start, bit);
            start += 1;
            remaining -= 1;
        }

        while remaining >= 32 {
            let word = self.next_int() as u32;
            for offset in 0..32 {
                value.set_bit(start + offset, (word >> offset) & 1 != 0);
            }
            start += 32;
            remaining -= 32;
        }

        while remaining > 0 {
            remaining -= 1;
            let bit = self.next_bool();
            value.set_bit(start + remaining, bit);
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::from_entropy()
    }
}
