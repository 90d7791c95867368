//! Large-number generation and bit filling
//!
//! Uses a small Vec-backed arbitrary-precision type to check that the
//! generator only relies on the LargeInteger capability.

use std::cmp::Ordering;

use seeded_random::{LargeInteger, Random};

/// Little-endian 32-bit limbs, trailing zero limbs trimmed on compare
#[derive(Debug, Clone)]
struct Limbs(Vec<u32>);

impl Limbs {
    fn from_u128(value: u128) -> Self {
        let mut limbs = Limbs(Vec::new());
        for i in 0..128 {
            if (value >> i) & 1 == 1 {
                limbs.set_bit(i, true);
            }
        }
        limbs
    }

    fn significant(&self) -> &[u32] {
        let len = self.0.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1);
        &self.0[..len]
    }
}

impl PartialEq for Limbs {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Limbs {}

impl PartialOrd for Limbs {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Limbs {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.significant();
        let b = other.significant();
        a.len()
            .cmp(&b.len())
            .then_with(|| a.iter().rev().cmp(b.iter().rev()))
    }
}

impl LargeInteger for Limbs {
    fn zero() -> Self {
        Limbs(Vec::new())
    }

    fn bit_len(&self) -> usize {
        let limbs = self.significant();
        match limbs.last() {
            Some(top) => (limbs.len() - 1) * 32 + (32 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    fn bit(&self, index: usize) -> bool {
        self.0
            .get(index / 32)
            .map_or(false, |limb| (limb >> (index % 32)) & 1 == 1)
    }

    fn set_bit(&mut self, index: usize, value: bool) {
        let limb = index / 32;
        if limb >= self.0.len() {
            self.0.resize(limb + 1, 0);
        }
        if value {
            self.0[limb] |= 1 << (index % 32);
        } else {
            self.0[limb] &= !(1 << (index % 32));
        }
    }
}

#[test]
fn test_large_number_below_maximum() {
    let mut rng = Random::new(100);
    let max = Limbs::from_u128((1u128 << 100) + 12345);
    for _ in 0..1000 {
        let value = rng.next_large_number(&max);
        assert!(value < max);
    }
}

#[test]
fn test_large_number_matches_primitive_impl() {
    let max = 0xDEAD_BEEF_CAFE_BABE_1234_5678u128;
    let mut rng1 = Random::new(55);
    let mut rng2 = Random::new(55);

    for _ in 0..200 {
        let wide = rng1.next_large_number(&Limbs::from_u128(max));
        let narrow = rng2.next_large_number(&max);
        assert_eq!(wide, Limbs::from_u128(narrow));
    }
}

#[test]
fn test_large_number_small_maximum_uniform() {
    let mut rng = Random::new(4);
    let mut counts = [0u32; 5];
    for _ in 0..50_000 {
        counts[rng.next_large_number(&5u64) as usize] += 1;
    }
    for &count in &counts {
        assert!((9_000..11_000).contains(&count), "counts {:?}", counts);
    }
}

#[test]
fn test_large_number_of_one_is_zero() {
    let mut rng = Random::new(4);
    for _ in 0..10 {
        assert_eq!(rng.next_large_number(&1u32), 0);
    }
}

#[test]
fn test_large_number_hits_top_half() {
    let max = 1u128 << 127;
    let mut rng = Random::new(8);
    let high = (0..1000)
        .filter(|_| rng.next_large_number(&max) >= 1u128 << 126)
        .count();
    assert!((400..600).contains(&high), "high {}", high);
}

#[test]
#[should_panic(expected = "maximum must be positive")]
fn test_large_number_zero_maximum_panics() {
    Random::new(1).next_large_number(&0u64);
}

#[test]
fn test_fill_bits_leaves_outside_untouched() {
    let mut rng = Random::new(17);
    let mut value = u128::MAX;
    rng.fill_bits(&mut value, 5, 70);

    let outside = !(((1u128 << 70) - 1) << 5);
    assert_eq!(value & outside, outside);
}

#[test]
fn test_fill_bits_zero_width_consumes_nothing() {
    let mut rng = Random::new(17);
    let mut value = 0u64;
    rng.fill_bits(&mut value, 10, 0);
    assert_eq!(value, 0);
    assert_eq!(rng.seed(), 17);
}

#[test]
fn test_fill_bits_grows_arbitrary_precision() {
    let mut rng = Random::new(90);
    let mut value = Limbs::zero();
    rng.fill_bits(&mut value, 0, 300);
    assert!(value.bit_len() <= 300);
    assert!(value.bit_len() > 250);
}

#[test]
fn test_fill_bits_draw_pattern() {
    // 3 head bits up to bit 32, one whole word, then 4 tail bits
    let mut reference = Random::new(64);
    let head: Vec<bool> = (0..3).map(|_| reference.next_bool()).collect();
    let word = reference.next_int() as u32;
    let tail: Vec<bool> = (0..4).map(|_| reference.next_bool()).collect();

    let mut expected = 0u128;
    for (i, &b) in head.iter().enumerate() {
        expected.set_bit(29 + i, b);
    }
    expected |= u128::from(word) << 32;
    for (i, &b) in tail.iter().enumerate() {
        expected.set_bit(64 + 3 - i, b);
    }

    let mut rng = Random::new(64);
    let mut value = 0u128;
    rng.fill_bits(&mut value, 29, 39);

    assert_eq!(value, expected);
    assert_eq!(rng.seed(), reference.seed());
}
