//! Capability interface for the integer type behind `next_large_number`
//!
//! The generator only needs to know how wide a value is, how to flip its
//! bits and how to compare two values. It never touches the storage.

/// An unsigned integer the generator can fill bit by bit
///
/// Arbitrary-precision types implement this to take part in
/// [`Random::next_large_number`](crate::Random::next_large_number) and
/// [`Random::fill_bits`](crate::Random::fill_bits). Fixed-width unsigned
/// primitives implement it out of the box.
pub trait LargeInteger: Ord {
    /// The value zero
    fn zero() -> Self;

    /// Number of significant bits (index of the highest set bit + 1, or 0 for zero)
    fn bit_len(&self) -> usize;

    /// Read the bit at `index`
    fn bit(&self, index: usize) -> bool;

    /// Write the bit at `index`, growing the storage if the type can
    fn set_bit(&mut self, index: usize, value: bool);
}

macro_rules! impl_large_integer {
    ($($ty:ty),*) => {
        $(
            impl LargeInteger for $ty {
                fn zero() -> Self {
                    0
                }

                fn bit_len(&self) -> usize {
                    (<$ty>::BITS - self.leading_zeros()) as usize
                }

                fn bit(&self, index: usize) -> bool {
                    index < <$ty>::BITS as usize && (*self >> index) & 1 == 1
                }

                fn set_bit(&mut self, index: usize, value: bool) {
                    assert!(
                        index < <$ty>::BITS as usize,
                        "bit index {} out of range for {}",
                        index,
                        stringify!($ty)
                    );
                    if value {
                        *self |= 1 << index;
                    } else {
                        *self &= !(1 << index);
                    }
                }
            }
        )*
    };
}

impl_large_integer!(u32, u64, u128);
