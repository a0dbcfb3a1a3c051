/// The position of a sub-field within a packed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    pub offset: u32,
    pub bits: u32,
}

impl BitRange {
    pub const fn new(offset: u32, bits: u32) -> BitRange {
        BitRange { offset, bits }
    }

    /// The largest value that fits in the range.
    ///
    /// # Panics
    /// Panics in debug builds if the range is empty or wider than 64 bits.
    pub const fn max_value(&self) -> u64 {
        debug_assert!(
            self.bits > 0 && self.bits <= u64::BITS,
            "bit range must be between 1 and 64 bits wide"
        );
        u64::MAX >> (u64::BITS - self.bits)
    }
}

/// Unsigned integers that can hold fixed-width sub-fields.
///
/// All methods panic in debug builds if `range` is empty or extends past the width of the
/// integer.
pub trait PackedBits: Copy {
    /// Returns a value with only the bits covered by `range` set.
    fn mask(range: BitRange) -> Self;

    /// Returns `self` with the sub-field at `range` replaced by `value`. Bits of `value` that don't
    /// fit in the range are discarded.
    fn with_field(self, range: BitRange, value: Self) -> Self;

    /// Reads the sub-field at `range`.
    fn field(self, range: BitRange) -> Self;
}

macro_rules! impl_packed_bits {
    ($($int:ty),* $(,)?) => {
        $(
            impl PackedBits for $int {
                fn mask(range: BitRange) -> Self {
                    debug_assert!(
                        range.bits > 0 && range.offset + range.bits <= <$int>::BITS,
                        "bit range {:?} doesn't fit in {}",
                        range,
                        stringify!($int),
                    );
                    (<$int>::MAX >> (<$int>::BITS - range.bits)) << range.offset
                }

                fn with_field(self, range: BitRange, value: Self) -> Self {
                    let mask = Self::mask(range);
                    (self & !mask) | ((value << range.offset) & mask)
                }

                fn field(self, range: BitRange) -> Self {
                    (self & Self::mask(range)) >> range.offset
                }
            }
        )*
    };
}

impl_packed_bits!(u8, u16, u32, u64);
