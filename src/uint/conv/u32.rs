//! Conversions between `StaticUint` and 32-bit integers

use crate::uint::StaticUint;
use crate::word::Word;

/// Converts a `u32` into a `StaticUint`.
///
/// The value is placed in the least significant limb, with all higher
/// bits set to zero. A `u32` always fits in a single limb.
impl<const LIMBS: usize> From<u32> for StaticUint<LIMBS> {
    fn from(value: u32) -> Self {
        Self::from_word(value as Word)
    }
}

/// Attempts to convert a `StaticUint` into a `u32`.
///
/// The conversion succeeds only if every bit above the low 32 is zero.
impl<const LIMBS: usize> TryFrom<StaticUint<LIMBS>> for u32 {
    type Error = ();

    fn try_from(value: StaticUint<LIMBS>) -> Result<Self, Self::Error> {
        if value.limbs[1..].iter().any(|&limb| limb != 0) {
            return Err(());
        }
        if value.limbs[0] > u32::MAX as Word {
            return Err(());
        }

        Ok(value.limbs[0] as u32)
    }
}
