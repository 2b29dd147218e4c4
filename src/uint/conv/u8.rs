//! Conversions between `StaticUint` and 8-bit integers

use crate::uint::StaticUint;
use crate::word::Word;

/// Converts a `u8` into a `StaticUint`.
///
/// The value is placed in the least significant limb, with all higher
/// bits set to zero.
impl<const LIMBS: usize> From<u8> for StaticUint<LIMBS> {
    fn from(value: u8) -> Self {
        Self::from_word(value as Word)
    }
}

/// Attempts to convert a `StaticUint` into a `u8`.
///
/// The conversion succeeds only if every bit above the low 8 is zero.
impl<const LIMBS: usize> TryFrom<StaticUint<LIMBS>> for u8 {
    type Error = ();

    fn try_from(value: StaticUint<LIMBS>) -> Result<Self, Self::Error> {
        if value.limbs[1..].iter().any(|&limb| limb != 0) {
            return Err(());
        }
        if value.limbs[0] > u8::MAX as Word {
            return Err(());
        }

        Ok(value.limbs[0] as u8)
    }
}
