//! Conversions between `StaticUint` and 128-bit integers

use crate::uint::StaticUint;
use crate::word::{WORD_BITS, Word};

/// Converts a `u128` into a `StaticUint`.
///
/// The value is decomposed into words and placed in the least significant
/// limbs, with all higher bits set to zero.
///
/// # Panics
/// Panics if the target width is too narrow to hold the value.
impl<const LIMBS: usize> From<u128> for StaticUint<LIMBS> {
    fn from(value: u128) -> Self {
        let mut out = Self::ZERO;

        let mut rest = value;
        let mut i = 0;
        while rest != 0 {
            assert!(i < LIMBS, "u128 value does not fit in the target width");

            out.limbs[i] = rest as Word;
            rest >>= WORD_BITS;
            i += 1;
        }

        out
    }
}

/// Attempts to convert a `StaticUint` into a `u128`.
///
/// The conversion succeeds only if every bit above the low 128 is zero.
impl<const LIMBS: usize> TryFrom<StaticUint<LIMBS>> for u128 {
    type Error = ();

    fn try_from(value: StaticUint<LIMBS>) -> Result<Self, Self::Error> {
        let low = 128 / WORD_BITS;

        if value.limbs.iter().skip(low).any(|&limb| limb != 0) {
            return Err(());
        }

        let mut out = 0u128;
        for (i, &limb) in value.limbs.iter().take(low).enumerate() {
            out |= (limb as u128) << (i * WORD_BITS);
        }

        Ok(out)
    }
}
