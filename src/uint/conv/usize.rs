//! Conversions between `StaticUint` and native `usize` integers
//!
//! A `usize` and a limb have the same width on every supported platform
//! (both follow the pointer width), so these conversions move exactly one
//! limb.

use crate::uint::StaticUint;
use crate::word::Word;

/// Converts a `usize` into a `StaticUint`.
///
/// The value is placed in the least significant limb, with all higher
/// bits set to zero.
impl<const LIMBS: usize> From<usize> for StaticUint<LIMBS> {
    fn from(value: usize) -> Self {
        Self::from_word(value as Word)
    }
}

/// Attempts to convert a `StaticUint` into a `usize`.
///
/// The conversion succeeds only if the value fits entirely within the
/// platform's `usize` width, i.e. every limb above the first is zero.
impl<const LIMBS: usize> TryFrom<StaticUint<LIMBS>> for usize {
    type Error = ();

    fn try_from(value: StaticUint<LIMBS>) -> Result<Self, Self::Error> {
        if value.limbs[1..].iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(value.limbs[0] as usize)
    }
}
