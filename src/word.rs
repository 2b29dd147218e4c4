//! Native machine word backing the limb representation
//!
//! A `StaticUint` is a sequence of limbs, and a limb is one native machine
//! word. This module pins down what a word is on the current platform and
//! provides the carry-propagating addition primitive that the wide
//! arithmetic is built from.
//!
//! The word width follows the platform pointer width: 32-bit targets use
//! `u32` limbs, 64-bit targets use `u64` limbs. Everything else in the
//! crate is written against [`Word`], [`WORD_BITS`] and [`WORD_BYTES`]
//! rather than a concrete integer type, so both widths share one code path.

/// Unsigned integer type used as a single limb.
#[cfg(target_pointer_width = "32")]
pub type Word = u32;

/// Unsigned integer type wide enough to hold the sum of two words plus a
/// carry without overflowing.
#[cfg(target_pointer_width = "32")]
pub type WideWord = u64;

/// Unsigned integer type used as a single limb.
#[cfg(target_pointer_width = "64")]
pub type Word = u64;

/// Unsigned integer type wide enough to hold the sum of two words plus a
/// carry without overflowing.
#[cfg(target_pointer_width = "64")]
pub type WideWord = u128;

/// Width of a limb in bits.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Width of a limb in bytes.
pub const WORD_BYTES: usize = WORD_BITS / 8;

/// Adds `a`, `b` and an incoming carry in double-width arithmetic.
///
/// Returns the wrapped single-word sum together with the outgoing carry
/// (`0` or `1`), ready to feed into the next limb of a ripple-carry chain.
pub const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let wide = a as WideWord + b as WideWord + carry as WideWord;

    (wide as Word, (wide >> Word::BITS) as Word)
}
