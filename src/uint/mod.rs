//! Fixed-width unsigned integer primitive
//!
//! This module defines the `StaticUint` type, a stack-allocated unsigned
//! integer built from a compile-time-sized sequence of native machine
//! words (limbs).
//!
//! `StaticUint` is designed as a low-level, dependency-free primitive
//! rather than a full big-integer abstraction. It provides only a minimal
//! set of functionality with explicit semantics and predictable behavior:
//! wrapping addition, bitwise operations, logical shifts, unsigned total
//! ordering, and big-/little-endian byte views for serialization.
//!
//! Limbs are stored least-significant first and the value is standard
//! positional notation in base `2^WORD_BITS`. The byte views are computed
//! from limb arithmetic, never from the in-memory layout, so they behave
//! identically on little- and big-endian hosts.
//!
//! Widths are declared with [`declare_uint!`], which maps a bit width onto
//! a limb count and rejects widths that are zero or not a whole number of
//! words at compile time. The common widths `U64` through `U512` are
//! pre-declared.

mod bytes;
mod conv;
mod core;
mod ops;

pub use self::bytes::{Bytes, BytesIter, DecodeError};
pub use self::core::StaticUint;

/// Declares a type alias for a [`StaticUint`] of the given bit width.
///
/// The width must be a non-zero multiple of the native word width; any
/// other width fails to compile. The alias is an ordinary type alias, so
/// two aliases of the same width are interchangeable.
///
/// ```
/// use static_uint::declare_uint;
///
/// declare_uint!(U1024, 1024);
/// assert_eq!(U1024::BITS, 1024);
/// ```
#[macro_export]
macro_rules! declare_uint {
    ($vis:vis $name:ident, $bits:expr) => {
        const _: () = assert!(
            $bits != 0 && $bits % $crate::word::WORD_BITS == 0,
            "bit width must be a non-zero multiple of the native word width"
        );

        #[doc = concat!("Unsigned ", stringify!($bits), "-bit integer.")]
        $vis type $name =
            $crate::uint::StaticUint<{ $bits / $crate::word::WORD_BITS }>;
    };
}

declare_uint!(pub U64, 64);
declare_uint!(pub U128, 128);
declare_uint!(pub U192, 192);
declare_uint!(pub U256, 256);
declare_uint!(pub U384, 384);
declare_uint!(pub U512, 512);
