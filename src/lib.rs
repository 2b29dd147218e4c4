//! Fixed-width unsigned integers wider than a machine word
//!
//! This crate provides `StaticUint`, a stack-allocated unsigned integer
//! whose bit width is fixed at compile time as a whole number of native
//! machine words. It exists for code that needs exact, overflow-defined
//! arithmetic on 128-, 192-, 256-bit (and wider) values, such as protocol
//! counters, hash-sized quantities, and wide identifiers, without
//! reaching for a general-purpose big-integer library.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large arithmetic API. All components are designed
//! to be dependency-free, explicit in their semantics, and suitable for
//! use in `const` contexts.
//!
//! # Module overview
//!
//! - `word`
//!   The native machine word underlying the limb representation: the
//!   `Word` and `WideWord` type aliases, their widths, and the
//!   carry-propagating addition primitive.
//!
//! - `uint`
//!   The `StaticUint` type itself: construction, comparison, wrapping
//!   addition, bitwise operations, shifts, endian byte views, big-endian
//!   decoding, and conversions to and from native integer types. Widths
//!   are declared through the [`declare_uint!`] macro; common widths
//!   (`U64` through `U512`) are pre-declared.
//!
//! # Design goals
//!
//! - No heap allocations
//! - Minimal and explicit APIs
//! - Stable, well-defined wrapping semantics
//! - Core operations usable in constant evaluation
//!
//! This crate is not intended to replace full-featured big-integer
//! libraries: multiplication, division and signed arithmetic are out of
//! scope by design.

pub mod uint;
pub mod word;

pub use uint::{Bytes, BytesIter, DecodeError, StaticUint};
pub use uint::{U64, U128, U192, U256, U384, U512};
