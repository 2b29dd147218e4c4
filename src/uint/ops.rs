//! Comparison, arithmetic, bitwise and shift operations
//!
//! This module implements the operational core of `StaticUint`:
//! - unsigned total ordering via a single three-way limb comparison
//! - wrapping (modulo `2^BITS`) ripple-carry addition
//! - limb-wise AND and XOR
//! - logical shifts decomposed into a whole-limb move and a sub-word
//!   sweep, so no native shift by a full word width is ever issued
//!
//! Every operation is available as a `const fn`; the standard operator
//! traits delegate to those so the same code serves both runtime and
//! constant evaluation.

use crate::uint::StaticUint;
use crate::word::{Word, WORD_BITS, adc};

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitXor, BitXorAssign, Shl, ShlAssign, Shr, ShrAssign,
};

impl<const LIMBS: usize> StaticUint<LIMBS> {
    /// Three-way comparison of the represented values.
    ///
    /// Walks the limbs from most significant to least significant; the
    /// first differing limb decides. This is the single source of truth
    /// for all relational operators on the type.
    pub const fn compare(&self, rhs: &Self) -> Ordering {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;

            if self.limbs[i] > rhs.limbs[i] {
                return Ordering::Greater;
            }
            if self.limbs[i] < rhs.limbs[i] {
                return Ordering::Less;
            }
        }

        Ordering::Equal
    }

    /// Addition modulo `2^BITS`.
    ///
    /// Carries ripple from the least significant limb upward; a carry out
    /// of the most significant limb is discarded. Wrapping on overflow is
    /// the defined behavior of the type, not an error.
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        let mut limbs: [Word; LIMBS] = [0; LIMBS];
        let mut carry = 0;

        let mut i = 0;
        while i < LIMBS {
            let (sum, next) = adc(self.limbs[i], rhs.limbs[i], carry);
            limbs[i] = sum;
            carry = next;
            i += 1;
        }

        Self { limbs }
    }

    /// Limb-wise bitwise AND.
    pub const fn bitand(&self, rhs: &Self) -> Self {
        let mut limbs: [Word; LIMBS] = [0; LIMBS];

        let mut i = 0;
        while i < LIMBS {
            limbs[i] = self.limbs[i] & rhs.limbs[i];
            i += 1;
        }

        Self { limbs }
    }

    /// Limb-wise bitwise XOR.
    pub const fn bitxor(&self, rhs: &Self) -> Self {
        let mut limbs: [Word; LIMBS] = [0; LIMBS];

        let mut i = 0;
        while i < LIMBS {
            limbs[i] = self.limbs[i] ^ rhs.limbs[i];
            i += 1;
        }

        Self { limbs }
    }

    /// Logical right shift.
    ///
    /// Shifts of `BITS` or more yield zero. The shift is performed in two
    /// phases: whole limbs first, then the remaining sub-word amount with
    /// bits carried between adjacent limbs. The split keeps every native
    /// shift strictly below the word width.
    pub const fn shr(&self, shift: u32) -> Self {
        if shift as usize >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = shift as usize / WORD_BITS;
        let bit_shift = shift % WORD_BITS as u32;

        let mut limbs: [Word; LIMBS] = [0; LIMBS];
        let mut i = 0;
        while i + limb_shift < LIMBS {
            limbs[i] = self.limbs[i + limb_shift];
            i += 1;
        }

        if bit_shift != 0 {
            // Sweep from the most significant limb down; the bits shifted
            // out of the bottom of limb i become the top bits of limb i-1.
            let mut carry: Word = 0;
            let mut i = LIMBS;
            while i > 0 {
                i -= 1;

                let limb = limbs[i];
                limbs[i] = (limb >> bit_shift) | carry;
                carry = limb << (WORD_BITS as u32 - bit_shift);
            }
        }

        Self { limbs }
    }

    /// Logical left shift.
    ///
    /// The mirror image of [`shr`](Self::shr): shifts of `BITS` or more
    /// yield zero, and the same whole-limb/sub-word decomposition applies.
    pub const fn shl(&self, shift: u32) -> Self {
        if shift as usize >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = shift as usize / WORD_BITS;
        let bit_shift = shift % WORD_BITS as u32;

        let mut limbs: [Word; LIMBS] = [0; LIMBS];
        let mut i = LIMBS;
        while i > limb_shift {
            i -= 1;
            limbs[i] = self.limbs[i - limb_shift];
        }

        if bit_shift != 0 {
            let mut carry: Word = 0;
            let mut i = 0;
            while i < LIMBS {
                let limb = limbs[i];
                limbs[i] = (limb << bit_shift) | carry;
                carry = limb >> (WORD_BITS as u32 - bit_shift);
                i += 1;
            }
        }

        Self { limbs }
    }
}

impl<const LIMBS: usize> Ord for StaticUint<LIMBS> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.compare(rhs)
    }
}

impl<const LIMBS: usize> PartialOrd for StaticUint<LIMBS> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<const LIMBS: usize> Add for StaticUint<LIMBS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(&rhs)
    }
}

impl<const LIMBS: usize> AddAssign for StaticUint<LIMBS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(&rhs);
    }
}

impl<const LIMBS: usize> BitAnd for StaticUint<LIMBS> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        StaticUint::bitand(&self, &rhs)
    }
}

impl<const LIMBS: usize> BitAndAssign for StaticUint<LIMBS> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = StaticUint::bitand(self, &rhs);
    }
}

impl<const LIMBS: usize> BitXor for StaticUint<LIMBS> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        StaticUint::bitxor(&self, &rhs)
    }
}

impl<const LIMBS: usize> BitXorAssign for StaticUint<LIMBS> {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = StaticUint::bitxor(self, &rhs);
    }
}

impl<const LIMBS: usize> Shr<u32> for StaticUint<LIMBS> {
    type Output = Self;

    fn shr(self, shift: u32) -> Self::Output {
        StaticUint::shr(&self, shift)
    }
}

impl<const LIMBS: usize> ShrAssign<u32> for StaticUint<LIMBS> {
    fn shr_assign(&mut self, shift: u32) {
        *self = StaticUint::shr(self, shift);
    }
}

impl<const LIMBS: usize> Shl<u32> for StaticUint<LIMBS> {
    type Output = Self;

    fn shl(self, shift: u32) -> Self::Output {
        StaticUint::shl(&self, shift)
    }
}

impl<const LIMBS: usize> ShlAssign<u32> for StaticUint<LIMBS> {
    fn shl_assign(&mut self, shift: u32) {
        *self = StaticUint::shl(self, shift);
    }
}
