// libdivide.h - Optimized integer division
// https://libdivide.com
//
// Copyright (C) 2010 - 2021 ridiculous_fish, <libdivide@ridiculousfish.com>
// Copyright (C) 2016 - 2021 Kim Walisch, <kim.walisch@gmail.com>
//
// libdivide is dual-licensed under the Boost or zlib licenses.
// You may use libdivide under the terms of either of these.
// See LICENSE.txt for more details.

// 64 bit paths ported from 4.0.0

//! Division, remainder and multiply-mod by a 64 bit divisor that is known
//! ahead of time.
//!
//! Derive a [`Magic`] once per divisor, then apply it to as many dividends as
//! needed:
//!
//! ```
//! use fastdivision::{divide_signed_fast, magic_signed};
//!
//! let magic = magic_signed(45, false).unwrap();
//! let reduced: Vec<i64> = [213974, 12334, 3123, 12434]
//!     .iter()
//!     .map(|&x| divide_signed_fast(x, &magic))
//!     .collect();
//! assert_eq!(reduced, [4754, 274, 69, 276]);
//! ```

mod div;
mod long_div;
mod magic;
mod mulmod;
mod reciprocal;
mod wide;

pub use div::{divide_signed_fast, divide_unsigned_fast, mod_signed_fast, mod_unsigned_fast};
pub use long_div::divide_128_by_64;
pub use magic::{magic_signed, magic_unsigned};
pub use mulmod::{magic32_for_multiply_mod, multiply_mod_128_unsigned, MULTIPLY_MOD_LIMIT};
pub use reciprocal::Reciprocal;
pub use wide::{multiply_full, multiply_high_signed, multiply_high_unsigned, multiply_low};

use num_traits::{PrimInt, WrappingMul, WrappingSub};

/// Precomputed constants that replace division by one particular divisor.
///
/// A `Magic` is only meaningful together with the divisor and the signedness
/// it was derived for. Pairing it with anything else silently produces wrong
/// results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Magic {
    magic: u64,
    more: u8,
    branch_free: bool,
    divisor: u64,
}

// Explanation of the "more" field:
//
// * Bits 0-5 is the shift value (for shift path or mult path).
// * Bit 6 is the add indicator for mult path.
// * Bit 7 is set if the divisor is negative. We use bit 7 as the negative
//   divisor indicator so that we can efficiently use sign extension to
//   create a bitmask with all bits set to 1 (if the divisor is negative)
//   or 0 (if the divisor is positive).
//
// u64: [0-5] shift value
//      [6] add indicator
//      magic number of 0 indicates shift path
//
// s64: [0-5] shift value
//      [6] add indicator
//      [7] indicates negative divisor
//      magic number of 0 indicates shift path
//
// In the s64 branchfull strategy the magic number is negated according to
// whether the divisor is negative. In the branchfree strategy it is not.
// Unsigned branchfree magics always take the add path, and their shift is
// one less for powers of 2 because the apply step shifts by 1 itself.

pub(crate) const SHIFT_MASK: u8 = 0x3F;
pub(crate) const ADD_MARKER: u8 = 0x40;
pub(crate) const NEGATIVE_DIVISOR: u8 = 0x80;

impl Magic {
    #[inline]
    pub(crate) const fn from_parts(magic: u64, more: u8, branch_free: bool, divisor: u64) -> Self {
        Magic {
            magic,
            more,
            branch_free,
            divisor,
        }
    }

    /// Derives the branchfull magic for `d`.
    pub fn new<T: DividerInt>(d: T) -> Result<Self, MagicError> {
        d.gen(false)
    }

    /// Derives the branchfree magic for `d`.
    pub fn branch_free<T: DividerInt>(d: T) -> Result<Self, MagicError> {
        d.gen(true)
    }

    /// The multiplier. Zero on the shift path.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.magic
    }

    /// Right shift applied after the multiply.
    #[inline]
    pub fn shift(&self) -> u32 {
        u32::from(self.more & SHIFT_MASK)
    }

    /// Whether the multiplier is logically 65 bits wide.
    #[inline]
    pub fn add_indicator(&self) -> bool {
        self.more & ADD_MARKER != 0
    }

    #[inline]
    pub fn is_negative_divisor(&self) -> bool {
        self.more & NEGATIVE_DIVISOR != 0
    }

    /// True for divisors of the form `±2^k`, which are handled by shifts alone.
    #[inline]
    pub fn is_power_of_two(&self) -> bool {
        self.magic == 0
    }

    #[inline]
    pub fn is_branch_free(&self) -> bool {
        self.branch_free
    }

    /// The divisor bits this magic was derived from. Signed divisors are
    /// stored in two's complement.
    #[inline]
    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    #[inline]
    pub(crate) fn more(&self) -> u8 {
        self.more
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MagicError {
    #[error("divider must be != 0")]
    Zero,
    #[error("modulus must be in 1..2^62, got {0}")]
    ModulusOutOfRange(u64),
}

/// The 64 bit integers a [`Magic`] can be derived for and applied to.
pub trait DividerInt: PrimInt + WrappingMul + WrappingSub {
    fn gen(self, branch_free: bool) -> Result<Magic, MagicError>;

    /// The divisor stored in `denom`, read back as `Self`.
    fn divisor(denom: &Magic) -> Self;

    fn div_fast(self, denom: &Magic) -> Self;

    /// `self - divisor * (self / divisor)`, with the quotient taken from
    /// `denom`. Wraps like the native remainder for `MIN % -1`.
    #[inline]
    fn rem_fast(self, divisor: Self, denom: &Magic) -> Self {
        self.wrapping_sub(&divisor.wrapping_mul(&self.div_fast(denom)))
    }
}

impl DividerInt for u64 {
    fn gen(self, branch_free: bool) -> Result<Magic, MagicError> {
        magic_unsigned(self, branch_free)
    }

    #[inline]
    fn divisor(denom: &Magic) -> Self {
        denom.divisor
    }

    #[inline]
    fn div_fast(self, denom: &Magic) -> Self {
        divide_unsigned_fast(self, denom)
    }
}

impl DividerInt for i64 {
    fn gen(self, branch_free: bool) -> Result<Magic, MagicError> {
        magic_signed(self, branch_free)
    }

    #[inline]
    fn divisor(denom: &Magic) -> Self {
        denom.divisor as i64
    }

    #[inline]
    fn div_fast(self, denom: &Magic) -> Self {
        divide_signed_fast(self, denom)
    }
}

impl std::ops::Div<&Magic> for u64 {
    type Output = Self;

    fn div(self, denom: &Magic) -> Self::Output {
        self.div_fast(denom)
    }
}

impl std::ops::Div<&Magic> for i64 {
    type Output = Self;

    fn div(self, denom: &Magic) -> Self::Output {
        self.div_fast(denom)
    }
}

impl std::ops::Rem<&Magic> for u64 {
    type Output = Self;

    fn rem(self, denom: &Magic) -> Self::Output {
        self.rem_fast(Self::divisor(denom), denom)
    }
}

impl std::ops::Rem<&Magic> for i64 {
    type Output = Self;

    fn rem(self, denom: &Magic) -> Self::Output {
        self.rem_fast(Self::divisor(denom), denom)
    }
}
