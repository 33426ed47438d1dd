// libdivide.h - Optimized integer division
// https://libdivide.com
//
// Copyright (C) 2010 - 2021 ridiculous_fish, <libdivide@ridiculousfish.com>
// Copyright (C) 2016 - 2021 Kim Walisch, <kim.walisch@gmail.com>
//
// libdivide is dual-licensed under the Boost or zlib licenses.
// You may use libdivide under the terms of either of these.
// See LICENSE.txt for more details.

//! `(a * b) mod m` without a 128 bit division instruction.
//!
//! The 128 bit product is reduced by long division with 32 bit digits. Every
//! trial digit divides by the same top digit of the normalized modulus, so
//! that division is replaced by a precomputed [`Magic`].

use crate::div::divide_unsigned_fast;
use crate::long_div::{knuth_divide, normalized_top_digit};
use crate::magic::magic_unsigned;
use crate::wide::multiply_full;
use crate::{Magic, MagicError};

/// Exclusive upper bound on the modulus accepted by
/// [`magic32_for_multiply_mod`].
pub const MULTIPLY_MOD_LIMIT: u64 = 1 << 62;

/// Derives the reduction magic for `modulus`, which must be in `1..2^62`.
pub fn magic32_for_multiply_mod(modulus: u64) -> Result<Magic, MagicError> {
    if modulus == 0 || modulus >= MULTIPLY_MOD_LIMIT {
        return Err(MagicError::ModulusOutOfRange(modulus));
    }
    magic_unsigned(normalized_top_digit(modulus), false)
}

/// `(a * b) mod modulus`, where `magic` comes from
/// [`magic32_for_multiply_mod(modulus)`](magic32_for_multiply_mod).
///
/// The operands need not be reduced, but reduced ones save a second pass.
#[inline]
pub fn multiply_mod_128_unsigned(a: u64, b: u64, modulus: u64, magic: &Magic) -> u64 {
    let (hi, lo) = multiply_full(a, b);
    let top_digit = magic.divisor();
    let div_top = |un: u64| {
        let q = divide_unsigned_fast(un, magic);
        (q, un - q * top_digit)
    };

    // hi:lo mod m == (hi mod m):lo mod m
    let hi = if hi < modulus {
        hi
    } else {
        knuth_divide(0, hi, modulus, div_top).1
    };
    knuth_divide(hi, lo, modulus, div_top).1
}
