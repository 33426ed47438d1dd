// libdivide.h - Optimized integer division
// https://libdivide.com
//
// Copyright (C) 2010 - 2021 ridiculous_fish, <libdivide@ridiculousfish.com>
// Copyright (C) 2016 - 2021 Kim Walisch, <kim.walisch@gmail.com>
//
// libdivide is dual-licensed under the Boost or zlib licenses.
// You may use libdivide under the terms of either of these.
// See LICENSE.txt for more details.

use num_integer::Integer;

use crate::long_div::divide_128_by_64;
use crate::wide::{multiply_full, multiply_high_unsigned};
use crate::MagicError;

/// Remainder by a fixed divisor computed directly from the fractional part
/// of `n / d`, without forming the quotient (Lemire's fastmod, widened to a
/// 128 bit reciprocal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reciprocal {
    divisor: u64,
    // M = floor((2^128 - 1) / d) + 1, mod 2^128
    hi: u64,
    lo: u64,
}

impl Reciprocal {
    pub fn new(d: u64) -> Result<Self, MagicError> {
        if d == 0 {
            return Err(MagicError::Zero);
        }
        let (hi, r) = u64::MAX.div_rem(&d);
        // r < d, so the low quotient word fits
        let (lo, _) = divide_128_by_64(r, u64::MAX, d);

        // For d == 1 this wraps M to 0, which still yields n mod 1 == 0.
        let (lo, carry) = lo.overflowing_add(1);
        let hi = hi.wrapping_add(u64::from(carry));
        Ok(Reciprocal { divisor: d, hi, lo })
    }

    /// Truncated remainders ignore the sign of the divisor, so only `|d|`
    /// is kept.
    pub fn from_signed(d: i64) -> Result<Self, MagicError> {
        Self::new(d.unsigned_abs())
    }

    #[inline]
    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    /// `n % d`.
    #[inline]
    pub fn rem(&self, n: u64) -> u64 {
        // lowbits = M * n mod 2^128
        let (hi, lo) = multiply_full(self.lo, n);
        let hi = hi.wrapping_add(self.hi.wrapping_mul(n));

        // (lowbits * d) >> 128
        let bottom = multiply_high_unsigned(lo, self.divisor);
        let (top, top_lo) = multiply_full(hi, self.divisor);
        let (_, carry) = bottom.overflowing_add(top_lo);
        top + u64::from(carry)
    }

    /// `n % d` with the sign of `n`, matching [`i64::wrapping_rem`].
    #[inline]
    pub fn rem_signed(&self, n: i64) -> i64 {
        // |r| <= |n| <= 2^63; the only value that does not fit is 2^63 itself,
        // for n == i64::MIN, and negating its wrapped form restores it.
        let r = self.rem(n.unsigned_abs()) as i64;
        if n < 0 {
            r.wrapping_neg()
        } else {
            r
        }
    }
}
