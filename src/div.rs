// libdivide.h - Optimized integer division
// https://libdivide.com
//
// Copyright (C) 2010 - 2021 ridiculous_fish, <libdivide@ridiculousfish.com>
// Copyright (C) 2016 - 2021 Kim Walisch, <kim.walisch@gmail.com>
//
// libdivide is dual-licensed under the Boost or zlib licenses.
// You may use libdivide under the terms of either of these.
// See LICENSE.txt for more details.

use crate::wide::{multiply_high_signed, multiply_high_unsigned};
use crate::{DividerInt, Magic, ADD_MARKER, SHIFT_MASK};

/// `numer / d` for the unsigned divisor `d` that `denom` was derived from.
#[inline]
pub fn divide_unsigned_fast(numer: u64, denom: &Magic) -> u64 {
    let magic = denom.multiplier();
    let more = denom.more();
    let shift = u32::from(more & SHIFT_MASK);

    if denom.is_branch_free() {
        let q = multiply_high_unsigned(magic, numer);
        let t = ((numer - q) >> 1) + q;
        return t >> shift;
    }

    if magic == 0 {
        numer >> shift
    } else {
        let q = multiply_high_unsigned(magic, numer);
        if more & ADD_MARKER != 0 {
            let t = ((numer - q) >> 1) + q;
            t >> shift
        } else {
            // All upper bits are 0,
            // don't need to mask them off.
            q >> more
        }
    }
}

/// `numer / d` (truncating) for the signed divisor `d` that `denom` was
/// derived from. `i64::MIN / -1` wraps to `i64::MIN`.
#[inline]
pub fn divide_signed_fast(numer: i64, denom: &Magic) -> i64 {
    let more = denom.more();
    let shift = u32::from(more & SHIFT_MASK);
    // must be arithmetic shift and then sign extend
    let sign = (more as i8 >> 7) as i64;

    if denom.is_branch_free() {
        let magic = denom.multiplier() as i64;
        let mut q = multiply_high_signed(magic, numer).wrapping_add(numer);

        // If q is non-negative, we have nothing to do
        // If q is negative, we want to add either (2**shift)-1 if d is a power of
        // 2, or (2**shift) if it is not a power of 2
        let is_power_of_2 = u64::from(magic == 0);
        let q_sign = (q >> 63) as u64;
        q = q.wrapping_add((q_sign & ((1u64 << shift) - is_power_of_2)) as i64);

        // Now arithmetic right shift
        q >>= shift;
        // Negate if needed
        return (q ^ sign).wrapping_sub(sign);
    }

    if denom.is_power_of_two() {
        let mask = (1u64 << shift) - 1;
        let uq = (numer as u64).wrapping_add((numer >> 63) as u64 & mask);
        let q = (uq as i64) >> shift;
        (q ^ sign).wrapping_sub(sign)
    } else {
        let mut uq = multiply_high_signed(denom.multiplier() as i64, numer) as u64;
        if more & ADD_MARKER != 0 {
            // q += (more < 0 ? -numer : numer)
            uq = uq.wrapping_add(((numer as u64) ^ (sign as u64)).wrapping_sub(sign as u64));
        }
        let mut q = (uq as i64) >> shift;
        q += i64::from(q < 0);
        q
    }
}

/// `numer % d` for the unsigned divisor `d` that `denom` was derived from.
#[inline]
pub fn mod_unsigned_fast(numer: u64, d: u64, denom: &Magic) -> u64 {
    numer.rem_fast(d, denom)
}

/// `numer % d` (sign follows the dividend) for the signed divisor `d` that
/// `denom` was derived from. `i64::MIN % -1` is 0.
#[inline]
pub fn mod_signed_fast(numer: i64, d: i64, denom: &Magic) -> i64 {
    numer.rem_fast(d, denom)
}
